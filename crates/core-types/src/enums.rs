use serde::{Deserialize, Serialize};

/// The kind of holding the platform computes for a portfolio.
///
/// The platform reports these as single-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoldingType {
    /// A position in a non-cash instrument.
    #[serde(rename = "P")]
    Position,
    /// A settled cash balance.
    #[serde(rename = "B")]
    CashBalance,
    /// Cash owed by the portfolio for unsettled trades.
    #[serde(rename = "C")]
    CashCommitment,
    /// Cash owed to the portfolio for unsettled trades.
    #[serde(rename = "R")]
    CashReceivable,
    /// Cash accrued but not yet paid, e.g. a dividend between ex and payment date.
    #[serde(rename = "A")]
    CashAccrual,
    /// The legs of an FX forward.
    #[serde(rename = "F")]
    ForwardFx,
}

impl HoldingType {
    /// Returns true for the holding types that represent cash.
    pub fn is_cash(&self) -> bool {
        !matches!(self, HoldingType::Position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteType {
    Price,
    Spread,
    Rate,
    LogNormalVol,
    NormalVol,
    ParSpread,
    IsdaSpread,
    Upfront,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationOp {
    Value,
    Sum,
    Proportion,
    Average,
    Count,
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioEntityType {
    SinglePortfolio,
    GroupPortfolio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyDomain {
    Instrument,
    Portfolio,
    Transaction,
    Holding,
}

impl PropertyDomain {
    /// The domain name as it appears in property keys and URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyDomain::Instrument => "Instrument",
            PropertyDomain::Portfolio => "Portfolio",
            PropertyDomain::Transaction => "Transaction",
            PropertyDomain::Holding => "Holding",
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to send the HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The platform rejected the request with {status} {name} (code {code:?}): {detail}")]
    Platform {
        status: u16,
        name: String,
        code: Option<i64>,
        detail: String,
    },

    #[error("The platform returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// The HTTP status of a rejected request, if the platform answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Platform { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if this is a platform error carrying the given error code.
    pub fn is(&self, expected: ErrorCode) -> bool {
        match self {
            ApiError::Platform { name, code, .. } => expected.matches(name, *code),
            _ => false,
        }
    }
}

/// Platform error codes that tutorial setup and teardown treat as benign.
///
/// The platform reports both a stable name and a numeric code; either is
/// enough to identify the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InstrumentByCodeNotFound,
    PortfolioNotFound,
    PortfolioWithIdAlreadyExists,
    PropertyAlreadyExists,
    PropertyNotDefined,
    InstrumentNotFound,
    CorporateActionSourceAlreadyExists,
    CorporateActionSourceNotFound,
    RecipeNotFound,
}

impl ErrorCode {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::InstrumentByCodeNotFound => "InstrumentByCodeNotFound",
            ErrorCode::PortfolioNotFound => "PortfolioNotFound",
            ErrorCode::PortfolioWithIdAlreadyExists => "PortfolioWithIdAlreadyExists",
            ErrorCode::PropertyAlreadyExists => "PropertyAlreadyExists",
            ErrorCode::PropertyNotDefined => "PropertyNotDefined",
            ErrorCode::InstrumentNotFound => "InstrumentNotFound",
            ErrorCode::CorporateActionSourceAlreadyExists => "CorporateActionSourceAlreadyExists",
            ErrorCode::CorporateActionSourceNotFound => "CorporateActionSourceNotFound",
            ErrorCode::RecipeNotFound => "RecipeNotFound",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ErrorCode::InstrumentByCodeNotFound => 101,
            ErrorCode::PortfolioNotFound => 109,
            ErrorCode::PortfolioWithIdAlreadyExists => 112,
            ErrorCode::PropertyAlreadyExists => 121,
            ErrorCode::PropertyNotDefined => 122,
            ErrorCode::InstrumentNotFound => 153,
            ErrorCode::CorporateActionSourceAlreadyExists => 200,
            ErrorCode::CorporateActionSourceNotFound => 201,
            ErrorCode::RecipeNotFound => 323,
        }
    }

    fn matches(&self, name: &str, code: Option<i64>) -> bool {
        name == self.name() || code == Some(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(name: &str, code: Option<i64>) -> ApiError {
        ApiError::Platform {
            status: 404,
            name: name.to_string(),
            code,
            detail: "nope".to_string(),
        }
    }

    #[test]
    fn matches_by_name_or_code() {
        assert!(platform("PortfolioNotFound", None).is(ErrorCode::PortfolioNotFound));
        assert!(platform("", Some(109)).is(ErrorCode::PortfolioNotFound));
        assert!(!platform("RecipeNotFound", Some(323)).is(ErrorCode::PortfolioNotFound));
    }

    #[test]
    fn raw_http_errors_never_match() {
        let err = ApiError::Http {
            status: 404,
            body: "PortfolioNotFound".to_string(),
        };
        assert!(!err.is(ErrorCode::PortfolioNotFound));
        assert_eq!(err.status(), Some(404));
    }
}

use uuid::Uuid;

/// A scope no other test run will use, e.g. `tutorials-3f2a...`.
pub fn unique_scope(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// A short unique code, suitable for portfolios, recipes and instrument ids.
pub fn unique_code(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &id[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_and_distinct() {
        let a = unique_scope("tutorials");
        let b = unique_scope("tutorials");
        assert!(a.starts_with("tutorials-"));
        assert_ne!(a, b);

        let code = unique_code("PF");
        assert_eq!(code.len(), "PF-".len() + 12);
        assert_ne!(code, unique_code("PF"));
    }
}

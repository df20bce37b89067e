// crates/extract_operator_examples/src/config.rs

use std::path::PathBuf;

/// Reference-manual location the operator URLs are derived from when the
/// caller does not supply one.
pub const DEFAULT_URL_BASE: &str =
    "https://www.mongodb.com/docs/manual/reference/operator/aggregation";

/// Runtime configuration handed to the orchestrator at construction. Both
/// roots and the URL base are explicit here; nothing in the tool-chain
/// reads them from ambient state.
#[derive(Clone, Debug)]
pub struct AuditConfig {
    /// Directory holding one `<operator>.txt` reference page per operator.
    pub docs_root: PathBuf,
    /// Directory the example fixtures are written under.
    pub resource_root: PathBuf,
    /// Base of the reference-manual URL an operator's page lives at.
    pub url_base: String,
}

impl AuditConfig {
    pub fn operator_url(&self, name: &str) -> String {
        format!("{}/{}/", self.url_base.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_url_tolerates_trailing_slash() {
        let config = AuditConfig {
            docs_root: PathBuf::from("/docs"),
            resource_root: PathBuf::from("/res"),
            url_base: format!("{}/", DEFAULT_URL_BASE),
        };
        assert_eq!(
            config.operator_url("abs"),
            format!("{}/abs/", DEFAULT_URL_BASE)
        );
    }
}

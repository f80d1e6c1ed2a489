//! Runtime configuration, loadable from JSON. Every field has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canon::Locale;
use crate::error::{Result, SiglaError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiglaConfig {
    /// Fixed page language. When unset it is detected per page.
    pub locale: Option<Locale>,
    pub dedupe: DedupeConfig,
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupeConfig {
    /// Fraction of the shorter span two same-reference citations must exceed
    /// to count as one. `0.0` means any overlap.
    pub min_overlap: f64,
    /// Also drop later citations of a reference already seen on the page.
    pub collapse_repeats: bool,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            min_overlap: 0.0,
            collapse_repeats: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub max_concurrency: usize,
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            timeout_ms: 2_000,
        }
    }
}

impl SiglaConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.dedupe.min_overlap) {
            return Err(SiglaError::Config(format!(
                "dedupe.min_overlap must be in [0, 1), got {}",
                self.dedupe.min_overlap
            )));
        }
        if self.resolver.max_concurrency == 0 {
            return Err(SiglaError::Config("resolver.max_concurrency must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiglaConfig::from_json_str("{}").unwrap();
        assert_eq!(config.locale, None);
        assert_eq!(config.dedupe, DedupeConfig::default());
        assert_eq!(config.resolver.max_concurrency, 8);
        assert_eq!(config.resolver.timeout_ms, 2_000);
    }

    #[test]
    fn test_partial_config() {
        let config =
            SiglaConfig::from_json_str(r#"{"locale": "pl", "resolver": {"timeout_ms": 50}}"#).unwrap();
        assert_eq!(config.locale, Some(Locale::Polish));
        assert_eq!(config.resolver.timeout_ms, 50);
        assert_eq!(config.resolver.max_concurrency, 8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            SiglaConfig::from_json_str(r#"{"dedupe": {"min_overlap": 1.5}}"#),
            Err(SiglaError::Config(_))
        ));
        assert!(matches!(
            SiglaConfig::from_json_str(r#"{"resolver": {"max_concurrency": 0}}"#),
            Err(SiglaError::Config(_))
        ));
        assert!(matches!(
            SiglaConfig::from_json_str("{not json"),
            Err(SiglaError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dedupe": {{"collapse_repeats": true}}}}"#).unwrap();
        let config = SiglaConfig::from_json_file(file.path()).unwrap();
        assert!(config.dedupe.collapse_repeats);

        assert!(matches!(
            SiglaConfig::from_json_file(Path::new("/nonexistent/sigla.json")),
            Err(SiglaError::Io(_))
        ));
    }
}

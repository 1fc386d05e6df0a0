//! Configuration for the secrets detection processor.
//!
//! The rule table is loadable data: operators can ship extra detection
//! rules in a TOML file without a code change. Loading is a deployment
//! concern only — the processor runs fine on the built-in catalog.

use crate::catalog::{PatternCatalog, RuleDef, builtin_rules};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Secrets detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Master enable/disable for the processor.
    pub enabled: bool,
    /// Extra detection rules, appended after the built-in catalog.
    pub rules: Vec<RuleDef>,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: Vec::new(),
        }
    }
}

impl SecretsConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Compile the effective catalog: built-in rules followed by any
    /// configured extras, in order.
    pub fn catalog(&self) -> PatternCatalog {
        let mut defs = builtin_rules();
        defs.extend(self.rules.iter().cloned());
        PatternCatalog::from_defs(&defs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Severity;

    #[test]
    fn default_config_uses_builtin_catalog() {
        let config = SecretsConfig::default();
        assert!(config.enabled);
        assert_eq!(config.catalog().len(), builtin_rules().len());
    }

    #[test]
    fn configured_rules_append_after_builtins() {
        let config: SecretsConfig = toml::from_str(
            r#"
            [[rules]]
            name = "Internal Service Token"
            pattern = "svc_[0-9a-f]{32}"
            severity = "critical"
            "#,
        )
        .unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.len(), builtin_rules().len() + 1);
        let last = catalog.rules().last().unwrap();
        assert_eq!(last.name, "Internal Service Token");
        assert_eq!(last.severity, Severity::Critical);
    }

    #[test]
    fn load_reads_rules_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(
            &path,
            "enabled = true\n\n[[rules]]\nname = \"Custom\"\npattern = \"tok_[0-9]{8}\"\n",
        )
        .unwrap();

        let config = SecretsConfig::load(&path).unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].name, "Custom");
    }

    #[test]
    fn load_surfaces_missing_file_as_read_error() {
        let err = SecretsConfig::load(Path::new("/nonexistent/secrets.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_surfaces_bad_toml_as_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "rules = not valid toml").unwrap();

        let err = SecretsConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

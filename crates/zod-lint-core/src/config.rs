//! Configuration types for zod-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for zod-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Validates configuration consistency.
    ///
    /// Compiles every `exclude_name_regex` option so an unparseable pattern
    /// is rejected here, before any rule runs.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (rule_name, rule_config) in &self.rules {
            if let Some(pattern) = rule_config.get_option::<String>("exclude_name_regex") {
                if !pattern.is_empty() {
                    regex::Regex::new(&pattern).map_err(|e| {
                        ConfigError::Validation(format!(
                            "rules.{rule_name}.exclude_name_regex: {e}"
                        ))
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()],
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[analyzer]
root = "./src"
exclude = ["**/generated/**"]

[rules.export-zod-type]
enabled = true
severity = "warning"
exclude_name_regex = "Internal$"
custom_builders = ["createSchema"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert!(config.is_rule_enabled("export-zod-type"));
        assert_eq!(
            config.rule_severity("export-zod-type"),
            Some(crate::Severity::Warning)
        );

        let rule_config = config.rules.get("export-zod-type").expect("rule config");
        assert_eq!(rule_config.get_str("exclude_name_regex", ""), "Internal$");
        assert_eq!(
            rule_config.get_str_array("custom_builders"),
            vec!["createSchema".to_string()]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn disabled_rule_is_reported_disabled() {
        let toml = r#"
[rules.export-zod-type]
enabled = false
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(!config.is_rule_enabled("export-zod-type"));
    }

    #[test]
    fn unknown_rule_defaults_to_enabled() {
        let config = Config::default();
        assert!(config.is_rule_enabled("export-zod-type"));
    }

    #[test]
    fn validate_rejects_bad_exclude_regex() {
        let toml = r#"
[rules.export-zod-type]
exclude_name_regex = "("
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        let err = config.validate().expect_err("should fail");
        assert!(err.to_string().contains("exclude_name_regex"));
    }

    #[test]
    fn validate_accepts_empty_exclude_regex() {
        let toml = r#"
[rules.export-zod-type]
exclude_name_regex = ""
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(config.validate().is_ok());
    }
}

//! # zod-lint-rules
//!
//! Built-in lint rules for zod-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Fixable | Description |
//! |------|------|---------|-------------|
//! | ZL001 | `export-zod-type` | yes | Requires `export type S = z.infer<typeof S>` next to `export const S = z...` |
//!
//! ## Usage
//!
//! ```ignore
//! use zod_lint_core::Analyzer;
//! use zod_lint_rules::ExportZodType;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(ExportZodType::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export_zod_type;

pub use export_zod_type::ExportZodType;

/// Re-export core types for convenience.
pub use zod_lint_core::{Rule, RuleBox, Severity, Violation};

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(ExportZodType::new())]
}

/// Builds every built-in rule from its configuration section.
///
/// Rules without a section get default settings.
///
/// # Errors
///
/// Returns a configuration error if a rule's options are invalid.
pub fn rules_from_config(
    config: &zod_lint_core::Config,
) -> Result<Vec<RuleBox>, zod_lint_core::ConfigError> {
    let mut rules: Vec<RuleBox> = Vec::new();

    let export_zod_type = match config.rules.get(export_zod_type::NAME) {
        Some(rule_config) => ExportZodType::from_rule_config(rule_config)?,
        None => ExportZodType::new(),
    };
    rules.push(Box::new(export_zod_type));

    Ok(rules)
}

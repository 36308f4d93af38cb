//! Rule trait for defining lint rules.

use crate::ast::SourceUnit;
use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint rule over the TypeScript source model.
///
/// Implement this trait to create rules that analyze individual modules.
/// Rules receive the lowered [`SourceUnit`] and return any violations found;
/// they never fail — malformed source is rejected by the analyzer before a
/// rule runs, and bad configuration is rejected by config validation.
///
/// # Example
///
/// ```ignore
/// use zod_lint_core::{Rule, FileContext, SourceUnit, Violation};
///
/// pub struct NoDefaultExport;
///
/// impl Rule for NoDefaultExport {
///     fn name(&self) -> &'static str { "no-default-export" }
///     fn code(&self) -> &'static str { "ZL002" }
///
///     fn check(&self, ctx: &FileContext, unit: &SourceUnit) -> Vec<Violation> {
///         // walk unit.statements ...
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "export-zod-type").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "ZL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule attaches automatic fixes to its violations.
    fn fixable(&self) -> bool {
        false
    }

    /// Checks a single module and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `unit` - The lowered source model of the file
    fn check(&self, ctx: &FileContext, unit: &SourceUnit) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

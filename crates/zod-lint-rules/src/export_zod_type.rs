//! Rule requiring a paired type export for every exported zod schema.
//!
//! # Rationale
//!
//! When a module exports a schema value, downstream code almost always wants
//! the inferred type too. Writing `export const Schema = z.object({...})`
//! without `export type Schema = z.infer<typeof Schema>` forces every
//! consumer to re-derive it. This rule detects the missing alias and can
//! insert it automatically.
//!
//! # Configuration
//!
//! - `exclude_name_regex`: names matching this pattern are skipped entirely
//! - `custom_builders`: identifier names whose bare calls count as schema
//!   builders in addition to the `z.*` namespace (e.g. `createSchema(...)`)
//!
//! # Limitations
//!
//! Only chains rooted at the literal `z` identifier (or a configured custom
//! builder) are recognized. An aliased import of the namespace under another
//! local name is not; this is deliberate scope-narrowing, not a defect.

use regex::Regex;
use zod_lint_core::ast::{ExportedVar, Expr, SourceUnit, Statement};
use zod_lint_core::{
    ConfigError, FileContext, Location, Replacement, Rule, RuleConfig, Severity, Suggestion,
    Violation,
};

/// Rule code for export-zod-type.
pub const CODE: &str = "ZL001";

/// Rule name for export-zod-type.
pub const NAME: &str = "export-zod-type";

/// The conventional zod namespace identifier.
const ZOD_NAMESPACE: &str = "z";

/// Requires `export type Schema = z.infer<typeof Schema>` next to every
/// exported zod schema.
#[derive(Debug, Clone)]
pub struct ExportZodType {
    /// Names matching this pattern are never reported.
    pub exclude_name_regex: Option<Regex>,
    /// Additional builder-root identifiers recognized as schema factories.
    pub custom_builders: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ExportZodType {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportZodType {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            exclude_name_regex: None,
            custom_builders: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Sets the exclusion pattern.
    #[must_use]
    pub fn exclude_name_regex(mut self, pattern: Regex) -> Self {
        self.exclude_name_regex = Some(pattern);
        self
    }

    /// Sets the custom builder names.
    #[must_use]
    pub fn custom_builders<I, S>(mut self, builders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_builders = builders.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Builds the rule from its TOML configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `exclude_name_regex` does not
    /// compile. `Config::validate` rejects this earlier in normal operation.
    pub fn from_rule_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        let mut rule = Self::new().custom_builders(config.get_str_array("custom_builders"));

        let pattern = config.get_str("exclude_name_regex", "");
        if !pattern.is_empty() {
            let compiled = Regex::new(pattern).map_err(|e| {
                ConfigError::Validation(format!("rules.{NAME}.exclude_name_regex: {e}"))
            })?;
            rule = rule.exclude_name_regex(compiled);
        }

        Ok(rule)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_name_regex
            .as_ref()
            .is_some_and(|re| re.is_match(name))
    }

    fn violation_for(&self, ctx: &FileContext, var: &ExportedVar) -> Violation {
        let terminator = if var.has_semicolon { ";" } else { "" };
        let name = &var.name;
        let alias = format!("\nexport type {name} = z.infer<typeof {name}>{terminator}");

        Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::from_ast_span(ctx.relative_path.clone(), &var.name_span),
            format!("missing `export type {name} = z.infer<typeof {name}>`"),
        )
        .with_suggestion(Suggestion::with_fix(
            "add the matching type export",
            Replacement::insert_at(var.insert_after, alias),
        ))
    }
}

/// Decides whether an expression is a zod schema builder chain, e.g.
/// `z.object({}).partial().strict()` or a bare `createSchema(...)` call for
/// a configured custom builder.
fn is_zod_schema(expr: &Expr, custom_builders: &[String]) -> bool {
    let Expr::Call { callee } = expr else {
        return false;
    };
    match callee.as_ref() {
        Expr::Ident(name) => custom_builders.iter().any(|b| b == name),
        Expr::Member { object, .. } => {
            // Chain root: `z.builder(...)`
            if object.as_ident() == Some(ZOD_NAMESPACE) {
                return true;
            }
            // Unwrap one chaining level: `expr.partial()` -> expr
            is_zod_schema(object, custom_builders)
        }
        _ => false,
    }
}

impl Rule for ExportZodType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires `export type S = z.infer<typeof S>` next to `export const S = z...`"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &FileContext, unit: &SourceUnit) -> Vec<Violation> {
        let mut candidates: Vec<&ExportedVar> = Vec::new();
        let mut exported_aliases: std::collections::HashSet<&str> =
            std::collections::HashSet::new();

        for statement in &unit.statements {
            match statement {
                Statement::ExportedVars(vars) => {
                    for var in vars {
                        let Some(init) = &var.init else { continue };
                        if !is_zod_schema(init, &self.custom_builders) {
                            continue;
                        }
                        if self.is_excluded(&var.name) {
                            continue;
                        }
                        candidates.push(var);
                    }
                }
                Statement::ExportedTypeAlias { name } => {
                    exported_aliases.insert(name.as_str());
                }
                Statement::Other => {}
            }
        }

        candidates
            .into_iter()
            .filter(|var| !exported_aliases.contains(var.name.as_str()))
            .map(|var| self.violation_for(ctx, var))
            .collect()
    }
}

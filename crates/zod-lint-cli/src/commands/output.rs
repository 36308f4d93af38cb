//! Renders lint results for the terminal.

use std::fmt::Write;

use anyhow::Result;
use zod_lint_core::{LintResult, Severity};

use crate::OutputFormat;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Prints lint results in the requested format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => print!("{}", render_compact(result)),
    }
    Ok(())
}

/// Human-readable report: one block per violation, then a summary with the
/// fixable count and the command that applies the fixes.
fn render_text(result: &LintResult) -> String {
    let mut out = String::new();

    for violation in &result.violations {
        let _ = writeln!(
            out,
            "{}:{}:{}  {}  {} [{}]",
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
            colored_severity(violation.severity),
            violation.message,
            violation.code,
        );
        if let Some(fix) = violation.fix() {
            let _ = writeln!(out, "  fix: insert `{}`", fix.new_text.trim_start());
        } else if let Some(suggestion) = &violation.suggestion {
            let _ = writeln!(out, "  help: {}", suggestion.message);
        }
        out.push('\n');
    }

    out.push_str(&render_summary(result));
    out
}

fn render_summary(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let color = if errors > 0 {
        RED
    } else if warnings > 0 {
        YELLOW
    } else {
        GREEN
    };

    let mut out = format!(
        "{color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s){RESET}\n",
        result.files_checked
    );

    let fixable = result.fixable().len();
    if fixable > 0 {
        let _ = writeln!(
            out,
            "{fixable} violation(s) fixable with: zod-lint check --fix"
        );
    }
    out
}

/// One line per violation, grep-friendly. A trailing `[fixable]` marks
/// violations `--fix` would resolve.
fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let marker = if violation.fix().is_some() {
            " [fixable]"
        } else {
            ""
        };
        let _ = writeln!(out, "{violation}{marker}");
    }
    out
}

fn colored_severity(severity: Severity) -> String {
    let color = match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Info => BLUE,
    };
    format!("{color}{severity}{RESET}")
}

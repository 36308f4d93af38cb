//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use zod_lint_core::{fixer, Analyzer, Config};
use zod_lint_rules::rules_from_config;

use crate::config_resolver::{FoundConfig, Origin};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    fix: bool,
    found: Option<FoundConfig>,
) -> Result<()> {
    let config = match found {
        None => Config::default(),
        Some(found) => {
            if found.origin == Origin::Global {
                tracing::info!("Using global config: {}", found.path.display());
            }
            Config::from_file(&found.path)
                .with_context(|| format!("Failed to load config: {}", found.path.display()))?
        }
    };

    config.validate().context("Config validation failed")?;

    let mut rules = rules_from_config(&config).context("Failed to build rules")?;
    if let Some(filter) = rules_filter {
        let requested: Vec<&str> = filter.split(',').map(str::trim).collect();
        rules.retain(|r| requested.contains(&r.name()) || requested.contains(&r.code()));
        if rules.is_empty() {
            tracing::warn!("No rules match filter: {}", filter);
        }
    }

    // Build analyzer
    let mut builder = Analyzer::builder().root(path).config(config);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let mut result = analyzer.analyze().context("Analysis failed")?;

    if fix {
        let applied = fixer::fix_files(analyzer.root(), &result.violations)
            .context("Failed to apply fixes")?;
        if applied > 0 {
            tracing::info!("Applied {} fix(es)", applied);
            // Re-run so the report reflects what remains unfixed
            result = analyzer.analyze().context("Re-analysis after fix failed")?;
        }
    }

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# zod-lint configuration
# See https://github.com/example/zod-lint for documentation

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/*.d.ts",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.export-zod-type]
enabled = true
# severity = "warning"  # Override default severity

# Skip schemas whose name matches this pattern
# exclude_name_regex = "Internal$"

# Extra factory names recognized as schema builders besides `z.*`
# custom_builders = ["createSchema"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("zod-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created zod-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit zod-lint.toml to configure rules");
    println!("  2. Run: zod-lint check");

    Ok(())
}

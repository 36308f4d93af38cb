//! Locates the `zod-lint.toml` configuration file for a run.

use std::path::{Path, PathBuf};

/// Project-level config file names, in priority order.
const PROJECT_FILES: &[&str] = &["zod-lint.toml", ".zod-lint.toml"];

/// How a configuration file was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Passed via the `--config` flag.
    Flag,
    /// Found next to the analyzed project.
    Project,
    /// User-wide fallback from the `~/.zod-lint/` directory.
    Global,
}

/// A located configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundConfig {
    /// Path of the file to load.
    pub path: PathBuf,
    /// Where the file came from.
    pub origin: Origin,
}

impl FoundConfig {
    fn new(path: PathBuf, origin: Origin) -> Self {
        Self { path, origin }
    }
}

/// Configuration lookup scoped to one project directory.
///
/// Lookup order: the `--config` flag, then `zod-lint.toml` /
/// `.zod-lint.toml` beside the project, then `~/.zod-lint/config.toml`.
/// When nothing is found the caller falls back to built-in defaults.
pub struct ConfigLookup {
    project_dir: PathBuf,
    global_dir: Option<PathBuf>,
}

impl ConfigLookup {
    /// Creates a lookup for the given project directory.
    #[must_use]
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            global_dir: global_dir(),
        }
    }

    #[cfg(test)]
    fn with_dirs(project_dir: &Path, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            global_dir,
        }
    }

    /// Resolves the configuration file, if any.
    ///
    /// An explicit `--config` path is returned as-is without an existence
    /// check; a missing file then surfaces as a load error with the path the
    /// user typed.
    #[must_use]
    pub fn resolve(&self, explicit: Option<&Path>) -> Option<FoundConfig> {
        if let Some(path) = explicit {
            return Some(FoundConfig::new(path.to_path_buf(), Origin::Flag));
        }

        for name in PROJECT_FILES {
            let candidate = self.project_dir.join(name);
            if candidate.exists() {
                tracing::debug!("using project config {}", candidate.display());
                return Some(FoundConfig::new(candidate, Origin::Project));
            }
        }

        let candidate = self.global_dir.as_ref()?.join("config.toml");
        if candidate.exists() {
            tracing::debug!("using global config {}", candidate.display());
            return Some(FoundConfig::new(candidate, Origin::Global));
        }
        None
    }
}

/// `$ZOD_LINT_CONFIG_DIR` overrides `~/.zod-lint` for tests and CI.
fn global_dir() -> Option<PathBuf> {
    match std::env::var_os("ZOD_LINT_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".zod-lint")),
    }
}

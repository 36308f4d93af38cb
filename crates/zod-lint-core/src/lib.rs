//! # zod-lint-core
//!
//! Core framework for linting TypeScript modules that export zod schemas.
//!
//! This crate provides the foundational traits and types for building the
//! linter. It includes:
//!
//! - [`Rule`] trait for per-file rules over the lowered source model
//! - [`TsParser`] for lowering TypeScript into [`SourceUnit`]
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//! - [`fixer`] for applying automatic text edits
//!
//! ## Example
//!
//! ```ignore
//! use zod_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// TypeScript source model.
pub mod ast;
/// Automatic fix application.
pub mod fixer;
/// Tree-sitter based TypeScript parsing.
pub mod parser;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use parser::{ParseError, TsParser};
pub use rule::{Rule, RuleBox};
pub use types::{Label, LintResult, Location, Replacement, Severity, Suggestion, Violation};

pub use ast::SourceUnit;

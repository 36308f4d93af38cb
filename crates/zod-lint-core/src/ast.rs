//! TypeScript source model consumed by lint rules.
//!
//! This is a deliberately small, closed set of shapes: rules only need the
//! top-level statement kinds and call-chain structure of a module, so the
//! parser lowers everything else to the `Other` variants.

/// Byte/line span of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
}

/// One parsed translation unit (a single `.ts` / `.tsx` module).
#[derive(Debug, Clone, Default)]
pub struct SourceUnit {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A top-level statement, reduced to the shapes rules care about.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `export const A = ..., B = ...;` — one entry per declarator.
    ExportedVars(Vec<ExportedVar>),
    /// `export type Name = ...;`
    ExportedTypeAlias {
        /// Declared alias name.
        name: String,
    },
    /// Any other statement shape; ignored by rules.
    Other,
}

/// One declarator inside an exported variable declaration whose bound name
/// is a simple identifier.
#[derive(Debug, Clone)]
pub struct ExportedVar {
    /// Bound identifier text.
    pub name: String,
    /// Span of the bound identifier (diagnostic anchor).
    pub name_span: Span,
    /// Initializer expression, if present.
    pub init: Option<Expr>,
    /// Whether the token immediately after the declarator is `;`.
    pub has_semicolon: bool,
    /// Byte offset after which corrective text is inserted: after the
    /// semicolon if present, otherwise after the declarator itself.
    pub insert_after: usize,
}

/// An expression, reduced to call-chain structure.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A call expression; only the callee matters to rules.
    Call {
        /// The invoked target.
        callee: Box<Expr>,
    },
    /// A non-computed member access `<object>.<property>`.
    Member {
        /// The accessed object.
        object: Box<Expr>,
        /// Property name text.
        property: String,
    },
    /// A bare identifier.
    Ident(String),
    /// Anything else (literals, computed access, arrow functions, ...).
    Other,
}

impl Expr {
    /// Returns the identifier text if this is a bare identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name),
            _ => None,
        }
    }
}

//! TypeScript parser using Tree-sitter.
//!
//! Lowers one parsed module into the [`SourceUnit`] model. Only the shapes
//! rules consume are distinguished; everything else becomes `Other`.

use tree_sitter::{Language, Node, Parser};

use crate::ast::{ExportedVar, Expr, SourceUnit, Span, Statement};

/// Errors from parsing a TypeScript source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load TypeScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser produced no tree.
    #[error("parser returned no tree")]
    NoTree,
    /// The source contains syntax errors.
    #[error("syntax error in source")]
    Syntax,
}

/// Parses TypeScript modules into the [`SourceUnit`] model.
pub struct TsParser {
    language: Language,
}

impl TsParser {
    /// Creates a parser for the TypeScript grammar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Creates a parser for the TSX grammar.
    #[must_use]
    pub fn tsx() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Parses one module and lowers it into a [`SourceUnit`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the grammar cannot be loaded or the source
    /// does not parse cleanly.
    pub fn parse(&self, source: &str) -> Result<SourceUnit, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(ParseError::Syntax);
        }

        let mut unit = SourceUnit::default();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            unit.statements.push(Self::lower_statement(&node, src));
        }

        Ok(unit)
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn span(node: &Node<'_>) -> Span {
        let start = node.start_position();
        Span {
            line: start.row + 1,
            column: start.column + 1,
            offset: node.start_byte(),
            length: node.end_byte() - node.start_byte(),
        }
    }

    fn lower_statement(node: &Node<'_>, src: &[u8]) -> Statement {
        if node.kind() != "export_statement" {
            return Statement::Other;
        }

        let Some(decl) = node.child_by_field_name("declaration") else {
            // `export { A }`, `export * from ...` — no inline declaration
            return Statement::Other;
        };

        match decl.kind() {
            "lexical_declaration" | "variable_declaration" => {
                Statement::ExportedVars(Self::lower_declarators(&decl, src))
            }
            "type_alias_declaration" => decl
                .child_by_field_name("name")
                .map_or(Statement::Other, |name| Statement::ExportedTypeAlias {
                    name: Self::text(&name, src).to_owned(),
                }),
            _ => Statement::Other,
        }
    }

    fn lower_declarators(decl: &Node<'_>, src: &[u8]) -> Vec<ExportedVar> {
        let mut vars = Vec::new();
        let mut cursor = decl.walk();
        for child in decl.children(&mut cursor) {
            if child.kind() != "variable_declarator" {
                continue;
            }

            let Some(name) = child.child_by_field_name("name") else {
                continue;
            };
            // Destructuring patterns do not bind a single reportable name
            if name.kind() != "identifier" {
                continue;
            }

            let init = child
                .child_by_field_name("value")
                .map(|value| Self::lower_expr(&value, src));

            // Token-level lookahead: the token right after the declarator
            let next = child.next_sibling();
            let has_semicolon = next.is_some_and(|t| t.kind() == ";");
            let insert_after = match next {
                Some(t) if t.kind() == ";" => t.end_byte(),
                _ => child.end_byte(),
            };

            vars.push(ExportedVar {
                name: Self::text(&name, src).to_owned(),
                name_span: Self::span(&name),
                init,
                has_semicolon,
                insert_after,
            });
        }
        vars
    }

    fn lower_expr(node: &Node<'_>, src: &[u8]) -> Expr {
        match node.kind() {
            "call_expression" => node
                .child_by_field_name("function")
                .map_or(Expr::Other, |callee| Expr::Call {
                    callee: Box::new(Self::lower_expr(&callee, src)),
                }),
            "member_expression" => {
                let object = node.child_by_field_name("object");
                let property = node.child_by_field_name("property");
                match (object, property) {
                    (Some(object), Some(property)) => Expr::Member {
                        object: Box::new(Self::lower_expr(&object, src)),
                        property: Self::text(&property, src).to_owned(),
                    },
                    _ => Expr::Other,
                }
            }
            "identifier" => Expr::Ident(Self::text(node, src).to_owned()),
            _ => Expr::Other,
        }
    }
}

impl Default for TsParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SourceUnit {
        TsParser::new().parse(src).expect("parse failed")
    }

    fn exported_vars(unit: &SourceUnit) -> Vec<&ExportedVar> {
        unit.statements
            .iter()
            .filter_map(|s| match s {
                Statement::ExportedVars(vars) => Some(vars.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    #[test]
    fn lowers_exported_const() {
        let unit = parse("export const Schema = z.object({});\n");
        let vars = exported_vars(&unit);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].name, "Schema");
        assert!(vars[0].has_semicolon);
    }

    #[test]
    fn detects_missing_semicolon() {
        let unit = parse("export const Schema = z.object({})\n");
        let vars = exported_vars(&unit);
        assert!(!vars[0].has_semicolon);
    }

    #[test]
    fn insert_after_is_past_the_semicolon() {
        let src = "export const Schema = z.object({});";
        let unit = parse(src);
        let vars = exported_vars(&unit);
        assert_eq!(vars[0].insert_after, src.len());
    }

    #[test]
    fn insert_after_without_semicolon_ends_at_declarator() {
        let src = "export const Schema = z.object({})";
        let unit = parse(src);
        let vars = exported_vars(&unit);
        assert_eq!(vars[0].insert_after, src.len());
    }

    #[test]
    fn name_span_points_at_identifier() {
        let unit = parse("export const Schema = z.object({});\n");
        let vars = exported_vars(&unit);
        let span = vars[0].name_span;
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 14);
        assert_eq!(span.length, "Schema".len());
    }

    #[test]
    fn lowers_exported_type_alias() {
        let unit = parse("export type Schema = z.infer<typeof Schema>;\n");
        assert!(unit
            .statements
            .iter()
            .any(|s| matches!(s, Statement::ExportedTypeAlias { name } if name == "Schema")));
    }

    #[test]
    fn non_exported_const_is_other() {
        let unit = parse("const Schema = z.object({});\n");
        assert!(exported_vars(&unit).is_empty());
    }

    #[test]
    fn destructuring_declarator_is_skipped() {
        let unit = parse("export const { a, b } = z.object({});\n");
        assert!(exported_vars(&unit).is_empty());
    }

    #[test]
    fn multiple_declarators_each_lowered() {
        let unit = parse("export const A = z.enum([]), B = z.enum([]);\n");
        let vars = exported_vars(&unit);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "A");
        // Token after the first declarator is `,`, not `;`
        assert!(!vars[0].has_semicolon);
        assert!(vars[1].has_semicolon);
    }

    #[test]
    fn call_chain_lowers_nested() {
        let unit = parse("export const S = z.object({}).partial();\n");
        let vars = exported_vars(&unit);
        let Some(Expr::Call { callee }) = &vars[0].init else {
            panic!("expected call expression");
        };
        assert!(matches!(callee.as_ref(), Expr::Member { .. }));
    }

    #[test]
    fn literal_initializer_is_other() {
        let unit = parse("export const a = 1;\n");
        let vars = exported_vars(&unit);
        assert!(matches!(vars[0].init, Some(Expr::Other)));
    }

    #[test]
    fn syntax_error_is_rejected() {
        let result = TsParser::new().parse("export const A = (;\n");
        assert!(matches!(result, Err(ParseError::Syntax)));
    }

    #[test]
    fn tsx_grammar_accepts_jsx_alongside_schemas() {
        let src = "export const Props = z.object({ title: z.string() });\n\
                   export const View = () => <div className=\"card\">ok</div>;\n";
        let unit = TsParser::tsx().parse(src).expect("parse failed");
        let vars = exported_vars(&unit);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "Props");
        assert!(vars[0].has_semicolon);
        // The JSX-valued binding lowers to a non-call initializer
        assert!(!matches!(vars[1].init, Some(Expr::Call { .. })));
    }

    #[test]
    fn typescript_grammar_rejects_jsx() {
        let result = TsParser::new().parse("const el = <div className=\"card\">ok</div>;\n");
        assert!(matches!(result, Err(ParseError::Syntax)));
    }

    #[test]
    fn empty_source_has_no_statements() {
        let unit = parse("");
        assert!(unit.statements.is_empty());
    }
}

//! AST extraction for Go source code

use entigraph::Entity;
use entigraph_parser_api::{DependencyResolver, ParserConfig, ParserError};
use std::path::Path;
use tree_sitter::{Node, Parser};

use crate::visitor::GoVisitor;

const SNIPPET_LEN: usize = 32;

/// Extract struct entities from Go source code, in declaration order.
///
/// # Errors
///
/// Returns [`ParserError::SyntaxError`] pointing at the first malformed node
/// when the source does not parse cleanly, and [`ParserError::Language`] if
/// the Go grammar cannot be loaded.
pub fn extract(
    source: &str,
    file_path: &Path,
    config: &ParserConfig,
) -> Result<Vec<Entity>, ParserError> {
    let mut parser = Parser::new();
    let language = tree_sitter_go::language();
    parser
        .set_language(&language)
        .map_err(|e| ParserError::Language {
            file: file_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParserError::syntax_error(file_path, 1, 1, "failed to parse"))?;

    let root_node = tree.root_node();
    if root_node.has_error() {
        return Err(syntax_error_at(root_node, source, file_path));
    }
    check_package_clause(root_node, file_path)?;

    let mut visitor = GoVisitor::new(
        source.as_bytes(),
        DependencyResolver::new(&config.builtins),
    );
    visitor.visit_source_file(root_node);

    Ok(visitor.entities)
}

/// Every Go file starts with a `package` clause, possibly after comments.
fn check_package_clause(root: Node, file_path: &Path) -> Result<(), ParserError> {
    let mut cursor = root.walk();
    let first = root
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment");

    match first {
        Some(node) if node.kind() == "package_clause" => Ok(()),
        Some(node) => {
            let pos = node.start_position();
            Err(ParserError::syntax_error(
                file_path,
                pos.row + 1,
                pos.column + 1,
                "expected `package` clause",
            ))
        }
        None => Err(ParserError::syntax_error(
            file_path,
            1,
            1,
            "expected `package` clause",
        )),
    }
}

/// Build a syntax error for the first ERROR or MISSING node in document order.
fn syntax_error_at(root: Node, source: &str, file_path: &Path) -> ParserError {
    let Some(node) = first_error_node(root) else {
        let pos = root.start_position();
        return ParserError::syntax_error(file_path, pos.row + 1, pos.column + 1, "syntax error");
    };

    let pos = node.start_position();
    let message = if node.is_missing() {
        format!("missing {}", describe_token(node.kind()))
    } else {
        let text = node.utf8_text(source.as_bytes()).unwrap_or("");
        let snippet: String = text
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .chars()
            .take(SNIPPET_LEN)
            .collect();
        if snippet.is_empty() {
            "syntax error".to_string()
        } else {
            format!("unexpected `{snippet}`")
        }
    };

    ParserError::syntax_error(file_path, pos.row + 1, pos.column + 1, message)
}

/// Readable name for a grammar token in a single-line diagnostic.
fn describe_token(kind: &str) -> String {
    match kind {
        "\n" | "\r\n" => "newline".to_string(),
        k if k.chars().all(|c| c.is_alphanumeric() || c == '_') => k.to_string(),
        k => format!("`{}`", k.escape_default()),
    }
}

fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error_node)
}

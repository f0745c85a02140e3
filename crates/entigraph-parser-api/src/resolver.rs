//! Dependency inference from canonical type strings.
//!
//! This is a syntactic heuristic, not a type checker: the base type name is
//! obtained by peeling wrapper syntax off the rendered type, and anything
//! that is not a plain identifier afterwards is not an entity reference.

use crate::builtins::Builtins;

/// Reduce a canonical type string to the name of the type it refers to.
///
/// Examples:
///
/// ```
/// use entigraph_parser_api::base_type_name;
///
/// assert_eq!(base_type_name("*pkg.User"), "User");
/// assert_eq!(base_type_name("[]*Order"), "Order");
/// assert_eq!(base_type_name("map[string]Item"), "Item");
/// assert_eq!(base_type_name("map[int]*pkg.Thing"), "Thing");
/// ```
///
/// Steps, in order: strip leading `*`; drop one leading `[]`; for
/// `map[K]V` keep the text after the first `]`; peel residual pointer,
/// array and channel markers and any generic argument list; keep the
/// segment after the last `.`; peel residual markers again; trim.
pub fn base_type_name(type_expr: &str) -> &str {
    let mut typ = type_expr.trim_start_matches('*');

    if let Some(rest) = typ.strip_prefix("[]") {
        typ = rest;
    }

    if typ.starts_with("map[") {
        if let Some(idx) = typ.find(']') {
            if idx + 1 < typ.len() {
                typ = &typ[idx + 1..];
            }
        }
    }

    typ = strip_type_arguments(strip_wrappers(typ));

    if let Some(idx) = typ.rfind('.') {
        typ = &typ[idx + 1..];
    }

    strip_wrappers(typ).trim()
}

/// Peel leading `*`, `[]`, `[N]` and `chan ` markers.
fn strip_wrappers(mut typ: &str) -> &str {
    loop {
        typ = typ.trim_start_matches('*');
        if let Some(rest) = typ.strip_prefix("chan ") {
            typ = rest;
            continue;
        }
        if let Some(rest) = typ.strip_prefix('[') {
            if let Some(end) = rest.find(']') {
                typ = &rest[end + 1..];
                continue;
            }
        }
        return typ;
    }
}

/// `Page[Item]` → `Page`.
fn strip_type_arguments(typ: &str) -> &str {
    match typ.find('[') {
        Some(idx) if idx > 0 && typ.ends_with(']') => &typ[..idx],
        _ => typ,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Decides which field types become `depends_on` edges.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    builtins: &'a Builtins,
}

impl<'a> DependencyResolver<'a> {
    /// Create a resolver over an injected builtin set.
    pub fn new(builtins: &'a Builtins) -> Self {
        Self { builtins }
    }

    /// Whether `name` is a builtin type.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    /// The dependency contributed by a field of type `type_expr` declared in
    /// entity `owner`, if any.
    ///
    /// Empty names, builtins, names that are not plain identifiers, and the
    /// owner itself contribute nothing.
    pub fn dependency_of<'t>(&self, type_expr: &'t str, owner: &str) -> Option<&'t str> {
        let base = base_type_name(type_expr);
        if base.is_empty() || self.is_builtin(base) || !is_identifier(base) || base == owner {
            return None;
        }
        Some(base)
    }
}

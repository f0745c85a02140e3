//! Go type expressions and their canonical rendering.

use std::fmt;
use tree_sitter::Node;

/// A Go type expression, lowered from the syntax tree.
///
/// Known composite shapes get their own variant; everything else is
/// [`TypeExpr::Opaque`], carrying the grammar node kind so rendering never
/// fails on unusual but valid syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// `T`
    Named(String),
    /// `pkg.T`
    Qualified { package: String, name: String },
    /// `*X`
    Pointer(Box<TypeExpr>),
    /// `[]X`
    Slice(Box<TypeExpr>),
    /// `[N]X`
    Array { len: Box<TypeExpr>, elem: Box<TypeExpr> },
    /// `map[K]V`
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    /// `chan X`, `<-chan X`, `chan<- X`
    Channel(Box<TypeExpr>),
    /// Any interface literal
    Interface,
    /// Anonymous struct
    Struct,
    /// Function type
    Func,
    /// `T[A, B]`
    Generic { base: Box<TypeExpr>, args: Vec<TypeExpr> },
    /// Literal constant, e.g. an array length
    Literal(String),
    /// Unsupported node, by grammar kind
    Opaque(String),
}

impl TypeExpr {
    /// Lower a type (or array-length expression) node.
    pub fn from_node(node: Node, source: &[u8]) -> Self {
        let text = |n: Node| n.utf8_text(source).unwrap_or("").to_string();
        let lower = |n: Option<Node>| match n {
            Some(n) => Box::new(TypeExpr::from_node(n, source)),
            None => Box::new(TypeExpr::Opaque("missing".to_string())),
        };

        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" | "field_identifier" => {
                TypeExpr::Named(text(node))
            }
            "qualified_type" => TypeExpr::Qualified {
                package: node.child_by_field_name("package").map(text).unwrap_or_default(),
                name: node.child_by_field_name("name").map(text).unwrap_or_default(),
            },
            "selector_expression" => TypeExpr::Qualified {
                package: node.child_by_field_name("operand").map(text).unwrap_or_default(),
                name: node.child_by_field_name("field").map(text).unwrap_or_default(),
            },
            "pointer_type" => TypeExpr::Pointer(lower(node.named_child(0))),
            "slice_type" => TypeExpr::Slice(lower(node.child_by_field_name("element"))),
            "array_type" => TypeExpr::Array {
                len: lower(node.child_by_field_name("length")),
                elem: lower(node.child_by_field_name("element")),
            },
            "map_type" => TypeExpr::Map {
                key: lower(node.child_by_field_name("key")),
                value: lower(node.child_by_field_name("value")),
            },
            "channel_type" => TypeExpr::Channel(lower(node.child_by_field_name("value"))),
            "interface_type" => TypeExpr::Interface,
            "struct_type" => TypeExpr::Struct,
            "function_type" => TypeExpr::Func,
            "generic_type" => {
                let base = lower(node.child_by_field_name("type"));
                let args = match node.child_by_field_name("type_arguments") {
                    Some(list) => {
                        let mut cursor = list.walk();
                        let args = list
                            .named_children(&mut cursor)
                            .filter(|n| n.kind() != "comment")
                            .map(|n| TypeExpr::from_node(n, source))
                            .collect();
                        args
                    }
                    None => Vec::new(),
                };
                TypeExpr::Generic { base, args }
            }
            "parenthesized_type" | "type_elem" if node.named_child_count() == 1 => {
                *lower(node.named_child(0))
            }
            "int_literal"
            | "float_literal"
            | "imaginary_literal"
            | "rune_literal"
            | "interpreted_string_literal"
            | "raw_string_literal" => TypeExpr::Literal(text(node)),
            kind => TypeExpr::Opaque(kind.to_string()),
        }
    }

    /// Canonical string form.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Simple identifier of the referenced type, used to name embedded
    /// fields: wrappers, qualifiers and type arguments are dropped.
    pub fn simple_name(&self) -> String {
        match self {
            TypeExpr::Named(name) => name.clone(),
            TypeExpr::Qualified { name, .. } => name.clone(),
            TypeExpr::Pointer(inner) => inner.simple_name(),
            TypeExpr::Generic { base, .. } => base.simple_name(),
            other => other.render(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => write!(f, "{name}"),
            TypeExpr::Qualified { package, name } => write!(f, "{package}.{name}"),
            TypeExpr::Pointer(inner) => write!(f, "*{inner}"),
            TypeExpr::Slice(elem) => write!(f, "[]{elem}"),
            TypeExpr::Array { len, elem } => write!(f, "[{len}]{elem}"),
            TypeExpr::Map { key, value } => write!(f, "map[{key}]{value}"),
            TypeExpr::Channel(value) => write!(f, "chan {value}"),
            TypeExpr::Interface => write!(f, "interface{{}}"),
            TypeExpr::Struct => write!(f, "struct{{...}}"),
            TypeExpr::Func => write!(f, "func(...)"),
            TypeExpr::Generic { base, args } => {
                write!(f, "{base}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "]")
            }
            TypeExpr::Literal(value) => write!(f, "{value}"),
            TypeExpr::Opaque(kind) => write!(f, "<{kind}>"),
        }
    }
}

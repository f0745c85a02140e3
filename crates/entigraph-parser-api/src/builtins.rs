use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Go's predeclared scalar types, `error`, and the empty interface spellings.
const GO_BUILTINS: &[&str] = &[
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "string",
    "bool",
    "byte",
    "rune",
    "error",
    "interface{}",
    "any",
];

/// Immutable set of built-in/primitive type names that never produce a
/// dependency edge.
///
/// The set is fixed at construction and injected through
/// [`ParserConfig`](crate::ParserConfig), so a parser for another host
/// language supplies its own set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Builtins(BTreeSet<String>);

impl Builtins {
    /// Create a builtin set from arbitrary names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// The Go builtin set.
    pub fn go() -> Self {
        Self::new(GO_BUILTINS.iter().copied())
    }

    /// Whether `name` is a builtin.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::go()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_builtins() {
        let builtins = Builtins::go();
        for name in ["int", "int64", "uint8", "float64", "string", "bool", "byte", "rune", "error"] {
            assert!(builtins.contains(name), "{name} should be builtin");
        }
        assert!(builtins.contains("interface{}"));
        assert!(builtins.contains("any"));
        assert!(!builtins.contains("User"));
        assert!(!builtins.contains("String"));
    }

    #[test]
    fn test_custom_builtins() {
        let builtins = Builtins::new(["str", "i32"]);
        assert_eq!(builtins.len(), 2);
        assert!(builtins.contains("str"));
        assert!(!builtins.contains("string"));
    }
}

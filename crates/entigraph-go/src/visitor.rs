//! AST visitor for extracting Go struct entities

use entigraph::{Entity, Field};
use entigraph_parser_api::DependencyResolver;
use tracing::trace;
use tree_sitter::Node;

use crate::type_expr::TypeExpr;

pub struct GoVisitor<'a> {
    pub source: &'a [u8],
    pub resolver: DependencyResolver<'a>,
    pub entities: Vec<Entity>,
}

impl<'a> GoVisitor<'a> {
    pub fn new(source: &'a [u8], resolver: DependencyResolver<'a>) -> Self {
        Self {
            source,
            resolver,
            entities: Vec::new(),
        }
    }

    fn node_text(&self, node: Node) -> String {
        node.utf8_text(self.source).unwrap_or("").to_string()
    }

    /// Visit the top-level declarations of a `source_file`.
    ///
    /// Struct types declared inside function bodies are not entities.
    pub fn visit_source_file(&mut self, root: Node) {
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() == "type_declaration" {
                self.visit_type_declaration(child);
            }
        }
    }

    fn visit_type_declaration(&mut self, node: Node) {
        let mut cursor = node.walk();
        for spec in node.named_children(&mut cursor) {
            match spec.kind() {
                // `type T struct{}` and `type T = struct{}`
                "type_spec" | "type_alias" => self.visit_type_spec(spec),
                _ => {}
            }
        }
    }

    fn visit_type_spec(&mut self, spec: Node) {
        let Some(type_node) = spec.child_by_field_name("type") else {
            return;
        };
        if type_node.kind() != "struct_type" {
            return;
        }
        let Some(name) = spec.child_by_field_name("name").map(|n| self.node_text(n)) else {
            return;
        };

        let mut entity = Entity::new(name);
        if let Some(list) = find_child(type_node, "field_declaration_list") {
            let mut cursor = list.walk();
            for decl in list.named_children(&mut cursor) {
                if decl.kind() == "field_declaration" {
                    self.visit_field_declaration(decl, &mut entity);
                }
            }
        }

        trace!(
            entity = %entity.name,
            fields = entity.fields.len(),
            line = spec.start_position().row + 1,
            "Extracted struct"
        );
        self.entities.push(entity);
    }

    fn visit_field_declaration(&mut self, decl: Node, entity: &mut Entity) {
        let Some(type_node) = decl.child_by_field_name("type") else {
            return;
        };
        let mut expr = TypeExpr::from_node(type_node, self.source);

        let mut cursor = decl.walk();
        let names: Vec<String> = decl
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.node_text(n))
            .collect();

        let names = if names.is_empty() {
            // Embedded field: `T`, `*T`, `pkg.T` or `T[A]`
            if has_anonymous_child(decl, "*") {
                expr = TypeExpr::Pointer(Box::new(expr));
            }
            vec![expr.simple_name()]
        } else {
            names
        };

        let rendered = expr.render();
        if let Some(dep) = self.resolver.dependency_of(&rendered, &entity.name) {
            entity.add_dependency(dep);
        }
        for name in names {
            entity.add_field(Field::new(name, rendered.clone()));
        }
    }
}

fn find_child<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

fn has_anonymous_child(node: Node, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == kind);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use entigraph_parser_api::Builtins;
    use tree_sitter::Parser;

    fn visit(source: &str) -> Vec<Entity> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language()).unwrap();
        let tree = parser.parse(source, None).unwrap();
        let builtins = Builtins::go();
        let mut visitor = GoVisitor::new(source.as_bytes(), DependencyResolver::new(&builtins));
        visitor.visit_source_file(tree.root_node());
        visitor.entities
    }

    #[test]
    fn test_visitor_struct_fields() {
        let entities = visit(
            "package m\n\ntype User struct {\n\tName string\n\tOrders []Order\n\tTeam *team.Team\n}\n",
        );
        assert_eq!(entities.len(), 1);
        let user = &entities[0];
        assert_eq!(user.name, "User");
        let fields: Vec<(&str, &str)> = user
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.type_expression.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![("Name", "string"), ("Orders", "[]Order"), ("Team", "*team.Team")]
        );
        assert!(user.depends_on("Order"));
        assert!(user.depends_on("Team"));
        assert_eq!(user.depends_on.len(), 2);
    }

    #[test]
    fn test_visitor_multiple_names_share_type() {
        let entities = visit("package m\n\ntype Point struct {\n\tX, Y, Z float64\n}\n");
        let names: Vec<&str> = entities[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
        assert!(entities[0].fields.iter().all(|f| f.type_expression == "float64"));
    }

    #[test]
    fn test_visitor_embedded_fields() {
        let entities = visit(
            "package m\n\ntype Admin struct {\n\tBase\n\t*Audit\n\tsync.Mutex\n\tLevel int\n}\n",
        );
        let fields: Vec<(&str, &str)> = entities[0]
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.type_expression.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("Base", "Base"),
                ("Audit", "*Audit"),
                ("Mutex", "sync.Mutex"),
                ("Level", "int"),
            ]
        );
        let deps: Vec<&str> = entities[0].depends_on.iter().map(String::as_str).collect();
        assert_eq!(deps, vec!["Audit", "Base", "Mutex"]);
    }

    #[test]
    fn test_visitor_ignores_nested_and_non_struct_types() {
        let entities = visit(
            "package m\n\ntype ID string\n\ntype Store interface { Get() }\n\nfunc f() {\n\ttype local struct{ X int }\n}\n",
        );
        assert!(entities.is_empty());
    }

    #[test]
    fn test_visitor_skips_comments_in_body() {
        let entities = visit(
            "package m\n\ntype User struct {\n\t// the name\n\tName string // trailing\n\t/* block */\n}\n",
        );
        assert_eq!(entities[0].fields.len(), 1);
    }
}

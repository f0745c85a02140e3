//! Integration tests for writing the entity graph to disk

use entigraph::{write_entities, Entity, EntityGraph, OutputOptions};
use std::fs;
use tempfile::TempDir;

fn create_test_graph() -> EntityGraph {
    vec![
        Entity::new("User")
            .with_field("ID", "int")
            .with_field("Name", "string")
            .with_field("Manager", "*User")
            .with_field("Orders", "[]Order")
            .with_dependency("Order"),
        Entity::new("Order")
            .with_field("Buyer", "*User")
            .with_dependency("User"),
        Entity::new("Marker"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_write_entities_creates_json_and_pages() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("plugs");
    let graph = create_test_graph();

    let report = write_entities(&out_dir, &graph, &OutputOptions::default()).unwrap();

    assert_eq!(report.file_count(), 4);
    assert!(report.dot.is_none());
    assert!(out_dir.join("entities.json").is_file());
    assert!(out_dir.join("user.md").is_file());
    assert!(out_dir.join("order.md").is_file());
    assert!(out_dir.join("marker.md").is_file());

    let json = fs::read_to_string(out_dir.join("entities.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["name"], "User");
    assert_eq!(value[0]["fields"][2]["type"], "*User");
    assert_eq!(value[0]["depends_on"], serde_json::json!(["Order"]));
    assert_eq!(value[2]["fields"], serde_json::json!([]));

    let marker = fs::read_to_string(out_dir.join("marker.md")).unwrap();
    assert!(marker.contains("_no fields_"));

    let user = fs::read_to_string(out_dir.join("user.md")).unwrap();
    assert!(user.starts_with("# User\n\n## Fields\n"));
    assert!(user.ends_with("## Depends on\nOrder\n"));
}

#[test]
fn test_write_entities_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let graph = create_test_graph();

    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    write_entities(&first, &graph, &OutputOptions::default()).unwrap();
    write_entities(&second, &graph, &OutputOptions::default()).unwrap();

    let a = fs::read(first.join("entities.json")).unwrap();
    let b = fs::read(second.join("entities.json")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_write_entities_with_dot() {
    let temp_dir = TempDir::new().unwrap();
    let graph = create_test_graph();

    let report = write_entities(temp_dir.path(), &graph, &OutputOptions { dot: true }).unwrap();

    let dot_path = report.dot.expect("dot output requested");
    let dot = fs::read_to_string(dot_path).unwrap();
    assert!(dot.contains("\"User\" -> \"Order\";"));
    assert!(dot.contains("\"Order\" -> \"User\";"));
}

#[test]
fn test_write_empty_graph_only_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("nested").join("plugs");

    let report = write_entities(&out_dir, &EntityGraph::new(), &OutputOptions::default()).unwrap();

    assert_eq!(report.file_count(), 0);
    assert!(out_dir.is_dir());
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn test_write_fails_when_output_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("plugs");
    fs::write(&blocker, "not a directory").unwrap();

    let err = write_entities(&blocker, &create_test_graph(), &OutputOptions::default())
        .unwrap_err();
    assert!(matches!(err, entigraph::ModelError::Write { .. }));
}

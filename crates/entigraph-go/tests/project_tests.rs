//! Multi-file parsing tests for entigraph-go

use entigraph_go::{ErrorMode, GoParser, ParserConfig, ParserError};
use entigraph_parser_api::EntityParser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(
        root,
        "billing/invoice.entity.go",
        "package billing\n\ntype Invoice struct {\n\tOrder *shop.Order\n\tTotal float64\n}\n",
    );
    write(
        root,
        "shop/order.entity.go",
        "package shop\n\ntype Order struct {\n\tBuyer *User\n\tItems []Item\n}\n\ntype Item struct {\n\tSKU string\n}\n",
    );
    write(
        root,
        "shop/user.entity.go",
        "package shop\n\ntype User struct {\n\tID int\n\tOrders []Order\n}\n",
    );
    write(root, "shop/helpers.go", "package shop\n\ntype Ignored struct{ X int }\n");
    write(root, "vendor/dep/dep.entity.go", "package dep\n\ntype Vendored struct{}\n");
    write(root, ".hidden/h.entity.go", "package h\n\ntype Hidden struct{}\n");

    temp_dir
}

fn names(graph: &entigraph::EntityGraph) -> Vec<&str> {
    graph.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_parse_directory_orders_by_file_then_declaration() {
    let project = sample_project();
    let parser = GoParser::new();

    let graph = parser.parse_directory(project.path()).unwrap();
    assert_eq!(names(&graph), vec!["Invoice", "Order", "Item", "User"]);
    assert!(graph.find("Invoice").unwrap().depends_on("Order"));
    assert!(graph.find("User").unwrap().depends_on("Order"));

    let metrics = parser.metrics();
    assert_eq!(metrics.files_attempted, 3);
    assert_eq!(metrics.files_succeeded, 3);
    assert_eq!(metrics.total_entities, 4);
}

#[test]
fn test_parallel_matches_sequential() {
    let project = sample_project();
    for i in 0..20 {
        write(
            project.path(),
            &format!("bulk/m{i:02}.entity.go"),
            &format!("package bulk\n\ntype M{i} struct {{\n\tNext *M{}\n\tTag string\n}}\n", i + 1),
        );
    }

    let sequential = GoParser::new().parse_directory(project.path()).unwrap();
    let parallel = GoParser::with_config(ParserConfig::default().with_parallel(true).with_workers(4))
        .parse_directory(project.path())
        .unwrap();

    assert_eq!(sequential.len(), 24);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_fail_fast_stops_at_first_broken_file() {
    let project = sample_project();
    write(project.path(), "a_broken/x.entity.go", "package x\n\ntype X struct {\n");
    write(project.path(), "z_broken/y.entity.go", "package y\n\ntype Y struct {\n");

    let err = GoParser::new().parse_directory(project.path()).unwrap_err();
    match err {
        ParserError::SyntaxError { file, .. } => assert!(file.ends_with("a_broken/x.entity.go")),
        other => panic!("Expected SyntaxError, got {other:?}"),
    }
}

#[test]
fn test_parallel_fail_fast_reports_first_in_file_order() {
    let project = sample_project();
    write(project.path(), "a_broken/x.entity.go", "package x\n\ntype X struct {\n");
    write(project.path(), "z_broken/y.entity.go", "package y\n\ntype Y struct {\n");

    let parser = GoParser::with_config(ParserConfig::default().with_parallel(true));
    let err = parser.parse_directory(project.path()).unwrap_err();
    match err {
        ParserError::SyntaxError { file, .. } => assert!(file.ends_with("a_broken/x.entity.go")),
        other => panic!("Expected SyntaxError, got {other:?}"),
    }
}

#[test]
fn test_collect_all_reports_every_broken_file() {
    let project = sample_project();
    write(project.path(), "a_broken/x.entity.go", "package x\n\ntype X struct {\n");
    write(project.path(), "z_broken/y.entity.go", "package y\n\ntype Y struct {\n");

    let parser = GoParser::with_config(
        ParserConfig::default().with_error_mode(ErrorMode::CollectAll),
    );
    let err = parser.parse_directory(project.path()).unwrap_err();
    assert_eq!(err.failure_count(), 2);
    assert!(err.to_string().starts_with("2 files failed to parse"));

    let metrics = parser.metrics();
    assert_eq!(metrics.files_attempted, 5);
    assert_eq!(metrics.files_failed, 2);
}

#[test]
fn test_duplicate_names_are_kept() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/user.entity.go", "package a\n\ntype User struct{ A int }\n");
    write(temp_dir.path(), "b/user.entity.go", "package b\n\ntype User struct{ B int }\n");

    let graph = GoParser::new().parse_directory(temp_dir.path()).unwrap();
    assert_eq!(names(&graph), vec!["User", "User"]);
    assert_eq!(graph.duplicate_names(), vec!["User".to_string()]);
}

#[test]
fn test_json_output_is_reproducible() {
    let project = sample_project();

    let first = entigraph::export::export_json(&GoParser::new().parse_directory(project.path()).unwrap())
        .unwrap();
    let second = entigraph::export::export_json(
        &GoParser::with_config(ParserConfig::default().with_parallel(true))
            .parse_directory(project.path())
            .unwrap(),
    )
    .unwrap();
    assert_eq!(first, second);

    let value: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(value[1]["name"], "Order");
    assert_eq!(value[1]["fields"][0]["name"], "Buyer");
    assert_eq!(value[1]["fields"][0]["type"], "*User");
    assert_eq!(value[1]["depends_on"], serde_json::json!(["Item", "User"]));
}

#[test]
fn test_missing_root_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = GoParser::new()
        .parse_directory(&temp_dir.path().join("nope"))
        .unwrap_err();
    assert!(matches!(err, ParserError::IoError { .. }));
}

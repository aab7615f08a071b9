use crate::cli::support::{maze, stdout_json, write_graph, SMALL_TOML};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_unvisited_builtin() {
    maze()
        .arg("unvisited")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search 1 -> 45: goal not reached"))
        .stdout(predicate::str::contains(
            "Unvisited rooms (5): 17, 23, 28, 32, 45",
        ));
}

#[test]
fn test_unvisited_small_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "small.toml", SMALL_TOML);

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("unvisited")
        .assert()
        .success()
        .stdout(predicate::str::contains("goal reached"))
        .stdout(predicate::str::contains("Unvisited rooms (1): 9"));
}

#[test]
fn test_unvisited_json() {
    let output = maze()
        .args(["--format", "json", "unvisited"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["visited_count"], 40);
    assert_eq!(json["unvisited"], serde_json::json!([17, 23, 28, 32, 45]));
}

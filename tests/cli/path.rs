use crate::cli::support::{maze, stdout_json, write_graph, SMALL_TOML};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Path command tests
// ============================================================================

#[test]
fn test_path_builtin_center_unreachable() {
    maze()
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 1 to 45"))
        .stdout(predicate::str::contains("Visited 40 rooms"));
}

#[test]
fn test_path_builtin_with_hidden_passage() {
    maze()
        .args(["--hidden", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 -> 26 -> 30 -> 42 -> 4 -> 29 -> 17 -> 45",
        ))
        .stdout(predicate::str::contains("Path length: 7 hops"));
}

#[test]
fn test_path_explicit_rooms() {
    maze()
        .args(["path", "9", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 -> 3\n"))
        .stdout(predicate::str::contains("Path length: 1 hop\n"));
}

#[test]
fn test_path_same_room() {
    maze()
        .args(["path", "12", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 0 hops"));
}

#[test]
fn test_path_quiet_omits_visited_count() {
    maze()
        .args(["--quiet", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 1 to 45"))
        .stdout(predicate::str::contains("Visited").not());
}

#[test]
fn test_path_small_graph_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "small.toml", SMALL_TOML);

    let output = maze()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "path"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["from"], 1);
    assert_eq!(json["to"], 3);
    assert_eq!(json["found"], true);
    assert_eq!(json["hops"], 2);
    assert_eq!(json["path"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["visited"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(
        json["backpointers"],
        serde_json::json!({"2": 1, "3": 2, "4": 1})
    );
}

#[test]
fn test_path_unreachable_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "small.toml", SMALL_TOML);

    let output = maze()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "path", "3", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
    assert!(json["hops"].is_null());
    assert_eq!(json["visited"], serde_json::json!([3]));
}

#[test]
fn test_path_hidden_passage_in_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "small.toml", SMALL_TOML);

    maze()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 3 to 1"));

    maze()
        .arg("--graph")
        .arg(&graph)
        .args(["--hidden", "path", "3", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 -> 9 -> 1"));
}

#[test]
fn test_path_room_outside_graph() {
    // Room 99 has no passages; searching from it is not an error
    maze()
        .args(["path", "99", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 99 to 1"))
        .stdout(predicate::str::contains("Visited 1 rooms"));
}

#[test]
fn test_path_rejects_room_zero() {
    maze()
        .args(["path", "0", "1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid room id"));
}

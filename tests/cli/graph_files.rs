use crate::cli::support::{maze, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_json_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "maze.json",
        r#"{"start": 5, "goal": 7, "passages": {"5": [6], "6": [7]}}"#,
    );

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 -> 6 -> 7"));
}

#[test]
fn test_yaml_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "maze.yaml",
        "start: 1\ngoal: 3\npassages:\n  1: [3, 2]\n  2: [3]\n",
    );

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 3\n"))
        .stdout(predicate::str::contains("Path length: 1 hop"));
}

#[test]
fn test_graph_from_environment() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "env.toml", "[passages]\n1 = [2]\n");

    maze()
        .env("MAZE_GRAPH", &graph)
        .args(["path", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2"));
}

#[test]
fn test_missing_graph_file() {
    let dir = tempdir().unwrap();

    maze()
        .arg("--graph")
        .arg(dir.path().join("absent.toml"))
        .arg("show")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_unsupported_graph_format() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "maze.csv", "1,2\n");

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("show")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph format: csv"));
}

#[test]
fn test_room_zero_in_graph_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "zero.toml", "[passages]\n1 = [0]\n");

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("show")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid room id: 0"));
}

#[test]
fn test_no_default_endpoints() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "bare.toml", "[passages]\n1 = [2]\n");

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("path")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no start room given"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();

    maze()
        .arg("--graph")
        .arg(dir.path().join("absent.toml"))
        .args(["--format", "json", "show"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"not_found\""));
}

use crate::cli::support::{maze, stdout_json, write_graph, SMALL_TOML};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_builtin() {
    maze()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maze (Manson, 1985)"))
        .stdout(predicate::str::contains("Rooms: 45"))
        .stdout(predicate::str::contains("Start: 1"))
        .stdout(predicate::str::contains("Goal: 45"))
        .stdout(predicate::str::contains("Dead ends: 24"))
        .stdout(predicate::str::contains("Hidden passages (not included):"))
        .stdout(predicate::str::contains("  29 -> 17"));
}

#[test]
fn test_show_hidden_adds_passage() {
    let plain = stdout_json(
        &maze()
            .args(["--format", "json", "show"])
            .output()
            .unwrap(),
    );
    let hidden = stdout_json(
        &maze()
            .args(["--hidden", "--format", "json", "show"])
            .output()
            .unwrap(),
    );

    assert_eq!(
        hidden["passages"].as_u64().unwrap(),
        plain["passages"].as_u64().unwrap() + 1
    );
    assert_eq!(hidden["hidden_included"], true);
    assert_eq!(plain["hidden_passages"]["29"], serde_json::json!([17]));
}

#[test]
fn test_show_small_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "small.toml", SMALL_TOML);

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Small"))
        .stdout(predicate::str::contains("Rooms: 5"))
        .stdout(predicate::str::contains("Passages: 6"))
        .stdout(predicate::str::contains("Dead ends: 3"))
        .stdout(predicate::str::contains("Rooms without recorded passages").not());
}

#[test]
fn test_show_dangling_rooms() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "open.json", r#"{"passages": {"1": [2, 7]}}"#);

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dead ends: 2, 7"))
        .stdout(predicate::str::contains(
            "Rooms without recorded passages: 2, 7",
        ));
}

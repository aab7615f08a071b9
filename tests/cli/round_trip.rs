use crate::cli::support::{maze, stdout_json, write_graph, SMALL_TOML};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_round_trip_builtin_with_hidden_passage() {
    maze()
        .args(["--hidden", "round-trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Out:  1 -> 26 -> 30 -> 42 -> 4 -> 29 -> 17 -> 45 (7 hops)"))
        .stdout(predicate::str::contains(
            "Back: 45 -> 23 -> 8 -> 12 -> 39 -> 4 -> 15 -> 37 -> 20 -> 1 (9 hops)",
        ))
        .stdout(predicate::str::contains("Total: 16 hops"));
}

#[test]
fn test_round_trip_one_leg_missing() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "small.toml", SMALL_TOML);

    maze()
        .arg("--graph")
        .arg(&graph)
        .arg("round-trip")
        .assert()
        .success()
        .stdout(predicate::str::contains("Out:  1 -> 2 -> 3 (2 hops)"))
        .stdout(predicate::str::contains("Back: no path from 3 to 1"))
        .stdout(predicate::str::contains("No round trip between 1 and 3"))
        .stdout(predicate::str::contains("Total").not());
}

#[test]
fn test_round_trip_json() {
    let output = maze()
        .args(["--hidden", "--format", "json", "round-trip"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["out"]["hops"], 7);
    assert_eq!(json["back"]["hops"], 9);
    assert_eq!(json["back"]["from"], 45);
    assert_eq!(json["total_hops"], 16);
}

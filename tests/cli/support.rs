use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for maze, isolated from any ambient graph or log settings
pub fn maze() -> Command {
    let mut cmd = cargo_bin_cmd!("maze");
    cmd.env_remove("MAZE_GRAPH")
        .env_remove("MAZE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a graph file into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A -> B -> C with a side branch, a cycle and an isolated room 9
pub const SMALL_TOML: &str = r#"
name = "Small"
start = 1
goal = 3

[passages]
1 = [2, 4]
2 = [1, 3]
3 = []
4 = [2]
9 = [1]

[hidden_passages]
3 = [9]
"#;

/// Parse stdout of a `--format json` run
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

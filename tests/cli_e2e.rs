#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sheets")).unwrap();
        Self { temp }
    }

    fn sheets(&self) -> PathBuf {
        self.temp.path().join("sheets")
    }

    fn config_home(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.sheets().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("cheeto"));
        cmd.env("CHEETO_DATA_PATH", self.sheets().as_os_str())
            .env("XDG_CONFIG_HOME", self.config_home().as_os_str())
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_list_plain_names() {
    let fx = Fixture::new();
    fx.write("git.cheatsheet.md", "# Git\n");
    fx.write("lang/python.cheatsheet", "python\n");
    fx.write("tools/python.cheatsheet", "python\n");
    fx.write("README.md", "not a sheet\n");

    fx.cmd()
        .args(["ls"])
        .assert()
        .success()
        .stdout("git\nlang/python\ntools/python\n");
}

#[test]
fn test_list_empty() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["list-sheets"])
        .assert()
        .success()
        .stdout("");

    fx.cmd()
        .args(["list-sheets", "--table"])
        .assert()
        .success()
        .stdout("No sheets found.\n");
}

#[test]
fn test_list_table() {
    let fx = Fixture::new();
    fx.write("git.cheatsheet.md", "# Git\n\nstuff\n");

    fx.cmd()
        .args(["list", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("git.cheatsheet.md"))
        .stdout(predicate::str::contains("13 Bytes"))
        .stdout(predicate::str::contains("✓"));
}

#[test]
fn test_list_json() {
    let fx = Fixture::new();
    fx.write("vim.cheatsheet", "motions\n");

    let output = fx.cmd().args(["ls", "-j"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sheets = parsed.as_array().unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0]["name"], "vim");
    assert_eq!(sheets[0]["title"], "motions");
    assert_eq!(sheets[0]["size"], 8);
    assert_eq!(sheets[0]["markdown"], false);
    assert!(sheets[0]["path"].as_str().unwrap().ends_with("vim.cheatsheet"));
}

#[test]
fn test_show_plain_sheet() {
    let fx = Fixture::new();
    fx.write("tar.cheatsheet", "tar -xzf archive.tgz");

    fx.cmd()
        .args(["show", "tar"])
        .assert()
        .success()
        .stdout("tar -xzf archive.tgz\n");
}

#[test]
fn test_show_markdown_with_renderers() {
    let fx = Fixture::new();
    fx.write("git.cheatsheet.md", "# Git\n\n* `git status`\n");

    fx.cmd()
        .args(["s", "git", "-m", "plain"])
        .assert()
        .success()
        .stdout("# Git\n\n* `git status`\n");

    fx.cmd()
        .args(["show-sheet", "git", "--markdown", "term"])
        .assert()
        .success()
        .stdout("Git\n\n• git status\n");
}

#[test]
fn test_show_missing_sheet_is_not_an_error() {
    let fx = Fixture::new();
    let expected = format!("Can't find sheet 'nope' at path [{}]\n", path_str(&fx.sheets()));

    fx.cmd()
        .args(["show", "nope"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_name_clash_exits_with_report() {
    let fx = Fixture::new();
    let first = fx.write("foo.cheatsheet", "a");
    let second = fx.write("foo.cheatsheet.md", "b");

    let expected = format!(
        "Sheet name clash:\n  foo\n  {}\n  {}\n",
        path_str(&first),
        path_str(&second)
    );

    fx.cmd()
        .args(["ls"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(expected);
}

#[test]
fn test_renderers_and_config_work_despite_clash() {
    let fx = Fixture::new();
    fx.write("foo.cheatsheet", "a");
    fx.write("foo.cheatsheet.md", "b");

    fx.cmd()
        .args(["renderers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* term"));

    fx.cmd()
        .args(["config", "discovery"])
        .assert()
        .success()
        .stdout("recursive\n");
}

#[test]
fn test_data_path_flag_overrides_env() {
    let fx = Fixture::new();
    let other = fx.temp.path().join("other");
    fs::create_dir_all(&other).unwrap();
    fs::write(other.join("jq.cheatsheet"), "jq .\n").unwrap();
    fx.write("git.cheatsheet", "git\n");

    fx.cmd()
        .args(["ls", "--data-path", path_str(&other)])
        .assert()
        .success()
        .stdout("jq\n");
}

#[test]
fn test_missing_data_path_is_an_error() {
    let fx = Fixture::new();
    let missing = fx.temp.path().join("missing");

    fx.cmd()
        .args(["-D", path_str(&missing), "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: IO error"));
}

#[test]
fn test_config_roundtrip_affects_discovery() {
    let fx = Fixture::new();
    fx.write("notes", "loose file\n");
    fx.write("deep/git.cheatsheet", "git\n");

    fx.cmd().args(["ls"]).assert().success().stdout("git\n");

    fx.cmd()
        .args(["config", "discovery", "flat"])
        .assert()
        .success()
        .stdout("discovery set to flat\n");

    assert!(fx.config_home().join("cheeto").join("config.json").exists());

    fx.cmd()
        .args(["config", "discovery"])
        .assert()
        .success()
        .stdout("flat\n");

    fx.cmd().args(["ls"]).assert().success().stdout("notes\n");
}

#[test]
fn test_config_show_all_and_invalid_key() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown-renderer = term"))
        .stdout(predicate::str::contains("discovery = recursive"));

    fx.cmd()
        .args(["config", "colour", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_renderers_listing() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["renderers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* term"))
        .stdout(predicate::str::contains("plain"))
        .stdout(predicate::str::contains("glow-light"));
}

#[test]
fn test_unknown_renderer_rejected_by_parser() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["show", "git", "-m", "rich"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rich"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let fx = Fixture::new();
    fx.write("git.cheatsheet", "git\n");

    fx.cmd()
        .args(["--debug", "ls"])
        .assert()
        .success()
        .stdout("git\n")
        .stderr(predicate::str::contains("discovered sheets"));
}

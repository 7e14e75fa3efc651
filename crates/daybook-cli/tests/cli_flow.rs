use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_daybook"))
}

/// An isolated home with its own XDG dirs and a file-backed secret store.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        for sub in ["home", "config", "data"] {
            std::fs::create_dir_all(dir.path().join(sub)).expect("create sandbox dir");
        }
        Self { dir }
    }

    fn initialized() -> Self {
        let sandbox = Self::new();
        let out = sandbox.run(&["init"]);
        assert_success(&out);
        sandbox
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("daybook").join("config.toml")
    }

    fn journal_path(&self) -> PathBuf {
        self.dir.path().join("data").join("daybook").join("daybook.db3")
    }

    fn secrets_path(&self) -> PathBuf {
        self.dir.path().join("config").join("daybook").join("secrets.json")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.dir.path().join("home"))
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("DAYBOOK_SECRETS", "file")
            .env("NO_COLOR", "1")
            .env_remove("DAYBOOK_PIN")
            .env_remove("DAYBOOK_NEW_PIN")
            .env_remove("DAYBOOK_PATH")
            .env_remove("DAYBOOK_CONFIG")
            .env_remove("DAYBOOK_LOG")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run daybook")
    }

    fn run_with_env(&self, envs: &[(&str, &str)], args: &[&str]) -> Output {
        let mut cmd = self.command();
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.args(args).output().expect("run daybook")
    }

    fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn daybook");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait daybook")
    }

    fn add(&self, date: &str, title: &str, body: &str) -> String {
        let out = self.run(&[
            "-q", "add", "--title", title, "--mood", "Happy", "--date", date, "--body", body,
        ]);
        assert_success(&out);
        stdout(&out).trim().to_string()
    }

    fn show_json(&self, target: &str) -> serde_json::Value {
        let out = self.run(&["show", target, "--json"]);
        assert_success(&out);
        serde_json::from_str(&stdout(&out)).expect("show --json output")
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

fn assert_success(out: &Output) {
    assert!(
        out.status.success(),
        "expected success, got {:?}\nstdout: {}\nstderr: {}",
        out.status.code(),
        stdout(out),
        stderr(out)
    );
}

fn assert_exit(out: &Output, code: i32) {
    assert_eq!(
        out.status.code(),
        Some(code),
        "stdout: {}\nstderr: {}",
        stdout(out),
        stderr(out)
    );
}

fn exists(path: &Path) -> bool {
    path.exists()
}

#[test]
fn test_cli_init_writes_config_and_database() {
    let sandbox = Sandbox::initialized();
    assert!(exists(&sandbox.config_path()));
    assert!(exists(&sandbox.journal_path()));

    let config = std::fs::read_to_string(sandbox.config_path()).expect("read config");
    assert!(config.contains("backend = \"file\""));

    let again = sandbox.run(&["init"]);
    assert_exit(&again, 4);
    assert!(stderr(&again).contains("--force"));

    assert_success(&sandbox.run(&["init", "--force", "--timezone", "Europe/Berlin"]));
    let config = std::fs::read_to_string(sandbox.config_path()).expect("read config");
    assert!(config.contains("Europe/Berlin"));
}

#[test]
fn test_cli_init_rejects_unknown_timezone() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["init", "--timezone", "Mars/Olympus"]);
    assert_exit(&out, 4);
    assert!(!exists(&sandbox.config_path()));
}

#[test]
fn test_cli_missing_config_is_not_found() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["list"]);
    assert_exit(&out, 3);
    assert!(stderr(&out).contains("daybook init"));
}

#[test]
fn test_cli_journal_flag_without_database_is_not_found() {
    let sandbox = Sandbox::new();
    let missing = sandbox.dir.path().join("nowhere.db3");
    let out = sandbox.run(&["--journal", missing.to_str().expect("utf8 path"), "list"]);
    assert_exit(&out, 3);
    assert!(stderr(&out).contains("No journal found"));
}

#[test]
fn test_cli_add_show_and_duplicate_date() {
    let sandbox = Sandbox::initialized();
    let id = sandbox.add("2024-03-01", "First", "A quiet start");

    let entry = sandbox.show_json(&id);
    assert_eq!(entry["title"], "First");
    assert_eq!(entry["entry_date"], "2024-03-01");
    assert_eq!(entry["primary_mood"], "Happy");
    assert_eq!(entry["word_count"], 3);

    let by_date = sandbox.show_json("2024-03-01");
    assert_eq!(by_date["id"], id.as_str());

    let duplicate = sandbox.run(&[
        "add", "--title", "Second", "--mood", "Sad", "--date", "2024-03-01", "--body", "Again",
    ]);
    assert_exit(&duplicate, 4);
    assert!(stderr(&duplicate).contains("already exists for 2024-03-01"));
}

#[test]
fn test_cli_add_normalizes_tags_and_moods() {
    let sandbox = Sandbox::initialized();
    let out = sandbox.run(&[
        "-q", "add", "--title", "  Gym day ", "--mood", "happy", "--also", "excited", "--also",
        "Excited", "--also", "grateful", "--also", "relaxed", "-t", "Work", "-t", "work", "-t",
        "Gym", "--date", "2024-03-02", "--body", "Lifted things",
    ]);
    assert_success(&out);

    let entry = sandbox.show_json(stdout(&out).trim());
    assert_eq!(entry["title"], "Gym day");
    assert_eq!(entry["primary_mood"], "Happy");
    assert_eq!(entry["secondary_moods"], serde_json::json!(["Excited", "Grateful"]));
    assert_eq!(entry["tags"], serde_json::json!(["Work", "Gym"]));
}

#[test]
fn test_cli_add_rejects_unknown_mood() {
    let sandbox = Sandbox::initialized();
    let out = sandbox.run(&[
        "add", "--title", "Odd", "--mood", "Elated", "--date", "2024-03-03", "--body", "Hmm",
    ]);
    assert_exit(&out, 4);
    assert!(stderr(&out).contains("daybook moods"));
}

#[test]
fn test_cli_add_reads_body_from_stdin() {
    let sandbox = Sandbox::initialized();
    let out = sandbox.run_with_stdin(
        &["-q", "add", "--title", "Piped", "--mood", "Neutral", "--date", "2024-04-01"],
        "Written through a pipe\n",
    );
    assert_success(&out);

    let entry = sandbox.show_json("2024-04-01");
    assert_eq!(entry["content"], "Written through a pipe");
}

#[test]
fn test_cli_edit_onto_taken_date_changes_nothing() {
    let sandbox = Sandbox::initialized();
    let first = sandbox.add("2024-05-01", "One", "first body");
    let second = sandbox.add("2024-05-02", "Two", "second body");

    let out = sandbox.run(&["edit", &second, "--date", "2024-05-01", "--title", "Moved"]);
    assert_exit(&out, 4);

    assert_eq!(sandbox.show_json(&first)["title"], "One");
    let unchanged = sandbox.show_json(&second);
    assert_eq!(unchanged["title"], "Two");
    assert_eq!(unchanged["entry_date"], "2024-05-02");
}

#[test]
fn test_cli_edit_merges_flags_over_entry() {
    let sandbox = Sandbox::initialized();
    let id = sandbox.add("2024-05-10", "Draft", "body text");
    let prefix = &id[..8];

    assert_success(&sandbox.run(&["edit", prefix, "--mood", "Sad", "--also", "Lonely", "-t", "late"]));
    let entry = sandbox.show_json(&id);
    assert_eq!(entry["title"], "Draft");
    assert_eq!(entry["content"], "body text");
    assert_eq!(entry["primary_mood"], "Sad");
    assert_eq!(entry["secondary_moods"], serde_json::json!(["Lonely"]));
    assert_eq!(entry["tags"], serde_json::json!(["late"]));

    assert_success(&sandbox.run(&["edit", &id, "--clear-tags", "--date", "2024-05-11"]));
    let moved = sandbox.show_json(&id);
    assert_eq!(moved["tags"], serde_json::json!([]));
    assert_eq!(moved["entry_date"], "2024-05-11");
    assert_eq!(moved["created_at"], entry["created_at"]);
}

#[test]
fn test_cli_delete_then_show_is_not_found() {
    let sandbox = Sandbox::initialized();
    let id = sandbox.add("2024-06-01", "Temp", "to be removed");

    let refused = sandbox.run(&["--no-input", "delete", &id]);
    assert_exit(&refused, 4);

    assert_success(&sandbox.run(&["delete", &id, "--yes"]));
    assert_exit(&sandbox.run(&["show", &id]), 3);
    assert_exit(&sandbox.run(&["delete", &id, "--yes"]), 3);
}

#[test]
fn test_cli_list_filters_and_orders() {
    let sandbox = Sandbox::initialized();
    sandbox.add("2024-01-01", "A", "one");
    sandbox.add("2024-01-03", "C", "three");
    sandbox.add("2024-01-02", "B", "two");

    let out = sandbox.run(&["list", "--json"]);
    assert_success(&out);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout(&out)).expect("json");
    let dates: Vec<&str> = entries
        .iter()
        .map(|e| e["entry_date"].as_str().expect("date"))
        .collect();
    assert_eq!(dates, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);

    let out = sandbox.run(&["list", "--since", "2024-01-02", "--until", "2024-01-02", "--json"]);
    let entries: Vec<serde_json::Value> = serde_json::from_str(&stdout(&out)).expect("json");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "B");

    let plain = sandbox.run(&["list", "--format", "plain", "--limit", "1"]);
    assert_success(&plain);
    assert_eq!(stdout(&plain).lines().count(), 1);
    assert!(stdout(&plain).contains("2024-01-03"));
}

#[test]
fn test_cli_insights_json() {
    let sandbox = Sandbox::initialized();
    sandbox.add("2024-01-01", "d1", "one two three");
    sandbox.add("2024-01-02", "d2", "four five");
    sandbox.add("2024-01-03", "d3", "six");
    sandbox.add("2024-01-05", "d5", "seven eight nine ten");

    let out = sandbox.run(&[
        "insights", "--since", "2024-01-01", "--until", "2024-01-05", "--json",
    ]);
    assert_success(&out);
    let insights: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("json");
    assert_eq!(insights["total_entries"], 4);
    assert_eq!(insights["longest_streak"], 3);
    assert_eq!(insights["missed_days"], 1);
    assert_eq!(insights["avg_words_per_day"], 2);
    assert_eq!(insights["mood_counts"][0]["label"], "Happy");
    assert_eq!(insights["mood_counts"][0]["count"], 4);
    assert_eq!(insights["word_count_trend"].as_array().expect("trend").len(), 4);
}

#[test]
fn test_cli_export_formats() {
    let sandbox = Sandbox::initialized();
    sandbox.add("2024-02-01", "X", "x");
    sandbox.add("2024-02-02", "Y", "y");

    let jsonl = sandbox.run(&["export", "--format", "jsonl"]);
    assert_success(&jsonl);
    let lines: Vec<serde_json::Value> = stdout(&jsonl)
        .lines()
        .map(|line| serde_json::from_str(line).expect("jsonl line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["entry_date"], "2024-02-01");

    let json = sandbox.run(&["export"]);
    let values: Vec<serde_json::Value> = serde_json::from_str(&stdout(&json)).expect("json");
    assert_eq!(values.len(), 2);

    assert_exit(&sandbox.run(&["export", "--format", "csv"]), 4);
}

#[test]
fn test_cli_today_reports_status() {
    let sandbox = Sandbox::initialized();
    let out = sandbox.run(&["today", "--json"]);
    assert_success(&out);
    let status: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("json");
    assert_eq!(status["has_entry"], false);

    assert_success(&sandbox.run(&[
        "add", "--title", "Now", "--mood", "Neutral", "--body", "written today",
    ]));
    let out = sandbox.run(&["today", "--json"]);
    let status: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("json");
    assert_eq!(status["has_entry"], true);
}

#[test]
fn test_cli_pin_lifecycle() {
    let sandbox = Sandbox::initialized();
    sandbox.add("2024-07-01", "Secret", "hidden words");

    let status = sandbox.run(&["pin", "status"]);
    assert!(stdout(&status).contains("No PIN set"));

    assert_success(&sandbox.run_with_env(&[("DAYBOOK_NEW_PIN", "1234")], &["pin", "set"]));
    let stored = std::fs::read_to_string(sandbox.secrets_path()).expect("secrets file");
    assert!(stored.contains("journal_pin_hash"));
    assert!(!stored.contains("1234"));

    let locked = sandbox.run(&["--no-input", "list"]);
    assert_exit(&locked, 5);

    let wrong = sandbox.run_with_env(&[("DAYBOOK_PIN", "9999")], &["list"]);
    assert_exit(&wrong, 5);
    assert!(stderr(&wrong).contains("Incorrect PIN"));

    let right = sandbox.run_with_env(&[("DAYBOOK_PIN", "1234")], &["list", "--json"]);
    assert_success(&right);
    assert!(stdout(&right).contains("Secret"));

    let bad_change = sandbox.run_with_env(
        &[("DAYBOOK_PIN", "0000"), ("DAYBOOK_NEW_PIN", "5678")],
        &["pin", "change"],
    );
    assert_exit(&bad_change, 5);

    assert_success(&sandbox.run_with_env(
        &[("DAYBOOK_PIN", "1234"), ("DAYBOOK_NEW_PIN", "5678")],
        &["pin", "change"],
    ));
    assert_exit(&sandbox.run_with_env(&[("DAYBOOK_PIN", "1234")], &["list"]), 5);

    assert_exit(&sandbox.run_with_env(&[("DAYBOOK_PIN", "1234")], &["pin", "clear"]), 5);
    assert_success(&sandbox.run_with_env(&[("DAYBOOK_PIN", "5678")], &["pin", "clear"]));

    assert_success(&sandbox.run(&["--no-input", "list"]));
    assert!(stdout(&sandbox.run(&["pin", "status"])).contains("No PIN set"));
}

#[test]
fn test_cli_pin_set_rejects_malformed_pin() {
    let sandbox = Sandbox::initialized();
    let out = sandbox.run_with_env(&[("DAYBOOK_NEW_PIN", "12ab")], &["pin", "set"]);
    assert_exit(&out, 4);
    assert!(stdout(&sandbox.run(&["pin", "status"])).contains("No PIN set"));

    assert_exit(&sandbox.run(&["--no-input", "pin", "set"]), 4);
    assert_exit(&sandbox.run_with_env(&[("DAYBOOK_PIN", "1234")], &["pin", "clear"]), 4);
}

#[test]
fn test_cli_moods_and_completions() {
    let sandbox = Sandbox::new();
    let moods = sandbox.run(&["moods"]);
    assert_success(&moods);
    assert!(stdout(&moods).contains("Happy: Excited, Relaxed, Grateful, Confident"));

    let completions = sandbox.run(&["completions", "bash"]);
    assert_success(&completions);
    assert!(stdout(&completions).contains("daybook"));
}

#[test]
fn test_cli_missing_config_message_uses_env_override() {
    let sandbox = Sandbox::new();
    let custom = sandbox.dir.path().join("custom.toml");
    let out = sandbox.run_with_env(
        &[("DAYBOOK_CONFIG", custom.to_str().expect("utf8 path"))],
        &["list"],
    );
    assert_exit(&out, 3);
    assert!(stderr(&out).contains("custom.toml"));
}

#[test]
fn test_cli_quiet_init_prints_nothing() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["-q", "init"]);
    assert_success(&out);
    assert!(stdout(&out).trim().is_empty());
}

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_ecopledge(args: &[&str], home: &Path) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_ecopledge").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("ecopledge.exe");
        } else {
            path.push("ecopledge");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        // keep any real user config out of the run
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local").join("share"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run ecopledge");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

/// Run with `--data-dir` pointing inside `home`
fn run_in(home: &Path, args: &[&str]) -> (bool, String, String) {
    let data_dir = home.join("data");
    let data_dir = data_dir.to_str().expect("utf-8 temp path");
    let mut full = vec!["--data-dir", data_dir, "--no-color"];
    full.extend_from_slice(args);
    run_ecopledge(&full, home)
}

fn leaderboard_json(home: &Path, extra: &[&str]) -> Vec<(String, i64)> {
    let mut args = vec!["leaderboard", "--json"];
    args.extend_from_slice(extra);
    let (ok, stdout, stderr) = run_in(home, &args);
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    json.as_array()
        .expect("array output")
        .iter()
        .map(|e| {
            (
                e["action"].as_str().expect("action").to_string(),
                e["count"].as_i64().expect("count"),
            )
        })
        .collect()
}

#[test]
fn empty_leaderboard_shows_placeholder() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_in(home.path(), &[]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("No pledges yet — be the first!"));
    assert!(leaderboard_json(home.path(), &[]).is_empty());
}

#[test]
fn pledges_build_ranked_leaderboard() {
    let home = tempfile::tempdir().unwrap();
    for (name, action) in [
        ("Alice", "Recycle"),
        ("Bob", "Recycle"),
        ("Carol", "Plant trees"),
    ] {
        let (ok, _, stderr) = run_in(home.path(), &["pledge", name, action]);
        assert!(ok, "stderr: {stderr}");
    }

    assert_eq!(
        leaderboard_json(home.path(), &[]),
        vec![("Recycle".to_string(), 2), ("Plant trees".to_string(), 1)]
    );
    assert_eq!(
        leaderboard_json(home.path(), &["--limit", "1"]),
        vec![("Recycle".to_string(), 2)]
    );

    let (ok, stdout, _) = run_in(home.path(), &["leaderboard", "--plain"]);
    assert!(ok);
    assert_eq!(stdout, "Recycle — 2 pledges\nPlant trees — 1 pledge\n");
}

#[test]
fn pledge_prints_confirmation_with_first_name() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_in(
        home.path(),
        &["pledge", "  Dana Lee ", " Switch to LED ", "--why", "cheaper bills"],
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("🌿 Thanks, Dana! Your pledge to \"Switch to LED\" is recorded."));
    assert!(stdout.contains("Switch to LED"));
}

#[test]
fn blank_pledge_is_rejected_without_touching_ledger() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, _) = run_in(home.path(), &["pledge", "Alice", "Recycle"]);
    assert!(ok);
    let ledger_path = home.path().join("data").join("ecotech_pledges.json");
    let before = fs::read_to_string(&ledger_path).expect("ledger written");

    let (ok, stdout, stderr) = run_in(home.path(), &["pledge", "   ", "Compost"]);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Please enter your name and choose an action."));

    let (ok, _, stderr) = run_in(home.path(), &["pledge", "Bob", ""]);
    assert!(!ok);
    assert!(stderr.contains("Please enter your name and choose an action."));

    assert_eq!(fs::read_to_string(&ledger_path).unwrap(), before);
}

#[test]
fn history_json_keeps_order_and_empty_why() {
    let home = tempfile::tempdir().unwrap();
    run_in(home.path(), &["pledge", "Alice", "Recycle", "--why", "habit"]);
    run_in(home.path(), &["pledge", "Bob", "Compost"]);

    let (ok, stdout, stderr) = run_in(home.path(), &["history", "--json"]);
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Alice");
    assert_eq!(arr[0]["why"], "habit");
    assert_eq!(arr[1]["name"], "Bob");
    assert_eq!(arr[1]["why"], "");
    let time = arr[1]["time"].as_str().expect("time");
    assert!(time.ends_with('Z') && time.len() == "2026-01-01T00:00:00.000Z".len());
}

#[test]
fn corrupted_ledger_reads_as_empty() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("ecotech_pledges.json"), "this is not json").unwrap();

    let (ok, stdout, stderr) = run_in(home.path(), &[]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("No pledges yet"));

    let (ok, _, _) = run_in(home.path(), &["pledge", "Eve", "Bike to school"]);
    assert!(ok);
    assert_eq!(
        leaderboard_json(home.path(), &[]),
        vec![("Bike to school".to_string(), 1)]
    );
}

#[test]
fn reads_ledger_in_site_format() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("ecotech_pledges.json"),
        r#"[{"name":"A","action":"Walk","why":"","time":"2026-02-01T09:00:00.000Z"},
            {"name":"B","action":"Compost","why":"","time":"2026-02-01T09:01:00.000Z"},
            {"name":"C","action":"Compost","why":"","time":"2026-02-01T09:02:00.000Z"},
            {"name":"D","action":"Walk","why":"","time":"2026-02-01T09:03:00.000Z"}]"#,
    )
    .unwrap();

    // equal counts keep first-seen order
    assert_eq!(
        leaderboard_json(home.path(), &[]),
        vec![("Walk".to_string(), 2), ("Compost".to_string(), 2)]
    );

    let (ok, stdout, _) = run_in(home.path(), &["history", "--timezone", "UTC"]);
    assert!(ok);
    assert!(stdout.contains("2026-02-01 09:03"));
}

#[test]
fn sqlite_backend_persists_pledges() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, stderr) = run_in(
        home.path(),
        &["--backend", "sqlite", "pledge", "Fay", "Organize e-waste drive"],
    );
    assert!(ok, "stderr: {stderr}");
    assert!(home.path().join("data").join("ecopledge.db").exists());

    assert_eq!(
        leaderboard_json(home.path(), &["--backend", "sqlite"]),
        vec![("Organize e-waste drive".to_string(), 1)]
    );
    // the file backend has its own slot
    assert!(leaderboard_json(home.path(), &[]).is_empty());
}

#[test]
fn config_file_selects_backend() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".config").join("ecopledge");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "backend = \"sqlite\"\n").unwrap();

    let (ok, _, stderr) = run_in(home.path(), &["pledge", "Gus", "Recycle"]);
    assert!(ok, "stderr: {stderr}");
    assert!(home.path().join("data").join("ecopledge.db").exists());
    assert!(!home.path().join("data").join("ecotech_pledges.json").exists());
}

#[test]
fn tip_index_wraps() {
    let home = tempfile::tempdir().unwrap();
    let (ok, first, _) = run_in(home.path(), &["tip", "--index", "0"]);
    assert!(ok);
    let (_, wrapped, _) = run_in(home.path(), &["tip", "--index", "5"]);
    assert_eq!(first, wrapped);
    assert!(first.starts_with("Turn off chargers"));

    let (ok, stdout, _) = run_in(home.path(), &["tips"]);
    assert!(ok);
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn blank_quote_falls_back() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, _) = run_in(home.path(), &["tip", "--quote", " "]);
    assert!(ok);
    assert_eq!(stdout.trim_end(), "Take action—small steps matter.");
}

#[test]
fn topic_details_and_fallback() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, _) = run_in(home.path(), &["topic", "ewaste"]);
    assert!(ok);
    assert!(stdout.starts_with("E-waste Recycling — treasure in trash"));

    let (ok, stdout, stderr) = run_in(home.path(), &["topic", "fusion"]);
    assert!(ok);
    assert!(stdout.starts_with("EcoTech"));
    assert!(stderr.contains("smart-solar"));
}

#[test]
fn counter_lands_on_target() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, _) = run_in(home.path(), &["counter", "12000"]);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 60);
    assert_eq!(lines.last(), Some(&"12,000"));

    let (_, stdout, _) = run_in(home.path(), &["--locale", "de", "counter", "12000"]);
    assert_eq!(stdout.lines().last(), Some("12.000"));
}

#[test]
fn invalid_timezone_fails() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, stderr) = run_in(home.path(), &["history", "--timezone", "Mars/Olympus"]);
    assert!(!ok);
    assert!(stderr.contains("Invalid timezone: Mars/Olympus"));
}

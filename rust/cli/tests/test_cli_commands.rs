//! End-to-end tests driving the CLI through the `run` entry point.

use drawfive_cli::run;

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["drawfive", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);

    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("play"));
    assert!(stdout.contains("sim"));
}

#[test]
fn unknown_command_lists_available_commands() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["drawfive", "shuffleboard"], &mut out, &mut err);
    assert_eq!(code, 2);

    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Usage: drawfive <command> [options]"));
    assert!(stderr.contains("  play"));
    assert!(stderr.contains("  sessions"));
}

#[test]
fn deal_runs_with_a_seed() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["drawfive", "deal", "--seed", "42"], &mut out, &mut err);
    assert_eq!(code, 0);

    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("You:"));
    assert!(stdout.contains("Deck remaining:"));
}

#[test]
fn sim_then_stats_round_trips_through_a_history_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let path_str = path.to_str().unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "drawfive",
            "sim",
            "--rounds",
            "4",
            "--seed",
            "11",
            "--opponents",
            "1",
            "--output",
            path_str,
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "sim failed: {}", String::from_utf8_lossy(&err));

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["drawfive", "stats", "--input", path_str],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stats failed: {}", String::from_utf8_lossy(&err));

    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("Rounds: 4"));
    assert!(stdout.contains("wins"));
}

#[test]
fn sim_then_export_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rounds.jsonl");
    let output = dir.path().join("rounds.csv");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "drawfive",
            "sim",
            "--rounds",
            "2",
            "--seed",
            "5",
            "--opponents",
            "1",
            "--output",
            input.to_str().unwrap(),
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "drawfive",
            "export",
            "--input",
            input.to_str().unwrap(),
            "--format",
            "csv",
            "--output",
            output.to_str().unwrap(),
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "export failed: {}", String::from_utf8_lossy(&err));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("round_id,seed,winner,pot,ts,actions"));
    assert_eq!(csv.lines().count(), 3, "header plus one row per round");
}

#[test]
fn stats_on_a_missing_file_exits_with_error() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["drawfive", "stats", "--input", "no/such/file.jsonl"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);

    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Error:"));
}

#[test]
fn sim_rejects_zero_rounds() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["drawfive", "sim", "--rounds", "0", "--seed", "1"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
}

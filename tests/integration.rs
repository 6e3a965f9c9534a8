//! Integration tests for duscope


use std::fs;

use harness::run_duscope;
use serde_json::Value;

const JOBS_INPUT: &str = "100\tjobs/x/out.bin\n50\tjobs/x/log.txt\n10\tjobs/y/meta.json\n";

#[test]
fn test_jobs_scenario_depth_one() {
    let (stdout, _stderr, success) = run_duscope(&["--depth", "1"], Some(JOBS_INPUT));
    assert!(success, "duscope should succeed");

    let report: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(report["path"], "/jobs");
    assert_eq!(report["size"], 160);

    let children = report["children"].as_array().expect("children array");
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["path"], "/jobs/x");
    assert_eq!(children[0]["size"], 150);
    assert_eq!(children[1]["path"], "/jobs/y");
    assert_eq!(children[1]["size"], 10);
    assert!(
        children[0].get("children").is_none(),
        "depth 1 must not expose grandchildren: {}",
        stdout
    );
}

#[test]
fn test_default_depth_expands_three_levels() {
    let (stdout, _stderr, success) = run_duscope(&[], Some(JOBS_INPUT));
    assert!(success);

    let report: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    let x = &report["children"][0];
    assert_eq!(x["path"], "/jobs/x");
    assert_eq!(x["children"][0]["path"], "/jobs/x/out.bin");
    assert_eq!(x["children"][0]["size"], 100);
}

#[test]
fn test_single_chain_collapses_to_leaf() {
    let (stdout, _stderr, success) = run_duscope(&[], Some("7\ta/b/c/d\n"));
    assert!(success);

    let report: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(report["path"], "/a/b/c/d");
    assert_eq!(report["size"], 7);
    assert!(report.get("children").is_none());
}

#[test]
fn test_duplicate_path_last_write_wins() {
    let (stdout, _stderr, success) = run_duscope(&[], Some("5\ta/b\n9\ta/b\n"));
    assert!(success);

    let report: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(report["size"], 9);
}

#[test]
fn test_empty_input_reports_empty_root() {
    let (stdout, _stderr, success) = run_duscope(&[], Some(""));
    assert!(success);

    let report: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(report["path"], "/");
    assert_eq!(report["size"], 0);
    assert!(report.get("children").is_none());
}

#[test]
fn test_file_input_and_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("scan.tsv");
    let output_path = dir.path().join("report.json");
    fs::write(&input_path, JOBS_INPUT).expect("Failed to write input");

    let (stdout, _stderr, success) = run_duscope(
        &[
            input_path.to_str().unwrap(),
            "--depth",
            "1",
            "-o",
            output_path.to_str().unwrap(),
        ],
        None,
    );
    assert!(success);
    assert!(stdout.is_empty(), "report goes to the file, not stdout");

    let written = fs::read_to_string(&output_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&written).expect("report file should be JSON");
    assert_eq!(report["path"], "/jobs");
    assert_eq!(report["size"], 160);
}

#[test]
fn test_malformed_line_fails_without_output() {
    let (stdout, stderr, success) = run_duscope(&[], Some("100\tjobs/x\nbogus-line\n"));
    assert!(!success, "malformed input must fail the run");
    assert!(stdout.is_empty(), "no JSON may be emitted: {}", stdout);
    assert!(stderr.contains("line 2"), "stderr should name the line: {}", stderr);
    assert!(stderr.contains("bogus-line"), "stderr should echo the content: {}", stderr);
}

#[test]
fn test_text_format_listing() {
    let (stdout, _stderr, success) =
        run_duscope(&["--depth", "1", "--format", "text"], Some(JOBS_INPUT));
    assert!(success);
    assert!(stdout.contains("/jobs  [160.0 B]"), "root line: {}", stdout);
    assert!(stdout.contains("├── x  [150.0 B]"), "heavier child first: {}", stdout);
    assert!(stdout.contains("└── y  [10.0 B]"), "lighter child last: {}", stdout);
}

#[test]
fn test_text_format_to_file_is_plain() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.txt");

    let (_stdout, _stderr, success) = run_duscope(
        &[
            "--depth",
            "1",
            "--format",
            "text",
            "-o",
            output_path.to_str().unwrap(),
        ],
        Some(JOBS_INPUT),
    );
    assert!(success);

    let written = fs::read_to_string(&output_path).expect("Failed to read report");
    assert!(written.contains("/jobs  [160.0 B]"));
    assert!(!written.contains('\u{1b}'), "no escape codes in file output");
}

#[test]
fn test_children_sorted_by_size_descending() {
    let input = "1\tdata/tiny\n300\tdata/big\n20\tdata/mid\n";
    let (stdout, _stderr, success) = run_duscope(&["--depth", "1"], Some(input));
    assert!(success);

    let report: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    let sizes: Vec<u64> = report["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["size"].as_u64().unwrap())
        .collect();
    assert_eq!(sizes, [300, 20, 1]);
}

#[test]
fn test_verbose_diagnostics_stay_on_stderr() {
    let (stdout, stderr, success) = run_duscope(&["-v"], Some(JOBS_INPUT));
    assert!(success);
    serde_json::from_str::<Value>(&stdout).expect("stdout should stay pure JSON");
    assert!(stderr.contains("parsed 3 records"), "stderr: {}", stderr);
}

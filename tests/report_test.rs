mod common;

use common::{create_test_dir, write_manifest};
use std::fs;
use upcheck::{reconcile, render, write_report, MatchConfig, OutputFormat};

#[test]
fn test_written_report_contains_statistics_and_both_lists() {
    let temp_dir = create_test_dir();
    let pending = write_manifest(
        &temp_dir,
        "pending.txt",
        "[公开]1.pdf\n[公开]2.pdf\n",
    );
    let uploaded = write_manifest(&temp_dir, "uploaded.log", "upload_1_[公开]1.pdf\n");

    let report = reconcile(&pending, &uploaded, &MatchConfig::default()).expect("Should reconcile");

    let out_path = temp_dir.path().join("report.txt");
    write_report(&report, &out_path).expect("Should write report");

    let text = fs::read_to_string(&out_path).expect("Should read report back");
    assert!(text.contains("File comparison report"));
    assert!(text.contains("- Total pending:  2"));
    assert!(text.contains("- Total uploaded: 1"));
    assert!(text.contains("- Match rate:     50.0%"));
    assert!(text.contains("[公开]1.pdf -> 1.pdf"));
    assert!(text.contains("Missing files (1):"));
    assert!(text.contains("[公开]2.pdf"));
}

#[test]
fn test_json_output_round_trips_through_serde() {
    let temp_dir = create_test_dir();
    let pending = write_manifest(&temp_dir, "pending.txt", "[公开]9.pdf\n");
    let uploaded = write_manifest(&temp_dir, "uploaded.log", "no matching fragments here\n");

    let report = reconcile(&pending, &uploaded, &MatchConfig::default()).expect("Should reconcile");
    let rendered = render(&report, OutputFormat::Json).expect("Should render");

    let value: serde_json::Value = serde_json::from_str(&rendered).expect("Should parse");
    assert_eq!(value["statistics"]["missing_count"], 1);
    assert_eq!(value["statistics"]["total_uploaded"], 0);
    assert_eq!(value["missing_files"][0], "[公开]9.pdf");
    assert_eq!(value["found_files"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_simple_output_numbers_missing_files() {
    let temp_dir = create_test_dir();
    let pending = write_manifest(
        &temp_dir,
        "pending.txt",
        "[公开]a.pdf\n[公开]b.pdf\n",
    );
    let uploaded = write_manifest(&temp_dir, "uploaded.log", "");

    let report = reconcile(&pending, &uploaded, &MatchConfig::default()).expect("Should reconcile");
    let rendered = render(&report, OutputFormat::Simple).expect("Should render");

    assert!(rendered.contains("1. [公开]a.pdf"));
    assert!(rendered.contains("2. [公开]b.pdf"));
}

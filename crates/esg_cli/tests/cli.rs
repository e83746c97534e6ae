//! Binary-level checks for `esg` (offline, temp dirs only).

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn esg() -> Command {
    let mut cmd = Command::cargo_bin("esg").unwrap();
    cmd.env_remove("ESG_LOG");
    cmd
}

fn read(p: &Path) -> String {
    fs::read_to_string(p).unwrap()
}

#[test]
fn build_writes_landing_and_all_reports() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("site");
    esg().args(["--quiet", "build", "--out"]).arg(&out).assert().success();

    let index = read(&out.join("index.html"));
    assert!(index.contains("<body data-page=\"home\">"));
    assert_eq!(index.matches("data-topic=\"").count(), 3);
    assert!(index.contains("href=\"report-energy.html\""));

    let energy = read(&out.join("report-energy.html"));
    assert!(energy.contains("Energy Transition Intelligence"));
    assert!(energy.contains("⚡ Energy &amp; Efficiency"));
    assert!(energy.contains("name=\"esg-catalog-sha256\""));
    assert_eq!(energy.matches("class=\"card metric\"").count(), 6);
    assert_eq!(energy.matches("class=\"pill tag tag-").count(), 5);
    assert_eq!(energy.matches("tag-ready\"").count(), 3);

    let default = read(&out.join("report.html"));
    assert!(default.contains("Climate Resilience Intelligence"));
    assert!(default.contains("Narrative Integrity: 98%"));
}

#[test]
fn select_then_report_uses_the_stored_topic() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    let out = dir.path().join("out");

    esg()
        .args(["--quiet", "select", "energy", "--no-wait", "--session"])
        .arg(&session)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    assert!(read(&session).contains("\"esg.selectedTopic\":\"energy\""));
    assert!(read(&out.join("report-energy.html")).contains("Energy Transition Intelligence"));

    esg()
        .args(["--quiet", "report", "--render", "json", "--session"])
        .arg(&session)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    let raw = read(&out.join("report.json"));
    assert!(raw.starts_with("{\"meta\":"), "regions out of page order: {}", &raw[..40.min(raw.len())]);
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["meta"]["topic"], "energy");
    assert_eq!(json["metrics"].as_array().map(Vec::len), Some(6));
}

#[test]
fn report_without_selection_shows_climate() {
    let dir = tempfile::tempdir().unwrap();
    esg()
        .args(["--quiet", "report", "--session"])
        .arg(dir.path().join("none.json"))
        .arg("--out")
        .arg(dir.path())
        .assert()
        .success();
    let html = read(&dir.path().join("report.html"));
    assert!(html.contains("🌍 Climate &amp; Emissions"));
    assert!(html.contains("data-target=\"98\""));
}

#[test]
fn report_for_unknown_selection_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    fs::write(&session, r#"{"esg.selectedTopic":"water"}"#).unwrap();
    esg()
        .args(["--quiet", "report", "--session"])
        .arg(&session)
        .arg("--out")
        .arg(dir.path())
        .assert()
        .success();
    assert!(!dir.path().join("report.html").exists());
}

#[test]
fn select_unknown_topic_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    esg()
        .args(["--quiet", "select", "water", "--no-wait", "--session"])
        .arg(&session)
        .arg("--out")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    assert!(!session.exists());
    assert!(!dir.path().join("report-water.html").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn omitted_regions_are_left_out_of_pages() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("site.json");
    fs::write(&cfg, r#"{"omit_regions":["trend-list","export-pdf"],"product_name":"Acme ESG"}"#).unwrap();
    esg()
        .args(["--quiet", "--config"])
        .arg(&cfg)
        .args(["report", "--session"])
        .arg(dir.path().join("s.json"))
        .arg("--out")
        .arg(dir.path())
        .assert()
        .success();
    let html = read(&dir.path().join("report.html"));
    assert!(!html.contains("id=\"trend-list\""));
    assert!(!html.contains("id=\"export-pdf\""));
    assert!(html.contains("<title>Climate &amp; Emissions — Acme ESG</title>"));
}

#[test]
fn bad_config_region_exits_with_validation_code() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("site.json");
    fs::write(&cfg, r#"{"omit_regions":["sidebar"]}"#).unwrap();
    esg().args(["--quiet", "--config"]).arg(&cfg).arg("validate").assert().code(2);
}

#[test]
fn validate_and_topics_report_on_stdout() {
    esg()
        .args(["--quiet", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("catalog OK: 3 topics, sha256 "));
    esg()
        .args(["--quiet", "topics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("energy\t⚡ Energy & Efficiency\tEnergy Transition Intelligence"));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    esg()
        .args(["--quiet", "--catalog"])
        .arg(dir.path().join("missing.json"))
        .arg("validate")
        .assert()
        .code(4);
}

#[test]
fn networked_catalog_is_rejected() {
    esg()
        .args(["--catalog", "https://example.org/catalog.json", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path must be local"));
}

#[test]
fn clock_prints_utc_lines() {
    esg()
        .args(["clock", "--ticks", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} UTC\n$").unwrap());
}

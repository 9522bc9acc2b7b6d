//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use similar_asserts::assert_eq;
use std::fs;
use tempfile::TempDir;

fn report_export(cwd: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("report-export"));
    cmd.current_dir(cwd.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf8 stdout")
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("report-export"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("exporters"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("formats"));
}

#[test]
fn test_generate_defaults_to_pdf_then_csv() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "Quarterly sales data"]);
    assert_eq!(
        stdout_of(&mut cmd).as_str(),
        "PDF export: Quarterly sales data\nCSV export: Quarterly sales data\n"
    );
}

#[test]
fn test_generate_follows_format_order() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--format", "json,pdf,pdf", "q"]);
    assert_eq!(
        stdout_of(&mut cmd).as_str(),
        "JSON export: {\"format\":\"json\",\"payload\":\"q\"}\nPDF export: q\nPDF export: q\n"
    );
}

#[test]
fn test_generate_reads_stdin() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "-f", "pdf", "-"]).write_stdin("from stdin\n");
    assert_eq!(stdout_of(&mut cmd).as_str(), "PDF export: from stdin\n");
}

#[test]
fn test_generate_with_no_formats_writes_nothing() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--format", "", "x"]);
    assert_eq!(stdout_of(&mut cmd).as_str(), "");
}

#[test]
fn test_generate_rejects_unknown_format() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--format", "pdf,docx", "x"]);
    cmd.assert().failure().stderr(predicate::str::contains("Unknown export format 'docx'"));
}

#[test]
fn test_generate_fails_fast_on_unsupported_payload() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--format", "pdf,xml,csv", "bad\u{1}payload"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("PDF export:"))
        .stdout(predicate::str::contains("CSV export:").not())
        .stderr(predicate::str::contains("exporter #2 (xml) failed"))
        .stderr(predicate::str::contains("Caused by:"));
}

#[test]
fn test_generate_continue_on_error_runs_remaining_exporters() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--continue-on-error", "--format", "xml,csv", "bad\u{1}payload"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("CSV export:"))
        .stderr(predicate::str::contains("1 of 2 exporters failed"));
}

#[test]
fn test_generate_fail_fast_overrides_config_policy() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join("report-export.toml"),
        "formats = ['xml', 'csv']\nfailure_policy = 'continue'\n",
    )
    .expect("write config");

    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--fail-fast", "bad\u{1}payload"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("CSV export:").not())
        .stderr(predicate::str::contains("exporter #1 (xml) failed"));
}

#[test]
fn test_generate_rejects_conflicting_policy_flags() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--fail-fast", "--continue-on-error", "x"]);
    cmd.assert().failure().stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_generate_uses_discovered_config() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join("report-export.toml"),
        "formats = ['csv']\npayload = 'a,b'\n",
    )
    .expect("write config");

    let mut cmd = report_export(&tmp);
    cmd.arg("generate");
    assert_eq!(stdout_of(&mut cmd).as_str(), "CSV export: \"a,b\"\n");
}

#[test]
fn test_generate_cli_overrides_config() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("settings.yml");
    fs::write(&config, "formats: [csv]\npayload: from-config\n").expect("write config");

    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "--config", config.to_str().expect("utf8 path"), "-f", "pdf", "cli"]);
    assert_eq!(stdout_of(&mut cmd).as_str(), "PDF export: cli\n");
}

#[test]
fn test_generate_writes_output_file() {
    let tmp = TempDir::new().expect("tmp");
    let out = tmp.path().join("reports").join("q3.txt");

    let mut cmd = report_export(&tmp);
    cmd.args(["generate", "-o", out.to_str().expect("utf8 path"), "Q3"]);
    assert_eq!(stdout_of(&mut cmd).as_str(), "");

    let written = fs::read_to_string(&out).expect("read output");
    assert_eq!(written.as_str(), "PDF export: Q3\nCSV export: Q3\n");
}

#[test]
fn test_formats_lists_every_format() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = report_export(&tmp);
    cmd.arg("formats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pdf"))
        .stdout(predicate::str::contains("csv"))
        .stdout(predicate::str::contains("xml"))
        .stdout(predicate::str::contains("json"));
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn normalize_prints_canonical_form() {
    let mut cmd = cargo_bin_cmd!("garment-label");
    cmd.arg("normalize")
        .arg("fabric - 80% polyamide 20% elastane/lining - 100% polyester");

    cmd.assert().success().stdout(predicate::eq(
        "fabric: 80% polyamide 20% elastane lining: 100% polyester\n",
    ));
}

#[test]
fn parse_renders_json_by_default() {
    let mut cmd = cargo_bin_cmd!("garment-label");
    cmd.arg("parse").arg("(body) 100% silk");

    cmd.assert().success().stdout(predicate::eq(
        "{\"body\":[{\"material\":\"silk\",\"proportion\":100.0}]}\n",
    ));
}

#[test]
fn parse_reads_stdin_lines() {
    let mut cmd = cargo_bin_cmd!("garment-label");
    cmd.arg("parse")
        .arg("--format")
        .arg("simple")
        .write_stdin("shell: 60% cotton 40% wool\nlining - 100% silk\n");

    cmd.assert()
        .success()
        .stdout(predicate::eq("shell: 60% cotton, 40% wool\nlining: 100% silk\n"));
}

#[test]
fn unknown_format_is_rejected() {
    let mut cmd = cargo_bin_cmd!("garment-label");
    cmd.arg("parse").arg("--format").arg("xml").arg("shell: 100% wool");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown output format 'xml'"));
}

#[test]
fn validate_bundled_corpus() {
    let mut cmd = cargo_bin_cmd!("garment-label");
    cmd.arg("validate").arg("--source").arg(fixture_path("corpus"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("17/17 labels matched"));
}

#[test]
fn validate_missing_corpus_fails() {
    let mut cmd = cargo_bin_cmd!("garment-label");
    cmd.arg("validate").arg("--source").arg(fixture_path("missing"));

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Corpus error"));
}

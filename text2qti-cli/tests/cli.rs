use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sample_path(kind: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("text2qti-parser")
        .join("samples")
        .join(kind)
        .join(name)
}

fn zip_entries(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

#[test]
fn convert_writes_package() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("quiz.zip");

    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(sample_path("valid", "03-mixed-questions.md"))
        .arg("-o")
        .arg(&output);

    cmd.assert().success().stdout(
        predicate::str::contains("✓ QTI package created:")
            .and(predicate::str::contains("Total questions: 3"))
            .and(predicate::str::contains("Total points: 6")),
    );

    let mut entries = zip_entries(&output);
    entries.sort();
    assert_eq!(
        entries,
        vec![
            "ASSESSMENT_001/ASSESSMENT_001.xml",
            "ASSESSMENT_001/assessment_meta.xml",
            "imsmanifest.xml"
        ]
    );
}

#[test]
fn convert_defaults_to_output_zip() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(sample_path("valid", "02-simple-true-false.md"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("output.zip"));
    assert!(dir.path().join("output.zip").exists());
}

#[test]
fn convert_validate_only_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("quiz.zip");

    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(sample_path("valid", "01-simple-multiple-choice.md"))
        .arg("--validate-only")
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✓ Validation successful!"));
    assert!(!output.exists());
}

#[test]
fn convert_accepts_qti_2_1() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("quiz.zip");

    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(sample_path("valid", "01-simple-multiple-choice.md"))
        .args(["--qti-version", "2.1", "-o"])
        .arg(&output);

    cmd.assert().success();
    assert!(zip_entries(&output).contains(&"imsmanifest.xml".to_string()));
}

#[test]
fn convert_rejects_unknown_qti_version() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.arg("convert")
        .arg(sample_path("valid", "01-simple-multiple-choice.md"))
        .args(["--qti-version", "3.0"]);

    cmd.assert().failure();
}

#[test]
fn convert_reports_validation_error() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(sample_path("invalid", "01-missing-type.md"));

    cmd.assert().failure().code(1).stderr(predicate::str::contains(
        "✗ Validation Error: Question 1: No question type specified",
    ));
    assert!(!dir.path().join("output.zip").exists());
}

#[test]
fn convert_reports_parse_error_when_validation_skipped() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("settings.toml");
    fs::write(&config, "[convert]\nvalidate_first = false\n").unwrap();

    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .arg(sample_path("invalid", "02-no-correct-answer.md"));

    cmd.assert().failure().code(1).stderr(predicate::str::contains(
        "✗ Parse Error: Error parsing Question 1: Question must have at least one correct answer",
    ));
}

#[test]
fn project_config_sets_assessment_identifier() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("text2qti.toml"),
        "[assessment]\nidentifier = \"WEEK_1\"\nmax_attempts = 2\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.current_dir(dir.path())
        .arg("convert")
        .arg(sample_path("valid", "03-mixed-questions.md"));

    cmd.assert().success();
    let entries = zip_entries(&dir.path().join("output.zip"));
    assert!(entries.contains(&"WEEK_1/WEEK_1.xml".to_string()));
    assert!(entries.contains(&"WEEK_1/assessment_meta.xml".to_string()));
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.args(["-c", "no-such-config.toml", "convert"])
        .arg(sample_path("valid", "01-simple-multiple-choice.md"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("✗ Configuration Error:"));
}

#[test]
fn validate_accepts_valid_sample() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.arg("validate")
        .arg(sample_path("valid", "04-comments-and-preamble.md"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✓ Validation successful!"));
}

#[test]
fn validate_reports_defect() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.arg("validate")
        .arg(sample_path("invalid", "06-true-false-three-choices.md"));

    cmd.assert().failure().code(1).stderr(predicate::str::contains(
        "✗ Validation Error: Question 1: True/False questions must have exactly 2 choices, found 3",
    ));
}

#[test]
fn validate_reports_missing_file() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.arg("validate").arg("does-not-exist.md");

    cmd.assert().failure().stderr(predicate::str::contains(
        "✗ Validation Error: File not found: does-not-exist.md",
    ));
}

#[test]
fn inspect_prints_summary() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.arg("inspect")
        .arg(sample_path("valid", "03-mixed-questions.md"));

    cmd.assert().success().stdout(
        predicate::str::contains("Title: Science Basics")
            .and(predicate::str::contains("Total points: 6"))
            .and(predicate::str::contains("[multiple_choice, 2 pt] chem-water")),
    );
}

#[test]
fn inspect_prints_json() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.arg("inspect")
        .arg(sample_path("valid", "03-mixed-questions.md"))
        .args(["--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["metadata"]["title"], "Science Basics");
    assert_eq!(json["questions"].as_array().unwrap().len(), 3);
    assert_eq!(json["questions"][1]["type"], "true_false");
}

#[test]
fn subcommand_is_required() {
    let mut cmd = cargo_bin_cmd!("text2qti");
    cmd.assert().failure();
}

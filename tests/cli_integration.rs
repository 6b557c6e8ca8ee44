use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kwscan() -> Command {
    Command::cargo_bin("kwscan").unwrap()
}

#[test]
fn test_basic_search() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let test_file = temp_dir.path().join("test.txt");
    fs::write(&test_file, "This is a test file with some content\n")?;

    kwscan()
        .arg("search")
        .arg("test")
        .arg(temp_dir.path())
        .arg("--extensions")
        .arg(".txt")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found"))
        .stdout(predicate::str::contains("test.txt:1:"));

    Ok(())
}

#[test]
fn test_search_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("test.txt"), "Hello World\n")?;

    kwscan()
        .arg("search")
        .arg("hello")
        .arg(temp_dir.path())
        .arg("--extensions")
        .arg(".txt")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World"));

    Ok(())
}

#[test]
fn test_no_matches_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("test.txt"), "nothing relevant\n")?;

    kwscan()
        .arg("search")
        .arg("keyword")
        .arg(temp_dir.path())
        .arg("--extensions")
        .arg(".txt")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches found."));

    Ok(())
}

#[test]
fn test_no_files_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("test.log"), "keyword\n")?;

    kwscan()
        .arg("search")
        .arg("keyword")
        .arg(temp_dir.path())
        .arg("--extensions")
        .arg(".txt")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No files found with the selected extensions.",
        ));

    Ok(())
}

#[test]
fn test_export_writes_report_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let test_file = temp_dir.path().join("test.txt");
    fs::write(&test_file, "first test line\nsecond line\nthird test line\n")?;
    let out_file = temp_dir.path().join("report.txt");

    kwscan()
        .arg("search")
        .arg("test")
        .arg(temp_dir.path())
        .arg("--extensions")
        .arg(".txt")
        .arg("--output")
        .arg(&out_file)
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to"));

    let expected = format!(
        "{path}:1: first test line\n{path}:3: third test line",
        path = test_file.display()
    );
    assert_eq!(fs::read_to_string(&out_file)?, expected);

    Ok(())
}

#[test]
fn test_empty_keyword_fails_before_scanning() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    kwscan()
        .arg("search")
        .arg("")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    Ok(())
}

#[test]
fn test_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("test.txt"), "a test line\n")?;

    kwscan()
        .arg("search")
        .arg("test")
        .arg(temp_dir.path())
        .arg("--extensions")
        .arg(".txt")
        .arg("--format")
        .arg("json")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_matches\": 1"));

    Ok(())
}

#[test]
fn test_help_commands() -> Result<(), Box<dyn std::error::Error>> {
    kwscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kwscan"));

    kwscan()
        .arg("search")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"));

    Ok(())
}

#[test]
fn test_version_command() -> Result<(), Box<dyn std::error::Error>> {
    kwscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kwscan"));

    Ok(())
}

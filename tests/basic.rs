mod common; // Declare the common module

use assert_cmd::prelude::*;
use common::{dirls_cmd, populate_basic};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_no_args_uses_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    populate_basic(temp.path())?;

    dirls_cmd()
        .current_dir(temp.path()) // Run in the temp dir
        .assert()
        .success()
        .stdout("a.txt bdir\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_explicit_path_argument() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let target = temp.path().join("target");
    fs::create_dir(&target)?;
    fs::write(target.join("inside.txt"), "x")?;
    fs::write(temp.path().join("outside.txt"), "y")?;

    dirls_cmd()
        .arg(target.to_str().unwrap())
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("inside.txt\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_relative_path_argument() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("sub"))?;
    fs::write(temp.path().join("sub").join("file.rs"), "fn main() {}")?;

    dirls_cmd()
        .arg("sub")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("file.rs\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_all_shows_hidden_entries() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    populate_basic(temp.path())?;

    dirls_cmd()
        .arg("-a")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(".hidden a.txt bdir\n")
        .stdout(predicate::str::contains(" . ").not())
        .stdout(predicate::str::contains("..").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_one_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    populate_basic(temp.path())?;

    dirls_cmd()
        .args(["-a", "-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(".hidden\na.txt\nbdir\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_clustered_flags_match_separate_flags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    populate_basic(temp.path())?;

    let separate = dirls_cmd()
        .args(["-a", "-1"])
        .current_dir(temp.path())
        .output()?;
    let clustered = dirls_cmd()
        .arg("-a1")
        .current_dir(temp.path())
        .output()?;

    assert!(clustered.status.success());
    assert_eq!(separate.stdout, clustered.stdout);

    temp.close()?;
    Ok(())
}

#[test]
fn test_empty_directory_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    dirls_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.close()?;
    Ok(())
}

#[test]
fn test_only_hidden_entries_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join(".config"), "")?;
    fs::write(temp.path().join(".env"), "")?;

    dirls_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.close()?;
    Ok(())
}

#[test]
fn test_repeated_flags_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    populate_basic(temp.path())?;

    dirls_cmd()
        .args(["-a", "-a"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(".hidden a.txt bdir\n");

    dirls_cmd()
        .args(["-1", "-a1", "-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(".hidden\na.txt\nbdir\n");

    temp.close()?;
    Ok(())
}

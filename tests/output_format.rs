// tests/output_format.rs

mod common;

use assert_cmd::prelude::*;
use common::{pattern_break_cmd, touch_all};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_inline_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    touch_all(temp.path(), &["v_1", "v_3", "v_6"])?;

    let expected = format!(
        "Grp #1: v_ (dir:{})\n  v_2 (1)\n\n  v_4..v_5 (2)\n",
        temp.path().display()
    );

    pattern_break_cmd()
        .arg("-d")
        .arg(temp.path())
        .args(["-F", "inline", "--range-fmt", "spacing"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    temp.close()?;
    Ok(())
}

#[test]
fn test_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    touch_all(temp.path(), &["clip_01.mov", "clip_02.mov", "clip_05.mov"])?;

    let output = pattern_break_cmd()
        .arg("-d")
        .arg(temp.path())
        .args(["-F", "json", "--explain", "--stats"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let group = &value["results"][0];
    assert_eq!(group["group_id"], "group_1");
    assert_eq!(group["directory"], temp.path().display().to_string());
    assert_eq!(group["label"], "clip_");
    assert_eq!(group["artifact_type"], "files");
    assert_eq!(group["stats"]["num_missing"], 2);
    assert_eq!(group["stats"]["num_real"], 3);

    let segment = &group["segments"][0];
    assert_eq!(segment["start_val"], 3);
    assert_eq!(segment["end_val"], 4);
    assert_eq!(segment["count"], 2);
    assert_eq!(segment["boundary_type"], "internal");
    assert_eq!(segment["missing_items"][0]["label"], "clip_03.mov");
    assert_eq!(segment["missing_items"][0]["reason"], "internal");

    let summary = value["summary"].as_str().unwrap_or_default();
    assert!(summary.starts_with("STATS => groups:1, segments:1, found:3, missing:2"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_csv_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    touch_all(temp.path(), &["r_1.log", "r_4.log"])?;
    let dir = temp.path().display().to_string();

    pattern_break_cmd()
        .arg("-d")
        .arg(temp.path())
        .args(["-F", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "group_id,directory,artifact_type,missing_val,missing_label,reason\n",
        ))
        .stdout(predicate::str::contains(format!(
            "group_1,{},files,2..3,r_2.log..r_3.log (2 files),\n",
            dir
        )));

    pattern_break_cmd()
        .arg("-d")
        .arg(temp.path())
        .args(["-F", "csv", "--range", "all", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("group_1,{},files,2,r_2.log,\n", dir)))
        .stdout(predicate::str::contains(format!("group_1,{},files,3,r_3.log,\n", dir)))
        .stdout(predicate::str::contains("\n# STATS => groups:1,"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_ascii_table_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    touch_all(temp.path(), &["t_1", "t_2", "t_5"])?;

    pattern_break_cmd()
        .arg("-d")
        .arg(temp.path())
        .args(["-F", "ascii-table"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("+----------+"))
        .stdout(predicate::str::contains("| Group ID | Missing Items / Segment"))
        .stdout(predicate::str::contains("| G1       | t_3..t_4 (2)"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_rich_table_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    touch_all(temp.path(), &["t_1", "t_2", "t_5"])?;

    pattern_break_cmd()
        .arg("-d")
        .arg(temp.path())
        .args(["-F", "rich-table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Grp # | Directory"))
        .stdout(predicate::str::contains("| Missing Items / Segments |"))
        .stdout(predicate::str::contains("|   1   | "))
        .stdout(predicate::str::contains("| t_3..t_4 (2)"));

    temp.close()?;
    Ok(())
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const TABLE: &str = "Country Name,Continent,Year,GDP,CO2,Population
Germany,Europe,2000,23635.9,10.1,82211508
Chad,Africa,2000,166.4,0.02,8259137
Germany,Europe,2015,41103.3,8.9,81686611
Chad,Africa,2015,775.7,0.06,14110975
";

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("co2-bubble").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("co2-bubble"));
}

#[test]
fn build_writes_html_json_and_snapshot() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("table.csv");
    fs::write(&input, TABLE).unwrap();
    let html = dir.path().join("chart.html");
    let json = dir.path().join("chart.json");
    let svg = dir.path().join("chart_2015.svg");

    Command::cargo_bin("co2-bubble")
        .unwrap()
        .args(["build", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&html)
        .args(["--gdp-range", "100:100000", "--snapshot"])
        .arg(&svg)
        .args(["--year", "2015"])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 frames"));
    assert!(fs::read_to_string(&html).unwrap().contains("Plotly.newPlot"));
    assert!(svg.exists());

    Command::cargo_bin("co2-bubble")
        .unwrap()
        .args(["build", "--format", "json", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&json)
        .assert()
        .success();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(v["frames"].as_array().unwrap().len(), 2);
}

#[test]
fn bad_range_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("table.csv");
    fs::write(&input, TABLE).unwrap();
    Command::cargo_bin("co2-bubble")
        .unwrap()
        .args(["build", "--co2-range", "oops", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--co2-range"));
}

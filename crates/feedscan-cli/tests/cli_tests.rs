//! Integration tests for the feedscan binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const FEED: &str = "<rss><channel>\
                    <title>Weather - Forecast for Testville</title>\
                    <description>3-day forecast</description>\
                    <image><title>Weather</title></image>\
                    <item><title>Saturday: Sunny Intervals, Max Temp: 12\u{b0}C, Min Temp: 4\u{b0}C</title>\
                    <description>Maximum Temperature: 12\u{b0}C (54\u{b0}F), Minimum Temperature: 4\u{b0}C (39\u{b0}F), \
                    Wind Direction: North Westerly, Wind Speed: 10mph</description></item>\
                    <item><title>Sunday: Light Rain, Max Temp: 10\u{b0}C, Min Temp: 6\u{b0}C</title>\
                    <description>Maximum Temperature: 10\u{b0}C (50\u{b0}F), Minimum Temperature: 6\u{b0}C (43\u{b0}F), \
                    Wind Direction: Westerly, Wind Speed: 14mph</description></item>\
                    <item><title>Monday: Heavy Rain, Max Temp: 9\u{b0}C, Min Temp: 5\u{b0}C</title>\
                    <description>Minimum Temperature: 5\u{b0}C (41\u{b0}F), \
                    Wind Direction: South Westerly, Wind Speed: 18mph</description></item>\
                    </channel></rss>";

fn feedscan() -> Command {
    Command::cargo_bin("feedscan").unwrap()
}

fn feed_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FEED.as_bytes()).unwrap();
    file
}

#[test]
fn validate_accepts_well_nested_feed() {
    let file = feed_file();
    feedscan()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn validate_reports_mismatch_from_stdin() {
    feedscan()
        .arg("validate")
        .write_stdin("<a><b></a></b>")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expected closing tag for <b>, but found </a>.",
        ));
}

#[test]
fn outline_indents_nested_tags() {
    feedscan()
        .arg("outline")
        .write_stdin("<a><b></b></a>")
        .assert()
        .success()
        .stdout(predicate::str::contains("    <b>"));
}

#[test]
fn get_prints_nth_tag_value() {
    let file = feed_file();
    feedscan()
        .args(["get", "--tag", "title", "--nth", "3"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Saturday"));
}

#[test]
fn get_missing_tag_prints_empty_line() {
    feedscan()
        .args(["get", "--tag", "absent"])
        .write_stdin("<a>x</a>")
        .assert()
        .success()
        .stdout(predicate::eq("\n"));
}

#[test]
fn count_prints_occurrences() {
    let file = feed_file();
    feedscan()
        .args(["count", "--tag", "item"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("3\n"));
}

#[test]
fn forecast_prints_three_days() {
    let file = feed_file();
    feedscan()
        .arg("forecast")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Saturday")
                .and(predicate::str::contains("Overview: Sunny Intervals"))
                .and(predicate::str::contains("Wind Speed: 10 mph"))
                .and(predicate::str::contains("Monday")),
        );
}

#[test]
fn forecast_json_output_is_parseable() {
    let file = feed_file();
    let output = feedscan()
        .args(["forecast", "--json"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["days"][0]["day"], "Saturday");
    assert_eq!(value["days"][2]["min_temp_c"], 5);
    assert_eq!(value["days"][2]["max_temp_c"], 5);
}

#[test]
fn empty_stdin_fails() {
    feedscan()
        .arg("validate")
        .write_stdin("")
        .assert()
        .failure();
}

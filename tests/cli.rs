use std::collections::HashSet;

use assert_cmd::Command;
use predicates::prelude::*;

const ABC: &str = "\
A       10 ████████████▌
B       20 █████████████████████████
C       15 ██████████████████▊
Avg.    15 ██████████████████▊
Total   45 █████████████████████████
";

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn barchar() -> Command {
    let mut cmd = Command::cargo_bin("barchar").unwrap();
    cmd.env_remove("QUERY_STRING")
        .env_remove("HTTP_USER_AGENT")
        .env_remove("BARCHAR_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_text_chart() {
    barchar()
        .args(["render", "A=10&B=20&C=15"])
        .assert()
        .success()
        .stdout(ABC);
}

#[test]
fn accepts_full_urls() {
    barchar()
        .args(["render", "http://localhost:8080/?A=10&B=20&C=15"])
        .assert()
        .success()
        .stdout(ABC);
}

#[test]
fn reads_query_from_stdin() {
    barchar()
        .args(["render", "-"])
        .write_stdin("A=10&B=20&C=15\n")
        .assert()
        .success()
        .stdout(ABC);
}

#[test]
fn query_string_env_works_like_cgi() {
    barchar()
        .arg("render")
        .arg("--cgi")
        .env("QUERY_STRING", "A=10&B=20&C=15")
        .env("HTTP_USER_AGENT", "curl/8.4.0")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Content-Type: text/plain; charset=utf-8\r\n\r\n{ABC}"
        )));
}

#[test]
fn question_marks_inside_values_survive() {
    barchar()
        .args(["render", "A=10&title=Why?&B=20&C=15"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("Why?\n\n{ABC}")));

    barchar()
        .arg("render")
        .env("QUERY_STRING", "A=10&B=20&C=15&title=Why?")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("Why?\n\n{ABC}")));
}

#[test]
fn browsers_get_a_page() {
    barchar()
        .args(["render", "A=10&B=20&C=15&title=Hello", "--user-agent", "Mozilla/5.0"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("<!DOCTYPE html>")
                .and(predicate::str::contains("<title>Hello</title>"))
                .and(predicate::str::contains("<pre>Hello\n\nA       10"))
                .and(predicate::str::contains("href=\"/?A=10&amp;B=20&amp;C=15&amp;title=Hello\"")),
        );
}

#[test]
fn explicit_text_format_wins_over_agent() {
    barchar()
        .args(["render", "A=10&B=20&C=15", "--format", "text", "--user-agent", "Mozilla/5.0"])
        .assert()
        .success()
        .stdout(ABC);
}

#[test]
fn empty_query_renders_six_months() {
    let out = barchar()
        .args(["render", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let labels: Vec<&str> = text
        .lines()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();

    assert_eq!(labels.len(), 8);
    assert_eq!(&labels[6..], ["Avg.", "Total"]);
    let months = &labels[..6];
    assert!(months.iter().all(|m| MONTHS.contains(m)));
    assert_eq!(months.iter().collect::<HashSet<_>>().len(), 6);
    assert!(months.windows(2).all(|w| w[0] < w[1]));

    barchar()
        .args(["render", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::diff(text));
}

#[test]
fn rejects_base_url_with_query() {
    barchar()
        .args(["render", "A=1", "--base-url", "/x?y=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base URL"));
}

#[test]
fn lists_examples() {
    barchar()
        .args(["examples", "--base-url", "https://bars.example/"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Presidents of the United States")
                .and(predicate::str::contains("https://bars.example/?February=14.71")),
        );
}

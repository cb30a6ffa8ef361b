//! Integration tests for `tp list` and its filters.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_list_empty() {
    let env = TestEnv::init();

    env.tp()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"todos\":[]"))
        .stdout(predicate::str::contains("\"count\":0"));
}

#[test]
fn test_list_empty_human() {
    let env = TestEnv::init();

    env.tp()
        .args(["-H", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos"));
}

#[test]
fn test_list_preserves_insertion_order() {
    let env = TestEnv::init();
    env.add_todo("first");
    env.add_todo("second");
    env.add_todo("third");

    let output = env.tp().arg("list").output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<&str> = json["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn test_list_counts_pending_and_completed() {
    let env = TestEnv::init();
    let id = env.add_todo("done one");
    env.add_todo("open one");
    env.tp().args(["toggle", &id]).assert().success();

    env.tp()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":2"))
        .stdout(predicate::str::contains("\"pending\":1"))
        .stdout(predicate::str::contains("\"completed\":1"));
}

#[test]
fn test_list_filter_by_tag() {
    let env = TestEnv::init();
    env.tp()
        .args(["add", "standup notes", "-t", "work"])
        .assert()
        .success();
    env.add_todo("water plants");

    env.tp()
        .args(["list", "-t", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standup notes"))
        .stdout(predicate::str::contains("water plants").not());
}

#[test]
fn test_list_filter_by_priority() {
    let env = TestEnv::init();
    env.tp()
        .args(["add", "urgent thing", "-p", "high"])
        .assert()
        .success();
    env.add_todo("whenever thing");

    env.tp()
        .args(["list", "-p", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("urgent thing"))
        .stdout(predicate::str::contains("whenever thing").not());
}

#[test]
fn test_list_filter_by_completion() {
    let env = TestEnv::init();
    let id = env.add_todo("finished");
    env.add_todo("unfinished");
    env.tp().args(["toggle", &id]).assert().success();

    env.tp()
        .args(["list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finished"))
        .stdout(predicate::str::contains("unfinished").not());

    env.tp()
        .args(["list", "--pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unfinished"));
}

#[test]
fn test_list_completed_conflicts_with_pending() {
    let env = TestEnv::init();

    env.tp()
        .args(["list", "--completed", "--pending"])
        .assert()
        .failure();
}

#[test]
fn test_list_human_shows_markers() {
    let env = TestEnv::init();
    env.tp()
        .args(["add", "with due date", "-p", "high", "--deadline", "2026-09-15"])
        .assert()
        .success();

    env.tp()
        .args(["-H", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] td-"))
        .stdout(predicate::str::contains("high"))
        .stdout(predicate::str::contains("(due 2026-09-15)"));
}

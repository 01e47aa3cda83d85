use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn proverbia(db_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("proverbia").unwrap();
    cmd.env("PROVERBIA_DB_PATH", db_dir.join("proverbia.db"))
        .env_remove("DATABASE_URL")
        .env_remove("RUST_LOG")
        .env_remove("PROVERBIA_DEFAULT_TARGET_LANGUAGE");
    cmd
}

fn run_json(db_dir: &Path, args: &[&str]) -> Value {
    let output = proverbia(db_dir).args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("proverbia").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cross-language saying lookup"));
}

#[test]
fn test_cli_vote_help() {
    let mut cmd = Command::cargo_bin("proverbia").unwrap();
    cmd.arg("vote").arg("--help").assert().success().stdout(predicate::str::contains("user"));
}

#[test]
fn test_normalize_prints_canonical_form() {
    let dir = TempDir::new().unwrap();
    let value = run_json(dir.path(), &["normalize", "  \u{201C}Time   IS Gold!\u{201D} "]);
    assert_eq!(value["canonical"], "time is gold");
    assert_eq!(value["slug"], "time-is-gold");
    assert!(!dir.path().join("proverbia.db").exists());
}

#[test]
fn test_link_vote_and_rank() {
    let dir = TempDir::new().unwrap();
    let db = dir.path();
    run_json(db, &["add-language", "en"]);
    let fa = run_json(db, &["add-language", "FA"]);
    assert_eq!(fa["name"], "Farsi");

    let a = run_json(db, &["add-saying", "en", "Time is gold."]);
    let b = run_json(db, &["add-saying", "fa", "vaght talast"]);
    let a_id = a["id"].to_string();
    let b_id = b["id"].to_string();

    let pair = run_json(db, &["link", &b_id, &a_id]);
    let pair_id = pair["pair"]["id"].to_string();
    assert_eq!(pair["low"]["id"], a["id"]);

    let vote = run_json(db, &["vote", "--user", "1", &pair_id, "1"]);
    assert_eq!(vote["upvotes"], 1);
    assert_eq!(vote["user_value"], 1);
    let vote = run_json(db, &["vote", "--user", "2", &pair_id, "-1"]);
    assert_eq!(vote["downvotes"], 1);

    let ranked = run_json(db, &["equivalents", &a_id, "fa"]);
    assert_eq!(ranked[0]["saying"]["id"], b["id"]);
    assert_eq!(ranked[0]["upvotes"], 1);

    proverbia(db)
        .args(["link", &a_id, &b_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_equivalents_default_to_configured_language() {
    let dir = TempDir::new().unwrap();
    let db = dir.path();
    run_json(db, &["add-language", "en"]);
    run_json(db, &["add-language", "fa"]);
    run_json(db, &["add-language", "fr"]);
    let a = run_json(db, &["add-saying", "en", "Better late than never"]);
    let fa = run_json(db, &["add-saying", "fa", "دیر رسیدن بهتر از هرگز نرسیدن است"]);
    let fr = run_json(db, &["add-saying", "fr", "Mieux vaut tard que jamais"]);
    let a_id = a["id"].to_string();
    run_json(db, &["link", &a_id, &fa["id"].to_string()]);
    run_json(db, &["link", &a_id, &fr["id"].to_string()]);

    let ranked = run_json(db, &["equivalents", &a_id]);
    assert_eq!(ranked.as_array().map(Vec::len), Some(1));
    assert_eq!(ranked[0]["saying"]["id"], fa["id"]);

    let output = proverbia(db)
        .env("PROVERBIA_DEFAULT_TARGET_LANGUAGE", "fr")
        .args(["equivalents", &a_id])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let ranked: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(ranked.as_array().map(Vec::len), Some(1));
    assert_eq!(ranked[0]["saying"]["id"], fr["id"]);
}

#[test]
fn test_search_and_find() {
    let dir = TempDir::new().unwrap();
    let db = dir.path();
    run_json(db, &["add-language", "en"]);
    run_json(db, &["add-saying", "en", "Time flies"]);
    run_json(db, &["add-saying", "en", "A stitch in time saves nine"]);

    let found = run_json(db, &["search", "TIME", "--language", "en"]);
    assert_eq!(found[0]["canonical_text"], "time flies");
    assert_eq!(found.as_array().map(Vec::len), Some(2));

    let exact = run_json(db, &["find", "en", "time FLIES!"]);
    assert_eq!(exact["raw_text"], "Time flies");

    proverbia(db).args(["find", "en", "time is gold"]).assert().failure();
}

#[test]
fn test_invalid_vote_value_fails() {
    let dir = TempDir::new().unwrap();
    proverbia(dir.path())
        .args(["vote", "--user", "1", "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid vote value"));
}

#[test]
fn test_suggestion_approval() {
    let dir = TempDir::new().unwrap();
    let db = dir.path();
    run_json(db, &["add-language", "en"]);
    run_json(db, &["add-language", "fa"]);

    let suggestion =
        run_json(db, &["suggest", "--user", "3", "en", "fa", "Time is Gold", "Vaght Talast"]);
    assert_eq!(suggestion["status"], "pending_review");
    let id = suggestion["id"].to_string();

    let pending = run_json(db, &["suggestions"]);
    assert_eq!(pending.as_array().map(Vec::len), Some(1));

    let approved = run_json(db, &["approve", &id]);
    assert_eq!(approved["suggestion"]["status"], "approved");
    assert_eq!(approved["target"]["raw_text"], "vaght talast");

    let review = run_json(db, &["review", "fa", "en"]);
    assert_eq!(review[0]["first"]["raw_text"], "time is gold");
}

use assert_cmd::Command;
use predicates::prelude::*;

fn contactbook() -> Command {
    let mut cmd = Command::cargo_bin("contactbook").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("CONTACTBOOK_DEFAULT_PAGE_SIZE")
        .env_remove("CONTACTBOOK_MAX_PAGE_SIZE");
    cmd
}

fn list_json(args: &[&str]) -> serde_json::Value {
    let output = contactbook().arg("list").args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_cli_help() {
    contactbook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact records API with filtering, sorting and pagination"));
}

#[test]
fn test_cli_serve_help() {
    contactbook().arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_list_sorted_first_page() {
    let page = list_json(&["--sort", "lastName", "--size", "2"]);
    assert_eq!(page["meta"]["total"], 12);
    assert_eq!(page["meta"]["page"], 1);
    assert_eq!(page["meta"]["next"], 2);
    assert!(page["meta"]["prev"].is_null());

    let names: Vec<&str> =
        page["items"].as_array().unwrap().iter().map(|c| c["lastName"].as_str().unwrap()).collect();
    assert_eq!(names, ["Allen", "Backus"]);
}

#[test]
fn test_list_filter_and_descending() {
    let page = list_json(&["--filter-by", "email", "--filter-value", "grace@example.com"]);
    assert_eq!(page["meta"]["total"], 1);
    assert_eq!(page["items"][0]["firstName"], "Grace");

    let page = list_json(&["--sort", "birthday", "--direction", "desc", "--size", "1"]);
    assert_eq!(page["items"][0]["lastName"], "Perlman");
    assert_eq!(page["meta"]["next"], 2);
}

#[test]
fn test_list_unknown_field_fails() {
    contactbook()
        .args(["list", "--sort", "nickname"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nickname"));
}

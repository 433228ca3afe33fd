use assert_cmd::Command;
use predicates::prelude::*;
use scrapediag_testing::assertions::{assert_contains_all, assert_summary_counts};
use scrapediag_testing::{TestWorld, fixtures};

#[allow(deprecated)]
fn scrapediag() -> Command {
    Command::cargo_bin("scrapediag").unwrap()
}

#[test]
fn test_help_lists_commands() {
    scrapediag()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("collect")
                .and(predicate::str::contains("ping"))
                .and(predicate::str::contains("summarize"))
                .and(predicate::str::contains("probe"))
                .and(predicate::str::contains("--base-url")),
        );
}

#[test]
fn test_ping_healthy_service() {
    let server = fixtures::start_healthy_service().unwrap();
    let world = TestWorld::new().with_base_url(server.base_url());

    let result = world.run(&["ping"]).unwrap();

    assert!(result.success(), "{}", result.stderr());
    assert!(result.stdout().contains("Running at"));
    assert_eq!(server.requests(), vec!["/"]);
}

#[test]
fn test_summarize_saved_payload() {
    let world = TestWorld::new();
    let path = world
        .write_file("saved.json", fixtures::TWO_TABLE_DEBUG_PAYLOAD)
        .unwrap();

    let result = world
        .run(&["--format", "json", "summarize", path.to_str().unwrap()])
        .unwrap();

    assert!(result.success(), "{}", result.stderr());
    let json = result.json().unwrap();
    assert_summary_counts(&json, 2, 0, 1, 2).unwrap();
    assert_eq!(
        json["content"]["summary"]["tables"][0]["line"],
        "Table 0: 10 rows, classes: ['trades']"
    );
}

#[test]
fn test_summarize_defaults_to_out_dir_payload() {
    let world = TestWorld::new();
    world
        .write_file("detailed_debug.json", fixtures::TWO_TABLE_DEBUG_PAYLOAD)
        .unwrap();

    let result = world.run(&["summarize"]).unwrap();

    assert!(result.success(), "{}", result.stderr());
    assert_contains_all(result.stdout(), &["Tables found:               2"]).unwrap();
}

#[test]
fn test_summarize_missing_file_is_an_error() {
    let world = TestWorld::new();

    let result = world.run(&["summarize", "nope.json"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error: could not read nope.json"));
}

#[test]
fn test_probe_saved_markup() {
    let world = TestWorld::new();
    let path = world.write_file("page.html", fixtures::TRADES_PAGE).unwrap();

    let result = world
        .run(&[
            "--format",
            "json",
            "probe",
            path.to_str().unwrap(),
            "--selector",
            "tr.q-tr",
            "--selector",
            "div.nothing",
        ])
        .unwrap();

    assert!(result.success(), "{}", result.stderr());
    let json = result.json().unwrap();
    let hits = json["content"]["hits"].as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["count"], 2);
    assert_eq!(hits[1]["count"], 0);
    assert_eq!(json["badge"]["label"], "1 of 2 selectors matched");
}

#[test]
fn test_probe_flags_challenge_page() {
    let world = TestWorld::new();
    let path = world
        .write_file("blocked.html", fixtures::CHALLENGE_PAGE)
        .unwrap();

    let result = world.run(&["probe", path.to_str().unwrap()]).unwrap();

    assert!(result.success(), "{}", result.stderr());
    assert_contains_all(result.stdout(), &["Anti-bot markers", "Just a moment"]).unwrap();
}

#[test]
fn test_invalid_base_url_is_a_config_error() {
    let world = TestWorld::new();

    let result = world
        .run(&["ping", "--base-url", "localhost:8000"])
        .unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("base URL must start with http://"));
}

#[test]
fn test_oversized_timeout_is_a_config_error() {
    let world = TestWorld::new().with_env("SCRAPEDIAG_TIMEOUT", u64::MAX.to_string());

    let result = world.run(&["ping"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(
        result.stderr().contains("timeout must be at most 3600 seconds"),
        "{}",
        result.stderr()
    );
}

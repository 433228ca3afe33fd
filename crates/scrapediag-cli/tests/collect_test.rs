use scrapediag_testing::assertions::{
    assert_all_artifacts_written, assert_contains_all, assert_no_artifacts, assert_summary_counts,
};
use scrapediag_testing::{TestWorld, closed_port_url, fixtures};
use scrapediag_types::ArtifactKind;

/// Test: a healthy service yields four artifacts, exit 0 and every report section
#[test]
fn test_collect_against_healthy_service() {
    let server = fixtures::start_healthy_service().expect("Failed to start stub");
    let world = TestWorld::new().with_base_url(server.base_url());

    let result = world.run(&["collect"]).expect("Failed to run collect");

    assert!(result.success(), "collect failed: {}", result.stderr());
    assert_all_artifacts_written(world.out_dir()).unwrap();
    assert_contains_all(
        result.stdout(),
        &[
            "Server status",
            "Files written",
            "soup_raw.html",
            "soup_prettified.html",
            "detailed_debug.json",
            "trades_debug.json",
            "Elements with trade class:  2",
            "Elements with dollar signs: 0",
            "Politician mentions:        1",
            "Tables found:               2",
            "Table 0: 10 rows, classes: ['trades']",
            "Table 1: 0 rows, classes: []",
            "Anti-bot markers",
            "💡 Tips:",
        ],
    )
    .unwrap();
}

/// Test: running with no subcommand is the same as `collect`
#[test]
fn test_no_command_defaults_to_collect() {
    let server = fixtures::start_healthy_service().unwrap();
    let world = TestWorld::new().with_base_url(server.base_url());

    let result = world.run(&[]).unwrap();

    assert!(result.success(), "{}", result.stderr());
    assert_all_artifacts_written(world.out_dir()).unwrap();
    assert_eq!(server.requests_to("/trades").len(), 1);
}

/// Test: closed port exits 1 with the exact remediation text and writes nothing
#[test]
fn test_unreachable_service() {
    let base_url = closed_port_url().unwrap();
    let world = TestWorld::new().with_base_url(base_url.clone());

    let result = world.run(&["collect"]).unwrap();

    assert_eq!(result.code(), Some(1));
    let expected = format!(
        "❌ Server is not running at {}\n   Start it first with: python senator-scraper.py\n",
        base_url
    );
    assert_eq!(result.stderr(), expected);
    assert!(!result.stderr().contains("Error:"));
    assert_no_artifacts(world.out_dir()).unwrap();
}

/// Test: start hint comes from the config file
#[test]
fn test_start_hint_is_configurable() {
    let world = TestWorld::new()
        .with_base_url(closed_port_url().unwrap())
        .with_config("start_hint = \"docker compose up scraper\"\n");

    let result = world.run(&["ping"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(
        result
            .stderr()
            .ends_with("   Start it first with: docker compose up scraper\n")
    );
}

/// Test: --format json exposes the summary under content
#[test]
fn test_collect_json_output() {
    let server = fixtures::start_healthy_service().unwrap();
    let world = TestWorld::new().with_base_url(server.base_url());

    let result = world.run(&["--format", "json", "collect"]).unwrap();
    assert!(result.success(), "{}", result.stderr());

    let json = result.json().expect("stdout is JSON");
    assert_summary_counts(&json, 2, 0, 1, 2).unwrap();
    assert_eq!(json["badge"]["level"], "success");
    assert_eq!(json["content"]["artifacts"].as_array().unwrap().len(), 4);
    assert_eq!(json["content"]["summary"]["approximate"], false);
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 4);
}

/// Test: the approximate strategy agrees on the scenario payload and says so
#[test]
fn test_approximate_summarizer_is_labelled() {
    let server = fixtures::start_healthy_service().unwrap();
    let world = TestWorld::new().with_base_url(server.base_url());

    let result = world
        .run(&["collect", "--summarizer", "approximate"])
        .unwrap();

    assert!(result.success(), "{}", result.stderr());
    assert_contains_all(
        result.stdout(),
        &["Extracted counts (approximate)", "Table 0: 10 rows, classes: ['trades']"],
    )
    .unwrap();
}

/// Test: collect flags reach the service as query parameters
#[test]
fn test_collect_forwards_query_options() {
    let server = fixtures::start_healthy_service().unwrap();
    let world = TestWorld::new().with_base_url(server.base_url());

    let result = world
        .run(&[
            "collect",
            "--use-playwright",
            "--trade-type",
            "sell",
            "--include-stock",
            "false",
        ])
        .unwrap();
    assert!(result.success(), "{}", result.stderr());

    assert_eq!(
        server.requests_to("/debug"),
        vec!["/debug?use_playwright=true"]
    );
    assert_eq!(
        server.requests_to("/trades"),
        vec!["/trades?trade_type=sell&include_stock=false"]
    );
}

/// Test: SCRAPEDIAG_OUT_DIR picks the artifact directory
#[test]
fn test_out_dir_from_environment() {
    let server = fixtures::start_healthy_service().unwrap();
    let world = TestWorld::new()
        .with_base_url(server.base_url())
        .with_out_subdir("artifacts");

    let result = world.run(&["collect"]).unwrap();

    assert!(result.success(), "{}", result.stderr());
    assert!(world.out_dir().ends_with("artifacts"));
    assert_all_artifacts_written(world.out_dir()).unwrap();
    assert_no_artifacts(world.temp_dir()).unwrap();
    assert_eq!(
        world.read_artifact(ArtifactKind::RawMarkup).unwrap(),
        fixtures::TRADES_PAGE
    );
}

/// Test: --out-dir wins over the environment and is created on demand
#[test]
fn test_out_dir_flag_creates_directory() {
    let server = fixtures::start_healthy_service().unwrap();
    let world = TestWorld::new()
        .with_base_url(server.base_url())
        .with_out_subdir("from-env");
    let out = world.temp_dir().join("evidence").join("run1");

    let result = world
        .run(&["collect", "--out-dir", out.to_str().unwrap()])
        .unwrap();

    assert!(result.success(), "{}", result.stderr());
    assert_all_artifacts_written(&out).unwrap();
    assert!(!world.out_dir().exists());
}

// tests/cli_commands.rs
//
// CLI parse + execute without touching the network: states/LGAs come from a
// local file and the store lives in a temp dir.

use std::fs;
use std::path::PathBuf;

use labour_finder::cli::{execute, parse_args, Command, Invocation};
use labour_finder::config::options::AppOptions;

const LOCATIONS: &str = r#"[
    {"state": "Lagos", "lgas": ["Agege", "Ikeja"]},
    {"state": "Oyo", "lgas": ["Ibadan North"]}
]"#;

fn init_log() {
    labour_finder::log::init(&std::env::temp_dir().join("labour_finder_test_logs"));
}

fn tmp_dir(name: &str) -> PathBuf {
    init_log();
    let mut p = std::env::temp_dir();
    p.push(format!("labour_finder_cli_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    fs::write(p.join("ng.json"), LOCATIONS).unwrap();
    p
}

fn invocation(dir: &PathBuf, args: &[&str]) -> Invocation {
    let mut all: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    all.extend([
        "--store-dir".into(),
        dir.to_string_lossy().into_owned(),
        "--locations".into(),
        dir.join("ng.json").to_string_lossy().into_owned(),
    ]);
    parse_args(all, AppOptions::default()).unwrap()
}

fn run(dir: &PathBuf, args: &[&str]) -> Result<String, String> {
    let inv = invocation(dir, args);
    let mut out = Vec::new();
    execute(&inv, &mut out).map_err(|e| e.to_string())?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn parse_search_with_filters() {
    let inv = parse_args(
        ["search", "--labour", "Plumber", "--state", "Lagos"].map(String::from),
        AppOptions::default(),
    )
    .unwrap();
    assert_eq!(
        inv.command,
        Command::Search { labour: "Plumber".into(), state: "Lagos".into(), lga: String::new() }
    );
}

#[test]
fn parse_rejects_unknown_flags_and_missing_values() {
    assert!(parse_args(["search", "--colour", "red"].map(String::from), AppOptions::default()).is_err());
    assert!(parse_args(["search", "--state"].map(String::from), AppOptions::default()).is_err());
    assert!(parse_args(Vec::<String>::new(), AppOptions::default()).is_err());
    assert!(parse_args(["dance"].map(String::from), AppOptions::default()).is_err());
}

#[test]
fn parse_rejects_flags_foreign_to_the_command() {
    let err = parse_args(["search", "--name", "X"].map(String::from), AppOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "--name does not apply to 'search'");
    assert!(parse_args(["list", "--phone", "1"].map(String::from), AppOptions::default()).is_err());
    assert!(parse_args(["labours", "--state", "Lagos"].map(String::from), AppOptions::default()).is_err());

    // global flags and the command's own flags are fine anywhere
    assert!(parse_args(["--store-dir", "/tmp/x", "states", "--state", "Lagos"].map(String::from), AppOptions::default()).is_ok());
    assert!(parse_args(["list", "--locations", "ng.json"].map(String::from), AppOptions::default()).is_ok());

    let err = parse_args(["dance", "--name", "X"].map(String::from), AppOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: dance");
    let inv = parse_args(["search", "--name", "X", "-h"].map(String::from), AppOptions::default()).unwrap();
    assert_eq!(inv.command, Command::Help);
}

#[test]
fn store_dir_flag_moves_store_and_cache() {
    let inv = parse_args(["list", "--store-dir", "/tmp/x"].map(String::from), AppOptions::default()).unwrap();
    assert_eq!(inv.options.store.dir, PathBuf::from("/tmp/x"));
    assert!(inv.options.locations.cache.starts_with("/tmp/x"));
}

#[test]
fn register_then_search_then_list() {
    let dir = tmp_dir("flow");

    let out = run(&dir, &[
        "register", "--name", "Ade", "--phone", "08012345678",
        "--labour", "Plumber", "--state", "Lagos", "--lga", "Ikeja",
        "--desc", "Leaks and fittings",
    ])
    .unwrap();
    assert!(out.starts_with("Account created. You are now discoverable."));

    let out = run(&dir, &["search", "--labour", "Plumber", "--state", "Lagos"]).unwrap();
    assert!(out.contains("Ade | Plumber • Lagos, Ikeja | 08012345678"));
    assert!(out.contains("    Leaks and fittings"));

    let out = run(&dir, &["search", "--labour", "Electrician"]).unwrap();
    assert_eq!(out.trim(), "No providers found for your selection.");

    let out = run(&dir, &["list"]).unwrap();
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn rejected_registration_reports_reason_and_writes_nothing() {
    let dir = tmp_dir("reject");
    let err = run(&dir, &[
        "register", "--name", "Ade", "--phone", "123",
        "--labour", "Plumber", "--state", "Lagos", "--lga", "Ikeja",
    ])
    .unwrap_err();
    assert!(err.contains("Enter a valid phone number."));
    assert!(err.contains("invalid phone number"));
    assert!(!dir.join("labour_providers_v1.json").exists());
}

#[test]
fn states_and_lgas_come_from_the_catalog() {
    let dir = tmp_dir("states");
    assert_eq!(run(&dir, &["states"]).unwrap(), "Lagos\nOyo\n");
    assert_eq!(run(&dir, &["states", "--state", "Lagos"]).unwrap(), "Agege\nIkeja\n");
    assert!(run(&dir, &["states", "--state", "Kano"]).is_err());
}

#[test]
fn labours_needs_no_location_data() {
    init_log();
    let inv = parse_args(["labours"].map(String::from), AppOptions::default()).unwrap();
    let mut out = Vec::new();
    execute(&inv, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().next(), Some("Plumber"));
    assert_eq!(text.lines().last(), Some("Other"));
    assert_eq!(text.lines().count(), 28);
}

#[test]
fn unknown_labour_in_search_is_an_error() {
    let dir = tmp_dir("badlabour");
    let err = run(&dir, &["search", "--labour", "plumber"]).unwrap_err();
    assert!(err.contains("unknown service type"));
}

#[test]
fn command_logs_stay_out_of_the_working_dir() {
    let dir = tmp_dir("logs");
    run(&dir, &["list"]).unwrap();
    let log = labour_finder::log::path();
    assert!(log.starts_with(std::env::temp_dir()));
    assert!(log.exists());
}

//! Behavioral specs for `wildroute route`.
//!
//! Tests that wildroute correctly handles:
//! - First-match-wins routing across rules
//! - Falling back to the default browser
//! - Rules file discovery and -C
//! - Rules file errors (exit code 2)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// ROUTING
// =============================================================================

/// > A URL matching a rule opens in that rule's browser and profile
#[test]
fn matching_rule_picks_browser() {
    wildroute_cmd()
        .args(["route", "https://wiki.corp.example.com/page"])
        .current_dir(fixture("routes"))
        .assert()
        .success()
        .stdout(
            "https://wiki.corp.example.com/page -> chrome (Work)  [route 0: *.corp.example.com]\n",
        );
}

/// > A URL matching no rule opens in the default browser
#[test]
fn unmatched_url_uses_default_browser() {
    wildroute_cmd()
        .args(["route", "https://news.example.net"])
        .current_dir(fixture("routes"))
        .assert()
        .success()
        .stdout("https://news.example.net -> firefox  [default]\n");
}

/// > Each URL gets its own decision, in argument order
#[test]
fn routes_several_urls() {
    wildroute_cmd()
        .args([
            "route",
            "https://jira.example.org/browse/X-1",
            "youtube.com",
            "https://youtube.com",
            "mailto:someone@example.com",
        ])
        .current_dir(fixture("routes"))
        .assert()
        .success()
        .stdout(
            "https://jira.example.org/browse/X-1 -> chrome (Work)  [route 0: https://jira.example.org/*]\n\
             youtube.com -> safari  [route 1: youtube.com]\n\
             https://youtube.com -> firefox  [default]\n\
             mailto:someone@example.com -> thunderbird  [route 2: mailto:*]\n",
        );
}

/// > Earlier rules win over later rules that also match
#[test]
fn first_matching_rule_wins() {
    let temp = Project::empty();
    temp.rules(
        r#"
default_browser = "firefox"

[[route]]
patterns = ["*.example.com"]
browser = "chrome"

[[route]]
patterns = ["https://a.example.com/*"]
browser = "safari"
"#,
    );

    wildroute_cmd()
        .args(["route", "https://a.example.com/x"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("-> chrome"));
}

/// > -o json emits one decision object per URL
#[test]
fn json_output_lists_decisions() {
    let output = wildroute_cmd()
        .args([
            "route",
            "-o",
            "json",
            "https://wiki.corp.example.com",
            "https://news.example.net",
        ])
        .current_dir(fixture("routes"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let decisions = json.as_array().unwrap();
    assert_eq!(decisions.len(), 2);

    assert_eq!(decisions[0]["browser"], "chrome");
    assert_eq!(decisions[0]["profile"], "Work");
    assert_eq!(decisions[0]["route"], 0);
    assert_eq!(decisions[0]["pattern"], "*.corp.example.com");

    assert_eq!(decisions[1]["browser"], "firefox");
    assert!(decisions[1]["route"].is_null());
    assert!(decisions[1].get("profile").is_none());
    assert!(decisions[1].get("pattern").is_none());
}

// =============================================================================
// RULES FILE
// =============================================================================

/// > -C points at a rules file anywhere
#[test]
fn config_flag_selects_rules_file() {
    let temp = Project::empty();
    temp.file(
        "elsewhere/custom.toml",
        "version = 1\ndefault_browser = \"brave\"\n",
    );

    wildroute_cmd()
        .args(["-C", "elsewhere/custom.toml", "route", "https://x.test"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("https://x.test -> brave  [default]\n");
}

/// > WILDROUTE_CONFIG works like -C
#[test]
fn config_env_selects_rules_file() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\ndefault_browser = \"brave\"\n");

    wildroute_cmd()
        .args(["route", "https://x.test"])
        .env("WILDROUTE_CONFIG", temp.path().join("custom.toml"))
        .assert()
        .success()
        .stdout(predicates::str::contains("-> brave"));
}

/// > The rules file is found in a parent directory
#[test]
fn rules_file_found_in_parent_directory() {
    let temp = Project::empty();
    temp.git_root();
    temp.rules("default_browser = \"firefox\"");
    temp.file("a/b/.keep", "");

    wildroute_cmd()
        .args(["route", "https://x.test"])
        .current_dir(temp.path().join("a/b"))
        .assert()
        .success()
        .stdout(predicates::str::contains("-> firefox"));
}

/// > Missing rules file is a configuration error
#[test]
fn missing_rules_file_exits_two() {
    let temp = Project::empty();
    temp.git_root();

    wildroute_cmd()
        .args(["route", "https://x.test"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no wildroute.toml found"));
}

/// > Missing explicit rules file is a configuration error
#[test]
fn missing_explicit_rules_file_exits_two() {
    let temp = Project::empty();

    wildroute_cmd()
        .args(["-C", "nope.toml", "route", "https://x.test"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > An unreadable rules file is a configuration error
#[test]
fn unreadable_rules_file_exits_two() {
    let temp = Project::empty();
    std::fs::write(temp.path().join("rules.toml"), [0xff, 0xfe, 0x00]).unwrap();

    wildroute_cmd()
        .args(["-C", "rules.toml", "route", "https://x.test"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("io error"));
}

/// > A rules file without a default browser is rejected
#[test]
fn missing_default_browser_exits_two() {
    let temp = Project::empty();
    temp.rules("[[route]]\npatterns = [\"*\"]\nbrowser = \"chrome\"\n");

    wildroute_cmd()
        .args(["route", "https://x.test"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("default browser is required"));
}

/// > Unsupported rules file versions are rejected
#[test]
fn unsupported_version_exits_two() {
    let temp = Project::empty();
    temp.rules("version = 2\ndefault_browser = \"firefox\"\n");

    wildroute_cmd()
        .args(["route", "https://x.test"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > Unknown keys are warned about but do not fail
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.rules("default_browser = \"firefox\"\ntheme = \"dark\"\n");

    wildroute_cmd()
        .args(["route", "https://x.test"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `theme`"));
}

/// > Quoted and comma-terminated patterns are cleaned up when loaded
#[test]
fn patterns_are_sanitized_on_load() {
    let temp = Project::empty();
    temp.rules(
        r#"
default_browser = "firefox"

[[route]]
patterns = ["  '*.example.com',  "]
browser = "chrome"
"#,
    );

    wildroute_cmd()
        .args(["route", "https://a.example.com"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("https://a.example.com -> chrome  [route 0: *.example.com]\n");
}

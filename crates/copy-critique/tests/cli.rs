//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Input Sources
// =============================================================================

fn json_stdout(output: &assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).expect("command should output valid JSON")
}

#[test]
fn reads_text_flag() {
    let output = cmd()
        .args(["tokenize", "--json", "--text", "Découvrez NOTRE offre. Vite!"])
        .assert()
        .success();
    let json = json_stdout(&output);
    assert_eq!(json["words"][0], "découvrez");
    assert_eq!(json["sentences"].as_array().unwrap().len(), 2);
}

#[test]
fn reads_file_argument() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "Profitez de notre offre. Réservez maintenant.").unwrap();
    let output = cmd()
        .args(["analyze", "--json"])
        .arg(tmp.path())
        .assert()
        .success();
    let json = json_stdout(&output);
    assert_eq!(json["action_verbs"], 2);
    assert_eq!(json["ratings"]["action_verbs"], "good");
}

#[test]
fn reads_stdin_without_file_or_text() {
    let output = cmd()
        .args(["suggest", "--json", "--content-type", "cta"])
        .write_stdin("Cliquez ici")
        .assert()
        .success();
    let json = json_stdout(&output);
    assert_eq!(json["content_type"], "cta");
    let tags: Vec<&str> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["CTA générique"]);
}

#[test]
fn file_and_text_conflict() {
    cmd()
        .args(["analyze", "copy.txt", "--text", "Bonjour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/copy.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn oversized_input_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".copy-critique.toml"), "max_input_bytes = 8\n").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze"])
        .args(["--text", "Bonjour tout le monde"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Suggest
// =============================================================================

#[test]
fn suggest_defaults_to_email() {
    let output = cmd()
        .args(["suggest", "--json", "--text"])
        .arg("Notre nouvelle collection arrive demain dans nos boutiques !")
        .assert()
        .success();
    let json = json_stdout(&output);
    assert_eq!(json["content_type"], "email");
    let tags: Vec<&str> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["Manque de personnalisation", "Manque d'engagement"]);
}

#[test]
fn suggest_blank_text_passes() {
    cmd()
        .args(["suggest", "--text", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn suggest_fail_on_error_rejects_generic_cta() {
    cmd()
        .args(["suggest", "--content-type", "cta", "--fail-on", "error"])
        .args(["--text", "Cliquez ici maintenant."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error-level suggestions"));
}

#[test]
fn suggest_fail_on_error_allows_warnings() {
    cmd()
        .args(["suggest", "--content-type", "cta", "--fail-on", "error"])
        .args(["--text", "Réservez plusieurs chose maintenant"])
        .assert()
        .success();
}

#[test]
fn unknown_content_type_fails() {
    cmd()
        .args(["suggest", "--content-type", "brochure", "--text", "Bonjour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Critique & Schema
// =============================================================================

#[test]
fn critique_json_has_every_section() {
    let output = cmd()
        .args(["critique", "--json", "--content-type", "landing-page"])
        .args(["--text", "Découvrez notre outil."])
        .assert()
        .success();
    let json = json_stdout(&output);
    assert_eq!(json["content_type"], "landing-page");
    assert_eq!(json["stats"]["words"], 3);
    assert_eq!(json["analysis"]["tone"], "neutral");
    assert_eq!(json["ratings"]["sentence_length"], "good");
    let tags: Vec<&str> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["Manque de preuves", "Contenu insuffisant"]);
    assert!(json["tips"].as_array().unwrap().is_empty());
}

#[test]
fn critique_text_output_lists_suggestions() {
    cmd()
        .args(["critique", "--content-type", "cta", "--text", "En savoir plus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CTA générique"))
        .stdout(predicate::str::contains("Conseils"));
}

#[test]
fn critique_fail_on_counts_tips() {
    cmd()
        .args(["critique", "--content-type", "cta", "--fail-on", "info"])
        .args(["--text", "Votre essai gratuit"])
        .assert()
        .failure();
}

#[test]
fn schema_describes_report() {
    let output = cmd().arg("schema").assert().success();
    let json = json_stdout(&output);
    assert_eq!(json["title"], "CritiqueReport");
    assert!(json["properties"]["suggestions"].is_object());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

//! Integration tests for the distid binary.
//!
//! These tests exercise the full flow: metadata read, family resolution,
//! field derivation, and output formatting. Each test points the binary at
//! a fixture file via the DISTID_OS_RELEASE override instead of the host's
//! real /etc/os-release.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FEDORA: &str = "\
NAME=Fedora
VERSION=\"35 (Workstation Edition)\"
ID=fedora
VERSION_ID=35
PRETTY_NAME=\"Fedora Linux 35 (Workstation Edition)\"
";

const CENTOS: &str = "\
NAME=\"CentOS Stream\"
VERSION=\"9\"
ID=\"centos\"
VERSION_ID=\"9\"
PRETTY_NAME=\"CentOS Stream 9\"
";

const RHEL: &str = "\
NAME=\"Red Hat Enterprise Linux\"
VERSION=\"9.4 (Plow)\"
ID=\"rhel\"
VERSION_ID=\"9.4\"
PRETTY_NAME=\"Red Hat Enterprise Linux 9.4 (Plow)\"
";

/// Test fixture holding an os-release file in a temp directory.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join("os-release"), contents).unwrap();
        Self { dir }
    }

    fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("os-release")
    }

    /// Build a distid command pointed at this fixture.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("distid").unwrap();
        cmd.env("DISTID_OS_RELEASE", self.path());
        cmd
    }
}

#[test]
fn default_reports_version_only() {
    let fixture = Fixture::new(FEDORA);
    fixture
        .cmd()
        .assert()
        .success()
        .stdout("Version:\t35 (Thirty Five)\n");
}

#[test]
fn all_reports_five_labeled_lines_in_order() {
    let fixture = Fixture::new(FEDORA);
    for flag in ["--all", "-a"] {
        let output = fixture.cmd().arg(flag).assert().success();
        let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Version:\t35 (Thirty Five)");
        assert_eq!(lines[1], "Distributor ID:\tFedora");
        assert_eq!(lines[2], "Description:\tFedora Linux 35 (Thirty Five)");
        assert_eq!(lines[3], "Release:\t35");
        assert_eq!(lines[4], "Codename:\tThirtyFive");
    }
}

#[test]
fn each_field_flag_reports_its_label() {
    let fixture = Fixture::new(FEDORA);
    let cases = [
        ("--codename", "-c", "Codename:"),
        ("--description", "-d", "Description:"),
        ("--id", "-i", "Distributor ID:"),
        ("--release", "-r", "Release:"),
        ("--version", "-v", "Version:"),
    ];
    for (long, short, label) in cases {
        for flag in [long, short] {
            fixture
                .cmd()
                .arg(flag)
                .assert()
                .success()
                .stdout(predicate::str::starts_with(label));
        }
    }
}

#[test]
fn all_short_is_a_single_unlabeled_line() {
    let fixture = Fixture::new(FEDORA);
    for flags in [["--all", "--short"], ["--all", "-s"], ["-a", "-s"]] {
        fixture.cmd().args(flags).assert().success().stdout(
            "\"35 (Thirty Five)\" Fedora \"Fedora Linux 35 (Thirty Five)\" 35 ThirtyFive\n",
        );
    }
}

#[test]
fn short_mode_drops_labels_for_single_fields() {
    let fixture = Fixture::new(FEDORA);
    fixture
        .cmd()
        .args(["--codename", "--short"])
        .assert()
        .success()
        .stdout("ThirtyFive\n");
}

#[test]
fn short_mode_quotes_values_with_whitespace() {
    let fixture = Fixture::new(CENTOS);
    fixture
        .cmd()
        .args(["--description", "--short"])
        .assert()
        .success()
        .stdout("\"CentOS Stream 9 (Nine)\"\n");

    // The same value is unquoted and labeled in long mode.
    fixture
        .cmd()
        .arg("--description")
        .assert()
        .success()
        .stdout("Description:\tCentOS Stream 9 (Nine)\n");
}

#[test]
fn centos_synthesizes_words_fields() {
    let fixture = Fixture::new(CENTOS);
    let output = fixture.cmd().arg("--all").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Version:\t9 (Nine)");
    assert_eq!(lines[1], "Distributor ID:\tCentOSStream");
    assert_eq!(lines[2], "Description:\tCentOS Stream 9 (Nine)");
    assert_eq!(lines[3], "Release:\t9");
    assert_eq!(lines[4], "Codename:\tNine");
}

#[test]
fn rhel_reports_raw_values_with_parenthetical_codename() {
    let fixture = Fixture::new(RHEL);
    let output = fixture.cmd().arg("--all").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Version:\t9.4 (Plow)");
    assert_eq!(lines[1], "Distributor ID:\tRedHatEnterprise");
    assert_eq!(lines[2], "Description:\tRed Hat Enterprise Linux 9.4 (Plow)");
    assert_eq!(lines[3], "Release:\t9.4");
    assert_eq!(lines[4], "Codename:\tPlow");
}

#[test]
fn unsupported_distribution_fails_with_empty_stdout() {
    let fixture = Fixture::new("ID=gentoo\nNAME=Gentoo\n");
    fixture
        .cmd()
        .arg("--all")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("gentoo"));
}

#[test]
fn unreadable_source_fails_with_empty_stdout() {
    let mut cmd = Command::cargo_bin("distid").unwrap();
    cmd.env("DISTID_OS_RELEASE", Path::new("/nonexistent/os-release"))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn malformed_parenthetical_fails_with_empty_stdout() {
    // Fedora derivation needs a parenthesis pair in VERSION.
    let fixture = Fixture::new(
        "NAME=Fedora\nVERSION=35\nID=fedora\nVERSION_ID=35\nPRETTY_NAME=\"Fedora 35\"\n",
    );
    fixture
        .cmd()
        .arg("--version")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("parenthetical"));
}

#[test]
fn non_numeric_release_fails_for_words_families() {
    let fixture = Fixture::new(
        "NAME=CentOS\nVERSION=\"9.4 (X)\"\nID=centos\nVERSION_ID=9.4\nPRETTY_NAME=\"CentOS 9.4\"\n",
    );
    fixture
        .cmd()
        .arg("--all")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("9.4"));
}

#[test]
fn output_is_newline_terminated() {
    let fixture = Fixture::new(RHEL);
    let output = fixture.cmd().args(["--all", "--short"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.lines().count(), 1);
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end tests for the `stagehand` binary.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

const WEBCAM: &str = r#"<placement><item id="{A1}" srcid="{S1}" type="2" name="Webcam" item="@DEVICE:PNP:usb-cam"/></placement>"#;
const MIC: &str =
    r#"<item id="{M1}" type="2" name="Mic" item="@DEVICE:CM:{33D9A762-90C8-11D0-BD43-00A0C911CE86}\Mic"/>"#;

fn stagehand() -> Command {
    Command::cargo_bin("stagehand").unwrap()
}

#[test]
fn classify_reads_stdin_and_prints_capabilities() {
    stagehand()
        .args(["classify", "-"])
        .write_stdin(WEBCAM)
        .assert()
        .success()
        .stdout(predicate::str::contains("kind:         camera"))
        .stdout(predicate::str::contains("layout, color, chroma, transition"));
}

#[test]
fn classify_json_for_audio_has_no_capabilities() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("mic.xml");
    std::fs::write(&file, MIC).unwrap();

    let out = stagehand()
        .arg("classify")
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["kind"], "audio");
    assert_eq!(v["source_id"], "{M1}");
    assert_eq!(v["capabilities"], serde_json::json!([]));
    assert_eq!(v["properties"]["name"], "Mic");
}

#[test]
fn classify_accepts_json_fixtures() {
    let fixture = r#"{"id":"{P1}","type":8,"name":"Video Playlist - Show","FilePlaylist":"a.xbpl"}"#;
    let out = stagehand()
        .args(["classify", "-", "--json"])
        .write_stdin(fixture)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["kind"], "video-playlist");
    assert_eq!(v["type_code"], 8);
    assert_eq!(v["properties"]["type"], "8");
}

#[test]
fn classify_rejects_nested_json_properties() {
    stagehand()
        .args(["classify", "-"])
        .write_stdin(r#"{"id":"{P1}","pos":[0,0,1,1]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("decode json fixture"));
}

#[test]
fn classify_rejects_documents_without_an_item() {
    stagehand()
        .args(["classify", "-"])
        .write_stdin("<placement/>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("decode item xml"));
}

#[test]
fn config_set_show_reset() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    stagehand()
        .args(["--config-dir", dir_arg, "config", "set", "host-call-timeout-ms", "750"])
        .assert()
        .success();
    stagehand()
        .args(["--config-dir", dir_arg, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""host_call_timeout_ms": 750"#));

    stagehand()
        .args(["--config-dir", dir_arg, "config", "reset"])
        .assert()
        .success();
    stagehand()
        .args(["--config-dir", dir_arg, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""host_call_timeout_ms": null"#));
}

#[test]
fn config_set_rejects_bad_versions() {
    let dir = tempfile::tempdir().unwrap();
    stagehand()
        .arg("--config-dir")
        .arg(dir.path())
        .args(["config", "set", "item-list-min-version", "two"])
        .assert()
        .failure();
    assert!(!dir.path().join("stagehand.json").exists());
}

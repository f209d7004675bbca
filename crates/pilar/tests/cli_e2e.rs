use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HISTORY: &str = r##"[
  {"id":"1718000000003","imageUri":"/scans/c.jpg","wasteType":"Baterai","category":"B3",
   "confidence":70.0,"description":"","tips":[],"scanDate":"2024-06-10T06:20:00Z"},
  {"id":"1718000000002","imageUri":"/scans/b.jpg","wasteType":"Botol Plastik","category":"Anorganik",
   "confidence":88.4,"description":"","tips":[],"scanDate":"2024-06-10T06:15:00Z"},
  {"id":"1718000000001","imageUri":"/scans/a.jpg","wasteType":"Sisa Makanan","category":"Organik",
   "confidence":95.0,"description":"Sisa makanan termasuk sampah organik",
   "tips":[{"title":"Buat kompos dari sisa makanan","color":"#4DB8AC"}],
   "scanDate":"2024-06-10T06:10:00Z"}
]"##;

fn pilar(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pilar").unwrap();
    cmd.arg("--data")
        .arg(data.path())
        .env_remove("RUST_LOG")
        .env_remove("PILAR_DATA");
    cmd
}

fn seeded() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scan_history.json"), HISTORY).unwrap();
    dir
}

#[test]
fn empty_history_lists_nothing() {
    let dir = TempDir::new().unwrap();
    pilar(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No scans yet"));
}

#[test]
fn stats_json_counts_buckets() {
    let dir = seeded();
    let output = pilar(&dir).args(["stats", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["total"], 3);
    assert_eq!(value["stats"]["organic_count"], 1);
    assert_eq!(value["stats"]["inorganic_count"], 1);
}

#[test]
fn history_filters_by_category() {
    let dir = seeded();
    pilar(&dir)
        .args(["history", "--category", "organic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sisa Makanan"))
        .stdout(predicate::str::contains("Botol Plastik").not());
}

#[test]
fn show_prints_tips() {
    let dir = seeded();
    pilar(&dir)
        .args(["show", "1718000000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buat kompos dari sisa makanan"));
}

#[test]
fn show_missing_fails() {
    let dir = seeded();
    pilar(&dir)
        .args(["show", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Scan record not found: nope"));
}

#[test]
fn delete_then_history() {
    let dir = seeded();
    pilar(&dir)
        .args(["delete", "1718000000002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan deleted"));
    pilar(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Botol Plastik").not());
}

#[test]
fn clear_requires_confirmation() {
    let dir = seeded();
    pilar(&dir).arg("clear").assert().failure();
    pilar(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 3 scans"));
    assert!(!dir.path().join("scan_history.json").exists());
}

#[test]
fn corrupt_history_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scan_history.json"), "not json").unwrap();
    pilar(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total scans: 0"));
}

#[test]
fn scan_against_unreachable_endpoint_fails() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("photo.jpg");
    fs::write(&image, [0xFF, 0xD8, 0xFF]).unwrap();
    pilar(&dir)
        .arg("scan")
        .arg(&image)
        .args(["--url", "http://127.0.0.1:9/api/predict"])
        .assert()
        .failure();
    assert!(!dir.path().join("scan_history.json").exists());
}

#[test]
fn scan_rejects_non_http_url() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("photo.jpg");
    fs::write(&image, [0xFF, 0xD8, 0xFF]).unwrap();
    pilar(&dir)
        .arg("scan")
        .arg(&image)
        .args(["--url", "ftp://example.com/predict"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be an http(s) URL"));
    assert!(!dir.path().join("scan_history.json").exists());
}

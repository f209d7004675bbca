use pilarapp::store::backend::KeyValueBackend;
use pilarapp::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Missing
    assert_eq!(backend.get_item("scan_history").unwrap(), None);

    // 2. Write + Read
    backend.set_item("scan_history", "[]").unwrap();
    assert_eq!(
        backend.get_item("scan_history").unwrap(),
        Some("[]".to_string())
    );

    // 3. Overwrite
    backend.set_item("scan_history", "[1]").unwrap();
    assert_eq!(
        backend.get_item("scan_history").unwrap(),
        Some("[1]".to_string())
    );

    // 4. Remove
    backend.remove_item("scan_history").unwrap();
    assert_eq!(backend.get_item("scan_history").unwrap(), None);
}

#[test]
fn test_fs_backend_creates_data_dir_on_write() {
    let (dir, backend) = setup();
    assert!(!dir.path().join("data").exists());
    backend.set_item("k", "v").unwrap();
    assert!(dir.path().join("data").join("k.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    for i in 0..5 {
        backend.set_item("scan_history", &format!("[{}]", i)).unwrap();
    }

    let entries = fs::read_dir(backend.root()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_remove_missing_is_ok() {
    let (_dir, backend) = setup();
    assert!(backend.remove_item("never_written").is_ok());
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    for key in ["", "../x", "a/b", ".hidden"] {
        assert!(backend.set_item(key, "v").is_err(), "accepted {:?}", key);
        assert!(backend.get_item(key).is_err());
    }
}

#[test]
fn test_fs_backend_keys_are_isolated() {
    let (_dir, backend) = setup();
    backend.set_item("a", "1").unwrap();
    backend.set_item("b", "2").unwrap();
    backend.remove_item("a").unwrap();
    assert_eq!(backend.get_item("b").unwrap(), Some("2".to_string()));
}

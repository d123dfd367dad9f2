use recipebox::store::backend::StorageBackend;
use recipebox::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // Absent key reads as None
    assert_eq!(backend.read("customrecipes").unwrap(), None);

    // Write then read back
    backend.write("customrecipes", "[]").unwrap();
    assert_eq!(
        backend.read("customrecipes").unwrap(),
        Some("[]".to_string())
    );

    // Overwrite replaces the whole blob
    backend.write("customrecipes", "[1]").unwrap();
    assert_eq!(
        backend.read("customrecipes").unwrap(),
        Some("[1]".to_string())
    );
}

#[test]
fn test_fs_backend_keys_are_isolated() {
    let (_dir, backend) = setup();

    backend.write("customrecipes", "recipes").unwrap();
    backend.write("favorites", "favs").unwrap();

    assert_eq!(
        backend.read("customrecipes").unwrap(),
        Some("recipes".to_string())
    );
    assert_eq!(backend.read("favorites").unwrap(), Some("favs".to_string()));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write("customrecipes", "blob").unwrap();

    // Entry file exists with the right name and content
    let expected_path = dir.path().join("customrecipes.json");
    assert!(expected_path.exists());
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "blob");
    assert_eq!(backend.entry_path("customrecipes"), expected_path);

    // No .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_data_dir_lazily() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    // Reading from a directory that does not exist yet is "no data"
    assert_eq!(backend.read("customrecipes").unwrap(), None);
    assert!(!root.exists());

    backend.write("customrecipes", "[]").unwrap();
    assert!(root.join("customrecipes.json").exists());
}

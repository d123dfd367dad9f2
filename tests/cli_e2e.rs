use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn recipebox_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("recipebox"));
    cmd.env("RECIPEBOX_DATA", data_dir.path().as_os_str());
    cmd
}

#[test]
fn test_full_workflow() {
    let data_dir = TempDir::new().unwrap();

    // 1. Empty store
    recipebox_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes yet"));

    // 2. Add two recipes
    recipebox_cmd(&data_dir)
        .args(["add", "Tomato Soup", "--description", "Warm and simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added: Tomato Soup"));

    recipebox_cmd(&data_dir)
        .args(["add", "Rye Bread", "--image", "http://img/bread"])
        .assert()
        .success();

    // 3. List shows both, in insertion order
    recipebox_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato Soup"))
        .stdout(predicate::str::contains("Rye Bread"));

    // 4. View shows the description
    recipebox_cmd(&data_dir)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warm and simple"));

    // 5. Edit the title only; description survives
    recipebox_cmd(&data_dir)
        .args(["edit", "1", "--title", "Miso Soup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe updated: Miso Soup"));

    recipebox_cmd(&data_dir)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Miso Soup"))
        .stdout(predicate::str::contains("Warm and simple"));

    // 6. Favorite toggles on and off
    recipebox_cmd(&data_dir)
        .args(["favorite", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorited: Miso Soup"));

    recipebox_cmd(&data_dir)
        .args(["favorite", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfavorited: Miso Soup"));

    // 7. Delete with --yes
    recipebox_cmd(&data_dir)
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe: Miso Soup"));

    recipebox_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rye Bread"))
        .stdout(predicate::str::contains("Miso Soup").not());
}

#[test]
fn test_unfavorite_is_idempotent() {
    let data_dir = TempDir::new().unwrap();

    recipebox_cmd(&data_dir)
        .args(["add", "Tomato Soup"])
        .assert()
        .success();

    recipebox_cmd(&data_dir)
        .args(["favorite", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorited: Tomato Soup"));

    recipebox_cmd(&data_dir)
        .args(["unfav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfavorited: Tomato Soup"));

    // Already cleared; the second run succeeds without changing state.
    recipebox_cmd(&data_dir)
        .args(["unfavorite", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a favorite: Tomato Soup"));
}

#[test]
fn test_delete_drops_favorite_marker() {
    let data_dir = TempDir::new().unwrap();

    for title in ["Soup", "Bread"] {
        recipebox_cmd(&data_dir)
            .args(["add", title])
            .assert()
            .success();
    }

    recipebox_cmd(&data_dir)
        .args(["favorite", "1"])
        .assert()
        .success();

    recipebox_cmd(&data_dir)
        .args(["delete", "1", "--yes"])
        .assert()
        .success();

    // The favorites blob holds no ids anymore, so nothing is marked.
    let favorites = std::fs::read_to_string(data_dir.path().join("favorites.json")).unwrap();
    assert_eq!(favorites.trim(), "[]");
}

#[test]
fn test_delete_prompt_aborts_on_no() {
    let data_dir = TempDir::new().unwrap();

    recipebox_cmd(&data_dir)
        .args(["add", "Tomato Soup"])
        .assert()
        .success();

    recipebox_cmd(&data_dir)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    recipebox_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato Soup"));
}

#[test]
fn test_out_of_range_index_fails_cleanly() {
    let data_dir = TempDir::new().unwrap();

    recipebox_cmd(&data_dir)
        .args(["view", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_empty_title_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    recipebox_cmd(&data_dir)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title cannot be empty"));

    recipebox_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes yet"));
}

#[test]
fn test_delete_range() {
    let data_dir = TempDir::new().unwrap();

    for title in ["Soup", "Bread", "Cake"] {
        recipebox_cmd(&data_dir)
            .args(["add", title])
            .assert()
            .success();
    }

    recipebox_cmd(&data_dir)
        .args(["delete", "1-2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 recipes"));

    recipebox_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cake"))
        .stdout(predicate::str::contains("Soup").not());
}

#[test]
fn test_path_points_at_collection_file() {
    let data_dir = TempDir::new().unwrap();

    recipebox_cmd(&data_dir)
        .args(["path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("customrecipes.json"));
}

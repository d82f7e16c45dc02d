// Integration tests for plan building: filtering, numeric ordering, and
// tie-breaking against a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use renum::plan::{build_plan, list_dir_files};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"x").unwrap();
    path
}

fn basenames(entries: &[renum::FileEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn sorts_by_numeric_key_ascending() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        touch(dir.path(), "img10.png"),
        touch(dir.path(), "img2.png"),
        touch(dir.path(), "img1.png"),
    ];

    let plan = build_plan(&paths);

    assert_eq!(
        basenames(&plan.entries),
        vec!["img1.png", "img2.png", "img10.png"]
    );
    assert_eq!(plan.entries[0].numeric_key, 1);
    assert_eq!(plan.entries[2].numeric_key, 10);
    assert!(plan.entries.iter().all(|e| e.extension == ".png"));
}

#[test]
fn files_without_digits_sort_first() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        touch(dir.path(), "chapter4.txt"),
        touch(dir.path(), "notes.txt"),
    ];

    let plan = build_plan(&paths);

    assert_eq!(basenames(&plan.entries), vec!["notes.txt", "chapter4.txt"]);
    assert_eq!(plan.entries[0].numeric_key, 0);
}

#[test]
fn equal_keys_keep_input_order() {
    let dir = TempDir::new().unwrap();
    // Deliberately not alphabetical: input order must win the tie.
    let paths = vec![touch(dir.path(), "b_5.txt"), touch(dir.path(), "a_5.txt")];

    let plan = build_plan(&paths);

    assert_eq!(basenames(&plan.entries), vec!["b_5.txt", "a_5.txt"]);
}

#[test]
fn directories_and_missing_paths_are_excluded() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub1");
    fs::create_dir(&sub).unwrap();

    let paths = vec![
        touch(dir.path(), "real1.txt"),
        sub,
        dir.path().join("missing2.txt"),
    ];

    let plan = build_plan(&paths);

    assert_eq!(basenames(&plan.entries), vec!["real1.txt"]);
}

#[cfg(unix)]
#[test]
fn symlink_to_file_counts_as_file() {
    let dir = TempDir::new().unwrap();
    let target = touch(dir.path(), "target7.txt");
    let link = dir.path().join("link3.txt");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let plan = build_plan(&[link.clone()]);

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.entries[0].path, link);
    assert_eq!(plan.entries[0].numeric_key, 3);
}

#[test]
fn extension_is_taken_from_last_dot() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        touch(dir.path(), "backup2.tar.gz"),
        touch(dir.path(), "plain1"),
    ];

    let plan = build_plan(&paths);

    assert_eq!(plan.entries[0].extension, "");
    assert_eq!(plan.entries[1].extension, ".gz");
}

#[test]
fn list_dir_files_is_flat_and_sorted() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "b.txt");
    touch(dir.path(), "a.txt");
    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    touch(&sub, "inner.txt");

    let files = list_dir_files(dir.path()).unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

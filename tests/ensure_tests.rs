use fskit::{create_file_if_absent, ensure_directory, ensure_parent_directory, FsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn ensure_directory_creates_nested_chain() {
    let td = tempdir().unwrap();
    let deep = td.path().join("x").join("y");

    ensure_directory(&deep).expect("ensure_directory");

    assert!(td.path().join("x").is_dir());
    assert!(deep.is_dir());
}

#[test]
fn ensure_directory_on_existing_dir_is_noop() {
    let td = tempdir().unwrap();
    ensure_directory(td.path()).expect("existing dir should be fine");
}

#[test]
fn ensure_directory_rejects_plain_file() {
    let td = tempdir().unwrap();
    let file = td.path().join("occupied");
    fs::write(&file, b"data").unwrap();

    let err = ensure_directory(&file).unwrap_err();
    assert!(matches!(err, FsError::NotADirectory(p) if p == file));
    // The occupant is left in place.
    assert_eq!(fs::read(&file).unwrap(), b"data");
}

#[test]
fn ensure_parent_creates_missing_chain() {
    let td = tempdir().unwrap();
    let target = td.path().join("a").join("b").join("file.txt");

    ensure_parent_directory(&target).expect("ensure_parent_directory");

    assert!(td.path().join("a").join("b").is_dir());
    assert!(!target.exists(), "the target itself must not be created");
}

#[test]
fn ensure_parent_with_existing_parent_is_noop() {
    let td = tempdir().unwrap();
    let target = td.path().join("file.txt");
    ensure_parent_directory(&target).expect("parent already exists");
}

#[test]
fn ensure_parent_of_bare_name_reports_no_parent() {
    let err = ensure_parent_directory(std::path::Path::new("bare.txt")).unwrap_err();
    assert!(matches!(err, FsError::NoParent(_)));
}

#[test]
fn create_file_if_absent_creates_with_parents() {
    let td = tempdir().unwrap();
    let target = td.path().join("sub").join("new.txt");

    create_file_if_absent(&target).expect("create_file_if_absent");

    assert!(target.is_file());
    assert_eq!(fs::metadata(&target).unwrap().len(), 0);
}

#[test]
fn create_file_if_absent_keeps_existing_content() {
    let td = tempdir().unwrap();
    let target = td.path().join("kept.txt");
    fs::write(&target, b"original").unwrap();

    create_file_if_absent(&target).expect("existing file is success");

    assert_eq!(fs::read(&target).unwrap(), b"original");
}

#[test]
fn create_file_if_absent_accepts_existing_directory() {
    let td = tempdir().unwrap();
    // An existing path of any type counts as "present already".
    create_file_if_absent(td.path()).expect("existing dir is success");
    assert!(td.path().is_dir());
}

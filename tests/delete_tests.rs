use fskit::{delete_recursive, FsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn deleting_missing_path_succeeds() {
    let td = tempdir().unwrap();
    let absent = td.path().join("never-existed");
    delete_recursive(&absent).expect("missing path is a no-op success");
}

#[test]
fn deletes_a_plain_file() {
    let td = tempdir().unwrap();
    let file = td.path().join("gone.txt");
    fs::write(&file, b"x").unwrap();

    delete_recursive(&file).expect("delete file");
    assert!(!file.exists());
}

#[test]
fn deletes_a_nested_tree() {
    let td = tempdir().unwrap();
    let root = td.path().join("tree");
    fs::create_dir_all(root.join("a").join("b")).unwrap();
    fs::write(root.join("top.txt"), b"1").unwrap();
    fs::write(root.join("a").join("mid.txt"), b"2").unwrap();
    fs::write(root.join("a").join("b").join("leaf.txt"), b"3").unwrap();

    delete_recursive(&root).expect("delete tree");
    assert!(!root.exists());
}

#[test]
fn deletes_an_empty_directory() {
    let td = tempdir().unwrap();
    let empty = td.path().join("empty");
    fs::create_dir(&empty).unwrap();

    delete_recursive(&empty).expect("delete empty dir");
    assert!(!empty.exists());
}

#[cfg(unix)]
#[test]
fn symlink_is_unlinked_not_followed() {
    use std::os::unix::fs as unix_fs;

    let td = tempdir().unwrap();
    let outside = td.path().join("outside");
    fs::create_dir(&outside).unwrap();
    fs::write(outside.join("survivor.txt"), b"keep me").unwrap();

    let link = td.path().join("link");
    unix_fs::symlink(&outside, &link).unwrap();

    delete_recursive(&link).expect("delete symlink");

    assert!(fs::symlink_metadata(&link).is_err(), "link itself removed");
    assert!(
        outside.join("survivor.txt").exists(),
        "linked-to tree must survive"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn failed_child_aborts_with_delete_failed() {
    use std::os::unix::fs::PermissionsExt;

    // Skip if running as root; root may bypass permission checks and the test won't behave as expected.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let td = tempdir().unwrap();
    let root = td.path().join("tree");
    let sealed = root.join("sealed");
    fs::create_dir_all(&sealed).unwrap();
    fs::write(sealed.join("stuck.txt"), b"x").unwrap();

    // Remove write permission so the child file cannot be unlinked.
    let mut perms = fs::metadata(&sealed).unwrap().permissions();
    perms.set_mode(0o555);
    fs::set_permissions(&sealed, perms).unwrap();

    let err = delete_recursive(&root).expect_err("expected permission failure");
    match &err {
        FsError::DeleteFailed { path, .. } => {
            assert!(
                path.starts_with(&sealed),
                "error should name the child that failed, got {}",
                path.display()
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(root.exists(), "fail-fast leaves the rest of the tree");

    // Restore permissions so tempdir cleanup can remove the directory.
    let mut restore = fs::metadata(&sealed).unwrap().permissions();
    restore.set_mode(0o755);
    let _ = fs::set_permissions(&sealed, restore);
}

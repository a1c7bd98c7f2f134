#![cfg(target_os = "linux")]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;
use flatten_move::platform::{open_log_file_secure_append, rename_noreplace};

#[test]
fn linux_open_log_file_sets_0600_mode() {
    let td = tempdir().expect("tempdir");
    let log_path = td.path().join("flatten_move_linux_test.log");

    let file = open_log_file_secure_append(&log_path).expect("open_log_file_secure_append");
    drop(file);

    let mode = fs::metadata(&log_path).expect("metadata").permissions().mode() & 0o777;
    assert_eq!(mode, 0o600, "expected file mode 0600 on Linux, got {:o}", mode);
}

#[test]
fn rename_noreplace_moves_symlink_itself() {
    let td = tempdir().unwrap();
    let target = td.path().join("target.txt");
    let link = td.path().join("link");
    let moved = td.path().join("moved");
    fs::write(&target, "t").unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();

    rename_noreplace(&link, &moved).unwrap();

    assert!(fs::symlink_metadata(&moved).unwrap().file_type().is_symlink());
    assert!(fs::symlink_metadata(&link).is_err());
    assert_eq!(fs::read_to_string(&target).unwrap(), "t");
}

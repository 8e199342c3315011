use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn combines_tree_and_reports_output_path() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("root");
    write_file(&src.join("a.txt"), "hello");
    write_file(&src.join("sub/b.txt"), "world");
    let out = temp.path().join("combined.txt");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcpack"));
    cmd.arg(&src).arg(&out);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Combined file created:"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("hello"));
    assert!(written.contains("world"));
}

#[test]
fn defaults_to_src_and_combined_src_files() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/main.rs"), "fn main() {}");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcpack"));
    cmd.current_dir(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("combined_src_files.txt"));

    let written = fs::read_to_string(temp.path().join("combined_src_files.txt")).unwrap();
    assert!(written.starts_with("/// "));
    assert!(written.contains("fn main() {}"));
}

#[test]
fn missing_source_exits_nonzero_without_output() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("combined.txt");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcpack"));
    cmd.arg(temp.path().join("does-not-exist")).arg(&out);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    assert!(!out.exists());
}

#[test]
fn non_utf8_file_fails_with_path_in_diagnostic() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("root");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("blob.bin"), [0xffu8, 0x00, 0x10]).unwrap();
    let out = temp.path().join("combined.txt");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcpack"));
    cmd.arg(&src).arg(&out);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("blob.bin"));
}

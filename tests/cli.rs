use std::fs;
use std::process::{Command, Output};

fn ls8(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_ls8"))
    .args(args)
    .current_dir(env!("CARGO_MANIFEST_DIR"))
    .output()
    .expect("failed to spawn ls8")
}

#[test]
fn no_arguments() {
  let output = ls8(&[]);
  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
}

#[test]
fn help_is_not_an_error() {
  let output = ls8(&["--help"]);
  assert_eq!(output.status.code(), Some(0));
}

#[test]
fn file_not_found() {
  let output = ls8(&["programs/nope.ls8"]);
  assert_eq!(output.status.code(), Some(2));
  let stderr = String::from_utf8(output.stderr).unwrap();
  assert!(stderr.contains("programs/nope.ls8 file not found"));
}

#[test]
fn unparsable_program() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("bad.ls8");
  fs::write(&path, "10000010\nnot binary\n").unwrap();
  let output = ls8(&[path.to_str().unwrap()]);
  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
}

#[test]
fn illegal_opcode() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("illegal.ls8");
  fs::write(&path, "11111111 # no such instruction\n").unwrap();
  let output = ls8(&[path.to_str().unwrap()]);
  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8(output.stderr).unwrap();
  assert!(stderr.contains("illegal opcode"));
}

#[test]
fn print8() {
  let output = ls8(&["programs/print8.ls8"]);
  assert_eq!(output.status.code(), Some(0));
  assert_eq!(output.stdout, b"8\n");
}

#[test]
fn trace_goes_to_stderr() {
  let output = ls8(&["--trace", "programs/print8.ls8"]);
  assert_eq!(output.status.code(), Some(0));
  assert_eq!(output.stdout, b"8\n");
  let stderr = String::from_utf8(output.stderr).unwrap();
  assert!(stderr.contains("TRACE: 00 | 82 00 08"));
  assert!(stderr.contains("LDI"));
}

use std::io;

use ls8::loader::{self, LoadError};
use ls8::vm::{State, Vm};
use ls8::Error;

fn run_program(name: &str) -> (Vm, String) {
  let path = format!("{}/programs/{name}", env!("CARGO_MANIFEST_DIR"));
  let chunk = loader::load_file(path).unwrap();
  let mut vm = Vm::new();
  vm.load(&chunk).unwrap();
  let mut out: Vec<u8> = Vec::new();
  vm.run(&mut out).unwrap();
  (vm, String::from_utf8(out).unwrap())
}

#[test]
fn print8() {
  let (vm, out) = run_program("print8.ls8");
  assert_eq!(out, "8\n");
  assert_eq!(vm.state(), State::Halted);
}

#[test]
fn mult() {
  let (_, out) = run_program("mult.ls8");
  assert_eq!(out, "72\n");
}

#[test]
fn stack() {
  let (vm, out) = run_program("stack.ls8");
  assert_eq!(out, "2\n4\n1\n");
  assert_eq!(vm.registers().sp(), 256);
  // popped values stay behind in memory
  assert_eq!(vm.memory().read(255).unwrap(), 1);
  assert_eq!(vm.memory().read(254).unwrap(), 2);
}

#[test]
fn missing_program() {
  assert!(matches!(
    loader::load_file("programs/nope.ls8"),
    Err(LoadError::NotFound { .. })
  ));
}

#[test]
fn illegal_opcode_stops_the_run() {
  let chunk = loader::parse_program("10000010\n00000000\n00001000\n11111111\n").unwrap();
  let mut vm = Vm::new();
  vm.load(&chunk).unwrap();
  let err = vm.run(&mut io::sink()).unwrap_err();
  assert!(matches!(err, Error::IllegalOpcode { opcode: 0xFF, pc: 3 }));
  assert_eq!(err.to_string(), "illegal opcode 0b11111111 at pc 0x03");
}

use std::io;

use crate::alu::AluOp;

/// An error that stopped the machine.
///
/// None of these are recoverable: once [`Vm::run`](crate::vm::Vm::run) hands
/// one back, the program is over.
#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("address {address:#04x} is outside of memory")]
  OutOfBounds { address: usize },

  #[error("register R{index} does not exist")]
  BadRegister { index: u8 },

  #[error("unsupported ALU operation `{op:?}`")]
  UnsupportedOperation { op: AluOp },

  #[error("illegal opcode {opcode:#010b} at pc {pc:#04x}")]
  IllegalOpcode { opcode: u8, pc: usize },

  #[error("machine is halted")]
  MachineHalted,

  #[error("failed to write program output")]
  Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

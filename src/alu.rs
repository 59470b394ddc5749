use crate::error::{Error, Result};
use crate::registers::Registers;

/// Operations the ALU knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
  /// `r[a] ← r[a] + r[b]`
  Add,
  /// Reserved, never implemented. Asking for it stops the machine.
  Sub,
  /// `r[a] ← r[a] × r[b]`
  Mul,
}

/// Apply `op` to registers `a` and `b`, storing the result in `a`.
pub fn apply(registers: &mut Registers, op: AluOp, a: u8, b: u8) -> Result<()> {
  let ra = registers.get(a)?;
  let rb = registers.get(b)?;
  let value = match op {
    AluOp::Add => ra.wrapping_add(rb),
    AluOp::Mul => ra.wrapping_mul(rb),
    AluOp::Sub => return Err(Error::UnsupportedOperation { op }),
  };
  registers.set(a, value)
}

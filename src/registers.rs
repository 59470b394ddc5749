use crate::error::{Error, Result};
use crate::memory::MEMORY_SIZE;

/// The type of a single register.
///
/// Sixteen bits so that the stack pointer can hold `MEMORY_SIZE` (256) while
/// the stack is empty. Arithmetic on registers wraps at this width.
pub type Register = u16;

/// Number of registers, `R0` through `R7`.
pub const REGISTER_COUNT: usize = 8;

/// Index of the register used as the stack pointer by PUSH and POP.
pub const SP: u8 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct Registers {
  values: [Register; REGISTER_COUNT],
}

impl Registers {
  /// All zero, except the stack pointer which points just past memory.
  pub fn new() -> Self {
    let mut values = [0; REGISTER_COUNT];
    values[SP as usize] = MEMORY_SIZE as Register;
    Self { values }
  }

  pub fn get(&self, index: u8) -> Result<Register> {
    self
      .values
      .get(index as usize)
      .copied()
      .ok_or(Error::BadRegister { index })
  }

  pub fn set(&mut self, index: u8, value: Register) -> Result<()> {
    let slot = self
      .values
      .get_mut(index as usize)
      .ok_or(Error::BadRegister { index })?;
    *slot = value;
    Ok(())
  }

  pub fn sp(&self) -> Register {
    self.values[SP as usize]
  }

  pub fn as_slice(&self) -> &[Register] {
    &self.values
  }
}

impl Default for Registers {
  fn default() -> Self {
    Self::new()
  }
}

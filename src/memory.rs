use crate::error::{Error, Result};

/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 256;

/// Flat byte memory shared by the program image and the stack.
///
/// Nothing keeps the two apart: the stack grows down from the top and a
/// program that pushes far enough will overwrite its own code.
#[derive(Debug, Clone)]
pub struct Memory {
  cells: [u8; MEMORY_SIZE],
}

impl Memory {
  pub fn new() -> Self {
    Self {
      cells: [0; MEMORY_SIZE],
    }
  }

  pub fn read(&self, address: usize) -> Result<u8> {
    self
      .cells
      .get(address)
      .copied()
      .ok_or(Error::OutOfBounds { address })
  }

  pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
    let cell = self
      .cells
      .get_mut(address)
      .ok_or(Error::OutOfBounds { address })?;
    *cell = value;
    Ok(())
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.cells
  }
}

impl Default for Memory {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_is_zeroed() {
    let memory = Memory::new();
    assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
    assert!(memory.as_slice().iter().all(|&b| b == 0));
  }

  #[test]
  fn write_then_read() {
    let mut memory = Memory::new();
    memory.write(0, 0x82).unwrap();
    memory.write(255, 0xFF).unwrap();
    assert_eq!(memory.read(0).unwrap(), 0x82);
    assert_eq!(memory.read(255).unwrap(), 0xFF);
  }

  #[test]
  fn out_of_bounds() {
    let mut memory = Memory::new();
    assert!(matches!(
      memory.read(256),
      Err(Error::OutOfBounds { address: 256 })
    ));
    assert!(matches!(
      memory.write(300, 1),
      Err(Error::OutOfBounds { address: 300 })
    ));
    // a failed write leaves memory untouched
    assert!(memory.as_slice().iter().all(|&b| b == 0));
  }
}

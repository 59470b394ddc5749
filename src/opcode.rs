use crate::error::Error;

/// Every instruction the LS-8 understands.
///
/// The discriminant is the opcode byte as it appears in a program. The two
/// high bits of each byte give the number of operands that follow it.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
  /// Stop execution.
  ///
  /// | Operation | Semantics/RTL      | Assembly |
  /// |-----------|--------------------|----------|
  /// | Halt      | `(stop execution)` | `HLT`    |
  Hlt = 0b0000_0001,

  /// Push a register onto the stack.
  ///
  /// | Operation | Semantics/RTL                     | Assembly  |
  /// |-----------|-----------------------------------|-----------|
  /// | Push      | `r[7] ← r[7] − 1; m[r[7]] ← r[a]` | `PUSH ra` |
  Push = 0b0100_0101,

  /// Pop the top of the stack into a register.
  ///
  /// | Operation | Semantics/RTL                     | Assembly |
  /// |-----------|-----------------------------------|----------|
  /// | Pop       | `r[a] ← m[r[7]]; r[7] ← r[7] + 1` | `POP ra` |
  Pop = 0b0100_0110,

  /// Print a register as a decimal number.
  ///
  /// | Operation | Semantics/RTL | Assembly |
  /// |-----------|---------------|----------|
  /// | Print     | `out ← r[a]`  | `PRN ra` |
  Prn = 0b0100_0111,

  /// Load an immediate value into a register.
  ///
  /// | Operation      | Semantics/RTL | Assembly         |
  /// |----------------|---------------|------------------|
  /// | Load Immediate | `r[a] ← vv`   | `LDI ra, $vv`    |
  Ldi = 0b1000_0010,

  /// Multiply two registers through the ALU.
  ///
  /// | Operation | Semantics/RTL        | Assembly      |
  /// |-----------|----------------------|---------------|
  /// | Multiply  | `r[a] ← r[a] × r[b]` | `MUL ra, rb`  |
  Mul = 0b1010_0010,
}

impl Opcode {
  /// Number of operand bytes following the opcode.
  pub fn operand_count(self) -> usize {
    (self as u8 >> 6) as usize
  }

  pub fn mnemonic(self) -> &'static str {
    match self {
      Self::Hlt => "HLT",
      Self::Push => "PUSH",
      Self::Pop => "POP",
      Self::Prn => "PRN",
      Self::Ldi => "LDI",
      Self::Mul => "MUL",
    }
  }

  /// Decode the byte found at `pc`.
  pub(crate) fn decode(byte: u8, pc: usize) -> Result<Self, Error> {
    Self::try_from(byte).map_err(|opcode| Error::IllegalOpcode { opcode, pc })
  }
}

impl TryFrom<u8> for Opcode {
  type Error = u8;

  fn try_from(byte: u8) -> Result<Self, Self::Error> {
    match byte {
      0b0000_0001 => Ok(Self::Hlt),
      0b0100_0101 => Ok(Self::Push),
      0b0100_0110 => Ok(Self::Pop),
      0b0100_0111 => Ok(Self::Prn),
      0b1000_0010 => Ok(Self::Ldi),
      0b1010_0010 => Ok(Self::Mul),
      other => Err(other),
    }
  }
}

use std::fmt;
use std::io::Write;

use log::{debug, trace};

use crate::alu::{self, AluOp};
use crate::error::{Error, Result};
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::region::Region;
use crate::registers::{Register, Registers, SP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
  Running,
  Halted,
}

/// An LS-8 machine.
///
/// Owns its memory, registers, program counter and run state. Handlers get
/// exclusive access to all of it for the duration of a single cycle.
#[derive(Debug)]
pub struct Vm {
  // address of the opcode for the next cycle
  pc: usize,
  memory: Memory,
  registers: Registers,
  state: State,
}

impl Vm {
  /// Create a new machine with zeroed memory and an empty stack
  pub fn new() -> Self {
    Self {
      pc: 0,
      memory: Memory::new(),
      registers: Registers::new(),
      state: State::Running,
    }
  }

  /// Copy a program image into memory, starting at address 0
  pub fn load<R>(&mut self, region: &R) -> Result<()>
  where
    R: Region + ?Sized,
  {
    let bytes = region.bytes();
    for (address, &byte) in bytes.iter().enumerate() {
      self.memory.write(address, byte)?;
    }
    debug!("loaded {} byte program", bytes.len());
    Ok(())
  }

  /// Execute a single instruction, writing anything it prints to `out`
  pub fn step<W>(&mut self, out: &mut W) -> Result<()>
  where
    W: Write + ?Sized,
  {
    if self.state == State::Halted {
      return Err(Error::MachineHalted);
    }
    trace!("{}", self.trace());
    let mut task = Task::new(self, out);
    task.run()
  }

  /// Run until the program halts or something goes wrong
  pub fn run<W>(&mut self, out: &mut W) -> Result<()>
  where
    W: Write + ?Sized,
  {
    while self.state == State::Running {
      self.step(out)?;
    }
    debug!("halted at pc {:#04x}", self.pc);
    Ok(())
  }

  pub fn pc(&self) -> usize {
    self.pc
  }

  pub fn state(&self) -> State {
    self.state
  }

  pub fn registers(&self) -> &Registers {
    &self.registers
  }

  pub fn memory(&self) -> &Memory {
    &self.memory
  }

  /// Snapshot of the machine for debugging, see [`Trace`]
  pub fn trace(&self) -> Trace<'_> {
    Trace { vm: self }
  }
}

impl Default for Vm {
  fn default() -> Self {
    Self::new()
  }
}

/// One line describing the machine: the pc, the three bytes starting at the
/// pc, then every register, all in hex.
///
/// ```text
/// TRACE: 03 | 47 00 01 | 08 00 00 00 00 00 00 100
/// ```
pub struct Trace<'vm> {
  vm: &'vm Vm,
}

impl fmt::Display for Trace<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TRACE: {:02X} |", self.vm.pc)?;
    for offset in 0..3 {
      // the pc may sit at the very end of memory
      match self.vm.memory.read(self.vm.pc + offset) {
        Ok(byte) => write!(f, " {byte:02X}")?,
        Err(_) => write!(f, " --")?,
      }
    }
    write!(f, " |")?;
    for value in self.vm.registers.as_slice() {
      write!(f, " {value:02X}")?;
    }
    Ok(())
  }
}

struct Task<'vm, 'out, W: ?Sized> {
  vm: &'vm mut Vm,
  out: &'out mut W,
}

impl<'vm, 'out, W> Task<'vm, 'out, W>
where
  W: Write + ?Sized,
{
  fn new(vm: &'vm mut Vm, out: &'out mut W) -> Self {
    Self { vm, out }
  }

  /// The `n`th byte after the opcode
  #[inline]
  fn operand(&self, n: usize) -> Result<u8> {
    self.vm.memory.read(self.vm.pc + n)
  }

  /// Move past the current opcode and its operands
  #[inline]
  fn advance(&mut self, op: Opcode) {
    self.vm.pc += 1 + op.operand_count();
  }

  fn run(&mut self) -> Result<()> {
    let pc = self.vm.pc;
    let op = Opcode::decode(self.vm.memory.read(pc)?, pc)?;
    trace!("{pc:02X}: {}", op.mnemonic());
    match op {
      Opcode::Ldi => ldi(self),
      Opcode::Prn => prn(self),
      Opcode::Hlt => hlt(self),
      Opcode::Mul => mul(self),
      Opcode::Push => push(self),
      Opcode::Pop => pop(self),
    }
  }
}

// r[a] ← vv
fn ldi<W>(task: &mut Task<'_, '_, W>) -> Result<()>
where
  W: Write + ?Sized,
{
  let a = task.operand(1)?;
  let vv = task.operand(2)?;
  task.vm.registers.set(a, vv as Register)?;
  task.advance(Opcode::Ldi);
  Ok(())
}

// out ← r[a]
fn prn<W>(task: &mut Task<'_, '_, W>) -> Result<()>
where
  W: Write + ?Sized,
{
  let a = task.operand(1)?;
  let value = task.vm.registers.get(a)?;
  writeln!(task.out, "{value}")?;
  task.advance(Opcode::Prn);
  Ok(())
}

// (stop execution)
fn hlt<W>(task: &mut Task<'_, '_, W>) -> Result<()>
where
  W: Write + ?Sized,
{
  task.advance(Opcode::Hlt);
  task.vm.state = State::Halted;
  Ok(())
}

// r[a] ← r[a] × r[b]
fn mul<W>(task: &mut Task<'_, '_, W>) -> Result<()>
where
  W: Write + ?Sized,
{
  let a = task.operand(1)?;
  let b = task.operand(2)?;
  alu::apply(&mut task.vm.registers, AluOp::Mul, a, b)?;
  task.advance(Opcode::Mul);
  Ok(())
}

// r[7] ← r[7] − 1; m[r[7]] ← r[a]
//
// Only the low byte of r[a] fits in a memory cell. There is no check against
// running into the program: the stack will happily overwrite code.
fn push<W>(task: &mut Task<'_, '_, W>) -> Result<()>
where
  W: Write + ?Sized,
{
  let a = task.operand(1)?;
  let value = task.vm.registers.get(a)?;
  // below address 0 there is nothing to write to
  let sp = task
    .vm
    .registers
    .sp()
    .checked_sub(1)
    .ok_or(Error::OutOfBounds {
      address: usize::MAX,
    })?;
  task.vm.memory.write(sp as usize, value as u8)?;
  task.vm.registers.set(SP, sp)?;
  task.advance(Opcode::Push);
  Ok(())
}

// r[a] ← m[r[7]]; r[7] ← r[7] + 1
fn pop<W>(task: &mut Task<'_, '_, W>) -> Result<()>
where
  W: Write + ?Sized,
{
  let a = task.operand(1)?;
  let value = task.vm.memory.read(task.vm.registers.sp() as usize)?;
  task.vm.registers.set(a, value as Register)?;
  // `POP R7` bumps the value it just loaded
  let sp = task.vm.registers.sp().wrapping_add(1);
  task.vm.registers.set(SP, sp)?;
  task.advance(Opcode::Pop);
  Ok(())
}

//! Bare-bones implementation of the LS-8, an 8-bit toy computer with 256 bytes
//! of memory, eight registers and a handful of instructions.
//!
//! The library only executes bytes; turning `.ls8` text into bytes lives in
//! [`loader`], and the command line wrapper lives in `src/bin/main.rs`.

pub mod alu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod opcode;
pub mod region;
pub mod registers;
pub mod vm;

pub use error::Error;

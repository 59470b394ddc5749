//! Turns LS-8 source text into a program image.
//!
//! Each meaningful line holds one byte written as a binary literal, optionally
//! followed by a `#` comment:
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! ```
//!
//! Blank lines and lines with only a comment are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::memory::MEMORY_SIZE;
use crate::region::Chunk;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
  #[error("{} file not found", path.display())]
  NotFound { path: PathBuf },

  #[error("could not read {}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("line {line}: `{text}` is not an 8-bit binary literal")]
  Parse { line: usize, text: String },

  #[error("program is {len} bytes, memory only holds {MEMORY_SIZE}")]
  TooLarge { len: usize },
}

/// Parse program text into bytes
pub fn parse_program(source: &str) -> Result<Chunk, LoadError> {
  let mut bytes = Vec::new();
  for (index, line) in source.lines().enumerate() {
    let code = match line.split_once('#') {
      Some((code, _comment)) => code,
      None => line,
    }
    .trim();
    if code.is_empty() {
      continue;
    }
    let byte = u8::from_str_radix(code, 2).map_err(|_| LoadError::Parse {
      line: index + 1,
      text: code.to_string(),
    })?;
    bytes.push(byte);
  }
  if bytes.len() > MEMORY_SIZE {
    return Err(LoadError::TooLarge { len: bytes.len() });
  }
  Ok(bytes.into())
}

/// Read and parse a program file
pub fn load_file<P>(path: P) -> Result<Chunk, LoadError>
where
  P: AsRef<Path>,
{
  let path = path.as_ref();
  let source = fs::read_to_string(path).map_err(|source| match source.kind() {
    io::ErrorKind::NotFound => LoadError::NotFound {
      path: path.to_path_buf(),
    },
    _ => LoadError::Io {
      path: path.to_path_buf(),
      source,
    },
  })?;
  let chunk = parse_program(&source)?;
  debug!("parsed {} bytes from {}", chunk.len(), path.display());
  Ok(chunk)
}

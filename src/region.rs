/// A source of program bytes that can be loaded into memory
pub trait Region {
  fn bytes(&self) -> &[u8];
}

/// A `Chunk` is a program image, loaded into memory starting at address 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
  bytes: Vec<u8>,
}

impl Chunk {
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }
}

impl From<Vec<u8>> for Chunk {
  fn from(bytes: Vec<u8>) -> Self {
    Self { bytes }
  }
}

impl Region for Chunk {
  fn bytes(&self) -> &[u8] {
    &self.bytes
  }
}

impl Region for [u8] {
  fn bytes(&self) -> &[u8] {
    self
  }
}

//! Deterministic random sources for tests
//!
//! Shared by the unit tests of every crate in the workspace and by the
//! integration tests. Not part of the stable API.

use crate::U256;
use rand::{CryptoRng, RngCore};

/// Replays a fixed byte string, then returns zeros forever.
///
/// Zeros are never a valid SM2 scalar, so a run that reads past the recorded
/// bytes ends in `ExhaustedRetries` rather than succeeding by accident.
#[derive(Debug, Clone)]
pub struct FixedRng {
    bytes: Vec<u8>,
    pos: usize,
}

impl FixedRng {
    /// Replay `bytes`
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Replay the concatenation of 32-byte big-endian scalars
    pub fn from_scalars(scalars: &[&[u8; 32]]) -> Self {
        Self::new(scalars.iter().flat_map(|s| s.iter().copied()).collect())
    }

    /// One 32-byte big-endian draw per value
    pub fn from_u64s(values: &[u64]) -> Self {
        Self::new(
            values
                .iter()
                .flat_map(|v| U256::from_u64(*v).to_be_bytes())
                .collect(),
        )
    }

    /// Bytes handed out so far
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest.iter_mut() {
            *b = self.bytes.get(self.pos).copied().unwrap_or(0);
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}

/// A random source that is offline: every `try_fill_bytes` fails.
///
/// The infallible methods panic, so a caller that ignores the error path
/// shows up as a test failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRng;

impl FailingRng {
    /// Message carried by every error this source returns
    pub const MESSAGE: &'static str = "entropy source unavailable";
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("FailingRng only supports try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("FailingRng only supports try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingRng only supports try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            Self::MESSAGE,
        )))
    }
}

impl CryptoRng for FailingRng {}

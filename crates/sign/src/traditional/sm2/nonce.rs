//! Bounded search for a signing nonce
//!
//! ```text
//!            in range          rejected
//! Sampling ───────────▶ Checking ───────▶ Sampling
//!    │                     │
//!    │ budget spent        │ valid (r, s)
//!    ▼                     ▼
//! Exhausted             Accepted
//! ```
//!
//! Every draw costs one attempt, including draws that fall outside `[1, n)`,
//! so a degenerate RNG ends in `Exhausted` instead of looping forever. An RNG
//! that reports failure aborts the search with that error.

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};
use smcrypt_algorithms::ec::sm2::sample_candidate;
use smcrypt_common::{EphemeralSecret, Modulus, U256};

/// Where the nonce search currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceState {
    /// Waiting to draw the next candidate
    Sampling,
    /// Holding a candidate that has not been checked yet
    Checking,
    /// A candidate produced a valid signature
    Accepted,
    /// The attempt budget ran out
    Exhausted,
}

/// Why a candidate nonce was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `r = 0`
    RIsZero,
    /// `r + k ≡ 0 (mod n)`
    RPlusKIsZero,
    /// `s = 0`
    SIsZero,
    /// `k·G` came out as the point at infinity
    PointAtInfinity,
}

/// The nonce search state machine
#[derive(Debug)]
pub struct NonceMachine {
    state: NonceState,
    attempts: usize,
    max_attempts: usize,
    candidate: Option<EphemeralSecret<U256>>,
}

impl NonceMachine {
    /// A fresh search allowed `max_attempts` draws
    pub fn new(max_attempts: usize) -> Self {
        Self {
            state: NonceState::Sampling,
            attempts: 0,
            max_attempts,
            candidate: None,
        }
    }

    /// Current state
    pub fn state(&self) -> NonceState {
        self.state
    }

    /// Draws made so far
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Make one transition.
    ///
    /// `check` runs only in `Checking` and either produces the signature
    /// or names the reason the candidate was discarded. Returns the signature
    /// on the transition into `Accepted`. Stepping a finished machine is an
    /// error.
    pub fn step<R, T, F>(&mut self, n: &Modulus, rng: &mut R, check: F) -> Result<Option<T>>
    where
        R: RngCore + CryptoRng,
        F: FnOnce(&U256) -> core::result::Result<T, Rejection>,
    {
        match self.state {
            NonceState::Sampling => {
                if self.attempts >= self.max_attempts {
                    tracing::warn!(
                        attempts = self.attempts,
                        "SM2 signing exhausted its nonce budget"
                    );
                    self.state = NonceState::Exhausted;
                    return Ok(None);
                }
                self.attempts += 1;
                match sample_candidate(n, rng)? {
                    Some(k) => {
                        self.candidate = Some(EphemeralSecret::new(k));
                        self.state = NonceState::Checking;
                    }
                    None => {
                        tracing::debug!(
                            attempt = self.attempts,
                            "nonce candidate outside [1, n)"
                        );
                    }
                }
                Ok(None)
            }
            NonceState::Checking => {
                let Some(k) = self.candidate.take() else {
                    self.state = NonceState::Sampling;
                    return Ok(None);
                };
                match check(&*k) {
                    Ok(value) => {
                        tracing::debug!(attempts = self.attempts, "accepted SM2 signing nonce");
                        self.state = NonceState::Accepted;
                        Ok(Some(value))
                    }
                    Err(reason) => {
                        tracing::debug!(
                            attempt = self.attempts,
                            reason = ?reason,
                            "rejected SM2 signing nonce"
                        );
                        self.state = NonceState::Sampling;
                        Ok(None)
                    }
                }
            }
            NonceState::Accepted => Err(Error::domain(
                "SM2 nonce",
                "search already accepted a nonce",
            )),
            NonceState::Exhausted => Err(Error::NonceExhausted {
                attempts: self.attempts,
            }),
        }
    }

    /// Step until a candidate is accepted or the budget runs out
    pub fn run<R, T, F>(&mut self, n: &Modulus, rng: &mut R, mut check: F) -> Result<T>
    where
        R: RngCore + CryptoRng,
        F: FnMut(&U256) -> core::result::Result<T, Rejection>,
    {
        loop {
            if let Some(value) = self.step(n, rng, &mut check)? {
                return Ok(value);
            }
        }
    }
}

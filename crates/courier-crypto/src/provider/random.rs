//! Secure random number generation.
//!
//! Production uses the operating system's entropy source via `rand`. A seeded
//! source exists for reproducible tests and must never back real keys.

use std::sync::Mutex;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::error::{CryptoError, Result};

/// Where random bytes come from.
#[derive(Debug, Default)]
pub enum RngSource {
    #[default]
    Os,
    Seeded(Mutex<StdRng>),
}

impl RngSource {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Fill a buffer with random bytes.
    pub fn fill(&self, buf: &mut [u8]) -> Result<()> {
        match self {
            Self::Os => OsRng
                .try_fill_bytes(buf)
                .map_err(|e| CryptoError::BackendFailure(format!("entropy source: {e}"))),
            Self::Seeded(rng) => {
                let mut rng = rng
                    .lock()
                    .map_err(|_| CryptoError::BackendFailure("seeded rng poisoned".into()))?;
                rng.fill_bytes(buf);
                Ok(())
            }
        }
    }

    /// Generate `n` random bytes.
    pub fn bytes(&self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

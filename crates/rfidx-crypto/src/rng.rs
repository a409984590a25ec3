//! Process-scoped RNG context (§4.1, §9 "Global RNG").
//!
//! The original keeps an uninitialized module-level context behind a boolean
//! flag. Rust has no safe hidden globals, so this is modeled as an explicit
//! `init`/`free` pair over a `OnceLock<Mutex<Option<RngState>>>`: idempotent
//! init, `DRNG_ERROR` on any draw attempted before init, explicit teardown.

use std::sync::{Mutex, OnceLock};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_core::OsRng;

use crate::error::CryptoError;

/// Personalization string mixed into every fresh seed (§4.1, §6.5).
pub const PERSONALIZATION: &[u8] = b"rfidx_rng";

struct RngState {
    rng: StdRng,
}

fn state() -> &'static Mutex<Option<RngState>> {
    static STATE: OnceLock<Mutex<Option<RngState>>> = OnceLock::new();
    STATE.get_or_init(|| Mutex::new(None))
}

/// Handle onto the process-scoped RNG context.
///
/// Carries no state itself — all methods operate on the shared context
/// behind [`state`]. Library code never stores a `Rng` value across calls;
/// it calls [`Rng::fill_bytes`] (or [`Rng::is_initialized`]) at the point
/// randomness is needed and propagates [`CryptoError::RngUninitialized`]
/// otherwise.
pub struct Rng;

impl Rng {
    /// Initialize the RNG context, idempotently.
    ///
    /// Seeds a `StdRng` from OS entropy, the fixed personalization string,
    /// and — if `custom_source` is supplied — 32 bytes drawn from it and
    /// folded in as an additional strong entropy input. Calling this again
    /// while already initialized is a no-op (it does not re-seed).
    pub fn init(custom_source: Option<&mut dyn RngCore>) {
        let mut guard = state().lock().expect("rng mutex poisoned");
        if guard.is_some() {
            return;
        }

        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        for (i, b) in PERSONALIZATION.iter().enumerate() {
            seed[i % 32] ^= b;
        }
        if let Some(src) = custom_source {
            let mut custom = [0u8; 32];
            src.fill_bytes(&mut custom);
            for i in 0..32 {
                seed[i] ^= custom[i];
            }
        }

        *guard = Some(RngState {
            rng: StdRng::from_seed(seed),
        });
    }

    /// Tear down the RNG context. Safe to call when already uninitialized.
    pub fn free() {
        let mut guard = state().lock().expect("rng mutex poisoned");
        *guard = None;
    }

    /// True if [`Rng::init`] has been called and not yet [`Rng::free`]d.
    pub fn is_initialized() -> bool {
        state().lock().expect("rng mutex poisoned").is_some()
    }

    /// Fill `buf` with random bytes drawn from the process-scoped context.
    ///
    /// Fails with [`CryptoError::RngUninitialized`] if [`Rng::init`] has not
    /// been called.
    pub fn fill_bytes(buf: &mut [u8]) -> Result<(), CryptoError> {
        let mut guard = state().lock().expect("rng mutex poisoned");
        match guard.as_mut() {
            Some(s) => {
                s.rng.fill_bytes(buf);
                Ok(())
            }
            None => Err(CryptoError::RngUninitialized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_fails() {
        Rng::free();
        let mut buf = [0u8; 6];
        assert!(matches!(
            Rng::fill_bytes(&mut buf),
            Err(CryptoError::RngUninitialized)
        ));
        assert!(!Rng::is_initialized());
    }

    #[test]
    fn init_is_idempotent_and_draws_succeed() {
        Rng::free();
        Rng::init(None);
        Rng::init(None);
        assert!(Rng::is_initialized());

        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        Rng::fill_bytes(&mut a).unwrap();
        Rng::fill_bytes(&mut b).unwrap();
        assert_ne!(a, b, "successive draws should not repeat");

        Rng::free();
        assert!(!Rng::is_initialized());
    }
}

#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::inline_always
)]

//! The scrypt core (RFC 7914): parameter validation, the single-iteration
//! PBKDF2-HMAC-SHA256 expander, and the Salsa20/8-based memory-hard mixing
//! loop. Execution strategies for running the mixing step live a level up;
//! everything here is synchronous and deterministic.

mod blockmix;
mod error;
mod expand;
mod hmac;
mod params;
mod romix;
mod salsa;

pub use error::Error;
pub use expand::expand;
pub use params::Params;
pub use romix::{ro_mix, RoMix};

use crypto_common::erase::Erase;

/// The derived key may need at most `2^32 - 1` expander blocks.
pub fn check_derived_len(len: usize) -> Result<(), Error> {
    if len / 32 > 0xffff_ffff {
        return Err(Error::OutputTooLong);
    }
    Ok(())
}

/// Derive `output.len()` bytes from `password` and `salt`, mixing every
/// lane sequentially in this call. One scratch table is reused across all
/// `p` lanes.
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
) -> Result<(), Error> {
    check_derived_len(output.len())?;
    let lane_len = params.lane_len();
    let mut b = vec![0; params.p() * lane_len];
    expand(password, salt, &mut b);
    let mut mix = RoMix::new(params.n(), params.r());
    for lane in b.chunks_mut(lane_len) {
        mix.load(lane);
        mix.advance(usize::MAX);
        mix.store(lane);
    }
    expand(password, &b, output);
    b.iter_mut().erase();
    Ok(())
}

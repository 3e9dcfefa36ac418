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
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Memory-hard key derivation (scrypt, RFC 7914) with a choice of execution
//! strategy for the expensive mixing step: cooperative time-slicing on one
//! task, or one blocking worker per lane. Identical inputs produce an
//! identical key whichever strategy runs.

mod cooperative;
mod options;
mod parallel;
mod salt;

pub use options::{Options, Strategy};
pub use salt::random_salt;
pub use scrypt::{Error, Params};

use crypto_common::erase::Erase;

/// Derive `options.dk_len` bytes from `password` and `salt`.
///
/// Parameters are validated before any allocation, expansion, or yield, so
/// an invalid request resolves to `Err` without the future ever suspending.
/// Once validation passes the derivation always runs to completion and the
/// result is a pure function of the inputs.
pub async fn derive_key(
    password: &[u8],
    salt: &[u8],
    options: &Options,
) -> Result<Vec<u8>, Error> {
    let params = options.params()?;
    let mut b = vec![0; params.p() * params.lane_len()];
    scrypt::expand(password, salt, &mut b);
    match options.strategy {
        Strategy::Cooperative { interrupt_step } => {
            cooperative::mix_lanes(&mut b, &params, interrupt_step).await;
        }
        Strategy::Parallel => parallel::mix_lanes(&mut b, &params).await,
    }
    let mut dk = vec![0; options.dk_len];
    scrypt::expand(password, &b, &mut dk);
    b.iter_mut().erase();
    Ok(dk)
}

/// Runtime-free variant: validate, then run the whole derivation on the
/// calling thread.
pub fn derive_key_blocking(
    password: &[u8],
    salt: &[u8],
    options: &Options,
) -> Result<Vec<u8>, Error> {
    let params = options.params()?;
    let mut dk = vec![0; options.dk_len];
    scrypt::scrypt(password, salt, &params, &mut dk)?;
    Ok(dk)
}

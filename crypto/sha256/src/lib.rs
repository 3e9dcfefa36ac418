#![no_std]
#![deny(
    dead_code,
    deprecated,
    future_incompatible,
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
#![allow(clippy::inline_always)]

use core::fmt::Debug;
use crypto_common::blocks::{Block, Buffer};

mod consts;
mod soft;

#[allow(missing_copy_implementations)]
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    block_len: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self {
            state: consts::H,
            block_len: 0,
        }
    }
}

impl Sha256 {
    #[inline]
    pub fn update_block(&mut self, block: &Block) {
        self.block_len += 1;
        soft::compress(&mut self.state, block);
    }

    #[inline]
    pub fn finalize(&mut self, buffer: &mut Buffer, out: &mut [u8; 32]) {
        let bit_len = 8 * (buffer.pos() as u64 + self.block_len * 64);
        let state = &mut self.state;
        buffer.pad_len64_be(bit_len, |b| soft::compress(state, b));
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }

    #[inline]
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; 32] {
        let mut hasher = Self::default();
        let mut buffer = Buffer::default();
        buffer.digest_blocks(data, |b| hasher.update_block(b));
        let mut out = [0; 32];
        hasher.finalize(&mut buffer, &mut out);
        out
    }
}

impl Debug for Sha256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Sha256 { ... }")
    }
}

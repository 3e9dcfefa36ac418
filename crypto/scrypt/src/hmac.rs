use crypto_common::blocks::{Buffer, BLOCK_LEN};
use sha256::Sha256;

/// HMAC-SHA256 with the inner and outer pad states precomputed, so a keyed
/// instance can be cloned cheaply once per output block.
#[derive(Clone)]
pub struct Hmac {
    inner: Sha256,
    outer: Sha256,
    buffer: Buffer,
}

impl Hmac {
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        let mut pad = [0; BLOCK_LEN];
        if key.len() > BLOCK_LEN {
            // keys longer than one block are replaced by their digest
            pad[..32].copy_from_slice(&Sha256::digest(key));
        } else {
            pad[..key.len()].copy_from_slice(key);
        }
        for b in &mut pad {
            *b ^= 0x36;
        }
        let mut inner = Sha256::default();
        inner.update_block(&pad);
        for b in &mut pad {
            *b ^= 0x36 ^ 0x5c;
        }
        let mut outer = Sha256::default();
        outer.update_block(&pad);
        Self {
            inner,
            outer,
            buffer: Buffer::default(),
        }
    }

    #[inline]
    pub fn update(&mut self, input: &[u8]) {
        let Self { inner, buffer, .. } = self;
        buffer.digest_blocks(input, |b| inner.update_block(b));
    }

    #[inline]
    #[must_use]
    pub fn finalize(mut self) -> [u8; 32] {
        let mut digest = [0; 32];
        self.inner.finalize(&mut self.buffer, &mut digest);
        self.buffer.reset();
        let Self { outer, buffer, .. } = &mut self;
        buffer.digest_blocks(&digest, |b| outer.update_block(b));
        let mut out = [0; 32];
        outer.finalize(buffer, &mut out);
        out
    }
}

impl core::fmt::Debug for Hmac {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Hmac { ... }")
    }
}

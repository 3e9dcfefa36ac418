use crate::hmac::Hmac;

/// PBKDF2-HMAC-SHA256 fixed at a single iteration: output block `j` (from 1)
/// is `HMAC(password, salt || j_be32)`, and the final block is truncated to
/// fit. With one iteration there is nothing to XOR-accumulate, so each block
/// is a single pair of hashes.
///
/// The same primitive both expands the password into the working buffer and
/// compresses the mixed buffer into the derived key; only the `salt` role
/// and the requested length differ.
#[allow(clippy::cast_possible_truncation)]
pub fn expand(password: &[u8], salt: &[u8], output: &mut [u8]) {
    let prf = Hmac::new(password);
    for (i, chunk) in output.chunks_mut(32).enumerate() {
        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&(i as u32 + 1).to_be_bytes());
        let block = mac.finalize();
        chunk.copy_from_slice(&block[..chunk.len()]);
    }
}

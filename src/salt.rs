use rand_core::RngCore;

/// Generate `len` salt bytes from the operating system's RNG.
#[must_use]
pub fn random_salt(len: usize) -> Vec<u8> {
    let mut salt = vec![0; len];
    rand_core::OsRng.fill_bytes(&mut salt);
    salt
}

use crate::salsa::salsa20_8;

/// One BlockMix pass over `2r` 16-word sub-blocks. The accumulator starts
/// as the last input sub-block; each step XORs in the next sub-block and
/// runs it through Salsa20/8. Even-indexed results fill the first half of
/// `output` and odd-indexed results the second half — the de-interleave is
/// part of the algorithm, not a layout choice.
pub fn block_mix(input: &[u32], output: &mut [u32]) {
    debug_assert_eq!(input.len(), output.len());
    let half = input.len() / 2;
    let mut acc = [0; 16];
    acc.copy_from_slice(&input[input.len() - 16..]);
    for (i, sub) in input.chunks_exact(16).enumerate() {
        for (a, w) in acc.iter_mut().zip(sub.iter()) {
            *a ^= w;
        }
        salsa20_8(&mut acc);
        let at = if i % 2 == 0 {
            i / 2 * 16
        } else {
            i / 2 * 16 + half
        };
        output[at..at + 16].copy_from_slice(&acc);
    }
}

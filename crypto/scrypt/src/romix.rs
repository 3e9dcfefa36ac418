use crate::blockmix::block_mix;
use crypto_common::erase::Erase;

/// The memory-hard mixing core, operating on one lane at a time.
///
/// The table `V` and both working blocks are allocated once and reused
/// across lanes; `load` decodes a lane and restarts the two phases, and
/// `advance` runs a bounded number of iterations so a driver can slice the
/// work into chunks (or finish it in one call). Slicing never changes the
/// result: iterations run in the same strictly sequential order regardless
/// of the budget.
#[allow(clippy::module_name_repetitions)]
pub struct RoMix {
    v: Vec<u32>,
    x: Vec<u32>,
    y: Vec<u32>,
    n: usize,
    filled: usize,
    mixed: usize,
}

impl RoMix {
    /// Allocate scratch for an `n`-entry table of `32 * r`-word blocks.
    /// `n` must be a power of two; `Params` guarantees that upstream.
    #[must_use]
    pub fn new(n: usize, r: usize) -> Self {
        let words = 32 * r;
        Self {
            v: vec![0; n * words],
            x: vec![0; words],
            y: vec![0; words],
            n,
            filled: 0,
            mixed: 0,
        }
    }

    /// Decode a `128 * r`-byte lane (little-endian words) and restart both
    /// phases.
    pub fn load(&mut self, lane: &[u8]) {
        debug_assert_eq!(lane.len(), self.x.len() * 4);
        for (word, chunk) in self.x.iter_mut().zip(lane.chunks_exact(4)) {
            *word = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        self.filled = 0;
        self.mixed = 0;
    }

    /// Run up to `budget` iterations (one iteration = one BlockMix), first
    /// filling the table (`V[i] = X; X = BlockMix(V[i])`), then doing the
    /// `n` randomized lookups (`j = integerify(X) mod n; X = BlockMix(X ^
    /// V[j])`). Returns `true` once both phases are complete.
    pub fn advance(&mut self, budget: usize) -> bool {
        let words = self.x.len();
        let mut budget = budget;
        while budget > 0 && self.filled < self.n {
            let entry = self.filled * words;
            self.v[entry..entry + words].copy_from_slice(&self.x);
            block_mix(&self.v[entry..entry + words], &mut self.x);
            self.filled += 1;
            budget -= 1;
        }
        while budget > 0 && self.mixed < self.n {
            let entry = integerify(&self.x, self.n) * words;
            for ((y, x), v) in self
                .y
                .iter_mut()
                .zip(self.x.iter())
                .zip(self.v[entry..entry + words].iter())
            {
                *y = x ^ v;
            }
            block_mix(&self.y, &mut self.x);
            self.mixed += 1;
            budget -= 1;
        }
        self.filled == self.n && self.mixed == self.n
    }

    /// Re-encode the mixed block into the lane, little-endian.
    pub fn store(&self, lane: &mut [u8]) {
        debug_assert_eq!(lane.len(), self.x.len() * 4);
        for (chunk, word) in lane.chunks_exact_mut(4).zip(self.x.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }
}

// the table is full of password-derived data; don't leave it behind
impl Drop for RoMix {
    fn drop(&mut self) {
        self.v.iter_mut().erase();
        self.x.iter_mut().erase();
        self.y.iter_mut().erase();
    }
}

impl core::fmt::Debug for RoMix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RoMix { ... }")
    }
}

/// First word of the last 16-word sub-block, masked down to a table index.
fn integerify(x: &[u32], n: usize) -> usize {
    (x[x.len() - 16] as usize) & (n - 1)
}

/// Run a full ROMix pass over one lane in a single call.
pub fn ro_mix(lane: &mut [u8], n: usize, r: usize) {
    let mut mix = RoMix::new(n, r);
    mix.load(lane);
    mix.advance(usize::MAX);
    mix.store(lane);
}

#[cfg(test)]
mod tests {
    use super::{ro_mix, RoMix};
    use crate::testutil::{hex, unhex};

    const INPUT: &str = "f7ce0b653d2d72a4108cf5abe912ffdd777616dbbb27a70e\
                         8204f3ae2d0f6fad89f68f4811d1e87bcc3bd7400a9ffd29\
                         094f0184639574f39ae5a1315217bcd7894991447213bb22\
                         6c25b54da86370fbcd984380374666bb8ffcb5bf40c254b0\
                         67d27c51ce4ad5fed829c90b505a571b7f4d1cad6a523cda\
                         770e67bceaaf7e89";

    // RFC 7914 section 10 (N = 16, r = 1)
    #[test]
    fn reference_vector() {
        let mut lane = unhex(INPUT);
        ro_mix(&mut lane, 16, 1);
        assert_eq!(
            hex(&lane),
            "79ccc193629debca047f0b70604bf6b62ce3dd4a9626e355\
             fafc6198e6ea2b46d58413673b99b029d665c357601fb426\
             a0b2f4bba200ee9f0a43d19b571a9c71ef1142e65d5a266f\
             ddca832ce59faa7cac0b9cf1be2bffca300d01ee387619c4\
             ae12fd4438f203a0e4e1c47ec314861f4e9087cb33396a68\
             73e8f9d2539a4b8e"
        );
    }

    #[test]
    fn chunked_advance_matches_one_shot() {
        let reference = {
            let mut lane = unhex(INPUT);
            ro_mix(&mut lane, 16, 1);
            lane
        };
        for budget in [1, 3, 5, 16, 31, 1000] {
            let mut lane = unhex(INPUT);
            let mut mix = RoMix::new(16, 1);
            mix.load(&lane);
            let mut chunks = 0;
            while !mix.advance(budget) {
                chunks += 1;
                assert!(chunks < 100, "advance never completed");
            }
            mix.store(&mut lane);
            assert_eq!(lane, reference, "budget = {budget}");
        }
    }

    #[test]
    fn scratch_is_reusable_across_lanes() {
        let mut once = unhex(INPUT);
        ro_mix(&mut once, 16, 1);
        let mut mix = RoMix::new(16, 1);
        let mut lane = unhex(INPUT);
        for _ in 0..2 {
            // a second load must fully restart the computation
            mix.load(&lane);
            mix.advance(usize::MAX);
        }
        mix.store(&mut lane);
        assert_eq!(lane, once);
    }
}

//! Short random identifiers for temp files, session tags and the like.
//!
//! Not suitable for anything adversarial: the source is a time-seeded PRNG.

use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const INDEX_BITS: u32 = 6;
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;
/// Indices that fit in the low 63 bits of a single draw.
const INDICES_PER_DRAW: u32 = 63 / INDEX_BITS;

/// Draws lowercase identifiers from an injected entropy source.
pub struct IdGenerator<R> {
    rng: R,
}

impl<R: RngCore> IdGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns exactly `len` letters, each uniform over `a..=z`.
    ///
    /// One 64-bit draw feeds up to ten positions. Indices past the alphabet
    /// are discarded rather than folded back, so no letter is favoured.
    pub fn generate(&mut self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        let mut cache = 0u64;
        let mut remain = 0;

        while out.len() < len {
            if remain == 0 {
                cache = self.rng.next_u64();
                remain = INDICES_PER_DRAW;
            }
            let idx = (cache & INDEX_MASK) as usize;
            if idx < ALPHABET.len() {
                out.push(ALPHABET[idx] as char);
            }
            cache >>= INDEX_BITS;
            remain -= 1;
        }

        out
    }
}

impl IdGenerator<StdRng> {
    /// Seeds from the wall clock.
    pub fn from_time() -> Self {
        let t = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::new(StdRng::seed_from_u64(t.as_nanos() as u64))
    }
}

static GENERATOR: OnceLock<Mutex<IdGenerator<StdRng>>> = OnceLock::new();

fn shared() -> &'static Mutex<IdGenerator<StdRng>> {
    GENERATOR.get_or_init(|| {
        tracing::debug!("seeding process id generator");
        Mutex::new(IdGenerator::from_time())
    })
}

/// Seeds the process-wide generator. Call once at startup; later calls are no-ops.
///
/// [`random_id`] seeds on first use if this was never called.
pub fn init() {
    shared();
}

/// Generates an identifier from the process-wide generator.
pub fn random_id(len: usize) -> String {
    // Generator state can't be left half-updated, so a poisoned lock is still usable.
    let mut generator = shared().lock().unwrap_or_else(|e| e.into_inner());
    generator.generate(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed word and counts draws.
    struct FixedRng {
        word: u64,
        draws: usize,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.word
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.word as u8)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn length_is_exact() {
        let mut ids = IdGenerator::new(StdRng::seed_from_u64(7));
        for len in [0, 1, 9, 10, 11, 64, 200] {
            assert_eq!(ids.generate(len).len(), len);
        }
    }

    #[test]
    fn only_lowercase_letters() {
        let mut ids = IdGenerator::new(StdRng::seed_from_u64(11));
        let s = ids.generate(1000);
        assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn same_seed_same_output() {
        let a = IdGenerator::new(StdRng::seed_from_u64(3)).generate(32);
        let b = IdGenerator::new(StdRng::seed_from_u64(3)).generate(32);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        // 2 -> 'c', 27 -> rejected, 25 -> 'z', then zeros -> 'a'.
        let word = 2 | (27 << 6) | (25 << 12);
        let mut ids = IdGenerator::new(FixedRng { word, draws: 0 });
        assert_eq!(ids.generate(3), "cza");
        assert_eq!(ids.generate(4).len(), 4);
    }

    #[test]
    fn one_draw_feeds_ten_letters() {
        let mut ids = IdGenerator::new(FixedRng { word: 0, draws: 0 });
        assert_eq!(ids.generate(25), "a".repeat(25));
        assert_eq!(ids.rng.draws, 3);
    }

    #[test]
    fn positions_are_uniform() {
        const LEN: usize = 4;
        const SAMPLES: usize = 26 * 500;
        // Chi-square, 25 degrees of freedom; 60 is well past p = 0.0001.
        const CRITICAL: f64 = 60.0;

        let mut ids = IdGenerator::new(StdRng::seed_from_u64(0x5eed));
        let mut counts = [[0u32; 26]; LEN];
        for _ in 0..SAMPLES {
            for (pos, b) in ids.generate(LEN).bytes().enumerate() {
                counts[pos][(b - b'a') as usize] += 1;
            }
        }

        let expected = SAMPLES as f64 / 26.0;
        for (pos, row) in counts.iter().enumerate() {
            let chi2: f64 = row
                .iter()
                .map(|&c| {
                    let d = c as f64 - expected;
                    d * d / expected
                })
                .sum();
            assert!(chi2 < CRITICAL, "position {pos}: chi2 = {chi2}");
        }
    }

    #[test]
    fn init_seeds_once() {
        init();
        let seeded = shared();
        init();
        assert!(std::ptr::eq(seeded, shared()));
        assert!(GENERATOR.get().is_some());
    }

    #[test]
    fn shared_generator_varies() {
        let a = random_id(24);
        let b = random_id(24);
        assert_eq!(a.len(), 24);
        assert_ne!(a, b);
    }
}

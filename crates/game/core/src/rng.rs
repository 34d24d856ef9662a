//! Injectable random sources for battle simulation.
//!
//! The engine never touches a global generator: every draw goes through a
//! [`RandomSource`] supplied by the caller. [`PcgRng`] is the seedable default,
//! so a fixed seed reproduces the same battle log.

/// Source of uniformly distributed floats.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Uniform value in `[min, max)`; returns `min` when the range is empty.
    ///
    /// Always consumes one draw, so the stream position does not depend on
    /// the width of the range.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        let roll = self.next_float();
        if min >= max {
            return min;
        }
        min + (max - min) * roll
    }

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_float() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose stream is fully determined by `seed`.
    ///
    /// The seed is avalanched first so neighbouring seeds (0, 1, 2, ...)
    /// start from unrelated states.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: avalanche(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }

    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Uniform integer in `[min, max]` inclusive.
    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as u32
    }
}

impl RandomSource for PcgRng {
    fn next_float(&mut self) -> f64 {
        // 53 random bits fill the f64 mantissa exactly.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// SplitMix64 finalizer.
fn avalanche(mut hash: u64) -> u64 {
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Replays a fixed list of floats, cycling when exhausted.
///
/// Handy for pinning exact rolls in tests and tooling.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    /// Values are clamped into `[0, 1)`. An empty list behaves as `[0.0]`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values: Vec<f64> = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_float(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

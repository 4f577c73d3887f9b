//! Injectable number source for filler data.
//! Tiny, fast LCG as the default; tests plug in scripted sources.

/// Uniform integers for filler generation. Not security sensitive.
pub trait NumberSource {
    /// A value in `0..bound`. `bound` is always non-zero.
    fn below(&mut self, bound: u32) -> u32;
}

#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    /// Seeded from the wall clock; a clock before the epoch seeds with 0.
    #[must_use]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        #[allow(clippy::cast_possible_truncation)]
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self(nanos)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

impl NumberSource for Lcg {
    /// Multiply-shift reduction of the high 32 bits.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }
}

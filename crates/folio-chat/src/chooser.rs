//! Variant selection seam.
//!
//! Greeting and fallback replies come in several fixed alternatives; the
//! engine picks one uniformly. The trait lets tests substitute a
//! deterministic picker and assert membership in the known set.

use rand::Rng;

/// Picks an index into a slate of `len` fixed alternatives.
pub trait Chooser {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform random selection.
#[derive(Debug, Default)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always picks the same index (clamped to range). Test seam.
#[derive(Debug)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

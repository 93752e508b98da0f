//! Randomness port: how the secret word's index is drawn.
//!
//! Word selection is wrapped in a `delay`-constructed effect by the engine,
//! so the draw happens at execution time; injecting a deterministic picker
//! makes the whole game replayable under test.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws an index uniformly from `[0, bound)`.
///
/// `bound` is always at least 1 (the dictionary is non-empty by
/// construction), and implementations must return a value strictly below
/// it.
pub trait WordPicker: Clone + Send + 'static {
    /// Draws one index in `[0, bound)`.
    fn pick(&self, bound: usize) -> usize;
}

/// The production picker: the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl WordPicker for RandomPicker {
    fn pick(&self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// A deterministic picker: same seed, same sequence of draws.
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl SeededPicker {
    /// Creates a picker whose draws are fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl WordPicker for SeededPicker {
    fn pick(&self, bound: usize) -> usize {
        self.rng.lock().gen_range(0..bound)
    }
}

/// A picker that always returns the same index, for tests and examples.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker {
    index: usize,
}

impl FixedPicker {
    /// Creates a picker pinned to `index`; the caller keeps it below the
    /// dictionary length.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl WordPicker for FixedPicker {
    fn pick(&self, _bound: usize) -> usize {
        self.index
    }
}

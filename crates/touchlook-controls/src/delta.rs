//! Diff-and-memoize sampling shared by the accumulators.

use std::ops::Sub;

/// Remembers the last sampled value of an accumulator.
///
/// The first sample after construction or [`DeltaMemo::clear`] returns zero,
/// since there is nothing to diff against yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaMemo<T> {
    previous: Option<T>,
}

impl<T> DeltaMemo<T>
where
    T: Copy + Sub<Output = T>,
{
    /// Creates an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Returns `current - previous` and stores `current` as the new previous value.
    pub fn sample(&mut self, current: T) -> T {
        let previous = self.previous.unwrap_or(current);
        self.previous = Some(current);
        current - previous
    }

    /// Forgets the previous value.
    pub fn clear(&mut self) {
        self.previous = None;
    }
}

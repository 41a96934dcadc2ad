//! The running selection for the open turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered values eliminated against the current roll.
///
/// Cleared on every new roll and on reset. The buffer never holds more
/// values than the board has tiles, so it stays inline on the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBuffer {
    values: SmallVec<[u8; 12]>,
}

impl SelectionBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an eliminated value.
    pub fn push(&mut self, value: u8) {
        self.values.push(value);
    }

    /// Sum of all selected values.
    #[must_use]
    pub fn sum(&self) -> u16 {
        self.values.iter().map(|&v| u16::from(v)).sum()
    }

    /// Drop every selected value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Check whether nothing has been selected this turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values selected this turn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The selected values in elimination order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

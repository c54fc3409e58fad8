// SPDX-License-Identifier: MPL-2.0
//! Single-value pending buffer.
//!
//! Newer values replace older ones; nothing is ever queued or averaged.

/// Holds at most one not-yet-consumed value.
#[derive(Debug, Clone, Default)]
pub struct PendingSlot<T> {
    value: Option<T>,
    overwritten: u64,
}

impl<T> PendingSlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: None,
            overwritten: 0,
        }
    }

    /// Stores `value`, discarding whatever was pending.
    ///
    /// Returns `true` if the slot was empty before the write.
    pub fn put(&mut self, value: T) -> bool {
        let was_empty = self.value.is_none();
        if !was_empty {
            self.overwritten += 1;
        }
        self.value = Some(value);
        was_empty
    }

    /// Removes and returns the pending value.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Returns the pending value without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns true if a value is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.value.is_some()
    }

    /// Number of values discarded because a newer one arrived first.
    #[must_use]
    pub fn overwritten(&self) -> u64 {
        self.overwritten
    }
}

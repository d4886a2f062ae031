// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory diagnostic event log.
//!
//! User-facing error toasts are mirrored into this buffer so a support
//! export can show what the user saw without any persistent logging. The
//! buffer is a fixed-capacity ring: when full, pushing evicts the oldest
//! entry.

use crate::config::DIAGNOSTIC_BUFFER_CAPACITY;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Severity of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub level: Level,
    pub message: String,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    ///
    /// A capacity of zero is bumped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Iterates elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Cloneable handle to the shared event buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(DIAGNOSTIC_BUFFER_CAPACITY))),
        }
    }

    /// Records a warning event.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(DiagnosticEvent::new(Level::Warning, message));
    }

    /// Records an error event.
    pub fn log_error(&self, message: impl Into<String>) {
        self.log(DiagnosticEvent::new(Level::Error, message));
    }

    fn log(&self, event: DiagnosticEvent) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(event);
        }
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_chronological_order() {
        let mut buffer = CircularBuffer::new(4);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn push_at_capacity_evicts_oldest() {
        let mut buffer = CircularBuffer::new(2);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![2, 3]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut buffer = CircularBuffer::new(0);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn handle_records_events_through_clones() {
        let handle = DiagnosticsHandle::new();
        let clone = handle.clone();
        clone.log_error("toast failed");
        handle.log_warning("slow frame");

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, Level::Error);
        assert_eq!(events[1].level, Level::Warning);
        assert_eq!(events[0].message, "toast failed");
    }
}

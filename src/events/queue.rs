//! Ordered event buffer.

use super::event::Event;

/// FIFO buffer of events accumulated during one engine call.
///
/// The facade fills it while resolving a move and drains it into the
/// returned outcome, so it is empty between calls.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Append events in order.
    pub fn extend(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at queued events without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Remove and return every queued event in insertion order.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Discard all queued events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

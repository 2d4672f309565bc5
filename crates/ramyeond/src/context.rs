//! Single-slot conversational context.
//!
//! One process-wide (name, raw time text) pair carried from the previous
//! turn. Turns snapshot the slot before classifying and store after
//! dispatch; the lock is never held across an await, so two in-flight
//! turns interleave with last-writer-wins semantics. That race is the
//! documented behavior of the single shared slot, not per-caller state.

use std::sync::Mutex;

/// Value read by the classifier at the start of a turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextSnapshot {
    pub last_name: String,
    pub last_time_text: String,
}

/// The slot itself. Owned by the orchestrator.
#[derive(Debug, Default)]
pub struct ContextSlot {
    inner: Mutex<ContextSnapshot>,
}

impl ContextSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ContextSnapshot {
        self.inner.lock().expect("context lock poisoned").clone()
    }

    pub fn store(&self, name: &str, time_text: &str) {
        let mut slot = self.inner.lock().expect("context lock poisoned");
        slot.last_name = name.to_string();
        slot.last_time_text = time_text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_overwrites() {
        let slot = ContextSlot::new();
        assert_eq!(slot.snapshot(), ContextSnapshot::default());

        slot.store("신라면", "4분 30초");
        assert_eq!(slot.snapshot().last_name, "신라면");

        slot.store("너구리", "");
        let snap = slot.snapshot();
        assert_eq!(snap.last_name, "너구리");
        assert_eq!(snap.last_time_text, "");
    }
}

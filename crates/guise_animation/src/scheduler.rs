//! Bounce scheduler
//!
//! Holds all live bounce sequences and advances them each tick. The caller
//! (the launch-bounce filter) maps [`BounceId`]s back to actors and unmarks
//! them when their sequence finishes.

use crate::bounce::BounceSequence;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct BounceId;
}

/// Ticks all live bounce sequences.
pub struct BounceScheduler {
    sequences: SlotMap<BounceId, BounceSequence>,
}

impl BounceScheduler {
    pub fn new() -> Self {
        Self {
            sequences: SlotMap::with_key(),
        }
    }

    pub fn add(&mut self, sequence: BounceSequence) -> BounceId {
        self.sequences.insert(sequence)
    }

    /// Drop a sequence before it finishes (e.g. filter deactivation).
    pub fn remove(&mut self, id: BounceId) -> Option<BounceSequence> {
        self.sequences.remove(id)
    }

    pub fn clear(&mut self) {
        self.sequences.clear();
    }

    /// Current scale for a live sequence.
    pub fn scale(&self, id: BounceId) -> Option<f32> {
        self.sequences.get(id).map(BounceSequence::scale)
    }

    /// Advance all sequences by `dt_ms`; finished ones are removed and
    /// returned so the caller can release their actors.
    pub fn tick(&mut self, dt_ms: f32) -> Vec<BounceId> {
        let mut finished = Vec::new();
        for (id, sequence) in self.sequences.iter_mut() {
            sequence.tick(dt_ms);
            if sequence.is_finished() {
                finished.push(id);
            }
        }
        for id in &finished {
            self.sequences.remove(*id);
        }
        if !finished.is_empty() {
            tracing::trace!(count = finished.len(), "bounce sequences finished");
        }
        finished
    }

    pub fn has_active(&self) -> bool {
        !self.sequences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl Default for BounceScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounce::BounceSpec;

    #[test]
    fn finished_sequences_are_drained_exactly_once() {
        let mut scheduler = BounceScheduler::new();
        let spec = BounceSpec::new(1.3, 50, 1).unwrap();
        let id = scheduler.add(BounceSequence::new(spec));

        assert!(scheduler.tick(60.0).is_empty());
        let finished = scheduler.tick(60.0);
        assert_eq!(finished, vec![id]);
        assert!(!scheduler.has_active());
        assert!(scheduler.tick(60.0).is_empty());
    }

    #[test]
    fn independent_sequences_finish_independently() {
        let mut scheduler = BounceScheduler::new();
        let short = scheduler.add(BounceSequence::new(BounceSpec::new(1.3, 10, 1).unwrap()));
        let long = scheduler.add(BounceSequence::new(BounceSpec::new(1.3, 500, 2).unwrap()));

        let finished = scheduler.tick(25.0);
        assert_eq!(finished, vec![short]);
        assert!(scheduler.scale(long).is_some());
        assert_eq!(scheduler.len(), 1);
    }
}

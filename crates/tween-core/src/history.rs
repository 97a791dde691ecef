use log::warn;

/// Starting values captured when an animation begins forward playback.
///
/// Color and scalar are only captured when the matching channel is active,
/// since reading them requires a capability or an attached cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub translation: [f32; 3],
    pub scale: [f32; 3],
    pub rotation: f32,
    pub color: Option<[f32; 4]>,
    pub scalar: Option<f32>,
}

/// Identifies the animation an entry belongs to: (step index, anim index).
pub type Slot = (usize, usize);

#[derive(Clone, Debug)]
struct Entry {
    slot: Slot,
    snapshot: Snapshot,
}

/// Record of captured starting values, one entry per forward-played
/// animation, consumed when the same animation plays backward.
///
/// Entries are keyed by animation slot rather than matched by stack order,
/// so interleaved forward/backward playback across steps cannot hand an
/// animation some other animation's starting values.
#[derive(Default)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, slot: Slot, snapshot: Snapshot) {
        self.entries.push(Entry { slot, snapshot });
    }

    /// Removes and returns the most recent entry for `slot`.
    ///
    /// `None` means the slot was never played forward (or its entry was
    /// already consumed); callers recover by capturing live values.
    pub fn pop(&mut self, slot: Slot) -> Option<Snapshot> {
        let index = self.entries.iter().rposition(|e| e.slot == slot)?;
        Some(self.entries.remove(index).snapshot)
    }

    /// Like [`pop`](Self::pop), with the underflow warning in one place.
    pub fn pop_or_warn(&mut self, slot: Slot) -> Option<Snapshot> {
        let snapshot = self.pop(slot);
        if snapshot.is_none() {
            warn!(
                "no history for step {} anim {}; restoring from live values",
                slot.0, slot.1
            );
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(x: f32) -> Snapshot {
        Snapshot {
            translation: [x, 0.0, 0.0],
            scale: [1.0; 3],
            rotation: 0.0,
            color: None,
            scalar: None,
        }
    }

    #[test]
    fn pop_matches_slot_not_order() {
        let mut history = History::new();
        history.push((0, 0), snap(1.0));
        history.push((0, 1), snap(2.0));
        history.push((0, 2), snap(3.0));

        // Consumption order does not have to mirror production order.
        assert_eq!(history.pop((0, 0)).unwrap().translation[0], 1.0);
        assert_eq!(history.pop((0, 2)).unwrap().translation[0], 3.0);
        assert_eq!(history.pop((0, 1)).unwrap().translation[0], 2.0);
        assert!(history.is_empty());
    }

    #[test]
    fn repeated_plays_pop_most_recent_first() {
        let mut history = History::new();
        history.push((3, 0), snap(1.0));
        history.push((3, 0), snap(2.0));

        assert_eq!(history.pop((3, 0)).unwrap().translation[0], 2.0);
        assert_eq!(history.pop((3, 0)).unwrap().translation[0], 1.0);
    }

    #[test]
    fn underflow_is_none() {
        let mut history = History::new();
        assert!(history.pop((0, 0)).is_none());

        history.push((1, 0), snap(1.0));
        assert!(history.pop((2, 0)).is_none());
        assert_eq!(history.len(), 1);
    }
}

use gridlock_core::Vec2;
use smallvec::SmallVec;

/// Lifecycle of one gesture, pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No active session.
    Idle,
    /// Pointer down, accumulating selections.
    Tracking,
    /// Pointer released, sequence closed. Selection stays visible until the
    /// next gesture or an explicit clear.
    Finalized,
    /// Error/reset pending; pointer input is ignored.
    Locked,
}

/// Transient state of one pointer-down-to-up cycle: the ordered,
/// duplicate-free selection and the live pointer position.
pub(crate) struct Session {
    pub phase: Phase,
    pub sequence: SmallVec<[u16; 16]>,
    pub pointer: Option<Vec2>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            sequence: SmallVec::new(),
            pointer: None,
        }
    }

    pub fn contains(&self, index: u16) -> bool {
        self.sequence.contains(&index)
    }

    pub fn last(&self) -> Option<u16> {
        self.sequence.last().copied()
    }

    /// Append if not already selected and below `cap`. Returns whether the
    /// index was appended.
    pub fn try_append(&mut self, index: u16, cap: usize) -> bool {
        if self.sequence.len() >= cap || self.contains(index) {
            return false;
        }
        self.sequence.push(index);
        true
    }

    pub fn clear(&mut self) {
        self.sequence.clear();
        self.pointer = None;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_rejects_duplicates_and_respects_cap() {
        let mut s = Session::new();
        assert!(s.try_append(1, 3));
        assert!(!s.try_append(1, 3));
        assert!(s.try_append(2, 3));
        assert!(s.try_append(3, 3));
        assert!(!s.try_append(4, 3));
        assert_eq!(s.sequence.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut s = Session::new();
        s.phase = Phase::Tracking;
        s.pointer = Some(Vec2::new(1.0, 2.0));
        s.try_append(5, 9);
        s.clear();
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.sequence.is_empty());
        assert!(s.pointer.is_none());
    }
}

//! # Undo/Redo Stack
//!
//! Snapshot history for document editing.
//!
//! ## Design
//!
//! - Every successful mutation pushes a full snapshot of the document
//! - A cursor marks the snapshot that is currently live
//! - Undo/redo move the cursor and hand back the snapshot to restore
//! - A push after an undo discards the redo branch (no history tree)
//! - The oldest snapshot is evicted once the level cap is exceeded
//! - Pushes are ignored while a restore is being replayed
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new(doc.clone());
//!
//! doc.rename("Contact");
//! stack.push(doc.clone());
//!
//! if let Some(previous) = stack.undo() {
//!     doc = previous.clone();
//! }
//! stack.finish_replay();
//! ```

/// Default number of retained snapshots
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Bounded snapshot history with a cursor
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    /// Snapshots, oldest first
    snapshots: Vec<T>,

    /// Index of the live snapshot
    cursor: usize,

    /// Maximum number of snapshots kept (at least 1)
    max_levels: usize,

    /// Set between undo/redo and `finish_replay`
    replaying: bool,
}

impl<T: Clone> UndoStack<T> {
    /// Create a stack seeded with `initial` and the default cap (50)
    pub fn new(initial: T) -> Self {
        Self::with_max_levels(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a stack with a custom cap
    pub fn with_max_levels(initial: T, max_levels: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_levels: max_levels.max(1),
            replaying: false,
        }
    }

    /// Record a new snapshot as the live state
    pub fn push(&mut self, snapshot: T) {
        if self.replaying {
            return;
        }

        // New action invalidates the future
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);

        // Trim if exceeded max levels
        if self.snapshots.len() > self.max_levels {
            let excess = self.snapshots.len() - self.max_levels;
            self.snapshots.drain(..excess);
        }

        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back. Returns the snapshot to restore and enters replay mode.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.replaying = true;
        self.snapshots.get(self.cursor)
    }

    /// Step forward. Returns the snapshot to restore and enters replay mode.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.replaying = true;
        self.snapshots.get(self.cursor)
    }

    /// Leave replay mode once the restored snapshot is live
    pub fn finish_replay(&mut self) {
        self.replaying = false;
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Drop all history and seed it with `initial`
    pub fn reset(&mut self, initial: T) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.cursor = 0;
        self.replaying = false;
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.snapshots.len() - 1 - self.cursor
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.max_levels
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> Option<&T> {
        self.snapshots.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay_undo(stack: &mut UndoStack<u32>) -> Option<u32> {
        let value = stack.undo().copied();
        stack.finish_replay();
        value
    }

    fn replay_redo(stack: &mut UndoStack<u32>) -> Option<u32> {
        let value = stack.redo().copied();
        stack.finish_replay();
        value
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new(0u32);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(stack.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_push_undo_redo() {
        let mut stack = UndoStack::new(0u32);
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.undo_levels(), 2);
        assert_eq!(replay_undo(&mut stack), Some(1));
        assert_eq!(replay_undo(&mut stack), Some(0));
        assert_eq!(replay_undo(&mut stack), None);
        assert_eq!(stack.redo_levels(), 2);

        assert_eq!(replay_redo(&mut stack), Some(1));
        assert_eq!(replay_redo(&mut stack), Some(2));
        assert_eq!(replay_redo(&mut stack), None);
        assert_eq!(stack.current(), Some(&2));
    }

    #[test]
    fn test_new_push_clears_redo() {
        let mut stack = UndoStack::new(0u32);
        stack.push(1);
        stack.push(2);
        replay_undo(&mut stack);
        replay_undo(&mut stack);
        assert_eq!(stack.redo_levels(), 2);

        stack.push(10);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_redo());
        assert_eq!(stack.len(), 2);
        assert_eq!(replay_undo(&mut stack), Some(0));
    }

    #[test]
    fn test_push_ignored_while_replaying() {
        let mut stack = UndoStack::new(0u32);
        stack.push(1);

        assert_eq!(stack.undo().copied(), Some(0));
        assert!(stack.is_replaying());
        stack.push(99);
        stack.finish_replay();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.redo_levels(), 1);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut stack = UndoStack::with_max_levels(0u32, 50);
        for i in 1..=60 {
            stack.push(i);
        }

        assert_eq!(stack.len(), 50);
        assert_eq!(stack.cursor(), 49);
        assert_eq!(stack.current(), Some(&60));

        let mut undone = 0;
        while replay_undo(&mut stack).is_some() {
            undone += 1;
        }
        assert_eq!(undone, 49);
        // 0..=10 were evicted
        assert_eq!(stack.current(), Some(&11));
    }

    #[test]
    fn test_reset() {
        let mut stack = UndoStack::with_max_levels(0u32, 0);
        assert_eq!(stack.limit(), 1);
        stack.push(1);
        assert_eq!(stack.len(), 1);

        stack.reset(7);
        assert_eq!(stack.current(), Some(&7));
        assert!(!stack.can_undo());
    }
}

//! Snapshot-based undo/redo over the layered canvas.
//!
//! One snapshot is taken per gesture (a stroke, a fill, a layer action), not
//! per pixel. A 64x64 two-layer snapshot is small enough that full copies
//! keep the implementation exact and simple.

use tracing::debug;

use crate::canvas::LayeredCanvas;
use crate::constants::DEFAULT_UNDO_DEPTH;
use crate::surface::PixelGrid;

/// Immutable full copy of both canvas layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    layers: [PixelGrid; 2],
}

impl LayeredCanvas {
    /// Capture both layers
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            layers: self.layers.clone(),
        }
    }

    /// Whether the canvas currently equals a snapshot
    pub fn matches(&self, snapshot: &HistorySnapshot) -> bool {
        self.layers == snapshot.layers
    }

    /// Replace both layers with a snapshot
    pub(crate) fn restore(&mut self, snapshot: HistorySnapshot) {
        self.layers = snapshot.layers;
        self.mark_all_dirty();
    }
}

/// Undo and redo stacks of canvas snapshots
#[derive(Debug, Clone)]
pub struct HistoryManager {
    /// Undo stack (most recent at end)
    undo_stack: Vec<HistorySnapshot>,
    /// Redo stack (most recent at end)
    redo_stack: Vec<HistorySnapshot>,
    /// Maximum undo levels; the oldest snapshot is dropped beyond this
    max_depth: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_DEPTH)
    }
}

impl HistoryManager {
    /// Create an empty history keeping at most `max_depth` undo levels.
    /// A depth of zero is treated as one.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Snapshot the canvas before a gesture mutates it.
    ///
    /// Clears the redo stack.
    pub fn begin_gesture(&mut self, canvas: &LayeredCanvas) {
        self.undo_stack.push(canvas.snapshot());
        self.redo_stack.clear();

        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }

        debug!(
            "HistoryManager::begin_gesture: {} undo levels",
            self.undo_stack.len()
        );
    }

    /// Drop the snapshot taken by the last `begin_gesture` if the gesture
    /// left the canvas unchanged. Returns true if one was dropped.
    pub fn discard_if_unchanged(&mut self, canvas: &LayeredCanvas) -> bool {
        match self.undo_stack.last() {
            Some(last) if canvas.matches(last) => {
                self.undo_stack.pop();
                debug!("HistoryManager: dropped snapshot of no-op gesture");
                true
            }
            _ => false,
        }
    }

    /// Restore the most recent snapshot.
    ///
    /// Returns true if an undo was performed, false if no undo available
    pub fn undo(&mut self, canvas: &mut LayeredCanvas) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            debug!("Undo: no entries available");
            return false;
        };
        self.redo_stack.push(canvas.snapshot());
        canvas.restore(snapshot);
        debug!(
            "Undo: {} undo / {} redo levels remain",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns true if a redo was performed, false if no redo available
    pub fn redo(&mut self, canvas: &mut LayeredCanvas) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            debug!("Redo: no entries available");
            return false;
        };
        self.undo_stack.push(canvas.snapshot());
        canvas.restore(snapshot);
        true
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Forget all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

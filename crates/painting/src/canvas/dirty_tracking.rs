//! Dirty region tracking for deferred texture upload

use tracing::debug;

use super::LayeredCanvas;
use crate::constants::SKIN_SIZE;
use crate::types::Rect;

impl LayeredCanvas {
    /// Grow the dirty rect to include a pixel
    #[inline]
    pub(crate) fn mark_dirty(&mut self, x: i32, y: i32) {
        self.mark_region_dirty(Rect::new(x, y, 1, 1));
    }

    /// Grow the dirty rect to include a region
    pub(crate) fn mark_region_dirty(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.dirty = Some(match self.dirty {
            Some(current) => current.union(&rect),
            None => rect,
        });
    }

    pub(crate) fn mark_all_dirty(&mut self) {
        let size = SKIN_SIZE as i32;
        self.dirty = Some(Rect::new(0, 0, size, size));
    }

    /// Whether any pixel changed since the last [`take_dirty`](Self::take_dirty)
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Take the bounding rect of changed pixels and reset tracking.
    ///
    /// Hosts call this once per display frame to decide whether the texture
    /// needs re-uploading. Pixel data is always current regardless.
    pub fn take_dirty(&mut self) -> Option<Rect> {
        let dirty = self.dirty.take();
        if let Some(rect) = dirty {
            debug!(
                "take_dirty: ({}, {}) {}x{}",
                rect.x, rect.y, rect.w, rect.h
            );
        }
        dirty
    }
}

//! Painting session: one open skin document and its tool state.
//!
//! The session ties the pieces together:
//! - Input arrives as 2D sheet pixels or 3D surface hits
//! - [`SurfaceProjector`] maps hits onto the sheet
//! - [`BrushEngine`] mutates the [`LayeredCanvas`]
//! - [`HistoryManager`] snapshots around gesture boundaries
//!
//! Hosts own a session and pass it by reference to their UI layer. There is
//! no process-wide state.

mod stroke;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::brush::{Brush, BrushEngine, EdgeFalloff};
use crate::canvas::LayeredCanvas;
use crate::compositor::{self, FlatRaster};
use crate::constants::DEFAULT_UNDO_DEPTH;
use crate::history::HistoryManager;
use crate::projection::SurfaceProjector;
use crate::template::default_template;
use crate::types::{BodyPart, Face, Layer, ModelVariant, Rect, Rgba};

pub use stroke::ApplyOutcome;

/// Active tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Paint,
    Erase,
    Fill,
    /// Eyedropper; adopts the picked color unless it is `Clear`
    Pick,
}

/// Undo/redo availability for enabling host controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Options fixed when a session is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    pub variant: ModelVariant,
    pub undo_depth: usize,
    pub falloff: EdgeFalloff,
    /// Bound fills to the footprint of the part under the seed
    pub part_scoped_fill: bool,
    /// Let the hat and jacket shells take part in model ray casts
    pub include_overlays: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            variant: ModelVariant::Standard,
            undo_depth: DEFAULT_UNDO_DEPTH,
            falloff: EdgeFalloff::Hard,
            part_scoped_fill: true,
            include_overlays: true,
        }
    }
}

/// Last stamp center of the open gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StrokePoint {
    pub x: i32,
    pub y: i32,
    /// Part and face of a 3D hit; `None` for 2D input
    pub surface: Option<(BodyPart, Face)>,
}

/// One open skin document
#[derive(Debug, Clone)]
pub struct PaintingSession {
    pub(crate) canvas: LayeredCanvas,
    pub(crate) history: HistoryManager,
    pub(crate) engine: BrushEngine,
    pub(crate) projector: SurfaceProjector,
    pub(crate) options: SessionOptions,
    pub(crate) brush: Brush,
    pub(crate) tool: Tool,
    pub(crate) mirror: bool,
    /// Parts that may be edited; `None` means all
    pub(crate) isolation: Option<HashSet<BodyPart>>,
    pub(crate) gesture_open: bool,
    pub(crate) last_point: Option<StrokePoint>,
}

impl PaintingSession {
    /// Open a session on the default template
    pub fn new(options: SessionOptions) -> Self {
        Self::with_canvas(default_template(options.variant), options)
    }

    /// Open a session on an existing canvas
    pub fn with_canvas(canvas: LayeredCanvas, options: SessionOptions) -> Self {
        debug!("PaintingSession: opened {:?}", options);
        Self {
            canvas,
            history: HistoryManager::new(options.undo_depth),
            engine: BrushEngine::new(options.variant, options.falloff),
            projector: SurfaceProjector::new(options.variant),
            options,
            brush: Brush::default(),
            tool: Tool::default(),
            mirror: false,
            isolation: None,
            gesture_open: false,
            last_point: None,
        }
    }

    pub fn canvas(&self) -> &LayeredCanvas {
        &self.canvas
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn variant(&self) -> ModelVariant {
        self.options.variant
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.brush.color = color;
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.brush.radius = radius;
    }

    pub fn set_layer(&mut self, layer: Layer) {
        self.brush.layer = layer;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn mirror(&self) -> bool {
        self.mirror
    }

    pub fn set_mirror(&mut self, enabled: bool) {
        self.mirror = enabled;
    }

    /// Restrict edits to a set of parts. `None` lifts the restriction.
    pub fn set_isolation<I>(&mut self, parts: Option<I>)
    where
        I: IntoIterator<Item = BodyPart>,
    {
        self.isolation = parts.map(|p| p.into_iter().collect());
        debug!("PaintingSession: isolation {:?}", self.isolation);
    }

    pub fn isolation(&self) -> Option<&HashSet<BodyPart>> {
        self.isolation.as_ref()
    }

    /// Undo the last gesture. An open gesture is closed first.
    pub fn undo(&mut self) -> bool {
        if self.gesture_open {
            self.end_gesture();
        }
        self.history.undo(&mut self.canvas)
    }

    /// Redo the last undone gesture
    pub fn redo(&mut self) -> bool {
        if self.gesture_open {
            self.end_gesture();
        }
        self.history.redo(&mut self.canvas)
    }

    pub fn history_state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Flatten the canvas for display or export
    pub fn render(&self) -> FlatRaster {
        compositor::render(&self.canvas)
    }

    /// Take the region changed since the last call
    pub fn take_dirty(&mut self) -> Option<Rect> {
        self.canvas.take_dirty()
    }

    /// Flip a whole layer left-right as one undoable action
    pub fn mirror_layer(&mut self, layer: Layer) -> bool {
        self.discrete_action(|canvas| canvas.mirror_horizontal(layer))
    }

    /// Clear a whole layer as one undoable action
    pub fn clear_layer(&mut self, layer: Layer) -> bool {
        self.discrete_action(|canvas| canvas.clear_layer(layer))
    }

    fn discrete_action(&mut self, action: impl FnOnce(&mut LayeredCanvas)) -> bool {
        if self.gesture_open {
            self.end_gesture();
        }
        self.begin_gesture();
        action(&mut self.canvas);
        self.end_gesture()
    }
}

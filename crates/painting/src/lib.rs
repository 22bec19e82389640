//! Skinbox painting engine - a two-layer 64x64 character skin
//!
//! This crate provides the core of the skin editor:
//! - [`atlas`] - Static body part layout on the skin sheet
//! - [`canvas`] - Base and Overlay pixel layers with fills and dirty tracking
//! - [`projection`] - Mapping of 3D surface hits onto sheet pixels
//! - [`raycast`] - Reference hit test against the part boxes
//! - [`brush`] - Paint, erase, fill, pick and mirror operations
//! - [`history`] - Snapshot undo/redo per gesture
//! - [`compositor`] - Flattening of the layers into one raster
//! - [`session`] - One open document with its tool state

pub mod atlas;
pub mod brush;
pub mod canvas;
pub mod compositor;
pub mod constants;
pub mod history;
pub mod projection;
pub mod raycast;
pub mod session;
pub mod surface;
pub mod template;
pub mod types;
pub mod validation;

pub use brush::*;
pub use canvas::*;
pub use compositor::*;
pub use constants::*;
pub use history::*;
pub use projection::*;
pub use session::*;
pub use surface::*;
pub use template::default_template;
pub use types::*;
pub use validation::*;

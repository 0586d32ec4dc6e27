//! Interactive region selection.
//!
//! [`SelectionSession`] is the toolkit-free drag state machine,
//! [`render_overlay`] draws one frame of it with cairo, and
//! [`SelectionOverlay`] puts both on a full-screen GTK surface.

pub mod geometry;
pub mod overlay;
pub mod render;
pub mod state;

pub use geometry::{Point, Rect, Selection, SurfaceTransform};
pub use overlay::SelectionOverlay;
pub use render::{render_overlay, OverlayView};
pub use state::{DragState, SelectionOutcome, SelectionSession};

//! Drag state machine behind the selection overlay.
//!
//! The session knows nothing about GTK: the overlay window feeds it pointer
//! and key events and forwards whatever outcome comes back. Once an outcome
//! has been produced every further event is ignored, which is what makes the
//! overlay's completion exactly-once.

use log::debug;

use super::geometry::{Point, Rect, Selection};

/// Where the overlay is in its lifecycle
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// No button held, nothing selected yet
    #[default]
    Idle,
    /// Primary button held, selection follows the pointer
    Drawing,
    /// An outcome has been emitted; the surface is closing
    Finished,
}

/// Result of one overlay session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Normalized rectangle, in surface coordinates until the overlay maps it
    Selected(Rect),
    Cancelled,
}

/// One interactive selection, from surface creation to outcome.
#[derive(Default, Clone, Debug)]
pub struct SelectionSession {
    state: DragState,
    selection: Option<Selection>,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The rectangle to render, if a drag has started
    pub fn current_rect(&self) -> Option<Rect> {
        match self.state {
            DragState::Drawing => self.selection.map(|sel| sel.rectangle()),
            _ => None,
        }
    }

    /// Primary button went down. Returns true when a redraw is needed.
    pub fn press(&mut self, at: Point) -> bool {
        if self.state != DragState::Idle {
            return false;
        }
        debug!("Selection started at ({}, {})", at.x, at.y);
        self.selection = Some(Selection::new(at));
        self.state = DragState::Drawing;
        true
    }

    /// Pointer moved. Returns true when a redraw is needed.
    pub fn motion(&mut self, to: Point) -> bool {
        if self.state != DragState::Drawing {
            return false;
        }
        match self.selection.as_mut() {
            Some(sel) => {
                sel.update_end(to);
                true
            }
            None => false,
        }
    }

    /// Primary button released.
    pub fn release(&mut self, at: Point) -> Option<SelectionOutcome> {
        if self.state != DragState::Drawing {
            return None;
        }
        let mut sel = self.selection.take()?;
        sel.update_end(at);
        self.state = DragState::Finished;

        let rect = sel.rectangle();
        debug!(
            "Selection finished: {}x{} at ({}, {})",
            rect.width, rect.height, rect.x, rect.y
        );
        Some(SelectionOutcome::Selected(rect))
    }

    /// Escape pressed, valid in any state before an outcome.
    pub fn cancel(&mut self) -> Option<SelectionOutcome> {
        if self.state == DragState::Finished {
            return None;
        }
        debug!("Selection cancelled");
        self.selection = None;
        self.state = DragState::Finished;
        Some(SelectionOutcome::Cancelled)
    }

    /// The surface is going away without a completed drag.
    pub fn close(&mut self) -> Option<SelectionOutcome> {
        self.cancel()
    }
}

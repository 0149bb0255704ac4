// SPDX-License-Identifier: MPL-2.0
//! Selection rectangle state and drag rules.
//!
//! [`SelectionState`] owns the rectangle for one editing session and routes
//! gesture events through the pure functions of [`controller`].

pub mod controller;

pub use controller::{
    apply_drag, default_selection, fit_into, hit_test, move_body, resize_from_corner, Corner,
    DragOrigin, HANDLE_SIZE, MIN_SIZE,
};

use crate::domain::geometry::{CanvasBounds, DragDelta, Rect};

/// Selection of one editing session.
///
/// The rectangle only exists once the canvas has been measured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    bounds: Option<CanvasBounds>,
    rect: Option<Rect>,
    drag: Option<DragOrigin>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    #[must_use]
    pub fn bounds(&self) -> Option<CanvasBounds> {
        self.bounds
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Records the canvas size.
    ///
    /// The first measurement seeds the default selection; later ones re-fit
    /// the existing rectangle. Returns `true` when anything changed.
    pub fn observe_bounds(&mut self, bounds: CanvasBounds) -> bool {
        if self.bounds == Some(bounds) {
            return false;
        }
        self.bounds = Some(bounds);
        self.rect = Some(match self.rect {
            Some(rect) => fit_into(rect, bounds),
            None => default_selection(bounds),
        });
        self.drag = None;
        true
    }

    /// Starts a gesture at a canvas-local point. Returns what was grabbed.
    pub fn begin_drag(&mut self, px: f32, py: f32) -> Option<DragOrigin> {
        self.drag = self.rect.and_then(|rect| hit_test(rect, px, py));
        self.drag
    }

    /// Applies one incremental gesture step. Ignored when no gesture is active.
    pub fn drag_by(&mut self, delta: DragDelta) {
        if let (Some(origin), Some(rect), Some(bounds)) = (self.drag, self.rect, self.bounds) {
            self.rect = Some(apply_drag(rect, origin, delta, bounds));
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Geometry primitives shared by the selection and capture rules.
//!
//! Two coordinate spaces coexist:
//! - [`Rect`] and [`CanvasBounds`] live in canvas-local logical pixels (`f32`).
//! - [`PixelRect`] lives in physical window pixels and is edge based
//!   (`left/top/right/bottom`), which is what screen capture consumes.

/// Tolerance used when checking containment of float rectangles.
const CONTAINMENT_EPSILON: f32 = 1e-3;

// =============================================================================
// Rect
// =============================================================================

/// Axis-aligned rectangle in canvas-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn top(self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Returns whether the point lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(self, px: f32, py: f32) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }

    /// Returns this rectangle shifted by the given offset.
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

// =============================================================================
// CanvasBounds
// =============================================================================

/// Size of the editing canvas. Fixed for the duration of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns whether `rect` lies fully inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn contains_rect(self, rect: Rect) -> bool {
        rect.left() >= -CONTAINMENT_EPSILON
            && rect.top() >= -CONTAINMENT_EPSILON
            && rect.right() <= self.width + CONTAINMENT_EPSILON
            && rect.bottom() <= self.height + CONTAINMENT_EPSILON
    }

    /// Returns whether the canvas has a usable (positive) area.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

// =============================================================================
// DragDelta
// =============================================================================

/// Incremental movement reported by a continuous drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragDelta {
    pub dx: f32,
    pub dy: f32,
}

impl DragDelta {
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

// =============================================================================
// PixelRect
// =============================================================================

/// Edge-based rectangle in physical window pixels.
///
/// `right` and `bottom` are exclusive, so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin with the given size.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturating_i32(width), saturating_i32(height))
    }

    /// Converts a logical rectangle to physical pixels, rounding each edge.
    #[must_use]
    pub fn from_logical(rect: Rect, scale: f32) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let round = |v: f32| (v * scale).round() as i32;
        Self::new(
            round(rect.left()),
            round(rect.top()),
            round(rect.right()),
            round(rect.bottom()),
        )
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// A rectangle with zero or negative area covers no pixel.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_follow_position_and_size() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert!(rect.contains(10.0, 60.0));
        assert!(!rect.contains(41.0, 30.0));
    }

    #[test]
    fn canvas_containment_tolerates_float_noise() {
        let bounds = CanvasBounds::new(100.0, 100.0);
        assert!(bounds.contains_rect(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(bounds.contains_rect(Rect::new(0.0, 0.0, 100.000_1, 100.0)));
        assert!(!bounds.contains_rect(Rect::new(-1.0, 0.0, 50.0, 50.0)));
        assert!(!bounds.contains_rect(Rect::new(60.0, 0.0, 50.0, 50.0)));
    }

    #[test]
    fn pixel_rect_from_logical_rounds_each_edge() {
        let rect = Rect::new(10.2, 0.6, 99.5, 50.0);
        let px = PixelRect::from_logical(rect, 2.0);
        assert_eq!(px, PixelRect::new(20, 1, 219, 101));
        assert_eq!(px.width(), 199);
    }

    #[test]
    fn pixel_rect_empty_when_inverted_or_flat() {
        assert!(PixelRect::new(10, 10, 10, 20).is_empty());
        assert!(PixelRect::new(10, 10, 5, 20).is_empty());
        assert!(!PixelRect::from_size(1, 1).is_empty());
    }
}

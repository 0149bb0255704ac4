// SPDX-License-Identifier: MPL-2.0
//! Drag geometry for the selection rectangle.
//!
//! Every function here is total: a live gesture can only produce deltas, so
//! there is nothing to reject, only to clamp. Positions are clamped towards
//! the canvas origin and sizes towards the canvas extent, so even a canvas
//! smaller than [`MIN_SIZE`] never yields a rectangle outside the canvas.

use crate::domain::geometry::{CanvasBounds, DragDelta, Rect};

/// Smallest width and height a selection can be resized to, in canvas units.
pub const MIN_SIZE: f32 = 100.0;

/// Side of the square hit area centred on each corner.
pub const HANDLE_SIZE: f32 = 32.0;

/// Corner handle used to resize the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in hit-test priority order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Position of this corner on `rect`.
    #[must_use]
    pub fn point_on(self, rect: Rect) -> (f32, f32) {
        match self {
            Corner::TopLeft => (rect.left(), rect.top()),
            Corner::TopRight => (rect.right(), rect.top()),
            Corner::BottomLeft => (rect.left(), rect.bottom()),
            Corner::BottomRight => (rect.right(), rect.bottom()),
        }
    }
}

/// What a drag gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragOrigin {
    /// The selection body: the gesture moves the rectangle.
    Body,
    /// A corner handle: the gesture resizes the rectangle.
    Corner(Corner),
}

/// Like `f32::clamp`, but an inverted range resolves to `lo` instead of panicking.
fn clamp_low(value: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

/// Like `f32::clamp`, but an inverted range resolves to `hi` instead of panicking.
fn clamp_high(value: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi {
        hi
    } else {
        value.clamp(lo, hi)
    }
}

/// Moves the whole rectangle, keeping it inside the canvas. Size never changes.
#[must_use]
pub fn move_body(current: Rect, delta: DragDelta, bounds: CanvasBounds) -> Rect {
    Rect {
        x: clamp_low(current.x + delta.dx, 0.0, bounds.width - current.width),
        y: clamp_low(current.y + delta.dy, 0.0, bounds.height - current.height),
        ..current
    }
}

/// Resizes the rectangle by dragging one corner; the opposite edges stay put.
#[must_use]
pub fn resize_from_corner(
    current: Rect,
    corner: Corner,
    delta: DragDelta,
    bounds: CanvasBounds,
) -> Rect {
    let moved_left = || clamp_low(current.x + delta.dx, 0.0, current.right() - MIN_SIZE);
    let moved_top = || clamp_low(current.y + delta.dy, 0.0, current.bottom() - MIN_SIZE);
    let grown_width = || clamp_high(current.width + delta.dx, MIN_SIZE, bounds.width - current.x);
    let grown_height =
        || clamp_high(current.height + delta.dy, MIN_SIZE, bounds.height - current.y);

    match corner {
        Corner::TopLeft => {
            let left = moved_left();
            let top = moved_top();
            Rect::new(left, top, current.right() - left, current.bottom() - top)
        }
        Corner::TopRight => {
            let top = moved_top();
            Rect::new(current.x, top, grown_width(), current.bottom() - top)
        }
        Corner::BottomLeft => {
            let left = moved_left();
            Rect::new(left, current.y, current.right() - left, grown_height())
        }
        Corner::BottomRight => Rect::new(current.x, current.y, grown_width(), grown_height()),
    }
}

/// Routes a drag step to [`move_body`] or [`resize_from_corner`].
#[must_use]
pub fn apply_drag(
    current: Rect,
    origin: DragOrigin,
    delta: DragDelta,
    bounds: CanvasBounds,
) -> Rect {
    match origin {
        DragOrigin::Body => move_body(current, delta, bounds),
        DragOrigin::Corner(corner) => resize_from_corner(current, corner, delta, bounds),
    }
}

/// Finds what a press at `(px, py)` grabs. Handles take priority over the body.
#[must_use]
pub fn hit_test(rect: Rect, px: f32, py: f32) -> Option<DragOrigin> {
    let half = HANDLE_SIZE / 2.0;
    let on_handle = Corner::ALL.into_iter().find(|corner| {
        let (cx, cy) = corner.point_on(rect);
        (px - cx).abs() <= half && (py - cy).abs() <= half
    });

    match on_handle {
        Some(corner) => Some(DragOrigin::Corner(corner)),
        None if rect.contains(px, py) => Some(DragOrigin::Body),
        None => None,
    }
}

/// Initial selection for a freshly measured canvas: half the width, 40% of
/// the height, placed at (25%, 30%).
#[must_use]
pub fn default_selection(bounds: CanvasBounds) -> Rect {
    fit_into(
        Rect::new(
            bounds.width * 0.25,
            bounds.height * 0.3,
            bounds.width * 0.5,
            bounds.height * 0.4,
        ),
        bounds,
    )
}

/// Re-seats a rectangle inside new bounds, growing it to [`MIN_SIZE`] where
/// the canvas allows and shrinking it where the canvas is too small.
#[must_use]
pub fn fit_into(rect: Rect, bounds: CanvasBounds) -> Rect {
    let width = clamp_high(rect.width, MIN_SIZE, bounds.width).max(0.0);
    let height = clamp_high(rect.height, MIN_SIZE, bounds.height).max(0.0);
    Rect {
        x: clamp_low(rect.x, 0.0, bounds.width - width),
        y: clamp_low(rect.y, 0.0, bounds.height - height),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: CanvasBounds = CanvasBounds::new(1000.0, 2000.0);
    const START: Rect = Rect::new(250.0, 300.0, 500.0, 800.0);

    fn any_origin() -> impl Strategy<Value = DragOrigin> {
        prop_oneof![
            Just(DragOrigin::Body),
            Just(DragOrigin::Corner(Corner::TopLeft)),
            Just(DragOrigin::Corner(Corner::TopRight)),
            Just(DragOrigin::Corner(Corner::BottomLeft)),
            Just(DragOrigin::Corner(Corner::BottomRight)),
        ]
    }

    fn any_corner() -> impl Strategy<Value = Corner> {
        prop::sample::select(Corner::ALL.to_vec())
    }

    fn drag_delta(range: f32) -> impl Strategy<Value = DragDelta> {
        (-range..range, -range..range).prop_map(|(dx, dy)| DragDelta::new(dx, dy))
    }

    /// A canvas large enough for the minimum selection, and a valid
    /// selection inside it.
    fn canvas_and_rect() -> impl Strategy<Value = (CanvasBounds, Rect)> {
        (MIN_SIZE..3000.0f32, MIN_SIZE..3000.0f32)
            .prop_map(|(width, height)| CanvasBounds::new(width, height))
            .prop_flat_map(|bounds| {
                let rect = (0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0, 0.0f32..=1.0).prop_map(
                    move |(fw, fh, fx, fy)| {
                        let width = MIN_SIZE + fw * (bounds.width - MIN_SIZE);
                        let height = MIN_SIZE + fh * (bounds.height - MIN_SIZE);
                        Rect::new(
                            fx * (bounds.width - width),
                            fy * (bounds.height - height),
                            width,
                            height,
                        )
                    },
                );
                (Just(bounds), rect)
            })
    }

    /// Float edges drift by a few ulps over long gestures.
    const TOLERANCE: f32 = 0.01;

    fn inside(rect: Rect, bounds: CanvasBounds) -> bool {
        rect.left() >= -TOLERANCE
            && rect.top() >= -TOLERANCE
            && rect.right() <= bounds.width + TOLERANCE
            && rect.bottom() <= bounds.height + TOLERANCE
    }

    fn assert_invariants(rect: Rect, bounds: CanvasBounds) {
        assert!(inside(rect, bounds), "{rect:?} escaped {bounds:?}");
        assert!(rect.width >= MIN_SIZE - TOLERANCE, "{rect:?} too narrow");
        assert!(rect.height >= MIN_SIZE - TOLERANCE, "{rect:?} too short");
    }

    #[test]
    fn move_body_clamps_to_right_edge() {
        let moved = move_body(START, DragDelta::new(900.0, 0.0), BOUNDS);
        assert_eq!(moved, Rect::new(500.0, 300.0, 500.0, 800.0));
    }

    #[test]
    fn move_body_clamps_to_origin() {
        let moved = move_body(START, DragDelta::new(-5000.0, -5000.0), BOUNDS);
        assert_eq!(moved, Rect::new(0.0, 0.0, 500.0, 800.0));
    }

    #[test]
    fn bottom_right_shrink_stops_at_min_size() {
        let resized =
            resize_from_corner(START, Corner::BottomRight, DragDelta::new(-1000.0, 0.0), BOUNDS);
        assert_eq!(resized, Rect::new(250.0, 300.0, 100.0, 800.0));
    }

    #[test]
    fn bottom_right_growth_stops_at_canvas() {
        let resized =
            resize_from_corner(START, Corner::BottomRight, DragDelta::new(5000.0, 5000.0), BOUNDS);
        assert_eq!(resized, Rect::new(250.0, 300.0, 750.0, 1700.0));
    }

    #[test]
    fn top_left_keeps_bottom_right_corner_fixed() {
        let resized =
            resize_from_corner(START, Corner::TopLeft, DragDelta::new(-100.0, 50.0), BOUNDS);
        assert_eq!(resized, Rect::new(150.0, 350.0, 600.0, 750.0));
        assert_eq!(resized.right(), START.right());
        assert_eq!(resized.bottom(), START.bottom());
    }

    #[test]
    fn top_left_shrink_stops_at_min_size() {
        let resized =
            resize_from_corner(START, Corner::TopLeft, DragDelta::new(2000.0, 2000.0), BOUNDS);
        assert_eq!(resized.width, MIN_SIZE);
        assert_eq!(resized.height, MIN_SIZE);
        assert_eq!(resized.right(), START.right());
        assert_eq!(resized.bottom(), START.bottom());
    }

    #[test]
    fn top_right_keeps_left_and_bottom_fixed() {
        let resized =
            resize_from_corner(START, Corner::TopRight, DragDelta::new(100.0, -400.0), BOUNDS);
        assert_eq!(resized, Rect::new(250.0, 0.0, 600.0, 1100.0));
    }

    #[test]
    fn bottom_left_keeps_top_and_right_fixed() {
        let resized =
            resize_from_corner(START, Corner::BottomLeft, DragDelta::new(-300.0, 100.0), BOUNDS);
        assert_eq!(resized, Rect::new(0.0, 300.0, 750.0, 900.0));
    }

    proptest! {
        #[test]
        fn move_body_never_changes_size(
            (bounds, rect) in canvas_and_rect(),
            delta in drag_delta(4000.0)
        ) {
            let moved = move_body(rect, delta, bounds);
            prop_assert_eq!(moved.width, rect.width);
            prop_assert_eq!(moved.height, rect.height);
            prop_assert!(inside(moved, bounds), "{:?} escaped {:?}", moved, bounds);
        }

        #[test]
        fn resizing_never_moves_non_adjacent_edges(
            (bounds, rect) in canvas_and_rect(),
            corner in any_corner(),
            delta in drag_delta(4000.0)
        ) {
            let next = resize_from_corner(rect, corner, delta, bounds);
            let same = |a: f32, b: f32| (a - b).abs() < TOLERANCE;
            match corner {
                Corner::TopLeft => {
                    prop_assert!(same(next.right(), rect.right()));
                    prop_assert!(same(next.bottom(), rect.bottom()));
                }
                Corner::TopRight => {
                    prop_assert_eq!(next.left(), rect.left());
                    prop_assert!(same(next.bottom(), rect.bottom()));
                }
                Corner::BottomLeft => {
                    prop_assert!(same(next.right(), rect.right()));
                    prop_assert_eq!(next.top(), rect.top());
                }
                Corner::BottomRight => {
                    prop_assert_eq!(next.left(), rect.left());
                    prop_assert_eq!(next.top(), rect.top());
                }
            }
        }

        #[test]
        fn gesture_sequences_preserve_invariants(
            (bounds, start) in canvas_and_rect(),
            gestures in prop::collection::vec((any_origin(), drag_delta(2000.0)), 1..40)
        ) {
            let mut rect = start;
            for (origin, delta) in gestures {
                rect = apply_drag(rect, origin, delta, bounds);
                assert_invariants(rect, bounds);
            }
        }

        #[test]
        fn degenerate_canvas_keeps_selection_inside(
            width in 1.0f32..MIN_SIZE,
            height in 1.0f32..MIN_SIZE,
            gestures in prop::collection::vec((any_origin(), drag_delta(200.0)), 1..40)
        ) {
            let tiny = CanvasBounds::new(width, height);
            let mut rect = default_selection(tiny);
            prop_assert!(tiny.contains_rect(rect));

            for (origin, delta) in gestures {
                rect = apply_drag(rect, origin, delta, tiny);
                prop_assert!(inside(rect, tiny), "{:?} escaped {:?}", rect, tiny);
                prop_assert!(rect.width >= 0.0 && rect.height >= 0.0);
            }
        }
    }

    #[test]
    fn default_selection_matches_initial_layout() {
        assert_eq!(default_selection(BOUNDS), START.translated(0.0, 300.0));
    }

    #[test]
    fn default_selection_respects_min_size_on_small_canvas() {
        let rect = default_selection(CanvasBounds::new(300.0, 200.0));
        assert_eq!(rect.width, 150.0);
        assert_eq!(rect.height, MIN_SIZE);
        assert!(CanvasBounds::new(300.0, 200.0).contains_rect(rect));
    }

    #[test]
    fn fit_into_pulls_rect_back_inside_smaller_canvas() {
        let fitted = fit_into(
            Rect::new(700.0, 1500.0, 500.0, 800.0),
            CanvasBounds::new(800.0, 900.0),
        );
        assert_eq!(fitted, Rect::new(300.0, 100.0, 500.0, 800.0));
    }

    #[test]
    fn hit_test_prefers_handles_over_body() {
        let rect = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(
            hit_test(rect, 110.0, 112.0),
            Some(DragOrigin::Corner(Corner::TopLeft))
        );
        assert_eq!(
            hit_test(rect, 315.0, 85.0),
            Some(DragOrigin::Corner(Corner::TopRight))
        );
        assert_eq!(
            hit_test(rect, 90.0, 300.0),
            Some(DragOrigin::Corner(Corner::BottomLeft))
        );
        assert_eq!(
            hit_test(rect, 300.0, 300.0),
            Some(DragOrigin::Corner(Corner::BottomRight))
        );
        assert_eq!(hit_test(rect, 200.0, 200.0), Some(DragOrigin::Body));
        assert_eq!(hit_test(rect, 20.0, 20.0), None);
    }
}

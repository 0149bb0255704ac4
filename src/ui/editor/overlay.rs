// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay for moving and resizing the glass selection.
//!
//! The overlay only draws the outline of the glass panel. The blurred patch
//! itself is an image layer underneath, so what the canvas captures is the
//! same pixels the user sees.

use crate::domain::geometry::Rect;
use crate::domain::selection::{hit_test, Corner, DragOrigin};
use crate::ui::design_tokens::{opacity, palette, sizing};
use crate::ui::editor::{CanvasMessage, Message};
use iced::widget::canvas::{self, Action, Frame, Geometry, Path, Stroke};
use iced::{mouse, touch, Color, Point, Rectangle, Renderer, Size, Theme};

/// Canvas program drawing the selection outline and turning pointer input
/// into drag messages.
pub struct SelectionOverlay {
    pub selection: Option<Rect>,
    pub corner_radius: f32,
    /// Faint markers on the corner handles.
    pub show_markers: bool,
}

/// Per-widget interaction state kept by the canvas.
#[derive(Debug, Default)]
pub struct OverlayState {
    observed: Option<Rectangle>,
    last_pointer: Option<Point>,
}

/// Pointer input unified across mouse and touch.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
    Pressed(Point),
    Moved(Point),
    Released,
}

fn pointer(event: &iced::Event, cursor: mouse::Cursor) -> Option<Pointer> {
    match event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position().map(Pointer::Pressed)
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Pointer::Moved(*position))
        }
        iced::Event::Mouse(
            mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
        ) => Some(Pointer::Released),
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Pointer::Pressed(*position))
        }
        iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Pointer::Moved(*position))
        }
        iced::Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Pointer::Released)
        }
        _ => None,
    }
}

/// Corner radius as drawn: never more than half the shorter side.
fn effective_radius(rect: Rect, radius: f32) -> f32 {
    radius.min(rect.width.min(rect.height) / 2.0).max(0.0)
}

impl SelectionOverlay {
    fn grabs(&self, local: Point) -> Option<DragOrigin> {
        self.selection.and_then(|rect| hit_test(rect, local.x, local.y))
    }

    fn handle_pointer(
        &self,
        state: &mut OverlayState,
        pointer: Pointer,
        bounds: Rectangle,
    ) -> Option<Action<Message>> {
        match pointer {
            Pointer::Pressed(position) => {
                if !bounds.contains(position) {
                    return None;
                }
                let local = Point::new(position.x - bounds.x, position.y - bounds.y);
                self.grabs(local)?;
                state.last_pointer = Some(position);
                Some(
                    Action::publish(Message::Canvas(CanvasMessage::DragStarted {
                        x: local.x,
                        y: local.y,
                    }))
                    .and_capture(),
                )
            }
            Pointer::Moved(position) => {
                let last = state.last_pointer?;
                state.last_pointer = Some(position);
                Some(
                    Action::publish(Message::Canvas(CanvasMessage::Dragged {
                        dx: position.x - last.x,
                        dy: position.y - last.y,
                    }))
                    .and_capture(),
                )
            }
            Pointer::Released => {
                state.last_pointer.take()?;
                Some(Action::publish(Message::Canvas(CanvasMessage::DragEnded)).and_capture())
            }
        }
    }
}

impl canvas::Program<Message> for SelectionOverlay {
    type State = OverlayState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        // A gesture wins over a layout report; the new bounds go out with the
        // next event that is not part of one.
        if let Some(action) = pointer(event, cursor)
            .and_then(|pointer| self.handle_pointer(state, pointer, bounds))
        {
            return Some(action);
        }
        if state.observed == Some(bounds) {
            return None;
        }
        state.observed = Some(bounds);
        Some(Action::publish(Message::Canvas(
            CanvasMessage::BoundsObserved(bounds),
        )))
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(rect) = self.selection {
            let outline = Path::rounded_rectangle(
                Point::new(rect.x, rect.y),
                Size::new(rect.width, rect.height),
                effective_radius(rect, self.corner_radius).into(),
            );
            frame.stroke(
                &outline,
                Stroke::default()
                    .with_width(sizing::SELECTION_BORDER)
                    .with_color(Color {
                        a: opacity::OVERLAY_STRONG,
                        ..palette::WHITE
                    }),
            );

            if self.show_markers {
                let marker = Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                };
                for corner in Corner::ALL {
                    let (x, y) = corner.point_on(rect);
                    frame.fill(
                        &Path::circle(Point::new(x, y), sizing::HANDLE_MARKER / 2.0),
                        marker,
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.last_pointer.is_some() {
            return mouse::Interaction::Grabbing;
        }
        let Some(local) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        match self.grabs(local) {
            Some(DragOrigin::Body) => mouse::Interaction::Grab,
            Some(DragOrigin::Corner(Corner::TopLeft | Corner::BottomRight)) => {
                mouse::Interaction::ResizingDiagonallyDown
            }
            Some(DragOrigin::Corner(Corner::TopRight | Corner::BottomLeft)) => {
                mouse::Interaction::ResizingDiagonallyUp
            }
            None => mouse::Interaction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> SelectionOverlay {
        SelectionOverlay {
            selection: Some(Rect::new(100.0, 100.0, 200.0, 300.0)),
            corner_radius: 24.0,
            show_markers: true,
        }
    }

    #[test]
    fn radius_is_capped_by_short_side() {
        let rect = Rect::new(0.0, 0.0, 100.0, 400.0);
        assert_eq!(effective_radius(rect, 24.0), 24.0);
        assert_eq!(effective_radius(rect, 80.0), 50.0);
    }

    #[test]
    fn grabs_follow_hit_test() {
        let overlay = overlay();
        assert_eq!(
            overlay.grabs(Point::new(300.0, 400.0)),
            Some(DragOrigin::Corner(Corner::BottomRight))
        );
        assert_eq!(overlay.grabs(Point::new(200.0, 250.0)), Some(DragOrigin::Body));
        assert_eq!(overlay.grabs(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn no_selection_grabs_nothing() {
        let overlay = SelectionOverlay {
            selection: None,
            ..overlay()
        };
        assert_eq!(overlay.grabs(Point::new(200.0, 250.0)), None);
    }

    #[test]
    fn touch_and_mouse_map_to_same_pointer() {
        let cursor = mouse::Cursor::Available(Point::new(5.0, 6.0));
        let press = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(pointer(&press, cursor), Some(Pointer::Pressed(Point::new(5.0, 6.0))));

        let lifted = iced::Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(0),
            position: Point::ORIGIN,
        });
        assert_eq!(pointer(&lifted, cursor), Some(Pointer::Released));
    }

    #[test]
    fn first_event_reports_bounds() {
        let overlay = overlay();
        let mut state = OverlayState::default();
        let bounds = Rectangle::new(Point::new(0.0, 48.0), Size::new(540.0, 900.0));
        let event = iced::Event::Mouse(mouse::Event::CursorEntered);

        let action = canvas::Program::update(
            &overlay,
            &mut state,
            &event,
            bounds,
            mouse::Cursor::Unavailable,
        );
        assert!(action.is_some());
        assert_eq!(state.observed, Some(bounds));

        let again = canvas::Program::update(
            &overlay,
            &mut state,
            &event,
            bounds,
            mouse::Cursor::Unavailable,
        );
        assert!(again.is_none());
    }

    #[test]
    fn press_outside_selection_is_not_captured() {
        let overlay = overlay();
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(540.0, 900.0));
        let mut state = OverlayState {
            observed: Some(bounds),
            last_pointer: None,
        };
        let press = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        let action = canvas::Program::update(
            &overlay,
            &mut state,
            &press,
            bounds,
            mouse::Cursor::Available(Point::new(10.0, 10.0)),
        );
        assert!(action.is_none());
        assert!(state.last_pointer.is_none());

        let grabbed = canvas::Program::update(
            &overlay,
            &mut state,
            &press,
            bounds,
            mouse::Cursor::Available(Point::new(200.0, 250.0)),
        );
        assert!(grabbed.is_some());
        assert_eq!(state.last_pointer, Some(Point::new(200.0, 250.0)));
    }

    #[test]
    fn press_arriving_with_new_bounds_still_grabs() {
        let overlay = overlay();
        let mut state = OverlayState::default();
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(540.0, 900.0));
        let press = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        let grabbed = canvas::Program::update(
            &overlay,
            &mut state,
            &press,
            bounds,
            mouse::Cursor::Available(Point::new(200.0, 250.0)),
        );
        assert!(grabbed.is_some());
        assert_eq!(state.last_pointer, Some(Point::new(200.0, 250.0)));
        assert_eq!(state.observed, None);

        let redraw = iced::Event::Window(iced::window::Event::RedrawRequested(
            iced::time::Instant::now(),
        ));
        let reported = canvas::Program::update(
            &overlay,
            &mut state,
            &redraw,
            bounds,
            mouse::Cursor::Available(Point::new(200.0, 250.0)),
        );
        assert!(reported.is_some());
        assert_eq!(state.observed, Some(bounds));
    }
}

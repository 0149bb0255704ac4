// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::app::config::Config;
use crate::domain::selection::MIN_SIZE;
use crate::domain::style::StyleParameter;
use crate::domain::wallpaper::WallpaperId;
use iced::{Point, Size};

fn wallpaper() -> Wallpaper {
    Wallpaper {
        id: WallpaperId::new(1),
        name: "Test".to_string(),
        width: 90,
        height: 160,
    }
}

fn editor() -> State {
    let pixels = vec![90; 90 * 160 * 4];
    let source = RawImage::try_from_rgba(90, 160, pixels).expect("valid buffer");
    State::new(wallpaper(), source, GlassStyle::default())
}

fn canvas(width: f32, height: f32) -> Message {
    Message::Canvas(CanvasMessage::BoundsObserved(Rectangle::new(
        Point::new(0.0, 0.0),
        Size::new(width, height),
    )))
}

#[test]
fn measuring_the_canvas_seeds_selection_and_preview() {
    let mut state = editor();
    assert!(state.selection().rect().is_none());
    assert!(!state.has_preview());

    let event = state.update(canvas(400.0, 800.0));

    assert!(matches!(event, Event::None));
    assert_eq!(
        state.selection().rect(),
        Some(Rect::new(100.0, 240.0, 200.0, 320.0))
    );
    assert_eq!(state.canvas_rect(), Some(Rect::new(0.0, 0.0, 400.0, 800.0)));
    assert!(state.has_preview());
}

#[test]
fn empty_canvas_is_recorded_without_selection() {
    let mut state = editor();
    state.update(canvas(0.0, 0.0));
    assert!(state.selection().rect().is_none());
    assert_eq!(state.canvas_rect(), Some(Rect::new(0.0, 0.0, 0.0, 0.0)));
}

#[test]
fn body_drag_moves_selection() {
    let mut state = editor();
    state.update(canvas(400.0, 800.0));

    state.update(Message::Canvas(CanvasMessage::DragStarted { x: 200.0, y: 400.0 }));
    state.update(Message::Canvas(CanvasMessage::Dragged { dx: 30.0, dy: -40.0 }));
    state.update(Message::Canvas(CanvasMessage::DragEnded));

    assert_eq!(
        state.selection().rect(),
        Some(Rect::new(130.0, 200.0, 200.0, 320.0))
    );
    assert!(!state.selection().is_dragging());
}

#[test]
fn corner_drag_stops_at_minimum_size() {
    let mut state = editor();
    state.update(canvas(400.0, 800.0));

    state.update(Message::Canvas(CanvasMessage::DragStarted { x: 300.0, y: 560.0 }));
    state.update(Message::Canvas(CanvasMessage::Dragged {
        dx: -1000.0,
        dy: -1000.0,
    }));

    let rect = state.selection().rect().expect("selection");
    assert_eq!(rect.width, MIN_SIZE);
    assert_eq!(rect.height, MIN_SIZE);
    assert_eq!((rect.x, rect.y), (100.0, 240.0));
}

#[test]
fn drag_without_press_is_ignored() {
    let mut state = editor();
    state.update(canvas(400.0, 800.0));
    let before = state.selection().rect();

    state.update(Message::Canvas(CanvasMessage::Dragged { dx: 50.0, dy: 50.0 }));

    assert_eq!(state.selection().rect(), before);
}

#[test]
fn sliders_update_style_with_clamping() {
    let mut state = editor();
    state.update(Message::Controls(ControlsMessage::StyleChanged(
        StyleParameter::Opacity,
        0.8,
    )));
    state.update(Message::Controls(ControlsMessage::StyleChanged(
        StyleParameter::BlurRadius,
        -5.0,
    )));

    assert_eq!(state.style().opacity.value(), 0.8);
    assert_eq!(state.style().blur_radius.value(), 0.0);
}

#[test]
fn controls_sheet_toggles() {
    let mut state = editor();
    assert!(state.controls_visible());

    state.update(Message::Controls(ControlsMessage::Close));
    assert!(!state.controls_visible());

    state.update(Message::Toolbar(ToolbarMessage::ShowControls));
    assert!(state.controls_visible());
}

#[test]
fn toolbar_actions_become_events() {
    let mut state = editor();
    assert!(matches!(
        state.update(Message::Toolbar(ToolbarMessage::Apply)),
        Event::ApplyRequested
    ));
    assert!(matches!(
        state.update(Message::Toolbar(ToolbarMessage::BackToGallery)),
        Event::BackToGallery
    ));
}

#[test]
fn view_renders_with_and_without_chrome() {
    let mut state = editor();
    state.update(canvas(400.0, 800.0));
    let i18n = I18n::new(None, &Config::default());

    let _with_chrome = state.view(ViewContext {
        i18n: &i18n,
        apply_pending: false,
        hide_chrome: false,
    });
    let _capturing = state.view(ViewContext {
        i18n: &i18n,
        apply_pending: true,
        hide_chrome: true,
    });
}

// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::domain::style::StyleParameter;
use crate::error::Error;
use iced::Rectangle;

/// Toolbar-specific messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    BackToGallery,
    Apply,
    ShowControls,
}

/// Controls sheet messages.
#[derive(Debug, Clone)]
pub enum ControlsMessage {
    StyleChanged(StyleParameter, f32),
    Close,
}

/// Canvas overlay interaction messages.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    /// Layout bounds of the canvas in logical window coordinates.
    BoundsObserved(Rectangle),
    /// Pointer pressed at a canvas-relative position.
    DragStarted { x: f32, y: f32 },
    /// Pointer moved by a delta while pressed.
    Dragged { dx: f32, dy: f32 },
    DragEnded,
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Controls(ControlsMessage),
    Canvas(CanvasMessage),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToGallery,
    ApplyRequested,
    /// The preview could not be rendered.
    RenderFailed(Error),
}

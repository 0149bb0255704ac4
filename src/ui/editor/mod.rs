// SPDX-License-Identifier: MPL-2.0
//! Glass editor screen.
//!
//! This module follows a "state down, messages up" pattern: the editor owns
//! the selection, the style and the preview renderer, and reports what the
//! application must act on (leaving, applying) as an [`Event`].
//!
//! The screen is a stack of layers:
//!
//! 1. the wallpaper fitted to the canvas,
//! 2. the rendered glass patch, placed at the selection,
//! 3. the [`overlay::SelectionOverlay`] canvas handling drags,
//! 4. the chrome (toolbar, controls sheet), hidden while capturing.

mod controls;
mod messages;
mod overlay;
mod toolbar;

#[cfg(test)]
mod tests;

pub use messages::{CanvasMessage, ControlsMessage, Event, Message, ToolbarMessage};
pub use overlay::SelectionOverlay;

use crate::domain::geometry::{CanvasBounds, DragDelta, Rect};
use crate::domain::image::RawImage;
use crate::domain::selection::SelectionState;
use crate::domain::style::GlassStyle;
use crate::domain::wallpaper::Wallpaper;
use crate::i18n::I18n;
use crate::infrastructure::GlassCompositor;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, Canvas, Column, Container, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Padding, Rectangle};

/// Contextual data needed to render the editor.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub apply_pending: bool,
    /// Hides toolbar and controls so that they stay out of the capture.
    pub hide_chrome: bool,
}

/// Local UI state for the editor screen.
pub struct State {
    wallpaper: Wallpaper,
    /// Full resolution wallpaper, refitted whenever the canvas size changes.
    source: RawImage,
    compositor: Option<GlassCompositor>,
    background: Option<Handle>,
    patch: Option<Handle>,
    /// Canvas rectangle in logical window coordinates.
    canvas: Option<Rect>,
    selection: SelectionState,
    style: GlassStyle,
    controls_visible: bool,
}

impl State {
    #[must_use]
    pub fn new(wallpaper: Wallpaper, source: RawImage, style: GlassStyle) -> Self {
        tracing::info!(wallpaper = %wallpaper.name, "editing session started");
        Self {
            wallpaper,
            source,
            compositor: None,
            background: None,
            patch: None,
            canvas: None,
            selection: SelectionState::new(),
            style,
            controls_visible: true,
        }
    }

    #[must_use]
    pub fn wallpaper(&self) -> &Wallpaper {
        &self.wallpaper
    }

    #[must_use]
    pub fn style(&self) -> &GlassStyle {
        &self.style
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Canvas rectangle in logical window coordinates, once laid out.
    #[must_use]
    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Whether a glass patch is ready to draw.
    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.patch.is_some()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toolbar(ToolbarMessage::BackToGallery) => Event::BackToGallery,
            Message::Toolbar(ToolbarMessage::Apply) => Event::ApplyRequested,
            Message::Toolbar(ToolbarMessage::ShowControls) => {
                self.controls_visible = true;
                Event::None
            }
            Message::Controls(ControlsMessage::Close) => {
                self.controls_visible = false;
                Event::None
            }
            Message::Controls(ControlsMessage::StyleChanged(parameter, value)) => {
                self.style.set(parameter, value);
                self.refresh_patch()
            }
            Message::Canvas(canvas) => self.handle_canvas(canvas),
        }
    }

    fn handle_canvas(&mut self, message: CanvasMessage) -> Event {
        match message {
            CanvasMessage::BoundsObserved(bounds) => self.observe_canvas(bounds),
            CanvasMessage::DragStarted { x, y } => {
                if let Some(origin) = self.selection.begin_drag(x, y) {
                    tracing::debug!(?origin, "drag started");
                }
                Event::None
            }
            CanvasMessage::Dragged { dx, dy } => {
                if !self.selection.is_dragging() {
                    return Event::None;
                }
                self.selection.drag_by(DragDelta::new(dx, dy));
                self.refresh_patch()
            }
            CanvasMessage::DragEnded => {
                if self.selection.is_dragging() {
                    tracing::debug!(rect = ?self.selection.rect(), "drag ended");
                }
                self.selection.end_drag();
                Event::None
            }
        }
    }

    fn observe_canvas(&mut self, bounds: Rectangle) -> Event {
        self.canvas = Some(Rect::new(bounds.x, bounds.y, bounds.width, bounds.height));

        let canvas = CanvasBounds::new(bounds.width, bounds.height);
        if !canvas.is_usable() {
            return Event::None;
        }
        self.selection.observe_bounds(canvas);

        let size = (bounds.width.round() as u32, bounds.height.round() as u32);
        let stale = self
            .compositor
            .as_ref()
            .is_none_or(|compositor| compositor.size() != size);
        if stale {
            match GlassCompositor::new(&self.source, size.0, size.1) {
                Ok(compositor) => {
                    let background = compositor.background();
                    self.background = Some(Handle::from_rgba(
                        background.width(),
                        background.height(),
                        background.as_raw().clone(),
                    ));
                    self.compositor = Some(compositor);
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to fit wallpaper to canvas");
                    self.compositor = None;
                    self.background = None;
                    self.patch = None;
                    return Event::RenderFailed(err);
                }
            }
        }

        self.refresh_patch()
    }

    fn refresh_patch(&mut self) -> Event {
        let (Some(compositor), Some(rect)) = (self.compositor.as_mut(), self.selection.rect())
        else {
            return Event::None;
        };

        match compositor.render_patch(rect, &self.style) {
            Ok(patch) => {
                self.patch = Some(to_handle(&patch));
                Event::None
            }
            Err(err) => {
                tracing::warn!(%err, "failed to render glass patch");
                self.patch = None;
                Event::RenderFailed(err)
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if let Some(background) = &self.background {
            layers = layers.push(
                Image::new(background.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Fill),
            );
        }

        if let (Some(patch), Some(rect)) = (&self.patch, self.selection.rect()) {
            layers = layers.push(
                Container::new(
                    Image::new(patch.clone())
                        .width(Length::Fixed(rect.width))
                        .height(Length::Fixed(rect.height))
                        .content_fit(ContentFit::Fill),
                )
                .padding(Padding {
                    top: rect.y,
                    right: 0.0,
                    bottom: 0.0,
                    left: rect.x,
                })
                .width(Length::Fill)
                .height(Length::Fill),
            );
        }

        layers = layers.push(
            Canvas::new(SelectionOverlay {
                selection: self.selection.rect(),
                corner_radius: self.style.corner_radius.value(),
                show_markers: !ctx.hide_chrome,
            })
            .width(Length::Fill)
            .height(Length::Fill),
        );

        if !ctx.hide_chrome {
            layers = layers.push(self.chrome(&ctx));
        }

        layers.into()
    }

    fn chrome<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let toolbar = toolbar::view(
            &toolbar::ToolbarModel {
                apply_pending: ctx.apply_pending,
            },
            ctx,
        );

        let hint = container(Text::new(ctx.i18n.tr("editor-hint")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::chrome_label);

        let bottom: Element<'a, Message> = if self.controls_visible {
            controls::view(&self.style, ctx)
        } else {
            Container::new(toolbar::show_controls_button(ctx))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .into()
        };

        Column::new()
            .push(toolbar)
            .push(
                Container::new(hint)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .push(Space::new().height(Length::Fill))
            .push(Container::new(bottom).padding(spacing::XS))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn to_handle(image: &RawImage) -> Handle {
    Handle::from_rgba(image.width(), image.height(), image.rgba_bytes().to_vec())
}


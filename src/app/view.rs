// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::ui::editor::{self, State as EditorState};
use crate::ui::gallery::{self, State as GalleryState};
use crate::ui::notifications::{Manager, Toast};
use iced::{
    widget::{Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: &'a GalleryState,
    pub editor: Option<&'a EditorState>,
    pub notifications: &'a Manager,
    pub apply_pending: bool,
    /// Everything but the canvas is hidden while the screen is captured.
    pub capturing: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => ctx
            .gallery
            .view(gallery::ViewContext { i18n: ctx.i18n })
            .map(Message::Gallery),
        Screen::Editor => view_editor(&ctx),
    };

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if !ctx.capturing {
        layers = layers
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.into()
}

fn view_editor<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if let Some(editor_state) = ctx.editor {
        editor_state
            .view(editor::ViewContext {
                i18n: ctx.i18n,
                apply_pending: ctx.apply_pending,
                hide_chrome: ctx.capturing,
            })
            .map(Message::Editor)
    } else {
        // The wallpaper is still loading.
        Container::new(Text::new(ctx.i18n.tr("gallery-loading")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Top toolbar for the editor surface.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::editor::{Message, ToolbarMessage, ViewContext};
use crate::ui::styles;
use iced::widget::{button, container, Row, Space, Text};
use iced::{Alignment, Element, Length};

pub struct ToolbarModel {
    pub apply_pending: bool,
}

pub fn view<'a>(model: &ToolbarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back_label = format!("← {}", ctx.i18n.tr("editor-back"));
    let back_btn = button(Text::new(back_label).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::chrome);
    // Leaving mid-apply would drop the pending request's screen.
    let back_btn = if model.apply_pending {
        back_btn
    } else {
        back_btn.on_press(Message::Toolbar(ToolbarMessage::BackToGallery))
    };

    let title = container(Text::new(ctx.i18n.tr("editor-title")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::chrome_label);

    let apply_key = if model.apply_pending {
        "editor-applying"
    } else {
        "editor-apply"
    };
    let apply_btn = button(Text::new(ctx.i18n.tr(apply_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe((!model.apply_pending).then_some(Message::Toolbar(ToolbarMessage::Apply)));

    Row::new()
        .push(back_btn)
        .push(Space::new().width(Length::Fill))
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(apply_btn)
        .align_y(Alignment::Center)
        .padding(spacing::XS)
        .width(Length::Fill)
        .into()
}

/// Floating button that brings the controls sheet back.
pub fn show_controls_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr("editor-show-controls")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::chrome)
        .on_press(Message::Toolbar(ToolbarMessage::ShowControls))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Bottom sheet with one slider per style parameter.

use crate::domain::style::{GlassStyle, StyleParameter};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::editor::{ControlsMessage, Message, ViewContext};
use crate::ui::styles;
use iced::widget::{button, container, slider, Column, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(style: &GlassStyle, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("controls-title"))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("controls-close")).size(typography::BODY_SM))
                .on_press(Message::Controls(ControlsMessage::Close))
                .style(button::text),
        );

    let sliders = StyleParameter::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, parameter| {
            column.push(parameter_row(parameter, style.get(parameter), ctx))
        });

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(sliders),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::sheet)
    .into()
}

fn parameter_row<'a>(
    parameter: StyleParameter,
    value: f32,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(parameter.label_key())).size(typography::BODY_SM);
    let value_label = Text::new(parameter.format_value(value))
        .size(typography::CAPTION)
        .width(Length::Fixed(sizing::VALUE_LABEL_WIDTH))
        .align_x(alignment::Horizontal::Right);

    let control = slider(parameter.range(), value, move |v| {
        Message::Controls(ControlsMessage::StyleChanged(parameter, v))
    })
    .step(parameter.step())
    .width(Length::Fill);

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(label.width(Length::Fill))
                .push(value_label),
        )
        .push(control)
        .into()
}

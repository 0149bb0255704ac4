// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: a two-column grid of wallpaper thumbnails.
//!
//! Thumbnails arrive asynchronously; until then each card shows a
//! placeholder of the same 9:16 shape.

use crate::app::config::{THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use crate::domain::image::RawImage;
use crate::domain::wallpaper::{Wallpaper, WallpaperId};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

const COLUMNS: usize = 2;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    Open(WallpaperId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenEditor(WallpaperId),
}

struct Entry {
    wallpaper: Wallpaper,
    thumbnail: Option<Handle>,
}

/// Local UI state for the gallery screen.
pub struct State {
    entries: Vec<Entry>,
}

impl State {
    #[must_use]
    pub fn new(wallpapers: Vec<Wallpaper>) -> Self {
        Self {
            entries: wallpapers
                .into_iter()
                .map(|wallpaper| Entry {
                    wallpaper,
                    thumbnail: None,
                })
                .collect(),
        }
    }

    /// Installs a rendered thumbnail. Returns `false` for unknown ids.
    pub fn set_thumbnail(&mut self, id: WallpaperId, image: &RawImage) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.wallpaper.id == id) else {
            return false;
        };
        entry.thumbnail = Some(Handle::from_rgba(
            image.width(),
            image.height(),
            image.rgba_bytes().to_vec(),
        ));
        true
    }

    /// Whether some thumbnails are still missing.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.entries.iter().any(|entry| entry.thumbnail.is_none())
    }

    #[must_use]
    pub fn wallpaper(&self, id: WallpaperId) -> Option<&Wallpaper> {
        self.entries
            .iter()
            .map(|entry| &entry.wallpaper)
            .find(|wallpaper| wallpaper.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn update(&self, message: &Message) -> Event {
        match message {
            Message::Open(id) => Event::OpenEditor(*id),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_MD);

        let mut grid = Column::new().spacing(spacing::MD);
        for chunk in self.entries.chunks(COLUMNS) {
            let mut row = Row::new().spacing(spacing::MD);
            for entry in chunk {
                row = row.push(card(entry));
            }
            // Keep the last card of an odd row in its column.
            for _ in chunk.len()..COLUMNS {
                row = row.push(Space::new().width(Length::Fixed(THUMBNAIL_WIDTH as f32)));
            }
            grid = grid.push(row);
        }

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(title);
        if self.is_loading() {
            content =
                content.push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY_SM));
        }

        scrollable(content.push(grid)).height(Length::Fill).into()
    }
}

#[allow(clippy::cast_precision_loss)]
fn card(entry: &Entry) -> Element<'_, Message> {
    let (width, height) = (THUMBNAIL_WIDTH as f32, THUMBNAIL_HEIGHT as f32);

    let preview: Element<'_, Message> = match &entry.thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .style(styles::container::placeholder)
            .into(),
    };

    let label = Text::new(entry.wallpaper.name.as_str()).size(typography::CAPTION);

    button(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(preview)
            .push(label),
    )
    .padding(spacing::XS)
    .style(styles::button::thumbnail)
    .on_press(Message::Open(entry.wallpaper.id))
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Shows the live comparison when both layers are attached, otherwise a
//! static fallback with whatever layer loaded plus localized notices.

use super::Message;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::reveal;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::widgets::compare_canvas::{CompareCanvas, HandleStyle};
use iced::widget::{container, image, Column, Container, Row, Space, Text};
use iced::{Alignment, Color, ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub compare: Option<&'a reveal::State<ImageData>>,
    pub fallback: Option<&'a ImageData>,
    pub handle_style: HandleStyle,
    pub show_labels: bool,
    pub loading: bool,
    pub notices: &'a [String],
}

/// Renders the comparison (or its static fallback) with captions and notices.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.compare {
        Some(compare) => view_compare(compare, ctx.handle_style),
        None => view_fallback(ctx.fallback, ctx.i18n, ctx.loading),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if ctx.show_labels && ctx.compare.is_some() {
        column = column.push(view_captions(ctx.i18n));
    }

    column = column.push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    for key in ctx.notices {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            )
            .padding(spacing::XS),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_compare(compare: &reveal::State<ImageData>, style: HandleStyle) -> Element<'_, Message> {
    let layers = compare.layers();
    CompareCanvas::new(
        layers.before.handle.clone(),
        layers.after.handle.clone(),
        layers.before.size(),
        compare.percent(),
        compare.captured(),
        style,
    )
    .into_element()
    .map(Message::Compare)
}

fn view_fallback<'a>(
    layer: Option<&'a ImageData>,
    i18n: &'a I18n,
    loading: bool,
) -> Element<'a, Message> {
    if let Some(layer) = layer {
        return image(layer.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let content: Element<'a, Message> = if loading {
        Text::new(i18n.tr("notice-loading"))
            .size(typography::BODY)
            .into()
    } else {
        Space::new().into()
    };

    Container::new(content)
        .center(Length::Fill)
        .into()
}

fn view_captions(i18n: &I18n) -> Element<'_, Message> {
    Row::new()
        .push(caption(i18n.tr("label-before")))
        .push(Space::new().width(Length::Fill))
        .push(caption(i18n.tr("label-after")))
        .padding(spacing::XS)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn caption<'a>(label: String) -> Element<'a, Message> {
    let background = Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::BLACK
    };

    Container::new(Text::new(label).size(typography::BODY))
        .padding([spacing::XS / 2.0, spacing::XS])
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        })
        .into()
}

//! Slide rendering
//!
//! Maps a slide's block tree to widgets. Entrance offsets are expressed as
//! asymmetric padding and entrance opacity is folded into the text color, so
//! the whole slide stays a plain widget tree with no custom layout code.

use iced::widget::{Space, column, container, image, row, text};
use iced::{Alignment, Element, Fill, Padding, Theme};

use crate::deck::{Block, Card, Emphasis, Slide};
use crate::ui::{animation, theme};

/// Render one slide.
///
/// `elapsed` is seconds since the slide was entered and drives the entrance
/// curves; `alpha` is the slide-transition fade applied on top of them.
pub fn view<'a, Message: 'a>(
    slide: &'a Slide,
    elapsed: f32,
    alpha: f32,
) -> Element<'a, Message> {
    let blocks = slide
        .blocks
        .iter()
        .map(|block| block_view(block, elapsed, alpha))
        .collect::<Vec<_>>();

    container(
        column(blocks)
            .spacing(32)
            .align_x(Alignment::Center)
            .max_width(1100),
    )
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .padding(48)
    .into()
}

fn block_view<'a, Message: 'a>(block: &'a Block, elapsed: f32, alpha: f32) -> Element<'a, Message> {
    match block {
        Block::Title { text: t, emphasis } => {
            let entrance = animation::slide_in(elapsed);
            container(
                styled_text(t, *emphasis, entrance.opacity * alpha)
                    .size(theme::FONT_HERO)
                    .font(theme::heading_font())
                    .align_x(Alignment::Center),
            )
            .padding(slide_in_padding(entrance.offset))
            .into()
        }
        Block::Heading { text: t, emphasis } => styled_text(t, *emphasis, alpha)
            .size(theme::FONT_H2)
            .font(theme::heading_font())
            .align_x(Alignment::Center)
            .into(),
        Block::Subtitle { text: t } => {
            let entrance = animation::fade_in(elapsed);
            container(
                muted_text(t, entrance.opacity * alpha)
                    .size(theme::FONT_H3)
                    .align_x(Alignment::Center),
            )
            .padding(fade_in_padding(entrance.offset))
            .into()
        }
        Block::Body { text: t, large } => {
            let size = if *large {
                theme::FONT_H1
            } else {
                theme::FONT_BODY
            };
            styled_text(t, Emphasis::Normal, alpha)
                .size(size)
                .font(theme::body_font())
                .align_x(Alignment::Center)
                .into()
        }
        Block::Caption { text: t } => muted_text(t, alpha)
            .size(theme::FONT_DETAIL)
            .align_x(Alignment::Center)
            .into(),
        Block::Quote { text: t, attribution } => quote_view(t, attribution, alpha),
        Block::Image {
            path,
            width,
            caption,
        } => {
            let img = image(path.as_str()).width(*width).opacity(alpha);
            match caption {
                Some(c) => column![
                    img,
                    muted_text(c, alpha)
                        .size(theme::FONT_DETAIL)
                        .align_x(Alignment::Center)
                ]
                .spacing(12)
                .align_x(Alignment::Center)
                .into(),
                None => img.into(),
            }
        }
        Block::SponsorStrip { path } => image(path.as_str())
            .width(Fill)
            .opacity(0.9 * alpha)
            .into(),
        Block::Cards { columns, cards } => cards_view(*columns, cards, alpha),
        Block::Steps { steps } => steps_view(steps, alpha),
        Block::Contact { lines } => contact_view(lines, alpha),
    }
}

fn quote_view<'a, Message: 'a>(
    quote: &'a str,
    attribution: &'a str,
    alpha: f32,
) -> Element<'a, Message> {
    row![
        container(Space::new())
            .width(6)
            .height(110)
            .style(theme::accent_bar),
        column![
            styled_text(quote, Emphasis::Normal, alpha)
                .size(theme::FONT_H3)
                .font(theme::quote_font()),
            muted_text(attribution, alpha).size(theme::FONT_DETAIL),
        ]
        .spacing(16),
    ]
    .spacing(24)
    .into()
}

fn cards_view<'a, Message: 'a>(
    columns: usize,
    cards: &'a [Card],
    alpha: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let rows = cards
        .chunks(columns)
        .map(|chunk| {
            row(chunk.iter().map(|card| card_view(card, alpha)))
                .spacing(24)
                .width(Fill)
                .into()
        })
        .collect::<Vec<_>>();

    column(rows).spacing(24).width(Fill).into()
}

fn card_view<'a, Message: 'a>(card: &'a Card, alpha: f32) -> Element<'a, Message> {
    let style = match card.emphasis {
        Emphasis::Normal => theme::card,
        Emphasis::Accent => theme::card_filled,
        Emphasis::Highlight => theme::card_highlighted,
        Emphasis::Warning => theme::card_warning,
        Emphasis::Dimmed => theme::card_dimmed,
    };

    container(
        column![
            styled_text(&card.title, card.emphasis, alpha)
                .size(theme::FONT_H3)
                .font(theme::heading_font()),
            muted_text(&card.detail, alpha).size(theme::FONT_DETAIL),
        ]
        .spacing(12),
    )
    .style(style)
    .padding(24)
    .width(Fill)
    .into()
}

fn steps_view<'a, Message: 'a>(steps: &'a [String], alpha: f32) -> Element<'a, Message> {
    let mut items: Vec<Element<'a, Message>> = Vec::new();
    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            items.push(
                styled_text("↓", Emphasis::Accent, alpha)
                    .size(theme::FONT_H3)
                    .into(),
            );
        }
        items.push(
            row![
                container(
                    text((i + 1).to_string())
                        .size(theme::FONT_DETAIL)
                        .font(theme::heading_font())
                        .style(move |_theme: &Theme| text::Style {
                            color: Some(theme::with_alpha(iced::Color::BLACK, alpha)),
                        })
                )
                .style(theme::accent_dot)
                .padding([6.0, 14.0]),
                styled_text(step, Emphasis::Normal, alpha)
                    .size(theme::FONT_BODY)
                    .font(theme::body_font()),
            ]
            .spacing(20)
            .align_y(Alignment::Center)
            .into(),
        );
    }

    column(items).spacing(12).align_x(Alignment::Center).into()
}

fn contact_view<'a, Message: 'a>(lines: &'a [String], alpha: f32) -> Element<'a, Message> {
    column(lines.iter().enumerate().map(|(i, line)| {
        // Lead contact line gets the accent
        let emphasis = if i == 0 {
            Emphasis::Accent
        } else {
            Emphasis::Normal
        };
        styled_text(line, emphasis, alpha)
            .size(theme::FONT_H3)
            .align_x(Alignment::Center)
            .into()
    }))
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

/// Title entrance offset as padding. A centered node drawn with right
/// padding `p` shifts visually left by `p / 2`, so a start offset of
/// `-SLIDE_IN_OFFSET` needs a right pad of twice that magnitude, decaying
/// to zero as the title settles.
fn slide_in_padding(offset: f32) -> Padding {
    Padding {
        right: -2.0 * offset,
        ..Padding::ZERO
    }
}

/// Subtitle entrance offset as padding: top padding pushes the line down by
/// the remaining offset.
fn fade_in_padding(offset: f32) -> Padding {
    Padding {
        top: offset,
        ..Padding::ZERO
    }
}

fn styled_text<'a>(content: &'a str, emphasis: Emphasis, alpha: f32) -> text::Text<'a> {
    text(content).style(move |t: &Theme| text::Style {
        color: Some(theme::with_alpha(emphasis_color(emphasis, t), alpha)),
    })
}

fn muted_text<'a>(content: &'a str, alpha: f32) -> text::Text<'a> {
    text(content).style(move |t: &Theme| text::Style {
        color: Some(theme::with_alpha(theme::text_muted(t), alpha)),
    })
}

fn emphasis_color(emphasis: Emphasis, t: &Theme) -> iced::Color {
    match emphasis {
        Emphasis::Normal => theme::text_primary(t),
        Emphasis::Accent => theme::ACCENT,
        Emphasis::Highlight => theme::HIGHLIGHT,
        Emphasis::Warning => theme::WARNING,
        Emphasis::Dimmed => theme::text_muted(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation;

    const EPS: f32 = 1e-3;

    mod property_entrance_geometry {
        use super::*;

        #[test]
        fn title_starts_left_of_center_and_settles() {
            // Right padding shifts a centered node left by half the pad
            let start = slide_in_padding(animation::slide_in(0.0).offset);
            assert!((start.right - 2.0 * animation::SLIDE_IN_OFFSET).abs() < EPS);

            let settled = slide_in_padding(animation::slide_in(animation::ENTRANCE_DURATION).offset);
            assert!(settled.right.abs() < EPS);
        }

        #[test]
        fn title_pad_never_goes_negative() {
            let mut t = 0.0;
            while t <= animation::ENTRANCE_DURATION {
                let pad = slide_in_padding(animation::slide_in(t).offset);
                assert!(pad.right >= -EPS, "negative right pad {} at t {t}", pad.right);
                t += 0.02;
            }
        }

        #[test]
        fn subtitle_starts_below_and_settles() {
            let start = fade_in_padding(animation::fade_in(0.0).offset);
            assert!((start.top - animation::FADE_IN_OFFSET).abs() < EPS);

            let settled = fade_in_padding(
                animation::fade_in(animation::SUBTITLE_DELAY + animation::ENTRANCE_DURATION).offset,
            );
            assert!(settled.top.abs() < EPS);
        }

        #[test]
        fn entrance_pads_only_touch_one_edge() {
            let title = slide_in_padding(animation::slide_in(0.3).offset);
            assert_eq!(title.left, 0.0);
            assert_eq!(title.top, 0.0);
            assert_eq!(title.bottom, 0.0);

            let subtitle = fade_in_padding(animation::fade_in(0.8).offset);
            assert_eq!(subtitle.left, 0.0);
            assert_eq!(subtitle.right, 0.0);
            assert_eq!(subtitle.bottom, 0.0);
        }
    }
}

//! Slide progress indicator
//!
//! A row of small dots along the bottom edge, one per slide. The current
//! slide's dot uses the accent color; every dot is clickable for direct
//! jumps during Q&A.

use iced::widget::{Space, container, mouse_area, row};
use iced::{Alignment, Element};

const DOT_SIZE: f32 = 10.0;
const ACTIVE_DOT_SIZE: f32 = 14.0;

/// Diameter of the dot at `index` when `current` is showing.
fn dot_size(index: usize, current: usize) -> f32 {
    if index == current {
        ACTIVE_DOT_SIZE
    } else {
        DOT_SIZE
    }
}

/// Render the dot strip.
///
/// `on_jump` maps a slide index to the message emitted when its dot is
/// clicked.
pub fn view<'a, Message: Clone + 'a>(
    slide_count: usize,
    current: usize,
    on_jump: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let dots = (0..slide_count).map(|i| {
        let size = dot_size(i, current);
        let style = if i == current {
            crate::ui::theme::accent_dot
        } else {
            crate::ui::theme::muted_dot
        };

        mouse_area(
            container(Space::new())
                .width(size)
                .height(size)
                .style(style),
        )
        .on_press(on_jump(i))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
    });

    row(dots)
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_the_current_dot_is_enlarged() {
        let count = 18;
        for current in 0..count {
            for i in 0..count {
                let expected = if i == current {
                    ACTIVE_DOT_SIZE
                } else {
                    DOT_SIZE
                };
                assert_eq!(
                    dot_size(i, current),
                    expected,
                    "dot {i} while showing slide {current}"
                );
            }
        }
    }

    #[test]
    fn single_slide_deck_still_highlights_its_only_dot() {
        assert_eq!(dot_size(0, 0), ACTIVE_DOT_SIZE);
    }
}

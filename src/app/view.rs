// src/app/view.rs
//! Application view rendering

use iced::time::Instant;
use iced::widget::{column, container, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::ui::animation;
use crate::ui::components::{progress_dots, slide_view};
use crate::ui::effects::ambient::Ambient;
use crate::ui::theme;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let now = Instant::now();
        let slide_elapsed = self.ui.slide_elapsed(now);
        let alpha = animation::transition_fade(slide_elapsed);

        let slide: Element<'_, Message> = match self.ui.deck.get(self.ui.current_slide) {
            Some(slide) => slide_view::view(slide, slide_elapsed, alpha),
            None => container(text("No slides loaded"))
                .width(Fill)
                .height(Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .into(),
        };

        let dots = progress_dots::view(
            self.ui.deck.len(),
            self.ui.current_slide,
            Message::JumpToSlide,
        );

        let foreground = column![
            container(slide).width(Fill).height(Fill),
            container(dots)
                .width(Fill)
                .align_x(Alignment::Center)
                .padding(Padding {
                    bottom: 24.0,
                    ..Padding::ZERO
                }),
        ];

        // Ambient layer sits behind the slide content; when decorations are
        // toggled off its opacity is zero and the stage background shows
        let ambient: Element<'_, Message> =
            Ambient::new(&self.ui.ambient).width(Fill).height(Fill).into();

        container(stack([ambient, foreground.into()]))
            .width(Fill)
            .height(Fill)
            .style(theme::stage)
            .into()
    }
}

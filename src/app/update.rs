// src/app/update.rs
//! Application update logic

use iced::Task;
use iced::time::Instant;

use crate::features::Action;
use crate::ui::effects::{ambient, decorations};
use crate::ui::theme;

use super::message::Message;
use super::state::{App, stage_background};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(&key, &modifiers)
                {
                    return self.update(Message::ExecuteAction(action));
                }
                Task::none()
            }

            Message::ExecuteAction(action) => self.execute_action(action),

            Message::NextSlide => {
                self.goto_slide(navigation::next(self.ui.current_slide, self.ui.deck.len()));
                Task::none()
            }
            Message::PrevSlide => {
                self.goto_slide(navigation::prev(self.ui.current_slide));
                Task::none()
            }
            Message::FirstSlide => {
                self.goto_slide(0);
                Task::none()
            }
            Message::LastSlide => {
                self.goto_slide(self.ui.deck.last_index());
                Task::none()
            }
            Message::JumpToSlide(index) => {
                self.goto_slide(navigation::clamp(index, self.ui.deck.len()));
                Task::none()
            }

            Message::AnimationTick => {
                let elapsed = self.ui.ambient_elapsed(Instant::now());
                self.ui.ambient.set_time(elapsed);
                Task::none()
            }

            Message::CloseRequested => {
                self.save_settings_now();
                iced::exit()
            }

            Message::Noop => Task::none(),
        }
    }

    fn execute_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::NextSlide => return self.update(Message::NextSlide),
            Action::PrevSlide => return self.update(Message::PrevSlide),
            Action::FirstSlide => return self.update(Message::FirstSlide),
            Action::LastSlide => return self.update(Message::LastSlide),

            Action::ToggleFullscreen => {
                self.core.is_fullscreen = !self.core.is_fullscreen;
                return set_window_mode(self.core.is_fullscreen);
            }
            Action::ExitFullscreen => {
                if self.core.is_fullscreen {
                    self.core.is_fullscreen = false;
                    return set_window_mode(false);
                }
            }

            Action::ToggleDecorations => {
                let enabled = !self.core.settings.display.decorations;
                self.core.settings.display.decorations = enabled;
                if enabled {
                    // Re-entering decorated mode draws a fresh batch
                    self.ui.decorations = decorations::generate();
                    self.ui.ambient.set_decorations(&self.ui.decorations);
                }
                self.ui.ambient.set_opacity(if enabled { 1.0 } else { 0.0 });
                return self.save_settings();
            }

            Action::ToggleDarkMode => {
                let dark = !self.core.settings.display.dark_mode;
                self.core.settings.display.dark_mode = dark;
                self.ui.ambient.set_colors(
                    ambient::color_to_array(theme::ACCENT),
                    stage_background(dark),
                );
                return self.save_settings();
            }

            Action::Quit => {
                self.save_settings_now();
                return iced::exit();
            }
        }
        Task::none()
    }

    /// Move to a slide, resetting the entrance clock when it changes
    fn goto_slide(&mut self, index: usize) {
        let index = navigation::clamp(index, self.ui.deck.len());
        if index != self.ui.current_slide {
            self.ui.current_slide = index;
            self.ui.slide_entered_at = Instant::now();
        }
    }

    /// Persist preferences off the UI thread
    fn save_settings(&self) -> Task<Message> {
        let settings = self.core.settings.clone();
        Task::perform(
            async move { tokio::task::spawn_blocking(move || settings.save()).await },
            |result| {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::warn!("Failed to save settings: {}", e),
                    Err(e) => tracing::warn!("Settings save task panicked: {}", e),
                }
                Message::Noop
            },
        )
    }

    /// Blocking save for the shutdown path, where the runtime is about to stop
    fn save_settings_now(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

fn set_window_mode(fullscreen: bool) -> Task<Message> {
    let mode = if fullscreen {
        iced::window::Mode::Fullscreen
    } else {
        iced::window::Mode::Windowed
    };
    iced::window::latest().and_then(move |id| iced::window::set_mode(id, mode))
}

/// Pure navigation arithmetic, kept separate for testability
pub mod navigation {
    /// Advance by one, saturating at the last slide
    pub fn next(current: usize, len: usize) -> usize {
        clamp(current + 1, len)
    }

    /// Step back by one, saturating at the first slide
    pub fn prev(current: usize) -> usize {
        current.saturating_sub(1)
    }

    /// Clamp an index into the deck's bounds
    pub fn clamp(index: usize, len: usize) -> usize {
        index.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::navigation::*;

    mod property_bounded_navigation {
        use super::*;

        #[test]
        fn next_advances_within_bounds() {
            assert_eq!(next(0, 18), 1);
            assert_eq!(next(16, 18), 17);
        }

        #[test]
        fn next_saturates_at_last_slide() {
            assert_eq!(next(17, 18), 17);
        }

        #[test]
        fn prev_steps_back_within_bounds() {
            assert_eq!(prev(17), 16);
            assert_eq!(prev(1), 0);
        }

        #[test]
        fn prev_saturates_at_first_slide() {
            assert_eq!(prev(0), 0);
        }

        #[test]
        fn clamp_is_identity_in_bounds() {
            for i in 0..18 {
                assert_eq!(clamp(i, 18), i);
            }
        }

        #[test]
        fn clamp_pulls_overshoot_to_last_slide() {
            assert_eq!(clamp(18, 18), 17);
            assert_eq!(clamp(usize::MAX, 18), 17);
        }

        #[test]
        fn empty_deck_clamps_to_zero() {
            assert_eq!(clamp(5, 0), 0);
            assert_eq!(next(0, 0), 0);
        }
    }

    mod property_round_trips {
        use super::*;

        #[test]
        fn next_then_prev_is_identity_mid_deck() {
            for i in 0..17 {
                assert_eq!(prev(next(i, 18)), i);
            }
        }
    }
}

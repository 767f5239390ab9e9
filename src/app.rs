//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the stage opens in the right mode
        let settings = crate::features::Settings::load();
        let start_fullscreen = settings.display.start_fullscreen;

        // 2. Initialize sub-states
        let ui = UiState::new(&settings.display);
        let core = CoreState::new(settings);

        let mut app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1280.0, 720.0),
            min_size: Some(iced::Size::new(800.0, 450.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "podium".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        let mut tasks = vec![open_window.discard()];
        if start_fullscreen {
            app.core.is_fullscreen = true;
            tasks.push(iced::window::set_mode(
                window_id,
                iced::window::Mode::Fullscreen,
            ));
        }

        (app, Task::batch(tasks))
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dynamic window title based on the current slide
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        match self.ui.deck.get(self.ui.current_slide) {
            Some(slide) => format!(
                "Podium - {}/{} {}",
                self.ui.current_slide + 1,
                self.ui.deck.len(),
                slide.title
            ),
            None => "Podium".to_string(),
        }
    }

    /// Subscriptions for keyboard input, window events, and animation frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Instant;

        let now = Instant::now();
        let power_saving = self.core.settings.display.power_saving_mode;

        // 1. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 2. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::CloseRequested);

        // 3. Animation subscription (~60fps when needed)
        let needs_frames = subscription_logic::needs_animation_subscription(
            power_saving,
            self.core.settings.display.decorations,
            self.ui.has_active_animations(now),
        );
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, close_request_sub, animation_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(
        power_saving: bool,
        decorations_enabled: bool,
        has_active_animations: bool,
    ) -> bool {
        !power_saving && (decorations_enabled || has_active_animations)
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_power_saving {
        use super::*;

        #[test]
        fn power_saving_suppresses_all_frames() {
            for decorations in [false, true] {
                for animating in [false, true] {
                    assert!(
                        !needs_animation_subscription(true, decorations, animating),
                        "power saving must win (decorations={decorations}, animating={animating})"
                    );
                }
            }
        }
    }

    mod property_frame_demand {
        use super::*;

        #[test]
        fn decorations_alone_keep_frames_flowing() {
            // The ambient loop never settles, so decorated stages always animate
            assert!(needs_animation_subscription(false, true, false));
        }

        #[test]
        fn entrances_demand_frames_without_decorations() {
            assert!(needs_animation_subscription(false, false, true));
        }

        #[test]
        fn static_undecorated_stage_is_idle() {
            assert!(!needs_animation_subscription(false, false, false));
        }
    }
}

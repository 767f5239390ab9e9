// src/app/state.rs
//! Application state definitions

use iced::time::Instant;

use crate::deck::Deck;
use crate::features::Settings;
use crate::ui::animation;
use crate::ui::effects::ambient::AmbientProgram;
use crate::ui::effects::decorations::{self, Decoration};
use crate::ui::theme;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, window state)
    pub core: CoreState,
    /// Stage state (deck, navigation, ambient layer)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    pub is_fullscreen: bool,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            is_fullscreen: false,
        }
    }
}

/// Stage state
pub struct UiState {
    pub deck: Deck,
    pub current_slide: usize,
    /// Wall clock for the ambient layer; never reset
    pub started_at: Instant,
    /// Reset on every slide change; drives entrance and transition curves
    pub slide_entered_at: Instant,
    pub decorations: Vec<Decoration>,
    pub ambient: AmbientProgram,
}

impl UiState {
    pub fn new(display: &crate::features::settings::DisplaySettings) -> Self {
        let now = Instant::now();
        let decorations = decorations::generate();
        let mut ambient = AmbientProgram::new()
            .with_decorations(&decorations)
            .with_colors(
                crate::ui::effects::ambient::color_to_array(theme::ACCENT),
                stage_background(display.dark_mode),
            );
        if !display.decorations {
            ambient.set_opacity(0.0);
        }

        Self {
            deck: Deck::default(),
            current_slide: 0,
            started_at: now,
            slide_entered_at: now,
            decorations,
            ambient,
        }
    }

    /// Seconds since application start, for the looping ambient curves
    pub fn ambient_elapsed(&self, now: Instant) -> f32 {
        now.duration_since(self.started_at).as_secs_f32()
    }

    /// Seconds since the current slide was entered
    pub fn slide_elapsed(&self, now: Instant) -> f32 {
        now.duration_since(self.slide_entered_at).as_secs_f32()
    }

    /// One-shot curves (entrances, transition fade) still in flight
    pub fn has_active_animations(&self, now: Instant) -> bool {
        !animation::entrances_settled(self.slide_elapsed(now))
    }
}

/// Shader clear color for the current mode
pub fn stage_background(dark_mode: bool) -> [f32; 4] {
    let theme = if dark_mode {
        iced::Theme::Dark
    } else {
        iced::Theme::Light
    };
    crate::ui::effects::ambient::color_to_array(theme::background(&theme))
}

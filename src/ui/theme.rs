//! Theme system for the deck renderer
//!
//! Light mode matches the talk's print design (white background, lime
//! accent); dark mode inverts the surfaces for dim rooms. The accent color
//! is shared between both modes.

use iced::color;
use iced::font::{Style, Weight};
use iced::widget::container;
use iced::{Background, Border, Color, Font, Theme};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_MUTED: Color = color!(0x999999);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf3f4f6);
    pub const TEXT_PRIMARY: Color = color!(0x000000);
    pub const TEXT_MUTED: Color = color!(0x666666);
}

/// Lime accent color (same for both modes)
pub const ACCENT: Color = color!(0x84cc16);

/// Gold highlight used by emphasized cards
pub const HIGHLIGHT: Color = color!(0xffd700);

/// Warning red used by the dismissive verdict card
pub const WARNING: Color = color!(0xff4444);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

// ============================================================================
// Typography scale (from the talk's design)
// ============================================================================

pub const FONT_HERO: f32 = 96.0;
pub const FONT_H1: f32 = 72.0;
pub const FONT_H2: f32 = 48.0;
pub const FONT_H3: f32 = 32.0;
pub const FONT_BODY: f32 = 24.0;
pub const FONT_DETAIL: f32 = 18.0;
pub const FONT_FOOTNOTE: f32 = 16.0;

/// Heavy heading font
pub fn heading_font() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Semibold body font
pub fn body_font() -> Font {
    Font {
        weight: Weight::Semibold,
        ..Font::DEFAULT
    }
}

/// Italic font for quotes
pub fn quote_font() -> Font {
    Font {
        weight: Weight::Bold,
        style: Style::Italic,
        ..Font::DEFAULT
    }
}

// ============================================================================
// Container styles
// ============================================================================

/// Apply an alpha multiplier to a color, for entrance fades.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Outlined card with the accent border
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: ACCENT,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Card with the accent border and a faint accent fill
pub fn card_filled(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(ACCENT, 0.05))),
        border: Border {
            color: ACCENT,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Gold-bordered card for emphasized milestones
pub fn card_highlighted(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(HIGHLIGHT, 0.1))),
        border: Border {
            color: HIGHLIGHT,
            width: 3.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Red-bordered card for the verdict block
pub fn card_warning(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(WARNING, 0.1))),
        border: Border {
            color: WARNING,
            width: 3.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Dimmed outline card for also-ran comparisons
pub fn card_dimmed(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: with_alpha(text_muted(theme), 0.6),
            width: 2.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Solid accent bar, used for the quote block's left rule
pub fn accent_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT)),
        ..container::Style::default()
    }
}

/// Solid accent circle, used by step bubbles and progress dots
pub fn accent_dot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT)),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Muted circle for inactive progress dots
pub fn muted_dot(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(text_muted(theme), 0.35))),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Root surface behind every slide
pub fn stage(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..container::Style::default()
    }
}

//! Stage components
//!
//! `slide_view` renders one slide's block tree; `progress_dots` draws the
//! clickable per-slide indicator along the bottom edge.

pub mod progress_dots;
pub mod slide_view;

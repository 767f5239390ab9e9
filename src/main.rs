//! Podium - A conference slide deck renderer
//! Built with iced, with a shader-driven ambient decoration layer

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod deck;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}

// src/app/message.rs
//! Application messages

use crate::features::Action;

#[derive(Debug, Clone)]
pub enum Message {
    // Input
    KeyPressed(iced::keyboard::Key, iced::keyboard::Modifiers),
    ExecuteAction(Action),

    // Navigation
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    JumpToSlide(usize),

    // Stage
    AnimationTick,

    // Window
    CloseRequested,

    Noop,
}

//! Consistent styling for the terminal UI.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn player() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn computer() -> Style {
    Style::default().fg(Color::LightRed)
}

pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn popup() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn message(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default(),
        MessageLevel::Warning => Style::default().fg(Color::Yellow),
    }
}

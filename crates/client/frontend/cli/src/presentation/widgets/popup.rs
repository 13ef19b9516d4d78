//! Centered result popup.

use client_frontend_core::PopupView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, popup: &PopupView) {
    let target = centered(area, 44, 6);
    let lines = vec![
        Line::from(Span::styled(popup.message.clone(), theme::popup())),
        Line::default(),
        Line::from(Span::styled("press enter to close", theme::hint())),
    ];

    frame.render_widget(Clear, target);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title("Result")),
        target,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [target] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(horizontal);
    target
}

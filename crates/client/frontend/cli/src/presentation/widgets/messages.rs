//! Scrollback panel for player-facing messages.

use client_frontend_core::MessageLog;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, log: &MessageLog) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut lines: Vec<Line> = log
        .recent(visible)
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme::message(entry.level))))
        .collect();
    lines.reverse(); // recent() yields newest first; display oldest at the top

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title("Messages")),
        area,
    );
}

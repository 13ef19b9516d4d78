//! Title bar with the round counter and key hints.

use client_frontend_core::ViewModel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let title = Line::from(vec![
        Span::styled("DICE DUEL", theme::title()),
        Span::raw("  -  "),
        Span::raw(view.round_label()),
    ]);
    let hints = Line::from(Span::styled(
        "r roll | n new game | h how to play | ? rules | enter close popup | q quit",
        theme::hint(),
    ));

    frame.render_widget(Paragraph::new(vec![title, hints]).block(Block::bordered()), area);
}

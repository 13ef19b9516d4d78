//! The two collapsible help sections.

use client_frontend_core::HelpView;
use game_core::HelpSection;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::presentation::theme;

const HOW_TO_PLAY: &str = "Press r to roll two dice for you and two for the computer. \
Scores accumulate over three rounds; the higher total wins.";

const RULES: &str = "A 1 on either die scores zero for that pair. \
A double scores twice the sum. Anything else scores the plain sum.";

/// Height in lines the help row needs for the current visibility state.
pub fn desired_height(help: &HelpView) -> u16 {
    if help.how_to_play_shown || help.rules_shown {
        6
    } else {
        3
    }
}

pub fn render(frame: &mut Frame, area: Rect, help: &HelpView) {
    let [left, right] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);
    section(frame, left, "How to play [h]", HOW_TO_PLAY, help.is_shown(HelpSection::HowToPlay));
    section(frame, right, "Rules [?]", RULES, help.is_shown(HelpSection::Rules));
}

fn section(frame: &mut Frame, area: Rect, title: &str, body: &str, shown: bool) {
    let text = if shown {
        Line::from(Span::raw(body.to_string()))
    } else {
        Line::from(Span::styled("press key to show", theme::hint()))
    };
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(title.to_string())),
        area,
    );
}

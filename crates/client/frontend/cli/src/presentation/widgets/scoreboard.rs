//! Scoreboard: the dice on the table plus per-round and cumulative totals.

use client_frontend_core::{RoundRow, ScoreboardView};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, scoreboard: &ScoreboardView) {
    let mut lines = vec![totals_line(scoreboard), Line::default()];

    match scoreboard.last_round() {
        Some(row) => {
            lines.push(side_line("You     ", theme::player(), row.player_faces, row.player_score));
            lines.push(side_line(
                "Computer",
                theme::computer(),
                row.computer_faces,
                row.computer_score,
            ));
        }
        None => lines.push(Line::from(Span::styled(
            "No dice rolled yet - press r to play a round",
            theme::hint(),
        ))),
    }

    if scoreboard.rows.len() > 1 {
        lines.push(Line::default());
        for row in &scoreboard.rows {
            lines.push(history_line(row));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title("Scoreboard")),
        area,
    );
}

fn totals_line(scoreboard: &ScoreboardView) -> Line<'static> {
    Line::from(vec![
        Span::styled("You ", theme::player()),
        Span::raw(scoreboard.player_total.to_string()),
        Span::raw("  :  "),
        Span::raw(scoreboard.computer_total.to_string()),
        Span::styled(" Computer", theme::computer()),
    ])
}

fn side_line(label: &'static str, style: Style, faces: [game_core::DieFace; 2], score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, style),
        Span::raw(format!(
            "  {} {}   ({} {})",
            faces[0].glyph(),
            faces[1].glyph(),
            faces[0],
            faces[1]
        )),
        Span::raw(format!("   round score {score}")),
    ])
}

fn history_line(row: &RoundRow) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "round {}: you {} - computer {}",
            row.round, row.player_score, row.computer_score
        ),
        theme::hint(),
    ))
}

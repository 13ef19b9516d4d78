//! Top-level frame composition.
//!
//! Draw order matters: panels first, then the celebration canvas over the
//! whole frame, then the popup on top so the result stays readable through
//! the fireworks.

use client_frontend_core::ViewModel;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use runtime::Bounds;

use crate::config::UiConfig;
use crate::presentation::fx::FxSurface;
use crate::presentation::widgets::{celebration, header, help, messages, popup, scoreboard};

pub fn render(frame: &mut Frame, view: &ViewModel, fx: &FxSurface, bounds: Bounds, ui: &UiConfig) {
    let area = frame.area();
    let [header_area, board_area, help_area, log_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(help::desired_height(&view.help)),
        Constraint::Length(ui.message_panel_height),
    ])
    .areas(area);

    header::render(frame, header_area, view);
    scoreboard::render(frame, board_area, &view.scoreboard);
    help::render(frame, help_area, &view.help);
    messages::render(frame, log_area, &view.log);

    if view.celebrating {
        celebration::render(frame, area, fx, bounds);
    }
    if view.popup.visible {
        popup::render(frame, area, &view.popup);
    }
}

//! Terminal presentation: lifecycle, theme, and widgets.

pub mod fx;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

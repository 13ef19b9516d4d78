//! Individual panels composed by the top-level renderer.

pub mod celebration;
pub mod header;
pub mod help;
pub mod messages;
pub mod popup;
pub mod scoreboard;

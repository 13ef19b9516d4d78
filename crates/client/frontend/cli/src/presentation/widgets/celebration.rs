//! Braille-canvas rendering of the particle field.
//!
//! Overlays the whole frame while the celebration runs, mirroring the
//! original full-window effect surface. The canvas y-axis points up while
//! the simulation's points down, so y is flipped at draw time.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use runtime::Bounds;

use crate::presentation::fx::FxSurface;

pub fn render(frame: &mut Frame, area: Rect, surface: &FxSurface, bounds: Bounds) {
    let height = f64::from(bounds.height);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(bounds.width)])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for sprite in surface.sprites() {
                ctx.draw(&Circle {
                    x: sprite.x,
                    y: height - sprite.y,
                    radius: sprite.radius,
                    color: sprite.color,
                });
            }
        });
    frame.render_widget(canvas, area);
}

//! Drawing surface adapter between the particle simulation and ratatui.
//!
//! The animator draws through [`game_fx::Surface`]; this implementation just
//! records the frame's circles so the celebration widget can replay them
//! onto a braille canvas. Alpha has no terminal compositing equivalent, so
//! it is approximated by dimming the color toward black.

use game_fx::{Hsl, Surface, Vec2};
use ratatui::style::Color;

/// One circle of the current frame, already themed for the terminal.
#[derive(Clone, Copy, Debug)]
pub struct CircleSprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Frame buffer of circles, cleared at the start of every frame.
#[derive(Debug, Default)]
pub struct FxSurface {
    sprites: Vec<CircleSprite>,
}

impl FxSurface {
    pub fn sprites(&self) -> &[CircleSprite] {
        &self.sprites
    }
}

impl Surface for FxSurface {
    fn clear(&mut self) {
        self.sprites.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl, alpha: f32) {
        let (r, g, b) = color.to_rgb();
        let dim = |channel: u8| (f32::from(channel) * alpha).round() as u8;
        self.sprites.push(CircleSprite {
            x: f64::from(center.x),
            y: f64::from(center.y),
            radius: f64::from(radius),
            color: Color::Rgb(dim(r), dim(g), dim(b)),
        });
    }
}

//! HSL colors for particle rendering.

use rand::Rng;

/// Hue/saturation/lightness color, the space the celebration picks from.
///
/// Hue is in degrees `[0, 360)`; saturation and lightness in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Fully-saturated, 50%-lightness color with a uniformly random hue.
    pub fn random_vivid(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(0.0..360.0), 1.0, 0.5)
    }

    /// Converts to 8-bit RGB for renderers that cannot composite HSL.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = self.lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        (
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn primary_hues_convert_exactly() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_rgb(), (255, 0, 0));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_rgb(), (0, 255, 0));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb(), (0, 0, 255));
        assert_eq!(Hsl::new(60.0, 1.0, 0.5).to_rgb(), (255, 255, 0));
    }

    #[test]
    fn grayscale_ignores_hue() {
        assert_eq!(Hsl::new(123.0, 0.0, 0.5).to_rgb(), (128, 128, 128));
        assert_eq!(Hsl::new(0.0, 1.0, 1.0).to_rgb(), (255, 255, 255));
        assert_eq!(Hsl::new(0.0, 1.0, 0.0).to_rgb(), (0, 0, 0));
    }

    #[test]
    fn random_vivid_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let color = Hsl::random_vivid(&mut rng);
            assert!((0.0..360.0).contains(&color.hue));
            assert_eq!(color.saturation, 1.0);
            assert_eq!(color.lightness, 0.5);
        }
    }
}

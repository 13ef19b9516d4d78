//! Die values and the per-round dice pairs.
//!
//! A [`Die`] is a validated face value in `1..=6`. Rolls are produced outside
//! this crate (the runtime owns the RNG) and enter the rules as plain values,
//! which keeps every transition replayable from a recorded roll sequence.

/// A single six-sided die showing a face value in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Die(u8);

/// Raised when a raw value outside `1..=6` is presented as a die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("die value {0} is outside 1..=6")]
pub struct InvalidDie(pub u8);

impl Die {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Every face, in ascending order. Rollers index into this with a
    /// uniform draw so no fallible conversion sits on the hot path.
    pub const ALL: [Die; 6] = [Die(1), Die(2), Die(3), Die(4), Die(5), Die(6)];

    /// Validates a raw value into a die.
    pub fn new(value: u8) -> Result<Self, InvalidDie> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidDie(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// A die showing 1 triggers the snake-eyes condition and zeroes the pair.
    pub fn is_snake_eye(self) -> bool {
        self.0 == 1
    }

    /// Display projection of this value, one of six distinct faces.
    pub fn face(self) -> DieFace {
        match self.0 {
            1 => DieFace::One,
            2 => DieFace::Two,
            3 => DieFace::Three,
            4 => DieFace::Four,
            5 => DieFace::Five,
            _ => DieFace::Six,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six dice faces as a presentation-facing enum.
///
/// The string form (`one` .. `six`) is the stable asset key clients use to
/// select a face image or glyph for a rolled value.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DieFace {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl DieFace {
    /// Unicode die glyph for terminal rendering.
    pub fn glyph(self) -> char {
        match self {
            DieFace::One => '⚀',
            DieFace::Two => '⚁',
            DieFace::Three => '⚂',
            DieFace::Four => '⚃',
            DieFace::Five => '⚄',
            DieFace::Six => '⚅',
        }
    }
}

/// The two dice one side rolls in a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DicePair {
    pub first: Die,
    pub second: Die,
}

impl DicePair {
    pub fn new(first: Die, second: Die) -> Self {
        Self { first, second }
    }

    /// Either die showing 1.
    pub fn has_snake_eye(self) -> bool {
        self.first.is_snake_eye() || self.second.is_snake_eye()
    }

    /// Both dice showing the same value.
    pub fn is_double(self) -> bool {
        self.first == self.second
    }

    pub fn sum(self) -> u32 {
        u32::from(self.first.value()) + u32::from(self.second.value())
    }

    pub fn faces(self) -> [DieFace; 2] {
        [self.first.face(), self.second.face()]
    }
}

impl std::fmt::Display for DicePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_only_valid_faces() {
        for value in 1..=6 {
            assert_eq!(Die::new(value).map(Die::value), Ok(value));
        }
        assert_eq!(Die::new(0), Err(InvalidDie(0)));
        assert_eq!(Die::new(7), Err(InvalidDie(7)));
    }

    #[test]
    fn all_covers_every_face_once() {
        let values: Vec<u8> = Die::ALL.iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn face_projection_matches_value() {
        assert_eq!(Die::new(1).unwrap().face(), DieFace::One);
        assert_eq!(Die::new(6).unwrap().face(), DieFace::Six);
        assert_eq!(DieFace::Three.to_string(), "three");
        assert_eq!(DieFace::Five.as_ref(), "five");
    }

    #[test]
    fn pair_classification() {
        let die = |v| Die::new(v).unwrap();
        assert!(DicePair::new(die(1), die(5)).has_snake_eye());
        assert!(DicePair::new(die(6), die(1)).has_snake_eye());
        assert!(!DicePair::new(die(4), die(2)).has_snake_eye());
        assert!(DicePair::new(die(3), die(3)).is_double());
        assert!(!DicePair::new(die(3), die(4)).is_double());
        assert_eq!(DicePair::new(die(4), die(2)).sum(), 6);
    }
}

//! The round scoring rule.
//!
//! Pure mapping from one side's pair of dice to that side's round score.
//! Callers accumulate the result into the running total; nothing here
//! mutates state.

use crate::dice::DicePair;

/// Scores one side's pair for a round.
///
/// - Either die showing 1 ("snake eyes" condition): 0, regardless of the
///   other die.
/// - Both dice equal (a double): twice the sum.
/// - Otherwise: the plain sum.
///
/// Inputs are in-range by construction ([`crate::Die`] validates), so there
/// is no error path.
pub fn score(pair: DicePair) -> u32 {
    if pair.has_snake_eye() {
        0
    } else if pair.is_double() {
        pair.sum() * 2
    } else {
        pair.sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Die;

    fn pair(a: u8, b: u8) -> DicePair {
        DicePair::new(Die::new(a).unwrap(), Die::new(b).unwrap())
    }

    #[test]
    fn concrete_cases() {
        assert_eq!(score(pair(1, 5)), 0);
        assert_eq!(score(pair(6, 1)), 0);
        assert_eq!(score(pair(3, 3)), 12);
        assert_eq!(score(pair(1, 1)), 0);
        assert_eq!(score(pair(4, 2)), 6);
        assert_eq!(score(pair(6, 6)), 24);
    }

    #[test]
    fn any_one_zeroes_the_pair() {
        for other in 1..=6 {
            assert_eq!(score(pair(1, other)), 0);
            assert_eq!(score(pair(other, 1)), 0);
        }
    }

    #[test]
    fn doubles_score_four_times_the_face() {
        for face in 2..=6u8 {
            assert_eq!(score(pair(face, face)), 4 * u32::from(face));
        }
    }

    #[test]
    fn mixed_pairs_score_their_sum() {
        for a in 2..=6u8 {
            for b in 2..=6u8 {
                if a != b {
                    assert_eq!(score(pair(a, b)), u32::from(a) + u32::from(b));
                }
            }
        }
    }
}

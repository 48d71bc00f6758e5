//! Confusable code point and whitespace correction.

use crate::constants::{DIGIT_FOUR, DIGIT_ZERO, LAGAUNG, NBSP, WA, ZWSP};
use crate::fragment::NormalizeReason;

/// How space variants are treated, decided by the format the text matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceRule {
    /// The format has a literal space here: every variant becomes ' '.
    Normalize,
    /// The format has no space here: every variant is dropped.
    Remove,
    /// Free-form grouping: visible spaces stay, zero-width ones are dropped.
    Visible,
}

/// Letters mistaken for digits, with the digit they stand for.
const CONFUSABLE_DIGITS: [(char, char); 2] = [(WA, DIGIT_ZERO), (LAGAUNG, DIGIT_FOUR)];

pub fn digit_for_confusable(c: char) -> Option<char> {
    CONFUSABLE_DIGITS.iter().find(|(letter, _)| *letter == c).map(|(_, digit)| *digit)
}

pub fn letter_for_confusable_digit(c: char) -> Option<char> {
    CONFUSABLE_DIGITS.iter().find(|(_, digit)| *digit == c).map(|(letter, _)| *letter)
}

/// Rewrites confusable letters to digits and space variants according to
/// `spaces`, reporting every correction that fired.
///
/// Only call this on text already known to be numeric: every U+101D and
/// U+104E in `input` is taken to be a mistyped digit.
pub fn normalize(input: &str, spaces: SpaceRule) -> (String, NormalizeReason) {
    let mut out = String::with_capacity(input.len());
    let mut reason = NormalizeReason::default();

    for c in input.chars() {
        match c {
            WA => {
                out.push(DIGIT_ZERO);
                reason.change_u101d_to_u1040 = true;
            }
            LAGAUNG => {
                out.push(DIGIT_FOUR);
                reason.change_u104e_to_u1044 = true;
            }
            ' ' | NBSP | ZWSP => match (spaces, c) {
                (SpaceRule::Remove, _) => reason.remove_space = true,
                (_, ' ') => out.push(' '),
                (SpaceRule::Visible, ZWSP) => reason.remove_space = true,
                _ => {
                    out.push(' ');
                    reason.normalize_space = true;
                }
            },
            c => out.push(c),
        }
    }

    (out, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_both_confusables_in_one_pass() {
        let (text, reason) = normalize("\u{104E}\u{1049}\u{101D}", SpaceRule::Visible);
        assert_eq!(text, "\u{1044}\u{1049}\u{1040}");
        assert!(reason.change_u101d_to_u1040);
        assert!(reason.change_u104e_to_u1044);
        assert!(!reason.normalize_space && !reason.remove_space);
    }

    #[test]
    fn canonical_text_is_left_alone() {
        for rule in [SpaceRule::Normalize, SpaceRule::Visible] {
            let (text, reason) = normalize("၃၁ ၁၂ ၂၀၂၀", rule);
            assert_eq!(text, "၃၁ ၁၂ ၂၀၂၀");
            assert!(reason.is_empty());
        }
        let (text, reason) = normalize("၃၁/၁၂/၂၀၂၀", SpaceRule::Remove);
        assert_eq!(text, "၃၁/၁၂/၂၀၂၀");
        assert!(reason.is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let (once, _) = normalize("+\u{104E}\u{101D}\u{200B}၁၂\u{00A0}၃", SpaceRule::Visible);
        let (twice, reason) = normalize(&once, SpaceRule::Visible);
        assert_eq!(once, twice);
        assert!(reason.is_empty());
    }

    #[test]
    fn space_rules() {
        let (text, reason) = normalize("၃၁\u{00A0}၁၂\u{200B}", SpaceRule::Normalize);
        assert_eq!(text, "၃၁ ၁၂ ");
        assert!(reason.normalize_space && !reason.remove_space);

        let (text, reason) = normalize("၃၁ ၊ ၁၂", SpaceRule::Remove);
        assert_eq!(text, "၃၁၊၁၂");
        assert!(reason.remove_space && !reason.normalize_space);

        let (text, reason) = normalize("၉၅\u{00A0}၉\u{200B}၉ ၁", SpaceRule::Visible);
        assert_eq!(text, "၉၅ ၉၉ ၁");
        assert!(reason.remove_space && reason.normalize_space);
    }

    #[test]
    fn confusable_lookup_goes_both_ways() {
        assert_eq!(digit_for_confusable('\u{101D}'), Some('\u{1040}'));
        assert_eq!(letter_for_confusable_digit('\u{1044}'), Some('\u{104E}'));
        assert_eq!(digit_for_confusable('\u{1000}'), None);
    }
}

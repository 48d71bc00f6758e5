use crate::constants::*;
use crate::extractor::{ExtractContext, TextExtractor};
use crate::fragment::{FragmentError, FragmentType, LetterInfo, TextFragment};
use crate::normalizer::letter_for_confusable_digit;

/// Classifies one letter, punctuation mark or syllable at the start of the
/// input. Digits are left to the number-group extractor unless they are
/// standing in for a letter.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleCharExtractor;

impl TextExtractor for SingleCharExtractor {
    fn extract_next(&self, input: &[char], _ctx: &ExtractContext<'_>) -> Option<TextFragment> {
        extract_single_char(input)
    }
}

pub fn extract_single_char(input: &[char]) -> Option<TextFragment> {
    let &first = input.first()?;
    if is_unsupported(first) {
        return None;
    }

    if is_uncombinable_letter(first) {
        return Some(uncombinable(input));
    }
    if is_letter_punctuation(first) {
        let info = LetterInfo { punctuation: true, alphabet: true, ..Default::default() };
        return Some(TextFragment::letter(first.to_string(), info));
    }
    if is_punctuation(first) {
        let info = LetterInfo { punctuation: true, ..Default::default() };
        return Some(TextFragment::letter(first.to_string(), info));
    }
    if is_syllable_base(first) {
        return Some(syllable(input, first, None));
    }
    if digit_used_as_letter(input, 0) {
        let base = letter_for_confusable_digit(first)?;
        return Some(syllable(input, base, Some(first)));
    }
    if is_combining_mark(first) {
        return Some(orphan_marks(input));
    }

    None
}

/// End (exclusive) of the marks and killed final that follow the base at
/// `start - 1`.
///
/// Marks are taken while their storage-order slots strictly increase; a
/// stacked consonant (virama + consonant) is only legal before every other
/// mark.
pub fn syllable_end(input: &[char], start: usize) -> usize {
    let mut i = start;
    let mut last_slot: Option<u8> = None;

    while let Some(&c) = input.get(i) {
        let stacks = input.get(i + 1).copied().is_some_and(is_consonant);
        if c == VIRAMA && last_slot.is_none() && stacks {
            last_slot = Some(STACK_SLOT);
            i += 2;
            continue;
        }
        match mark_slot(c) {
            Some(slot) if last_slot.map_or(true, |last| slot > last) => {
                last_slot = Some(slot);
                i += 1;
            }
            _ => break,
        }
    }

    i + final_consonant_len(input, i)
}

/// `digit` is the code point typed in place of `base`, if any.
fn syllable(input: &[char], base: char, digit: Option<char>) -> TextFragment {
    let end = syllable_end(input, 1);
    let matched: String = input[..end].iter().collect();

    let mut info = LetterInfo::default();
    if end == 1 {
        info.alphabet = true;
    } else {
        info.syllable_included = true;
        info.ancient = base == SHORT_U && input[1] == VOWEL_II;
    }

    let fragment = TextFragment::letter(matched, info);
    match digit {
        None => fragment,
        Some(digit) => {
            let normalized: String =
                std::iter::once(base).chain(input[1..end].iter().copied()).collect();
            let error = FragmentError {
                invalid_u1040_instead_of_u101d: digit == DIGIT_ZERO,
                invalid_u1044_instead_of_u104e: digit == DIGIT_FOUR,
                ..Default::default()
            };
            fragment.with_normalized(normalized).with_error(error)
        }
    }
}

fn uncombinable(input: &[char]) -> TextFragment {
    let end = 1 + input[1..].iter().take_while(|&&c| is_combining_mark(c)).count();
    let matched: String = input[..end].iter().collect();

    let mut info = LetterInfo { fragment_type: Some(FragmentType::Letter), ..Default::default() };
    if end == 1 {
        return TextFragment::letter(matched, info);
    }

    info.uncombinable_letter = true;
    let error = FragmentError { invalid_unicode_form: true, ..Default::default() };
    TextFragment::letter(matched, info).with_error(error)
}

/// Marks with no base before them. A virama keeps the consonant it stacks.
fn orphan_marks(input: &[char]) -> TextFragment {
    let mut i = 0;
    while let Some(&c) = input.get(i) {
        if c == VIRAMA && input.get(i + 1).copied().is_some_and(is_consonant) {
            i += 2;
        } else if is_combining_mark(c) {
            i += 1;
        } else {
            break;
        }
    }

    let matched: String = input[..i].iter().collect();
    let error = FragmentError {
        invalid_unicode_form: true,
        invalid_diacritics_start: true,
        ..Default::default()
    };
    TextFragment::letter(matched, LetterInfo::default()).with_error(error)
}

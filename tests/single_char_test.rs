use myanmar_rs::single_char::extract_single_char;
use myanmar_rs::{FragmentType, LetterInfo, TextFragment};

fn extract(input: &str) -> Option<TextFragment> {
    let cps: Vec<char> = input.chars().collect();
    extract_single_char(&cps)
}

fn letter(input: &str) -> (String, LetterInfo) {
    let fragment = extract(input).unwrap_or_else(|| panic!("no fragment for {input:?}"));
    let info = fragment.letter_info().cloned().unwrap();
    (fragment.matched_str, info)
}

#[test]
fn test_unsupported_code_points_are_declined() {
    for input in ["ဢ", "ဨ", "ဳ", "ဴ", "ဵ", "\u{1050}", "a", "၁", "!"] {
        assert!(extract(input).is_none(), "{input:?}");
    }
}

#[test]
fn test_uncombinable_letters() {
    for input in ["ဤ", "ဪ"] {
        let fragment = extract(input).unwrap();
        let info = fragment.letter_info().unwrap();
        assert_eq!(info.fragment_type, Some(FragmentType::Letter));
        assert!(!info.alphabet);
        assert!(fragment.error.is_none());
    }

    let (matched, _) = letter("ဤက");
    assert_eq!(matched, "ဤ");
}

#[test]
fn test_uncombinable_letter_with_marks_is_invalid() {
    let fragment = extract("ဤိ").unwrap();
    assert_eq!(fragment.matched_str, "ဤိ");
    assert!(fragment.letter_info().unwrap().uncombinable_letter);
    assert!(fragment.error.unwrap().invalid_unicode_form);
}

#[test]
fn test_single_letters() {
    for input in ["က", "အ", "ဣ", "ဥ", "ဧ", "ဩ", "ဿ", "၎"] {
        let (matched, info) = letter(input);
        assert_eq!(matched, input);
        assert_eq!(info, LetterInfo { alphabet: true, ..Default::default() }, "{input}");
    }
}

#[test]
fn test_punctuation() {
    for input in ["၌", "၍", "၏"] {
        let (_, info) = letter(input);
        assert!(info.punctuation && info.alphabet, "{input}");
    }
    for input in ["၊", "။"] {
        let (_, info) = letter(input);
        assert!(info.punctuation && !info.alphabet, "{input}");
    }

    assert_eq!(letter("၌က").0, "၌");
    assert_eq!(letter("၊က").0, "၊");
}

#[test]
fn test_syllables() {
    for (input, matched) in [
        ("ကို", "ကို"),
        ("ကောင်းသည်", "ကောင်း"),
        ("မြန်မာ", "မြန်"),
        ("ကန့်", "ကန့်"),
        ("မ္ဘာ", "မ္ဘာ"),
        ("ချိုင်း", "ချိုင်း"),
    ] {
        let (actual, info) = letter(input);
        assert_eq!(actual, matched, "{input}");
        assert!(info.syllable_included && !info.alphabet, "{input}");
    }
}

#[test]
fn test_syllable_stops_before_kinsi() {
    let (matched, info) = letter("သင်္ချိုင်း");
    assert_eq!(matched, "သ");
    assert!(info.alphabet);
}

#[test]
fn test_marks_out_of_order_start_a_new_fragment() {
    // ု (lower) cannot come before ိ (upper)
    let (matched, _) = letter("ကုိ");
    assert_eq!(matched, "ကု");
    let next = extract("ိ").unwrap();
    assert!(next.error.unwrap().invalid_diacritics_start);
}

#[test]
fn test_ancient_spelling() {
    let (matched, info) = letter("ဥ\u{102E}");
    assert_eq!(matched, "ဥ\u{102E}");
    assert!(info.ancient && info.syllable_included);
}

#[test]
fn test_orphan_marks() {
    let fragment = extract("\u{1031}\u{103B}က").unwrap();
    assert_eq!(fragment.matched_str, "\u{1031}\u{103B}");
    let error = fragment.error.unwrap();
    assert!(error.invalid_diacritics_start && error.invalid_unicode_form);

    let fragment = extract("\u{1039}ကာ").unwrap();
    assert_eq!(fragment.matched_str, "\u{1039}ကာ");
}

#[test]
fn test_digit_zero_used_as_wa() {
    let fragment = extract("\u{1040}\u{102B}").unwrap();
    assert_eq!(fragment.matched_str, "\u{1040}\u{102B}");
    assert_eq!(fragment.normalized_str, "\u{101D}\u{102B}");
    assert!(fragment.letter_info().unwrap().syllable_included);
    assert!(fragment.error.unwrap().invalid_u1040_instead_of_u101d);
}

#[test]
fn test_digit_four_used_as_lagaung() {
    let fragment = extract("\u{1044}င်း").unwrap();
    assert_eq!(fragment.matched_str, "\u{1044}င်း");
    assert_eq!(fragment.normalized_str, "\u{104E}င်း");
    assert!(fragment.error.unwrap().invalid_u1044_instead_of_u104e);
}

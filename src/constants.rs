pub const NGA: char = '\u{1004}';
pub const WA: char = '\u{101D}';
pub const SHORT_U: char = '\u{1025}';
pub const VOWEL_II: char = '\u{102E}';
pub const VIRAMA: char = '\u{1039}';
pub const ASAT: char = '\u{103A}';
pub const DOT_BELOW: char = '\u{1037}';
pub const VISARGA: char = '\u{1038}';
pub const MEDIAL_YA: char = '\u{103B}';
pub const VOWEL_E: char = '\u{1031}';
pub const DIGIT_ZERO: char = '\u{1040}';
pub const DIGIT_FOUR: char = '\u{1044}';
pub const LAGAUNG: char = '\u{104E}';
pub const LITTLE_SECTION: char = '\u{104A}';
pub const SECTION: char = '\u{104B}';

pub const NBSP: char = '\u{00A0}';
pub const ZWSP: char = '\u{200B}';

/// Kinsi in Unicode 5.1+ storage order.
pub const KINSI: [char; 3] = [NGA, ASAT, VIRAMA];
/// Kinsi as typed before asat got its own code point.
pub const KINSI_HISTORIC: [char; 3] = [NGA, VIRAMA, ASAT];

pub fn is_consonant(c: char) -> bool {
    let code = c as u32;
    (0x1000..=0x1021).contains(&code)
}

/// Letters that can start a syllable and carry marks.
pub fn is_syllable_base(c: char) -> bool {
    is_consonant(c)
        || matches!(
            c,
            '\u{1023}' | '\u{1025}' | '\u{1026}' | '\u{1027}' | '\u{1029}' | '\u{103F}' | LAGAUNG
        )
}

/// ဤ and ဪ are complete words on their own and never take marks.
pub fn is_uncombinable_letter(c: char) -> bool {
    matches!(c, '\u{1024}' | '\u{102A}')
}

/// Section markers that double as letters: ၌ ၍ ၏
pub fn is_letter_punctuation(c: char) -> bool {
    matches!(c, '\u{104C}' | '\u{104D}' | '\u{104F}')
}

pub fn is_punctuation(c: char) -> bool {
    matches!(c, LITTLE_SECTION | SECTION)
}

/// Dependent vowels, tone marks, virama, asat and medials of the core
/// Burmese inventory. Mon marks U+1033..U+1035 are excluded.
pub fn is_combining_mark(c: char) -> bool {
    let code = c as u32;
    (0x102B..=0x1032).contains(&code) || (0x1036..=0x103E).contains(&code)
}

/// Shan, Mon and extended-block code points outside the supported inventory.
pub fn is_unsupported(c: char) -> bool {
    let code = c as u32;
    matches!(code, 0x1022 | 0x1028)
        || (0x1033..=0x1035).contains(&code)
        || (0x1050..=0x109F).contains(&code)
}

pub fn is_myanmar_digit(c: char) -> bool {
    let code = c as u32;
    (0x1040..=0x1049).contains(&code)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || is_myanmar_digit(c)
}

/// Numeric value of an ASCII or Myanmar digit.
pub fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return Some(c as u32 - '0' as u32);
    }
    if is_myanmar_digit(c) {
        return Some(c as u32 - DIGIT_ZERO as u32);
    }
    None
}

/// Letters that are routinely typed in place of a digit.
pub fn is_confusable_digit(c: char) -> bool {
    matches!(c, WA | LAGAUNG)
}

/// Plain, non-breaking and zero-width spaces.
pub fn is_space_char(c: char) -> bool {
    matches!(c, ' ' | NBSP | ZWSP)
}

pub fn is_invisible_space(c: char) -> bool {
    matches!(c, NBSP | ZWSP)
}

/// Letters, vowels and marks of the Myanmar block, i.e. anything that makes a
/// neighbouring confusable read as a letter rather than a digit.
pub fn is_letter_or_mark(c: char) -> bool {
    let code = c as u32;
    (0x1000..=0x103F).contains(&code)
}

/// Storage-order slot of a combining mark inside one syllable.
///
/// Marks must appear with strictly increasing slots, except that the two
/// medials ya and ra share a slot and therefore exclude each other.
pub fn mark_slot(c: char) -> Option<u8> {
    let slot = match c {
        '\u{103B}' | '\u{103C}' => 1, // medial ya, ra
        '\u{103D}' => 2,              // medial wa
        '\u{103E}' => 3,              // medial ha
        '\u{1031}' => 4,              // e
        '\u{102D}' | '\u{102E}' | '\u{1032}' => 5,
        '\u{102F}' | '\u{1030}' => 6,
        '\u{102B}' | '\u{102C}' => 7,
        '\u{1036}' => 8, // anusvara
        DOT_BELOW => 9,
        ASAT => 10,
        VISARGA => 11,
        _ => return None,
    };
    Some(slot)
}

/// Slot taken by a stacked consonant (virama + consonant); it precedes all
/// marks.
pub const STACK_SLOT: u8 = 0;

pub fn starts_with_kinsi(input: &[char]) -> bool {
    input.starts_with(&KINSI) || input.starts_with(&KINSI_HISTORIC)
}

/// Length of a killed final consonant at `start`: C [dot below] asat
/// [dot below] [visarga], with at most one dot below. A kinsi is never a
/// final.
pub fn final_consonant_len(input: &[char], start: usize) -> usize {
    if start >= input.len() || !is_consonant(input[start]) {
        return 0;
    }
    if starts_with_kinsi(&input[start..]) {
        return 0;
    }

    let at = |i: usize| input.get(i).copied();
    let mut i = start + 1;
    let dotted = at(i) == Some(DOT_BELOW);
    if dotted {
        i += 1;
    }
    if at(i) != Some(ASAT) {
        return 0;
    }
    i += 1;
    if at(i) == Some(VIRAMA) {
        return 0;
    }
    if !dotted && at(i) == Some(DOT_BELOW) {
        i += 1;
    }
    if at(i) == Some(VISARGA) {
        i += 1;
    }

    i - start
}

/// True when the code point at `i` still belongs to the syllable that
/// precedes it.
pub fn continues_syllable(input: &[char], i: usize) -> bool {
    match input.get(i) {
        Some(&c) if is_combining_mark(c) => true,
        Some(_) => final_consonant_len(input, i) > 0,
        None => false,
    }
}

/// U+1040 carrying a mark, or U+1044 before င်, is a mistyped letter.
pub fn digit_used_as_letter(input: &[char], i: usize) -> bool {
    match input.get(i) {
        Some(&DIGIT_ZERO) => input.get(i + 1).copied().is_some_and(is_combining_mark),
        Some(&DIGIT_FOUR) => {
            input.get(i + 1) == Some(&NGA) && final_consonant_len(input, i + 1) > 0
        }
        _ => false,
    }
}

/// Separators permitted between the fields of a date.
pub fn is_date_separator(c: char) -> bool {
    matches!(c, '-' | '/' | '.' | '_' | LITTLE_SECTION | '~')
}

/// Symbols that glue a digit run to something other than a date.
pub fn is_date_breaker(c: char) -> bool {
    matches!(c, '#' | '$' | '%' | '+' | '@' | '\u{FF0B}')
}

/// Symbols a numeric scan may step over: ASCII punctuation, the Myanmar
/// section marks and the full-width plus.
pub fn is_numeric_symbol(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, LITTLE_SECTION | SECTION | '\u{FF0B}')
}

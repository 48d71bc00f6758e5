use crate::config::FragmenterConfig;
use crate::constants::*;
use crate::date::parse_date;
use crate::extractor::{ExtractContext, TextExtractor};
use crate::fragment::{FragmentError, FragmentKind, NormalizeReason, NumberGroupInfo, TextFragment};
use crate::measure_words::MeasureWords;
use crate::normalizer::{digit_for_confusable, normalize, SpaceRule};

/// Longest order-list label, e.g. `(၁၂၃)`.
const MAX_ORDER_LIST_DIGITS: usize = 3;

/// Furthest into a run a separated date can reach, with spaces around both
/// separators and a stray space inside a group.
const DATE_SPAN: usize = 20;

fn is_digit_like(c: char) -> bool {
    is_digit(c) || is_confusable_digit(c)
}

/// The stretch of digits, spaces and numeric symbols at the start of the
/// input that some parser can still read, with the value of every unit that
/// reads as a digit.
pub struct NumericRun<'a> {
    cps: &'a [char],
    values: Vec<Option<u32>>,
}

/// Symbols seen since the last digit.
#[derive(Default)]
struct Gap {
    separators: usize,
    open: Option<char>,
}

impl Gap {
    fn separate(&mut self) -> bool {
        self.separators += 1;
        self.separators == 1
    }

    /// Whether a parser can read on past the symbol at `i`.
    fn continues(&mut self, input: &[char], i: usize) -> bool {
        let c = input[i];
        match c {
            '+' => i == 0,
            '(' | '[' => {
                let next_is_digit = input.get(i + 1).copied().is_some_and(is_digit_like);
                if self.open.is_some() || !next_is_digit {
                    return false;
                }
                self.open = Some(c);
                true
            }
            ')' | ']' => {
                let closes = matches!((self.open, c), (Some('('), ')') | (Some('['), ']'));
                if closes {
                    self.open = None;
                }
                closes
            }
            ',' => {
                let group = input[i + 1..]
                    .iter()
                    .take_while(|&&c| is_digit_like(c))
                    .take(4)
                    .count();
                group == 3 && self.separate()
            }
            '-' | '.' => self.separate(),
            '/' | '_' | '~' | LITTLE_SECTION => i < DATE_SPAN && self.separate(),
            _ => false,
        }
    }
}

impl<'a> NumericRun<'a> {
    /// `left` is the text before `input`; a confusable letter directly after
    /// another letter is part of a word, not a number.
    ///
    /// The run stops one digit past the first symbol or space run no parser
    /// can continue through, so a date or number can still see what follows
    /// it.
    pub fn scan(input: &'a [char], left: &[char]) -> Option<Self> {
        let &first = input.first()?;
        if !is_digit_like(first) && !matches!(first, '+' | '(' | '[') {
            return None;
        }

        let mut values = Vec::new();
        let mut gap = Gap::default();
        let mut closing = false;
        let mut i = 0;

        while let Some(&c) = input.get(i) {
            if digit_used_as_letter(input, i) {
                break;
            }
            if is_digit(c) {
                values.push(digit_value(c));
                i += 1;
                gap.separators = 0;
                if closing {
                    break;
                }
                continue;
            }
            if is_confusable_digit(c) {
                let preceded_by_letter =
                    i == 0 && left.last().copied().is_some_and(is_letter_or_mark);
                if preceded_by_letter {
                    break;
                }
                let end = i + input[i..].iter().take_while(|&&c| is_confusable_digit(c)).count();
                if input.get(end).copied().is_some_and(is_letter_or_mark) {
                    break;
                }
                let end = if closing { i + 1 } else { end };
                for &c in &input[i..end] {
                    values.push(digit_for_confusable(c).and_then(digit_value));
                }
                i = end;
                gap.separators = 0;
                if closing {
                    break;
                }
                continue;
            }
            if closing {
                break;
            }
            if is_space_char(c) {
                let spaces = input[i..].iter().take_while(|&&c| is_space_char(c)).count();
                values.extend(std::iter::repeat(None).take(spaces));
                i += spaces;
                closing = spaces > 1;
                continue;
            }
            if is_numeric_symbol(c) {
                closing = !gap.continues(input, i);
                values.push(None);
                i += 1;
                continue;
            }
            break;
        }

        let opens = values.first().is_some_and(|v| v.is_some()) || matches!(first, '+' | '(' | '[');
        if i == 0 || !opens {
            return None;
        }

        Some(NumericRun { cps: &input[..i], values })
    }

    pub fn len(&self) -> usize {
        self.cps.len()
    }

    pub fn get(&self, i: usize) -> Option<char> {
        self.cps.get(i).copied()
    }

    pub fn value(&self, i: usize) -> Option<u32> {
        self.values.get(i).copied().flatten()
    }

    pub fn is_digit(&self, i: usize) -> bool {
        self.value(i).is_some()
    }

    pub fn is_space(&self, i: usize) -> bool {
        self.get(i).is_some_and(is_space_char)
    }

    /// Number of consecutive digit units starting at `i`.
    pub fn digits_from(&self, i: usize) -> usize {
        (i..self.len()).take_while(|&j| self.is_digit(j)).count()
    }

    /// Numeric value of the digit units in `start..end`, skipping anything
    /// else.
    pub fn number(&self, start: usize, end: usize) -> u32 {
        (start..end)
            .filter_map(|i| self.value(i))
            .fold(0, |acc, d| acc.saturating_mul(10).saturating_add(d))
    }

    pub fn text(&self, start: usize, end: usize) -> String {
        self.cps[start..end].iter().collect()
    }

    /// True when `..end` holds at least one real digit rather than only
    /// confusable letters.
    fn has_real_digit(&self, end: usize) -> bool {
        self.cps[..end].iter().any(|&c| is_digit(c))
    }
}

/// Dates, phone numbers, plain and order-list numbers, and numbers followed
/// by a measure word.
pub struct NumberGroupExtractor {
    two_digit_year_max: u32,
    min_phone_digits: usize,
    measure_words: Option<MeasureWords>,
}

impl Default for NumberGroupExtractor {
    fn default() -> Self {
        NumberGroupExtractor::new(&FragmenterConfig::default(), Some(MeasureWords::builtin()))
    }
}

/// A candidate reading of the run before the longest one is picked.
struct Candidate {
    len: usize,
    info: NumberGroupInfo,
    normalized: String,
    reason: NormalizeReason,
}

impl NumberGroupExtractor {
    pub fn new(config: &FragmenterConfig, measure_words: Option<MeasureWords>) -> Self {
        NumberGroupExtractor {
            two_digit_year_max: config.two_digit_year_max,
            min_phone_digits: config.min_phone_digits,
            measure_words,
        }
    }

    fn phone(&self, run: &NumericRun<'_>) -> Option<Candidate> {
        let len = parse_phone(run, self.min_phone_digits)?;
        let (normalized, reason) = normalize(&run.text(0, len), SpaceRule::Visible);
        let info = NumberGroupInfo { possible_phone_number: true, ..Default::default() };
        Some(Candidate { len, info, normalized, reason })
    }

    fn order_list(&self, run: &NumericRun<'_>) -> Option<Candidate> {
        let (len, digits) = parse_order_list(run)?;
        let (normalized, reason) = normalize(&run.text(0, len), SpaceRule::Visible);
        let (number_str, _) = normalize(&run.text(digits.0, digits.1), SpaceRule::Visible);
        let info = NumberGroupInfo {
            number: true,
            number_str: Some(number_str),
            number_order_list: true,
            ..Default::default()
        };
        Some(Candidate { len, info, normalized, reason })
    }

    fn number(&self, run: &NumericRun<'_>, input: &[char]) -> Option<Candidate> {
        let len = parse_number(run)?;
        let (mut normalized, mut reason) = normalize(&run.text(0, len), SpaceRule::Visible);
        let number_str: String = normalized.chars().filter(|&c| c != ',').collect();
        let mut info = NumberGroupInfo {
            number: true,
            number_str: Some(number_str),
            ..Default::default()
        };

        let mut len = len;
        if let Some((gap, word_len)) = self.measure_word_after(input, len) {
            let space: String = input[len..len + gap].iter().collect();
            let (space, space_reason) = normalize(&space, SpaceRule::Visible);
            let word: String = input[len + gap..len + gap + word_len].iter().collect();
            normalized.push_str(&space);
            normalized.push_str(&word);
            reason.merge(space_reason);
            info.measure_words.push(word);
            len += gap + word_len;
        }

        Some(Candidate { len, info, normalized, reason })
    }

    /// Space count (0 or 1) and word length of a measure word at `at`.
    fn measure_word_after(&self, input: &[char], at: usize) -> Option<(usize, usize)> {
        let words = self.measure_words.as_ref()?;
        let gap = usize::from(input.get(at).copied().is_some_and(is_space_char));
        let word_len = words.longest_match(input, at + gap)?;
        Some((gap, word_len))
    }
}

impl TextExtractor for NumberGroupExtractor {
    fn extract_next(&self, input: &[char], ctx: &ExtractContext<'_>) -> Option<TextFragment> {
        let run = NumericRun::scan(input, ctx.left_str)?;

        if let Some(date) = parse_date(&run, self.two_digit_year_max) {
            if run.has_real_digit(date.len) {
                let info = NumberGroupInfo {
                    possible_date: true,
                    date_format: Some(date.format),
                    date_separator: date.separator,
                    number: date.compact,
                    number_str: date.compact.then(|| date.normalized.clone()),
                    ..Default::default()
                };
                let error = date
                    .space_error
                    .then(|| FragmentError { invalid_space_included: true, ..Default::default() });
                let candidate = Candidate {
                    len: date.len,
                    info,
                    normalized: date.normalized,
                    reason: date.reason,
                };
                return Some(build_fragment(input, candidate, error));
            }
        }

        let mut best: Option<Candidate> = None;
        let candidates = [self.phone(&run), self.order_list(&run), self.number(&run, input)];
        for candidate in candidates.into_iter().flatten() {
            if !run.has_real_digit(candidate.len.min(run.len())) {
                continue;
            }
            if best.as_ref().map_or(true, |b| candidate.len > b.len) {
                best = Some(candidate);
            }
        }

        best.map(|candidate| build_fragment(input, candidate, None))
    }
}

fn build_fragment(
    input: &[char],
    candidate: Candidate,
    error: Option<FragmentError>,
) -> TextFragment {
    let matched: String = input[..candidate.len].iter().collect();
    let space_included = matched.chars().any(is_space_char);

    let mut fragment = TextFragment::new(matched, FragmentKind::NumberGroup(candidate.info))
        .with_normalized(candidate.normalized);
    fragment.space_included = space_included;
    fragment.normalize_reason = candidate.reason.into_option();
    fragment.error = error;
    fragment
}

/// `+`, then digit groups and bracketed groups joined by at most one space,
/// an optional `-` or `.`, and at most one space.
fn parse_phone(run: &NumericRun<'_>, min_digits: usize) -> Option<usize> {
    let mut i = 0;
    if run.get(0) == Some('+') {
        i = 1;
        if run.is_space(i) {
            i += 1;
        }
    }

    let mut end = None;
    let mut digits = 0;
    while let Some((group_end, n)) = phone_group(run, i) {
        digits += n;
        end = Some(group_end);

        let mut j = group_end;
        if run.is_space(j) {
            j += 1;
        }
        if matches!(run.get(j), Some('-' | '.')) {
            j += 1;
            if run.is_space(j) {
                j += 1;
            }
        }
        i = j;
    }

    let end = end?;
    (digits >= min_digits).then_some(end)
}

/// End and digit count of a bare or bracketed digit group at `i`.
fn phone_group(run: &NumericRun<'_>, i: usize) -> Option<(usize, usize)> {
    let closer = match run.get(i)? {
        '(' => ')',
        '[' => ']',
        _ => {
            let n = run.digits_from(i);
            return (n > 0).then_some((i + n, n));
        }
    };
    let n = run.digits_from(i + 1);
    (n > 0 && run.get(i + 1 + n) == Some(closer)).then_some((i + n + 2, n))
}

/// `(d)`, `d)` or `d။` with up to three digits. Returns the length and the
/// range of the digits.
fn parse_order_list(run: &NumericRun<'_>) -> Option<(usize, (usize, usize))> {
    let bracketed = run.get(0) == Some('(');
    let start = usize::from(bracketed);
    let n = run.digits_from(start);
    if n == 0 || n > MAX_ORDER_LIST_DIGITS {
        return None;
    }

    let close = run.get(start + n)?;
    let closed = if bracketed { close == ')' } else { close == ')' || close == SECTION };
    closed.then_some((start + n + 1, (start, start + n)))
}

/// Digits, `,` groups of exactly three digits, and an optional `.` fraction.
fn parse_number(run: &NumericRun<'_>) -> Option<usize> {
    let mut i = run.digits_from(0);
    if i == 0 {
        return None;
    }

    while run.get(i) == Some(',') && run.digits_from(i + 1) == 3 {
        i += 4;
    }
    if run.get(i) == Some('.') {
        let fraction = run.digits_from(i + 1);
        if fraction > 0 {
            i += 1 + fraction;
        }
    }
    Some(i)
}

//! Date readings of a numeric run.
//!
//! Three digit groups joined by one separator, used consistently, or eight
//! digits read as `yyyyMMdd`. Only syntactic ranges are checked: day 1..=31,
//! month 1..=12, and a two-digit year no larger than the configured maximum.

use crate::constants::{is_date_breaker, is_date_separator};
use crate::fragment::NormalizeReason;
use crate::normalizer::{normalize, SpaceRule};
use crate::number_group::NumericRun;

const COMPACT_WIDTH: usize = 8;

/// The space character a space-only gap is reported as.
const SPACE_SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq)]
pub struct DateMatch {
    /// Code points consumed from the run.
    pub len: usize,
    pub format: String,
    pub separator: Option<char>,
    /// Read from eight consecutive digits.
    pub compact: bool,
    pub normalized: String,
    pub reason: NormalizeReason,
    /// A space inside a digit group was dropped.
    pub space_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    DayMonthYear,
    YearMonthDay,
    MonthDayYear,
}

const ORDERS: [Order; 3] = [Order::DayMonthYear, Order::YearMonthDay, Order::MonthDayYear];

/// One digit group, possibly with a single stray space inside it.
#[derive(Debug, Clone, Copy)]
struct Group {
    start: usize,
    end: usize,
    width: usize,
    value: u32,
}

#[derive(Debug, Clone, Copy)]
struct Gap {
    end: usize,
    separator: char,
}

pub fn parse_date(run: &NumericRun<'_>, two_digit_year_max: u32) -> Option<DateMatch> {
    let first_width = run.digits_from(0);
    if first_width == COMPACT_WIDTH {
        return parse_compact(run);
    }
    if first_width == 0 || first_width > 4 {
        return None;
    }

    let g1 = Group {
        start: 0,
        end: first_width,
        width: first_width,
        value: run.number(0, first_width),
    };
    let gap1 = parse_gap(run, g1.end)?;
    let embedded = gap1.separator != SPACE_SEPARATOR;

    for g2 in group_candidates(run, gap1.end, embedded) {
        let Some(gap2) = parse_gap(run, g2.end) else {
            continue;
        };
        if gap2.separator != gap1.separator {
            continue;
        }
        for g3 in group_candidates(run, gap2.end, embedded) {
            if !trailing_ok(run, g3.end) {
                continue;
            }
            if let Some(format) = classify([g1, g2, g3], gap1.separator, two_digit_year_max) {
                return Some(build_separated(run, [g1, g2, g3], gap1.separator, format));
            }
        }
    }
    None
}

fn parse_compact(run: &NumericRun<'_>) -> Option<DateMatch> {
    let month = run.number(4, 6);
    let day = run.number(6, 8);
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || !trailing_ok(run, COMPACT_WIDTH) {
        return None;
    }

    let (normalized, reason) = normalize(&run.text(0, COMPACT_WIDTH), SpaceRule::Remove);
    Some(DateMatch {
        len: COMPACT_WIDTH,
        format: "yyyyMMdd".to_string(),
        separator: None,
        compact: true,
        normalized,
        reason,
        space_error: false,
    })
}

/// At most one space, then a separator symbol and at most one more space;
/// or exactly one space on its own. A digit must follow.
fn parse_gap(run: &NumericRun<'_>, start: usize) -> Option<Gap> {
    let mut i = start;
    let leading_space = run.is_space(i);
    if leading_space {
        i += 1;
    }

    let separator = match run.get(i) {
        Some(c) if is_date_separator(c) => {
            i += 1;
            if run.is_space(i) {
                i += 1;
            }
            c
        }
        _ if leading_space => SPACE_SEPARATOR,
        _ => return None,
    };

    run.is_digit(i).then_some(Gap { end: i, separator })
}

/// The plain group at `start`, then, if allowed, the same group continued
/// past one embedded space.
fn group_candidates(run: &NumericRun<'_>, start: usize, embedded: bool) -> Vec<Group> {
    let width = run.digits_from(start);
    let end = start + width;
    let mut groups = vec![Group { start, end, width, value: run.number(start, end) }];

    if embedded && run.is_space(end) {
        let rest = run.digits_from(end + 1);
        if rest > 0 {
            let end = end + 1 + rest;
            groups.push(Group { start, end, width: width + rest, value: run.number(start, end) });
        }
    }
    groups
}

/// A date may not run straight into another digit, a breaker symbol, or a
/// symbol or spaces followed by a digit.
fn trailing_ok(run: &NumericRun<'_>, end: usize) -> bool {
    let Some(c) = run.get(end) else {
        return true;
    };
    if run.is_digit(end) || is_date_breaker(c) {
        return false;
    }
    if run.is_space(end) {
        let spaces = (end..run.len()).take_while(|&i| run.is_space(i)).count();
        return !run.is_digit(end + spaces);
    }
    !run.is_digit(end + 1)
}

/// The first ordering the groups satisfy, as a format string.
fn classify(groups: [Group; 3], separator: char, two_digit_year_max: u32) -> Option<String> {
    let [g1, g2, g3] = groups;

    ORDERS.iter().find_map(|&order| {
        let (day, month, year) = match order {
            Order::DayMonthYear => (g1, g2, g3),
            Order::YearMonthDay => (g3, g2, g1),
            Order::MonthDayYear => (g2, g1, g3),
        };

        let year_ok = match year.width {
            4 => true,
            2 => order != Order::YearMonthDay && year.value <= two_digit_year_max,
            _ => false,
        };
        let widths_ok = (1..=2).contains(&day.width) && (1..=2).contains(&month.width);
        let in_range = (1..=31).contains(&day.value) && (1..=12).contains(&month.value);
        if !year_ok || !widths_ok || !in_range {
            return None;
        }

        let padded = day.width == 2 && month.width == 2;
        let d = if padded { "dd" } else { "d" };
        let m = if padded { "MM" } else { "M" };
        let y = if year.width == 4 { "yyyy" } else { "yy" };
        let tokens = match order {
            Order::DayMonthYear => [d, m, y],
            Order::YearMonthDay => [y, m, d],
            Order::MonthDayYear => [m, d, y],
        };
        Some(tokens.join(separator.to_string().as_str()))
    })
}

fn build_separated(
    run: &NumericRun<'_>,
    groups: [Group; 3],
    separator: char,
    format: String,
) -> DateMatch {
    let gap_rule = if separator == SPACE_SEPARATOR {
        SpaceRule::Normalize
    } else {
        SpaceRule::Remove
    };

    let mut normalized = String::new();
    let mut reason = NormalizeReason::default();
    let mut space_error = false;

    for (i, group) in groups.iter().enumerate() {
        let (text, mut group_reason) =
            normalize(&run.text(group.start, group.end), SpaceRule::Remove);
        space_error |= group_reason.remove_space;
        group_reason.remove_space = false;
        normalized.push_str(&text);
        reason.merge(group_reason);

        if let Some(next) = groups.get(i + 1) {
            let (text, gap_reason) = normalize(&run.text(group.end, next.start), gap_rule);
            normalized.push_str(&text);
            reason.merge(gap_reason);
        }
    }

    DateMatch {
        len: groups[2].end,
        format,
        separator: Some(separator),
        compact: false,
        normalized,
        reason,
        space_error,
    }
}

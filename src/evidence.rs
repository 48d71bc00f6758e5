//! Running estimate of whether a stream is Unicode or Zawgyi encoded.
//!
//! Every fragment with style evidence blends its own intrinsic evidence with
//! the history that precedes it. The weights are calibrated constants rather
//! than a probability law; the kinsi table is pinned down by the extractor
//! tests.

use serde::Serialize;

use crate::constants::{final_consonant_len, MEDIAL_YA, VIRAMA, VOWEL_E};
use crate::extractor::ExtractContext;
use crate::fragment::{FragmentKind, StyleScore, TextFragment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    Unicode,
    Zawgyi,
}

/// Evidence contributed by one fragment on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evidence {
    pub score: StyleScore,
    /// Decisive evidence replaces the history instead of blending with it.
    pub decisive: bool,
}

impl Evidence {
    pub const fn blended(uni: f64, zg: f64) -> Self {
        Evidence { score: StyleScore::new(uni, zg), decisive: false }
    }

    pub const fn decisive(uni: f64, zg: f64) -> Self {
        Evidence { score: StyleScore::new(uni, zg), decisive: true }
    }
}

/// Kinsi with a syllable stacked under it.
pub const KINSI_ATTACHED: Evidence = Evidence::decisive(1.0, 0.0);
/// Kinsi with no host letter on its left.
pub const KINSI_DETACHED: Evidence = Evidence::blended(1.0, 0.0);
/// Kinsi on a host letter, still waiting for the stacked consonant.
pub const KINSI_HOSTED: Evidence = Evidence::blended(0.7, 0.1);

/// A letter or syllable that reads the same under both encodings.
pub const AMBIGUOUS_LETTER: Evidence = Evidence::blended(0.5, 0.5);
/// Killed final consonant written with U+103A.
pub const UNICODE_FINAL: Evidence = Evidence::blended(0.8, 0.2);
/// Marks typed before their consonant, or U+1039 used as a killer.
pub const LEGACY_LEADING_MARK: Evidence = Evidence::blended(0.1, 0.9);

/// State threaded between fragments of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvidenceState {
    pub last_known_writing_style: Option<WritingStyle>,
    pub last_known_writing_style_probability: f64,
}

impl EvidenceState {
    pub fn new(style: WritingStyle, probability: f64) -> Self {
        EvidenceState {
            last_known_writing_style: Some(style),
            last_known_writing_style_probability: probability,
        }
    }

    /// The state as a score pair, if any style is known.
    pub fn score(&self) -> Option<StyleScore> {
        let p = self.last_known_writing_style_probability;
        match self.last_known_writing_style? {
            WritingStyle::Unicode => Some(StyleScore::new(p, 1.0 - p)),
            WritingStyle::Zawgyi => Some(StyleScore::new(1.0 - p, p)),
        }
    }

    /// Folds a freshly emitted fragment into the state. Fragments without a
    /// score leave it untouched.
    pub fn observe(&mut self, fragment: &TextFragment) {
        let Some(score) = fragment.style else {
            return;
        };
        let (uni, zg) = (score.uni_probability, score.zg_probability);
        if uni > zg {
            *self = EvidenceState::new(WritingStyle::Unicode, uni);
        } else if zg > uni {
            *self = EvidenceState::new(WritingStyle::Zawgyi, zg);
        } else {
            self.last_known_writing_style = None;
            self.last_known_writing_style_probability = uni;
        }
    }
}

/// History a new fragment is blended with: the previous fragment's own
/// score when it has one, else the running state.
pub fn history(ctx: &ExtractContext<'_>) -> Option<StyleScore> {
    ctx.last_fragment()
        .and_then(|fragment| fragment.style)
        .or_else(|| ctx.evidence.score())
}

pub fn blend(evidence: Evidence, history: Option<StyleScore>) -> StyleScore {
    match history {
        Some(h) if !evidence.decisive => StyleScore::new(
            (evidence.score.uni_probability + h.uni_probability) / 2.0,
            (evidence.score.zg_probability + h.zg_probability) / 2.0,
        ),
        _ => evidence.score,
    }
}

/// Evidence a letter fragment carries by itself. Kinsi fragments score
/// themselves; digits, punctuation, whitespace and unrecognized text carry
/// none.
pub fn intrinsic(fragment: &TextFragment) -> Option<Evidence> {
    let FragmentKind::Letter(info) = &fragment.kind else {
        return None;
    };
    if info.punctuation && !info.alphabet {
        return None;
    }

    let cps: Vec<char> = fragment.matched_str.chars().collect();
    let orphan = fragment.error.is_some_and(|e| e.invalid_diacritics_start);
    if orphan {
        return match cps.first() {
            Some(&VOWEL_E) | Some(&MEDIAL_YA) | Some(&VIRAMA) => Some(LEGACY_LEADING_MARK),
            _ => None,
        };
    }

    let killed_final = (1..cps.len()).any(|i| final_consonant_len(&cps, i) > 0);
    if info.syllable_included && killed_final {
        return Some(UNICODE_FINAL);
    }

    Some(AMBIGUOUS_LETTER)
}

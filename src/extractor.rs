use crate::evidence::EvidenceState;
use crate::fragment::TextFragment;

/// What an extractor may look at besides the remaining input.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'a> {
    pub evidence: EvidenceState,
    /// Fragments produced so far in this run, oldest first.
    pub fragments: &'a [TextFragment],
    /// Text immediately to the left of the current position.
    pub left_str: &'a [char],
}

impl ExtractContext<'static> {
    /// Context for the very first position of a run.
    pub fn empty() -> Self {
        ExtractContext {
            evidence: EvidenceState::default(),
            fragments: &[],
            left_str: &[],
        }
    }
}

impl<'a> ExtractContext<'a> {
    pub fn last_fragment(&self) -> Option<&'a TextFragment> {
        self.fragments.last()
    }
}

/// One recognizer in the fragmenter cascade.
///
/// Implementations return `None` rather than an empty match; a returned
/// fragment always covers a non-empty prefix of `input`.
pub trait TextExtractor: Send + Sync {
    fn extract_next(&self, input: &[char], ctx: &ExtractContext<'_>) -> Option<TextFragment>;
}

/// Position inside the code points of one input string.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    cps: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(cps: &'a [char]) -> Self {
        Cursor { cps, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.cps.len()
    }

    /// Code points not yet consumed.
    pub fn remaining(&self) -> &'a [char] {
        &self.cps[self.pos..]
    }

    /// Code points already consumed.
    pub fn consumed(&self) -> &'a [char] {
        &self.cps[..self.pos]
    }

    pub fn advance(self, len: usize) -> Self {
        Cursor {
            cps: self.cps,
            pos: (self.pos + len).min(self.cps.len()),
        }
    }
}

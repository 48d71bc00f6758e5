use std::cell::RefCell;

use tracing::{debug, trace, warn};

use crate::config::FragmenterConfig;
use crate::error::Result;
use crate::evidence::{blend, history, intrinsic, EvidenceState};
use crate::extractor::{Cursor, ExtractContext, TextExtractor};
use crate::fragment::{FragmentError, FragmentKind, TextFragment};
use crate::kinsi::KinsiExtractor;
use crate::measure_words::MeasureWords;
use crate::number_group::NumberGroupExtractor;
use crate::single_char::SingleCharExtractor;
use crate::whitespace::WhitespaceExtractor;

thread_local! {
    static TL_CODEPOINTS: RefCell<Vec<char>> = RefCell::new(Vec::with_capacity(4096));
}

/// Splits text into classified fragments. Immutable after construction, so
/// one instance can be shared across threads.
pub struct MyanmarTextFragmenter {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl Default for MyanmarTextFragmenter {
    fn default() -> Self {
        MyanmarTextFragmenter::with_measure_words(
            &FragmenterConfig::default(),
            Some(MeasureWords::builtin()),
        )
    }
}

impl MyanmarTextFragmenter {
    /// Builds the extractor cascade, loading the extra measure-word file if
    /// the config names one.
    pub fn new(config: &FragmenterConfig) -> Result<Self> {
        let measure_words = match (&config.measure_words_path, config.measure_words) {
            (_, false) => None,
            (Some(path), true) => {
                let words = MeasureWords::with_file(path)?;
                debug!(path = %path.display(), words = words.len(), "loaded measure words");
                Some(words)
            }
            (None, true) => Some(MeasureWords::builtin()),
        };
        Ok(MyanmarTextFragmenter::with_measure_words(config, measure_words))
    }

    pub fn with_measure_words(
        config: &FragmenterConfig,
        measure_words: Option<MeasureWords>,
    ) -> Self {
        let measure_words = measure_words.filter(|_| config.measure_words);
        MyanmarTextFragmenter {
            extractors: vec![
                Box::new(KinsiExtractor),
                Box::new(NumberGroupExtractor::new(config, measure_words)),
                Box::new(SingleCharExtractor),
                Box::new(WhitespaceExtractor),
            ],
        }
    }

    pub fn fragment(&self, text: &str) -> Vec<TextFragment> {
        TL_CODEPOINTS.with(|buf| {
            let mut cps = buf.borrow_mut();
            cps.clear();
            cps.extend(text.chars());
            self.fragment_codepoints(&cps)
        })
    }

    /// Streaming form of [`fragment`](Self::fragment).
    pub fn fragments(&self, text: &str) -> Fragments<'_> {
        Fragments {
            fragmenter: self,
            cps: text.chars().collect(),
            pos: 0,
            evidence: EvidenceState::default(),
            emitted: Vec::new(),
        }
    }

    fn fragment_codepoints(&self, cps: &[char]) -> Vec<TextFragment> {
        let mut fragments = Vec::new();
        let mut evidence = EvidenceState::default();
        let mut cursor = Cursor::new(cps);

        while !cursor.is_at_end() {
            let ctx = ExtractContext {
                evidence,
                fragments: &fragments,
                left_str: cursor.consumed(),
            };
            let Some(fragment) = self.next_fragment(cursor.remaining(), &ctx) else {
                break;
            };
            evidence.observe(&fragment);
            cursor = cursor.advance(fragment.char_len());
            fragments.push(fragment);
        }

        debug!(
            chars = cps.len(),
            fragments = fragments.len(),
            style = ?evidence.last_known_writing_style,
            "fragmented text"
        );
        fragments
    }

    /// One step of the loop: the fragment at the start of `input`, with its
    /// style score filled in. `None` only for empty input.
    pub fn next_fragment(&self, input: &[char], ctx: &ExtractContext<'_>) -> Option<TextFragment> {
        if input.is_empty() {
            return None;
        }

        let fragment = match self.extract(input, ctx) {
            Some(fragment) => fragment,
            None => {
                let len = self.unrecognized_len(input, ctx);
                let matched: String = input[..len].iter().collect();
                warn!(text = %matched, "unrecognized text");
                TextFragment::new(matched, FragmentKind::Unrecognized)
                    .with_error(FragmentError { unrecognized_text: true, ..Default::default() })
            }
        };

        let fragment = attach_style(fragment, ctx);
        trace!(matched = %fragment.matched_str, kind = ?fragment.kind, "fragment");
        Some(fragment)
    }

    fn extract(&self, input: &[char], ctx: &ExtractContext<'_>) -> Option<TextFragment> {
        self.extractors
            .iter()
            .find_map(|extractor| extractor.extract_next(input, ctx))
            .filter(|fragment| fragment.char_len() > 0)
    }

    /// At least one code point, then every following position no extractor
    /// can start at.
    fn unrecognized_len(&self, input: &[char], ctx: &ExtractContext<'_>) -> usize {
        let mut len = 1;
        while len < input.len() {
            let probe = ExtractContext { left_str: &input[..len], ..*ctx };
            if self.extract(&input[len..], &probe).is_some() {
                break;
            }
            len += 1;
        }
        len
    }
}

/// Fragments that score themselves keep their score; letter fragments get
/// their intrinsic evidence blended with the history.
fn attach_style(fragment: TextFragment, ctx: &ExtractContext<'_>) -> TextFragment {
    if fragment.style.is_some() {
        return fragment;
    }
    match intrinsic(&fragment) {
        Some(evidence) => {
            let style = blend(evidence, history(ctx));
            fragment.with_style(style)
        }
        None => fragment,
    }
}

/// Iterator returned by [`MyanmarTextFragmenter::fragments`].
pub struct Fragments<'f> {
    fragmenter: &'f MyanmarTextFragmenter,
    cps: Vec<char>,
    pos: usize,
    evidence: EvidenceState,
    emitted: Vec<TextFragment>,
}

impl Fragments<'_> {
    /// Evidence state after the fragments yielded so far.
    pub fn evidence(&self) -> EvidenceState {
        self.evidence
    }
}

impl Iterator for Fragments<'_> {
    type Item = TextFragment;

    fn next(&mut self) -> Option<TextFragment> {
        let ctx = ExtractContext {
            evidence: self.evidence,
            fragments: &self.emitted,
            left_str: &self.cps[..self.pos],
        };
        let fragment = self.fragmenter.next_fragment(&self.cps[self.pos..], &ctx)?;

        self.evidence.observe(&fragment);
        self.pos += fragment.char_len();
        self.emitted.push(fragment.clone());
        Some(fragment)
    }
}

use crate::constants::{is_invisible_space, ZWSP};
use crate::extractor::{ExtractContext, TextExtractor};
use crate::fragment::{FragmentKind, TextFragment};
use crate::normalizer::{normalize, SpaceRule};

/// A run of whitespace, including zero-width spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceExtractor;

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == ZWSP
}

impl TextExtractor for WhitespaceExtractor {
    fn extract_next(&self, input: &[char], _ctx: &ExtractContext<'_>) -> Option<TextFragment> {
        let len = input.iter().take_while(|&&c| is_blank(c)).count();
        if len == 0 {
            return None;
        }

        let matched: String = input[..len].iter().collect();
        let (normalized, reason) = normalize(&matched, SpaceRule::Visible);

        let mut fragment =
            TextFragment::new(matched, FragmentKind::Whitespace).with_normalized(normalized);
        fragment.space_included = true;
        fragment.invisible_space_included = input[..len].iter().any(|&c| is_invisible_space(c));
        fragment.normalize_reason = reason.into_option();
        Some(fragment)
    }
}

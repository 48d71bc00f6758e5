use crate::constants::{is_consonant, starts_with_kinsi, KINSI};
use crate::evidence::{blend, history, KINSI_ATTACHED, KINSI_DETACHED, KINSI_HOSTED};
use crate::extractor::{ExtractContext, TextExtractor};
use crate::fragment::{FragmentKind, KinsiInfo, TextFragment};
use crate::single_char::syllable_end;

/// Matches the kinsi conjunct and, when a consonant is stacked under it, the
/// whole syllable that consonant starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct KinsiExtractor;

impl TextExtractor for KinsiExtractor {
    fn extract_next(&self, input: &[char], ctx: &ExtractContext<'_>) -> Option<TextFragment> {
        if !starts_with_kinsi(input) {
            return None;
        }

        let symbol_len = KINSI.len();
        let hosted = ctx.left_str.last().copied().is_some_and(is_consonant);
        let attached = input.get(symbol_len).copied().is_some_and(is_consonant);

        let end = if attached { syllable_end(input, symbol_len + 1) } else { symbol_len };
        let matched: String = input[..end].iter().collect();

        let info = KinsiInfo {
            kinsi_symbol_only: !hosted && !attached,
            left_letter_required: !hosted,
            right_letter_required: !attached,
        };
        let evidence = match (hosted, attached) {
            (_, true) => KINSI_ATTACHED,
            (false, false) => KINSI_DETACHED,
            (true, false) => KINSI_HOSTED,
        };

        let style = blend(evidence, history(ctx));
        Some(TextFragment::new(matched, FragmentKind::Kinsi(info)).with_style(style))
    }
}

//! Fragment types produced by the extractors.

use serde::Serialize;

fn is_false(value: &bool) -> bool {
    !*value
}

/// One classified, contiguous unit of the input text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    /// Exact text consumed from the input.
    pub matched_str: String,
    /// `matched_str` after confusable and whitespace correction.
    pub normalized_str: String,

    #[serde(skip_serializing_if = "is_false")]
    pub space_included: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub invisible_space_included: bool,

    #[serde(flatten)]
    pub kind: FragmentKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_reason: Option<NormalizeReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FragmentError>,

    /// Running encoding-style confidence after this fragment, present only
    /// on fragments that carry style evidence.
    #[serde(flatten)]
    pub style: Option<StyleScore>,
}

/// Per-recognizer attributes, keyed by the `category` discriminant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum FragmentKind {
    Kinsi(KinsiInfo),
    NumberGroup(NumberGroupInfo),
    #[serde(rename = "single-letter")]
    Letter(LetterInfo),
    Whitespace,
    Unrecognized,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KinsiInfo {
    #[serde(skip_serializing_if = "is_false")]
    pub kinsi_symbol_only: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub left_letter_required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub right_letter_required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberGroupInfo {
    #[serde(skip_serializing_if = "is_false")]
    pub possible_date: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_separator: Option<char>,
    #[serde(skip_serializing_if = "is_false")]
    pub possible_phone_number: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub number: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_str: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub number_order_list: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub measure_words: Vec<String>,
}

/// Unambiguous one-code-point classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FragmentType {
    Letter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_type: Option<FragmentType>,
    #[serde(skip_serializing_if = "is_false")]
    pub alphabet: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub punctuation: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub uncombinable_letter: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub syllable_included: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub ancient: bool,
}

/// Corrections applied while building `normalized_str`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeReason {
    #[serde(skip_serializing_if = "is_false")]
    pub normalize_space: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub remove_space: bool,
    #[serde(rename = "changeU101DToU1040", skip_serializing_if = "is_false")]
    pub change_u101d_to_u1040: bool,
    #[serde(rename = "changeU104EToU1044", skip_serializing_if = "is_false")]
    pub change_u104e_to_u1044: bool,
}

impl NormalizeReason {
    pub fn is_empty(&self) -> bool {
        !(self.normalize_space
            || self.remove_space
            || self.change_u101d_to_u1040
            || self.change_u104e_to_u1044)
    }

    pub fn merge(&mut self, other: NormalizeReason) {
        self.normalize_space |= other.normalize_space;
        self.remove_space |= other.remove_space;
        self.change_u101d_to_u1040 |= other.change_u101d_to_u1040;
        self.change_u104e_to_u1044 |= other.change_u104e_to_u1044;
    }

    /// `None` when nothing fired, so fragments only carry real corrections.
    pub fn into_option(self) -> Option<NormalizeReason> {
        if self.is_empty() { None } else { Some(self) }
    }
}

/// Malformed input that could not be silently corrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentError {
    #[serde(skip_serializing_if = "is_false")]
    pub invalid_unicode_form: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub invalid_diacritics_start: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub invalid_space_included: bool,
    #[serde(rename = "invalidU1040InsteadOfU101D", skip_serializing_if = "is_false")]
    pub invalid_u1040_instead_of_u101d: bool,
    #[serde(rename = "invalidU1044InsteadOfU104E", skip_serializing_if = "is_false")]
    pub invalid_u1044_instead_of_u104e: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub unrecognized_text: bool,
}

/// Independent confidences that the text is Unicode or Zawgyi encoded.
/// They are not a distribution and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleScore {
    pub uni_probability: f64,
    pub zg_probability: f64,
}

impl StyleScore {
    pub const fn new(uni_probability: f64, zg_probability: f64) -> Self {
        StyleScore { uni_probability, zg_probability }
    }
}

impl TextFragment {
    pub fn new(matched_str: impl Into<String>, kind: FragmentKind) -> Self {
        let matched_str = matched_str.into();
        TextFragment {
            normalized_str: matched_str.clone(),
            matched_str,
            space_included: false,
            invisible_space_included: false,
            kind,
            normalize_reason: None,
            error: None,
            style: None,
        }
    }

    pub fn letter(matched_str: impl Into<String>, info: LetterInfo) -> Self {
        TextFragment::new(matched_str, FragmentKind::Letter(info))
    }

    pub fn with_normalized(mut self, normalized_str: impl Into<String>) -> Self {
        self.normalized_str = normalized_str.into();
        self
    }

    pub fn with_style(mut self, style: StyleScore) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_error(mut self, error: FragmentError) -> Self {
        self.error = Some(error);
        self
    }

    /// Length of `matched_str` in code points.
    pub fn char_len(&self) -> usize {
        self.matched_str.chars().count()
    }

    pub fn kinsi(&self) -> Option<&KinsiInfo> {
        match &self.kind {
            FragmentKind::Kinsi(info) => Some(info),
            _ => None,
        }
    }

    pub fn number_group(&self) -> Option<&NumberGroupInfo> {
        match &self.kind {
            FragmentKind::NumberGroup(info) => Some(info),
            _ => None,
        }
    }

    pub fn letter_info(&self) -> Option<&LetterInfo> {
        match &self.kind {
            FragmentKind::Letter(info) => Some(info),
            _ => None,
        }
    }
}

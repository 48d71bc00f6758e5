use myanmar_rs::extractor::ExtractContext;
use myanmar_rs::{
    fragment, FragmentKind, FragmenterConfig, FragmenterError, MyanmarTextFragmenter, StyleScore,
    TextFragment, WritingStyle,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn setup() -> MyanmarTextFragmenter {
    MyanmarTextFragmenter::default()
}

fn matched(fragments: &[TextFragment]) -> Vec<&str> {
    fragments.iter().map(|f| f.matched_str.as_str()).collect()
}

fn assert_close(actual: Option<StyleScore>, uni: f64, zg: f64) {
    let actual = actual.expect("fragment has no style score");
    assert!(
        (actual.uni_probability - uni).abs() < 1e-9 && (actual.zg_probability - zg).abs() < 1e-9,
        "expected ({uni}, {zg}), got {actual:?}"
    );
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("myanmar-rs-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("Failed to write temp file");
    path
}

#[test]
fn test_fragments_cover_the_input() {
    let fragmenter = setup();
    for text in [
        "မင်္ဂလာပါ",
        "ဒီနေ့ ၀၁-၀၁-၂၀၂၀ ဖြစ်သည်။",
        "ဖုန်း +၉၅ (၉) ၁၂၃-၄၅၆-၇၈၉ ကို ဆက်ပါ",
        "ေက်ာင္း",
        "abc ၁၂၃ \u{200B}xyz",
        "\u{1031}\u{1031}\u{1031}",
        "ဤ၏ ၌၍",
    ] {
        let fragments = fragmenter.fragment(text);
        assert!(!fragments.is_empty());
        assert!(fragments.iter().all(|f| !f.matched_str.is_empty()));
        assert_eq!(matched(&fragments).concat(), text);
    }
}

#[test]
fn test_empty_input() {
    assert!(setup().fragment("").is_empty());
    let ctx = ExtractContext::empty();
    assert!(setup().next_fragment(&[], &ctx).is_none());
}

#[test]
fn test_greeting() {
    let fragments = setup().fragment("မင်္ဂလာပါ");
    assert_eq!(matched(&fragments), vec!["မ", "င်္ဂ", "လာ", "ပါ"]);

    assert_close(fragments[0].style, 0.5, 0.5);
    assert!(matches!(fragments[1].kind, FragmentKind::Kinsi(_)));
    assert_close(fragments[1].style, 1.0, 0.0);
    assert_close(fragments[2].style, 0.75, 0.25);
    assert_close(fragments[3].style, 0.625, 0.375);
}

#[test]
fn test_kinsi_has_priority_over_a_following_date() {
    let fragments = setup().fragment("င်္၀၁-၀၁-၂၀၂၀");
    assert_eq!(matched(&fragments), vec!["င်္", "၀၁-၀၁-၂၀၂၀"]);
    assert!(fragments[1].number_group().unwrap().possible_date);
}

#[test]
fn test_legacy_typing_leans_zawgyi() {
    let fragments = setup().fragment("\u{1031}က");
    assert_eq!(matched(&fragments), vec!["\u{1031}", "က"]);
    assert_close(fragments[0].style, 0.1, 0.9);
    assert_close(fragments[1].style, 0.3, 0.7);

    let fragmenter = setup();
    let mut stream = fragmenter.fragments("\u{1031}က");
    stream.next();
    assert_eq!(stream.evidence().last_known_writing_style, Some(WritingStyle::Zawgyi));
}

#[test]
fn test_digits_and_whitespace_leave_no_style() {
    let fragments = setup().fragment("၁၂၃ ။");
    assert_eq!(matched(&fragments), vec!["၁၂၃", " ", "။"]);
    assert!(fragments.iter().all(|f| f.style.is_none()));
}

#[test]
fn test_unrecognized_text() {
    let fragments = setup().fragment("abc ၁၂၃");
    assert_eq!(matched(&fragments), vec!["abc", " ", "၁၂၃"]);
    assert_eq!(fragments[0].kind, FragmentKind::Unrecognized);
    assert!(fragments[0].error.unwrap().unrecognized_text);
    assert_eq!(fragments[1].kind, FragmentKind::Whitespace);
    assert!(fragments[2].number_group().unwrap().possible_phone_number);
}

#[test]
fn test_invisible_whitespace() {
    let fragments = setup().fragment("က\u{200B}ခ");
    let space = &fragments[1];
    assert_eq!(space.kind, FragmentKind::Whitespace);
    assert!(space.space_included && space.invisible_space_included);
    assert_eq!(space.normalized_str, "");
    assert!(space.normalize_reason.unwrap().remove_space);

    let fragments = setup().fragment("က\u{00A0}ခ");
    assert_eq!(fragments[1].normalized_str, " ");
    assert!(fragments[1].normalize_reason.unwrap().normalize_space);
}

fn best_time(fragmenter: &MyanmarTextFragmenter, text: &str) -> Duration {
    (0..3)
        .map(|_| {
            let start = Instant::now();
            fragmenter.fragment(text);
            start.elapsed()
        })
        .min()
        .unwrap_or_default()
}

#[test]
fn test_symbol_runs_fragment_in_linear_time() {
    let fragmenter = setup();

    let bangs = "!".repeat(4_000);
    let fragments = fragmenter.fragment(&bangs);
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].kind, FragmentKind::Unrecognized);

    let csv = "1,".repeat(2_000);
    let fragments = fragmenter.fragment(&csv);
    assert_eq!(fragments.len(), 4_000);
    assert_eq!(matched(&fragments).concat(), csv);
    assert!(fragments[0].number_group().unwrap().number);

    for unit in ["!", "1,"] {
        let small = best_time(&fragmenter, &unit.repeat(1_000));
        let large = best_time(&fragmenter, &unit.repeat(8_000));
        assert!(
            large <= small * 24 + Duration::from_millis(25),
            "{unit:?} x8 took {large:?} against {small:?}"
        );
    }
}

#[test]
fn test_streaming_matches_whole_string() {
    let fragmenter = setup();
    let text = "ဖုန်း +၉၅ (၉) ၁၂၃-၄၅၆-၇၈၉ ကို ၅ ကျပ် ေပး";
    let streamed: Vec<TextFragment> = fragmenter.fragments(text).collect();
    assert_eq!(streamed, fragmenter.fragment(text));
    assert_eq!(streamed, fragment(text));
}

#[test]
fn test_fragments_serialize_to_json() {
    let fragments = setup().fragment("၅ ကျပ်");
    let json = serde_json::to_string(&fragments).unwrap();
    assert!(json.contains("\"category\":\"number-group\""));
    assert!(json.contains("\"measureWords\":[\"ကျပ်\"]"));
    assert!(!json.contains("possibleDate"));
}

#[test]
fn test_config_from_json_file() {
    let path = temp_file("config.json", r#"{ "two_digit_year_max": 31, "measure_words": false }"#);
    let config = FragmenterConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.two_digit_year_max, 31);
    assert_eq!(config.min_phone_digits, 3);
    assert!(!config.measure_words);

    let fragmenter = MyanmarTextFragmenter::new(&config).unwrap();
    let fragments = fragmenter.fragment("၂၀/၁/၃၁");
    assert_eq!(fragments[0].number_group().unwrap().date_format.as_deref(), Some("d/M/yy"));
    let fragments = fragmenter.fragment("၅ ကျပ်");
    assert_eq!(fragments[0].matched_str, "၅");
}

#[test]
fn test_config_errors() {
    let missing = std::env::temp_dir().join("myanmar-rs-does-not-exist.json");
    assert!(matches!(FragmenterConfig::from_json_file(&missing), Err(FragmenterError::Io { .. })));

    let path = temp_file("broken.json", "{ not json");
    let result = FragmenterConfig::from_json_file(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(FragmenterError::Config { .. })));
}

#[test]
fn test_extra_measure_words_file() {
    let path = temp_file("words.txt", "\nပုဒ်\n\n");
    let config = FragmenterConfig { measure_words_path: Some(path.clone()), ..Default::default() };
    let fragmenter = MyanmarTextFragmenter::new(&config).unwrap();
    std::fs::remove_file(&path).ok();

    let fragments = fragmenter.fragment("၃ ပုဒ်");
    assert_eq!(matched(&fragments), vec!["၃ ပုဒ်"]);
    assert_eq!(fragments[0].number_group().unwrap().measure_words, vec!["ပုဒ်".to_string()]);
}

//! Golden tests for intent-dispatch precedence.
//!
//! The guard order control -> recipe -> open is the behavioral contract;
//! these tables pin it against regressions.

use ramyeon_common::{Language, TimerControl};
use ramyeond::classifier::{classify, Intent};
use ramyeond::context::ContextSnapshot;

fn ctx() -> ContextSnapshot {
    ContextSnapshot::default()
}

#[test]
fn bare_control_commands() {
    let cases = [
        ("타이머 취소", TimerControl::Cancel),
        ("취소해줘", TimerControl::Cancel),
        ("cancel the timer", TimerControl::Cancel),
        ("일시정지", TimerControl::Pause),
        ("잠깐 멈춰", TimerControl::Pause),
        ("pause", TimerControl::Pause),
        ("다시 시작", TimerControl::Resume),
        ("재개해줘", TimerControl::Resume),
        ("resume the timer", TimerControl::Resume),
    ];
    for (text, expected) in cases {
        assert_eq!(
            classify(text, &ctx(), Language::Ko),
            Intent::Control(expected),
            "misclassified: {text}"
        );
    }
}

#[test]
fn control_words_with_time_or_name_fall_through_to_open() {
    for text in ["취소하고 3분 타이머", "신라면 취소", "cancel, make it 2 minutes"] {
        assert!(
            matches!(classify(text, &ctx(), Language::Ko), Intent::Open { .. }),
            "should be open: {text}"
        );
    }
}

#[test]
fn recipe_outranks_open_even_with_time_present() {
    // Recipe trigger plus a time expression still dispatches locally.
    let intent = classify("신라면 끓이는 방법 4분", &ctx(), Language::Ko);
    assert_eq!(intent, Intent::Recipe { name: "신라면".to_string(), detail: false });
}

#[test]
fn recipe_triggers_in_both_languages() {
    let cases = [
        ("신라면 끓이는 방법", "신라면"),
        ("너구리 레시피", "너구리"),
        ("짜파게티 조리법 알려줘", "짜파게티"),
        ("what's the recipe for buldak", "불닭볶음면"),
        ("how to cook neoguri", "너구리"),
    ];
    for (text, expected_name) in cases {
        match classify(text, &ctx(), Language::Ko) {
            Intent::Recipe { name, .. } => assert_eq!(name, expected_name, "for {text}"),
            other => panic!("expected recipe for {text}, got {other:?}"),
        }
    }
}

#[test]
fn recipe_name_fallback_chain() {
    // Resolvable name in the utterance wins.
    let with_name = classify("신라면 레시피", &ctx(), Language::Ko);
    assert_eq!(with_name, Intent::Recipe { name: "신라면".to_string(), detail: false });

    // Otherwise the context slot.
    let context = ContextSnapshot { last_name: "왕뚜껑".to_string(), last_time_text: String::new() };
    let from_ctx = classify("조리법 보여줘", &context, Language::Ko);
    assert_eq!(from_ctx, Intent::Recipe { name: "왕뚜껑".to_string(), detail: false });

    // Otherwise the language placeholder.
    let placeholder = classify("recipe please", &ctx(), Language::En);
    assert_eq!(placeholder, Intent::Recipe { name: "ramyeon".to_string(), detail: false });
}

#[test]
fn open_heuristic_table() {
    let cases = [
        ("신라면 4분 30초", true),     // time + name
        ("4분만 끓여줘", true),        // bare time
        ("불닭볶음면 먹고 싶다", true), // bare name
        ("buldak tonight", true),      // alias
        ("안녕하세요", false),         // greeting
        ("테스트", false),             // greeting family
        ("뭐 먹지", false),            // nothing resolvable
    ];
    for (text, expected) in cases {
        match classify(text, &ctx(), Language::Ko) {
            Intent::Open { should_start_hint } => {
                assert_eq!(should_start_hint, expected, "hint wrong for {text}")
            }
            other => panic!("expected open for {text}, got {other:?}"),
        }
    }
}

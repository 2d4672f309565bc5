//! Intent classification: ordered guard list over the raw utterance.
//!
//! Precedence is the behavioral contract and is tested as such:
//! control (bare command shortcut), then recipe, then open. First match
//! wins; each turn is a single classify-then-dispatch transaction.

use crate::context::ContextSnapshot;
use crate::resolver;
use once_cell::sync::Lazy;
use ramyeon_common::{Language, TimerControl};
use regex::Regex;

static CANCEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(취소|cancel)").expect("cancel pattern"));
static PAUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(일시\s*정지|멈춰|pause)").expect("pause pattern"));
static RESUME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(다시\s*시작|재개|resume)").expect("resume pattern"));

static RECIPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(끓이는 방법|레시피|조리법|how (do i|to) cook|recipe|instructions)")
        .expect("recipe pattern")
});
static DETAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(자세히|detail|full steps)").expect("detail pattern"));

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+\s*분)|(\d+\s*초)|\d+:\d{1,2}|(\d+\s*min(ute)?s?)|(\d+\s*sec(ond)?s?)")
        .expect("time pattern")
});
static GREETING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(안녕|안뇽|하이|hello|hi|ㅎㅇ|뭐해|테스트)").expect("greeting pattern"));

/// Classified purpose of one utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Bare timer-control command; resolved without the completion
    /// service.
    Control(TimerControl),
    /// Recipe request, always answered locally.
    Recipe {
        name: String,
        /// Full step rendering instead of the quick summary.
        detail: bool,
    },
    /// Everything else; delegated to the completion service.
    Open {
        /// Local guess used when the external result omits or mistypes
        /// should_start.
        should_start_hint: bool,
    },
}

/// Detect a control keyword family. Check order cancel, pause, resume;
/// the first positive match is taken even if several families match.
pub fn detect_control(text: &str) -> Option<TimerControl> {
    if CANCEL_RE.is_match(text) {
        return Some(TimerControl::Cancel);
    }
    if PAUSE_RE.is_match(text) {
        return Some(TimerControl::Pause);
    }
    if RESUME_RE.is_match(text) {
        return Some(TimerControl::Resume);
    }
    None
}

pub fn has_time_expression(text: &str) -> bool {
    TIME_RE.is_match(text)
}

pub fn looks_like_greeting(text: &str) -> bool {
    GREETING_RE.is_match(text)
}

pub fn wants_detail(text: &str) -> bool {
    DETAIL_RE.is_match(text)
}

/// Classify an utterance against the previous-turn context.
pub fn classify(text: &str, context: &ContextSnapshot, language: Language) -> Intent {
    // 1. Bare control command: control keyword with neither a time
    //    expression nor a resolvable name. Mixed utterances fall through
    //    to the open path, where local control detection still outranks
    //    the external result.
    if let Some(control) = detect_control(text) {
        if !has_time_expression(text) && resolver::resolve(text).is_none() {
            return Intent::Control(control);
        }
    }

    // 2. Recipe request: always local. Name falls back through the
    //    context slot to the language placeholder.
    if RECIPE_RE.is_match(text) {
        let name = resolver::resolve(text)
            .map(|n| n.to_string())
            .or_else(|| {
                let last = context.last_name.trim();
                (!last.is_empty()).then(|| last.to_string())
            })
            .unwrap_or_else(|| language.placeholder_name().to_string());
        return Intent::Recipe { name, detail: wants_detail(text) };
    }

    // 3. Open path with the should_start heuristic.
    let should_start_hint = (has_time_expression(text) || resolver::resolve(text).is_some())
        && !looks_like_greeting(text);
    Intent::Open { should_start_hint }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextSnapshot;

    fn empty_ctx() -> ContextSnapshot {
        ContextSnapshot::default()
    }

    #[test]
    fn bare_cancel_is_control() {
        let intent = classify("타이머 취소", &empty_ctx(), Language::Ko);
        assert_eq!(intent, Intent::Control(TimerControl::Cancel));
    }

    #[test]
    fn control_check_order_is_cancel_pause_resume() {
        // Both families present: cancel is checked first.
        assert_eq!(detect_control("취소 말고 일시정지"), Some(TimerControl::Cancel));
        assert_eq!(detect_control("pause it"), Some(TimerControl::Pause));
        assert_eq!(detect_control("resume please"), Some(TimerControl::Resume));
    }

    #[test]
    fn control_with_time_falls_through_to_open() {
        let intent = classify("3분으로 바꾸고 취소", &empty_ctx(), Language::Ko);
        assert!(matches!(intent, Intent::Open { .. }));
    }

    #[test]
    fn control_with_name_falls_through_to_open() {
        let intent = classify("신라면 타이머 취소", &empty_ctx(), Language::Ko);
        assert!(matches!(intent, Intent::Open { .. }));
    }

    #[test]
    fn recipe_trigger_resolves_name_from_text() {
        let intent = classify("신라면 끓이는 방법", &empty_ctx(), Language::Ko);
        assert_eq!(intent, Intent::Recipe { name: "신라면".to_string(), detail: false });
    }

    #[test]
    fn recipe_falls_back_to_context_then_placeholder() {
        let ctx = ContextSnapshot {
            last_name: "너구리".to_string(),
            last_time_text: String::new(),
        };
        let intent = classify("레시피 알려줘", &ctx, Language::Ko);
        assert_eq!(intent, Intent::Recipe { name: "너구리".to_string(), detail: false });

        let intent = classify("레시피 알려줘", &empty_ctx(), Language::Ko);
        assert_eq!(intent, Intent::Recipe { name: "라면".to_string(), detail: false });
    }

    #[test]
    fn detail_trigger_selects_full_rendering() {
        let intent = classify("신라면 조리법 자세히", &empty_ctx(), Language::Ko);
        assert_eq!(intent, Intent::Recipe { name: "신라면".to_string(), detail: true });
    }

    #[test]
    fn english_recipe_trigger() {
        let intent = classify("how do i cook shin ramyun", &empty_ctx(), Language::En);
        assert_eq!(intent, Intent::Recipe { name: "신라면".to_string(), detail: false });
    }

    #[test]
    fn time_and_name_set_the_open_hint() {
        let intent = classify("신라면 4분 30초", &empty_ctx(), Language::Ko);
        assert_eq!(intent, Intent::Open { should_start_hint: true });
    }

    #[test]
    fn greeting_clears_the_open_hint() {
        let intent = classify("안녕! 신라면 좋아해?", &empty_ctx(), Language::Ko);
        assert_eq!(intent, Intent::Open { should_start_hint: false });

        let intent = classify("뭐 먹을까", &empty_ctx(), Language::Ko);
        assert_eq!(intent, Intent::Open { should_start_hint: false });
    }

    #[test]
    fn time_expressions_in_both_languages() {
        assert!(has_time_expression("4분 30초"));
        assert!(has_time_expression("5:30"));
        assert!(has_time_expression("4 minutes"));
        assert!(has_time_expression("30 sec"));
        assert!(!has_time_expression("라면 먹자"));
    }
}

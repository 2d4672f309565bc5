//! Prompt building for the completion service.
//!
//! The preamble pins the behavioral contract (target language only,
//! seconds arithmetic, 240s default, spice/cup steering); the user
//! prompt carries the grounding payload: duration, spice, and cup
//! tables plus the previous-turn context and the raw utterance.

use crate::catalog;
use crate::context::ContextSnapshot;
use ramyeon_common::Language;

const SYSTEM_PREAMBLE_KO: &str = r#"너는 따뜻하고 간결한 "라면 AI 비서".
- 반드시 한국어로만 답한다.
- 시간 계산은 초 단위, 사용자에겐 자연스러운 한국어.
- "3분인데 2분50초만"은 최종값으로.
- 시간이 없으면 DB 값, DB에도 없으면 240초.
- seconds <= 0 또는 NaN이면 240.
- 과장 금지, 이모지 0~2개.
- 입력이 인사/모호하면 타이머를 시작하지 말고, 어떤 라면/시간인지 물어봐.
- 매운 것이 처음이거나 초보라는 표현이 있으면 맵기(0~5)가 낮은 라면을 추천.
- 여행/숙소/출장 언급이 있으면 컵라면을 우선 추천."#;

const SYSTEM_PREAMBLE_EN: &str = r#"You are a warm, concise ramyeon AI assistant.
- Answer only in English.
- Compute durations in seconds; speak to the user in natural English.
- "3 minutes, but make it 2:50" means the final value wins.
- No time given: use the DB value; not in the DB either: 240 seconds.
- seconds <= 0 or NaN means 240.
- No exaggeration, 0-2 emoji.
- For greetings or vague input, do not start a timer; ask which ramyeon or how long.
- If the user sounds new to spicy food, prefer low-spice items (0-5 scale).
- If travel or lodging comes up, prefer cup-style items."#;

/// Fixed behavioral preamble for the target language.
pub fn system_preamble(language: Language) -> &'static str {
    match language {
        Language::Ko => SYSTEM_PREAMBLE_KO,
        Language::En => SYSTEM_PREAMBLE_EN,
    }
}

/// Build the grounded user prompt for one open-intent turn.
pub fn build_user_prompt(text: &str, context: &ContextSnapshot, language: Language) -> String {
    let idx = catalog::index();
    let durations =
        serde_json::to_string_pretty(&idx.duration_table()).unwrap_or_else(|_| "{}".to_string());
    let spice =
        serde_json::to_string_pretty(&idx.spice_table()).unwrap_or_else(|_| "{}".to_string());
    let cups = serde_json::to_string_pretty(&idx.cup_table()).unwrap_or_else(|_| "{}".to_string());

    let none = match language {
        Language::Ko => "없음",
        Language::En => "none",
    };
    let last_name = if context.last_name.is_empty() { none } else { &context.last_name };
    let last_time = if context.last_time_text.is_empty() { none } else { &context.last_time_text };

    match language {
        Language::Ko => format!(
            r#"[사용자 입력]
{text}

[라면 DB: 조리시간]
{durations}

[라면 DB: 맵기 0~5]
{spice}

[라면 DB: 컵 여부]
{cups}

[직전 맥락] name={last_name}, timeText={last_time}

[출력(JSON만)]
{{
  "name": string,
  "seconds": number,
  "raw_time_text": string,
  "reply": string,
  "suggestions": string[],
  "should_start": boolean,
  "control": "cancel" | "pause" | "resume" | null
}}

[판단 규칙: should_start]
- 시간 표현이 있거나 라면명이 명확하면 true.
- "안녕/하이/뭐해/테스트" 등 인사·모호한 입력은 false.
- 명확하지 않으면 false.

[판단 규칙: control]
- 타이머 취소/일시정지/재개 요청일 때만 설정, 아니면 null."#
        ),
        Language::En => format!(
            r#"[User input]
{text}

[Ramyeon DB: boil times]
{durations}

[Ramyeon DB: spice 0-5]
{spice}

[Ramyeon DB: cup-style]
{cups}

[Previous turn] name={last_name}, timeText={last_time}

[Output (JSON only)]
{{
  "name": string,
  "seconds": number,
  "raw_time_text": string,
  "reply": string,
  "suggestions": string[],
  "should_start": boolean,
  "control": "cancel" | "pause" | "resume" | null
}}

[Rule: should_start]
- true when a time expression or a clear ramyeon name is present.
- Greetings and vague input ("hello", "hi", "what's up", "test"): false.
- When unsure: false.

[Rule: control]
- Set only for cancel/pause/resume requests, otherwise null."#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_grounding_tables_and_context() {
        let ctx = ContextSnapshot {
            last_name: "신라면".to_string(),
            last_time_text: "4분".to_string(),
        };
        let prompt = build_user_prompt("컵라면 추천해줘", &ctx, Language::Ko);
        assert!(prompt.contains("컵라면 추천해줘"));
        assert!(prompt.contains("신라면"));
        assert!(prompt.contains("불닭볶음면"));
        assert!(prompt.contains("name=신라면"));
        assert!(prompt.contains("should_start"));
    }

    #[test]
    fn empty_context_renders_as_none() {
        let prompt = build_user_prompt("hello", &ContextSnapshot::default(), Language::En);
        assert!(prompt.contains("name=none"));
    }
}

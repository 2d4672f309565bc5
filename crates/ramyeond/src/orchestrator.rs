//! Conversation orchestration: classify, dispatch, repair, respond.
//!
//! The conversational path commits to "always a well-formed directive":
//! transport failures, unparsable output, and schema violations all land
//! on the fixed fallback response. Nothing on this path is fatal.

use crate::classifier::{self, Intent};
use crate::context::ContextSlot;
use crate::gemini::{decode_directive, CompletionBackend, RepairDefaults};
use crate::guide::{self, DEFAULT_TIME_SEC};
use crate::prompts;
use ramyeon_common::{Language, TimerControl, TimerDirective};
use std::sync::Arc;
use tracing::{info, warn};

pub struct Orchestrator {
    backend: Arc<dyn CompletionBackend>,
    context: ContextSlot,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend, context: ContextSlot::new() }
    }

    /// Handle one conversational turn. Always produces a directive.
    pub async fn handle(&self, text: &str, language: Language) -> TimerDirective {
        if text.trim().is_empty() {
            warn!("empty conversational input, serving fallback");
            return fallback_directive(language);
        }

        let snapshot = self.context.snapshot();
        let intent = classifier::classify(text, &snapshot, language);

        match intent {
            Intent::Control(control) => {
                info!("control turn: {}", control);
                // Bare control turns do not touch the context slot.
                let name = if snapshot.last_name.trim().is_empty() {
                    language.placeholder_name().to_string()
                } else {
                    snapshot.last_name.clone()
                };
                control_directive(control, name, language)
            }
            Intent::Recipe { name, detail } => {
                info!("recipe turn: name={} detail={}", name, detail);
                let directive = recipe_directive(&name, detail, language);
                self.context.store(&name, "");
                directive
            }
            Intent::Open { should_start_hint } => {
                self.open_turn(text, &snapshot, should_start_hint, language).await
            }
        }
    }

    async fn open_turn(
        &self,
        text: &str,
        snapshot: &crate::context::ContextSnapshot,
        should_start_hint: bool,
        language: Language,
    ) -> TimerDirective {
        let defaults = RepairDefaults {
            language,
            heuristic_should_start: should_start_hint,
            // Mixed case: control language co-occurring with a time or
            // name reached this path; local detection still outranks
            // whatever the service returns.
            local_control: classifier::detect_control(text),
        };

        let system = prompts::system_preamble(language);
        let user = prompts::build_user_prompt(text, snapshot, language);

        let raw = match self.backend.complete(system, &user).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("completion call failed: {}", e);
                return fallback_directive(language);
            }
        };

        match decode_directive(&raw, &defaults) {
            Ok(directive) => {
                self.context.store(&directive.name, &directive.raw_time_text);
                directive
            }
            Err(e) => {
                warn!("completion payload rejected: {}", e);
                // The fallback path leaves the context slot alone; the
                // previous name is more useful than the placeholder.
                fallback_directive(language)
            }
        }
    }
}

/// Directive for a bare control command. No timer is started and the
/// completion service is never consulted.
fn control_directive(control: TimerControl, name: String, language: Language) -> TimerDirective {
    let reply = match (control, language) {
        (TimerControl::Cancel, Language::Ko) => "타이머를 취소했어요.",
        (TimerControl::Pause, Language::Ko) => "타이머를 일시 정지했어요.",
        (TimerControl::Resume, Language::Ko) => "타이머를 다시 시작했어요.",
        (TimerControl::Cancel, Language::En) => "Timer cancelled.",
        (TimerControl::Pause, Language::En) => "Timer paused.",
        (TimerControl::Resume, Language::En) => "Timer resumed.",
    };

    TimerDirective {
        name,
        seconds: DEFAULT_TIME_SEC,
        raw_time_text: String::new(),
        reply: reply.to_string(),
        suggestions: Vec::new(),
        should_start: false,
        control: Some(control),
    }
}

/// Localized recipe reply: title line, numbered steps (or the quick
/// lines), then a Tip) line joining the notes when any exist.
fn recipe_directive(name: &str, detail: bool, language: Language) -> TimerDirective {
    let guide = guide::synthesize(name, language);

    let body = if detail { guide.steps.join("\n") } else { guide.quick.join("\n") };
    let mut reply = format!("{}\n{}", guide.title, body);
    if !guide.notes.is_empty() {
        reply.push_str(&format!("\nTip) {}", guide.notes.join(" · ")));
    }

    let suggestions = match language {
        Language::Ko => vec![
            "이 시간으로 타이머 시작".to_string(),
            "자세히 보기".to_string(),
            "다른 라면 추천".to_string(),
        ],
        Language::En => vec![
            "Start a timer with this time".to_string(),
            "Show details".to_string(),
            "Recommend another ramyeon".to_string(),
        ],
    };

    TimerDirective {
        name: name.to_string(),
        seconds: guide.meta.time_sec,
        raw_time_text: String::new(),
        reply,
        suggestions,
        should_start: false,
        control: None,
    }
}

/// Fixed language-appropriate apology directive served on any total
/// external failure. The caller never sees a raw error on this path.
pub fn fallback_directive(language: Language) -> TimerDirective {
    let (reply, suggestions) = match language {
        Language::Ko => (
            "죄송해요, 지금은 답변을 만들지 못했어요. 잠시 후 다시 시도해 주세요.",
            vec![
                "신라면 레시피 보여줘".to_string(),
                "4분 30초 타이머".to_string(),
                "컵라면 추천해줘".to_string(),
            ],
        ),
        Language::En => (
            "Sorry, I couldn't put together an answer right now. Please try again in a moment.",
            vec![
                "Show me the Shin Ramyun recipe".to_string(),
                "Start a 4 minute 30 second timer".to_string(),
                "Recommend a cup ramyeon".to_string(),
            ],
        ),
    };

    TimerDirective {
        name: language.placeholder_name().to_string(),
        seconds: DEFAULT_TIME_SEC,
        raw_time_text: String::new(),
        reply: reply.to_string(),
        suggestions,
        should_start: false,
        control: None,
    }
}

//! Shared wire types for the Ramyeon Assistant.
//!
//! Pure serde models consumed by both the daemon and the control CLI.
//! No I/O lives here.

pub mod api;
pub mod directive;
pub mod error;
pub mod guide;
pub mod language;

pub use api::{ApiHint, GuideListResponse, HealthResponse, ParseRequest};
pub use directive::{TimerControl, TimerDirective};
pub use error::CompletionError;
pub use guide::{CookType, Guide, GuideMeta, GuideSection, QuickGuide};
pub use language::Language;

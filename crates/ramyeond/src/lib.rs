//! Ramyeon Assistant daemon.
//!
//! Deterministic guide-synthesis and intent-resolution engine behind a
//! small JSON HTTP surface. The only external collaborator is the
//! generative completion service used for open recommendation turns;
//! every other path is pure local computation over the embedded catalog.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod context;
pub mod gemini;
pub mod guide;
pub mod orchestrator;
pub mod overrides;
pub mod prompts;
pub mod resolver;
pub mod routes;
pub mod server;

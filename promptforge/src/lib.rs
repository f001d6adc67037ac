//! # PromptForge
//!
//! Heuristic analysis and optimization of prompts for AI agents. Paste a
//! prompt (and optionally an objective), get back a list of improvement
//! suggestions plus a fully rewritten "optimized" version.
//!
//! ## Design principles
//!
//! - **Pure core**: [`analyze`], [`apply_one`], [`apply_all`], and
//!   [`synthesize_optimized`] are synchronous pure functions over strings —
//!   no shared state between invocations, safe to call concurrently from
//!   any number of sessions.
//! - **Two interchangeable engines**: the local rule engine here, and a
//!   remote LLM path behind [`GatewayClient`] with the same suggestion
//!   model plus a score and summary.
//! - **Best-effort patching**: applying a suggestion whose target text is
//!   no longer present is a silent no-op, never an error.
//!
//! ## Main modules
//!
//! - [`analyzer`]: the detector battery — [`analyze`].
//! - [`patch`]: [`apply_one`], [`apply_all`], [`synthesize_optimized`].
//! - [`suggestion`]: [`Suggestion`], [`SuggestionType`],
//!   [`AnalysisResult`], [`RemoteAnalysis`].
//! - [`remote`]: [`GatewayClient`], [`GatewayConfig`] — the LLM boundary.
//! - [`protocol`]: [`AnalyzeRequest`], [`ErrorBody`] — HTTP boundary types.
//! - [`export`]: Markdown/plain-text export of an optimized prompt.
//!
//! ## Quick start
//!
//! ```rust
//! use promptforge::{analyze, apply_all};
//!
//! let result = analyze("Responda as perguntas do usuário.", "");
//! assert!(!result.suggestions.is_empty());
//!
//! let patched = apply_all("Responda as perguntas do usuário.", &result.suggestions);
//! assert!(patched.contains("Responda as perguntas do usuário."));
//! ```

pub mod analyzer;
pub mod error;
pub mod export;
pub mod patch;
pub mod protocol;
pub mod remote;
pub mod suggestion;

pub use analyzer::analyze;
pub use error::RemoteError;
pub use export::{export_file_name, markdown_document};
pub use patch::{apply_all, apply_one, synthesize_optimized};
pub use protocol::{AnalyzeRequest, ErrorBody};
pub use remote::{GatewayClient, GatewayConfig, DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
pub use suggestion::{AnalysisResult, RemoteAnalysis, Suggestion, SuggestionType};

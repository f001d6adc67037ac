//! Library side of the `promptforge` CLI: backend abstraction, report
//! rendering, and error types. The binary in `main.rs` stays thin.

pub mod backend;
pub mod error;
pub mod output;

pub use backend::{AnalysisReport, AnalyzeBackend, LocalBackend, RemoteBackend};
pub use error::RunError;
pub use output::render_report;

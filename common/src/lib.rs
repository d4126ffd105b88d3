//! Cellscan Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod format;
pub mod session;
pub mod analyzer;
pub mod parser;

pub use types::{AnalysisResult, Details, HealthStatus, StructuredDetails};
pub use error::{AnalysisError, Error, Result};
pub use format::{format_confidence, result_rows, ResultRow, ResultsView};
pub use session::{AnalysisSession, AnalysisState, Ticket};
pub use analyzer::{mock_result, Analyzer, DEFAULT_ENDPOINT, IMAGE_FIELD, MOCK_DELAY_MS};
pub use parser::{health_url, interpret_analysis_response, parse_error_detail, parse_health_response};

//! Gemini adapter
//!
//! Implements the [`ModelClient`](magi_application::ModelClient) port over
//! the Gemini REST API, including model discovery and quota detection.

mod client;
mod error;
mod model_selection;
mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient, GeminiSettings};
pub use error::GeminiError;
pub use model_selection::{DEFAULT_CANDIDATES, FALLBACK_MODEL, select_model};

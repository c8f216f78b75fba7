//! Picking a model from the ones the API lists

/// Preferred models, best first
pub const DEFAULT_CANDIDATES: [&str; 5] = [
    "gemini-2.0-flash-exp",
    "gemini-2.5-flash",
    "gemini-flash-latest",
    "gemini-pro-latest",
    "gemini-pro",
];

/// Used when the API lists nothing usable
pub const FALLBACK_MODEL: &str = "gemini-2.0-flash-lite";

const MODEL_PREFIX: &str = "models/";

/// Choose a model id from `available` (as listed, usually `models/...`).
///
/// The first candidate present under either spelling wins. Otherwise the
/// first available model is used, then [`FALLBACK_MODEL`].
pub fn select_model(available: &[String], candidates: &[String]) -> String {
    for candidate in candidates {
        let full = if candidate.starts_with(MODEL_PREFIX) {
            candidate.clone()
        } else {
            format!("{}{}", MODEL_PREFIX, candidate)
        };
        if available.iter().any(|m| *m == full || m == candidate) {
            return candidate.clone();
        }
    }

    match available.first() {
        Some(first) => first
            .strip_prefix(MODEL_PREFIX)
            .unwrap_or(first)
            .to_string(),
        None => FALLBACK_MODEL.to_string(),
    }
}

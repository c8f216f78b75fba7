//! JSON output

use super::formatter::{OutputFormatter, ReportContext};
use magi_domain::AggregateResult;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

/// Serializes the aggregate result as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(&self, value: &T) -> String {
        match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize council result: {}", e);
                self.format_error(&format!("ERROR: RESULT SERIALIZATION FAILED: {}", e))
            }
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &AggregateResult, _context: &ReportContext<'_>) -> String {
        self.render(result)
    }

    fn format_error(&self, message: &str) -> String {
        json!({ "error": message }).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magi_domain::{Assessment, PersonaId, Verdict};

    #[test]
    fn test_json_round_trips_result() {
        let verdicts = PersonaId::ALL
            .into_iter()
            .map(|id| {
                Verdict::from_assessment(
                    id.persona(),
                    Assessment {
                        decision: id != PersonaId::Melchior,
                        reason: "ok".to_string(),
                        score: 6,
                    },
                )
            })
            .collect();
        let result = AggregateResult::from_verdicts("Adopt AI tools", verdicts);

        let json = JsonFormatter.format(&result, &ReportContext::default());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["approvals"], 2);
        assert_eq!(value["final_decision"], "approved");
        assert_eq!(value["verdicts"][0]["identity"], "casper");
        assert!(value["verdicts"][0].get("error").is_none());
    }

    #[test]
    fn test_json_error() {
        let out = JsonFormatter.format_error("ERROR: PROPOSAL INPUT REQUIRED.");
        assert_eq!(out, r#"{"error":"ERROR: PROPOSAL INPUT REQUIRED."}"#);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("boom"))
        }
    }

    #[test]
    fn test_serialization_failure_renders_error_object() {
        let out = JsonFormatter.render(&Unserializable);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let message = value["error"].as_str().unwrap();
        assert!(message.starts_with("ERROR: RESULT SERIALIZATION FAILED"));
        assert!(message.contains("boom"));
    }
}

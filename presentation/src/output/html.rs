//! Standalone HTML report
//!
//! Renders the terminal-style MAGI console: a final decision block,
//! a grid of three persona cards and a log footer.

use super::formatter::{OutputFormatter, ReportContext, score_cells};
use chrono::{DateTime, Local};
use magi_domain::{AggregateResult, FinalDecision, Verdict};
use std::fmt::Write;

const COLOR_APPROVED: &str = "#00FF00";
const COLOR_REJECTED: &str = "#FF0000";
const COLOR_ORANGE: &str = "#FF6600";
const COLOR_BLACK: &str = "#000000";

const STYLE: &str = r#"
  body { background: #000000; margin: 0; padding: 20px; }
  .magi-container { background: #000000; padding: 20px; font-family: 'Courier New', monospace;
    color: #FF6600; border: 2px solid #FF6600; line-height: 1.5; font-size: 14px; }
  .magi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 15px; margin-top: 15px; }
  .magi-card { background: #111111; border: 1px solid #FF6600; padding: 15px; }
  .score-track { background: #111111; height: 5px; overflow: hidden; }
  .score-fill { height: 100%; background: #FF6600; }
  .log { font-size: 12px; color: #FF6600; }
"#;

/// Formats council results as a self-contained HTML page
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    timestamp: Option<DateTime<Local>>,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the generation timestamp shown in the footer
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn page(body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>MAGI SYSTEM</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            STYLE, body
        )
    }

    fn decision_block(result: &AggregateResult) -> String {
        let (color, symbol, jp, en) = match result.final_decision {
            FinalDecision::Approved => (COLOR_APPROVED, ">", "承認", "APPROVED"),
            FinalDecision::Rejected => (COLOR_REJECTED, "!", "否決", "REJECTED"),
        };

        format!(
            r#"<div style="background: #111111; border: 1px solid {orange}; padding: 15px; margin-bottom: 20px;">
  <div style="font-size: 14px; margin-bottom: 5px;">[ FINAL DECISION ]</div>
  <div style="font-size: 24px; font-weight: bold; color: {black}; background: {color}; padding: 5px 10px; display: inline-block; margin-bottom: 10px;">{symbol} {jp} - {en}</div>
  <div style="font-size: 12px; margin-top: 5px;">APPROVE_COUNT: {approvals}/{total} SYSTEMS</div>
  <div style="font-size: 12px;">PROPOSAL: {proposal}</div>
</div>
"#,
            orange = COLOR_ORANGE,
            black = COLOR_BLACK,
            color = color,
            symbol = symbol,
            jp = jp,
            en = en,
            approvals = result.approvals,
            total = result.total(),
            proposal = escape(&result.proposal),
        )
    }

    fn card(verdict: &Verdict) -> String {
        let (jp, en, badge) = if verdict.decision {
            ("承認", "AGREE", COLOR_APPROVED)
        } else {
            ("否決", "DISAGREE", COLOR_REJECTED)
        };

        format!(
            r#"<div class="magi-card">
  <div style="display: flex; align-items: center; margin-bottom: 10px; padding-bottom: 5px; border-bottom: 1px dashed {orange};">
    <div style="font-size: 16px; margin-right: 10px; font-weight: bold;">{icon}</div>
    <div style="font-size: 16px; font-weight: bold; flex-grow: 1;">{name}</div>
    <div style="padding: 4px 8px; font-weight: bold; font-size: 12px; color: {black}; background: {badge};">{jp} ({en})</div>
  </div>
  <div style="font-size: 12px; font-weight: bold; margin-bottom: 10px;">&gt;&gt; ROLE: {role}</div>
  <div style="background: #0A0A0A; padding: 12px; margin: 10px 0; border-left: 3px solid {orange};">
    <div style="font-size: 12px; font-weight: bold; margin-bottom: 8px;">REASON:</div>
    <div style="font-size: 15px; line-height: 1.6;">{reason}</div>
  </div>
  <div style="margin-top: 10px;">
    <div style="font-size: 12px; margin-bottom: 5px; font-weight: bold;">EVALUATION SCORE</div>
    <div class="score-track"><div class="score-fill" style="width: {width}%;"></div></div>
    <div style="font-size: 14px; font-weight: bold; margin-top: 5px; text-align: right;">{score}/10</div>
  </div>
</div>
"#,
            orange = COLOR_ORANGE,
            black = COLOR_BLACK,
            badge = badge,
            icon = escape(&verdict.icon),
            name = escape(&verdict.agent_name),
            jp = jp,
            en = en,
            role = escape(&verdict.role),
            reason = escape(&verdict.reason),
            width = score_cells(verdict.score) * 10,
            score = verdict.score,
        )
    }

    fn footer(&self, context: &ReportContext<'_>) -> String {
        let timestamp = self.timestamp.unwrap_or_else(Local::now);
        format!(
            r#"<div style="margin-top: 20px; padding: 10px; background: #111111; border: 1px dashed {orange};">
  <div class="log">LOG: MAGI_SYSTEM_EXECUTION_COMPLETE</div>
  <div class="log">LOG: DECISION CRITERIA: MAJORITY RULE (&gt;=2 APPROVALS)</div>
  <div class="log">&gt; SYSTEM_MODEL: {model} | CACHE: {entries} LIVE ENTRIES | GENERATED: {timestamp}</div>
</div>
"#,
            orange = COLOR_ORANGE,
            model = escape(context.model_label()),
            entries = context.cache_entries,
            timestamp = timestamp.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, result: &AggregateResult, context: &ReportContext<'_>) -> String {
        let mut body = String::from("<div class=\"magi-container\">\n");
        body.push_str(&Self::decision_block(result));
        body.push_str("<div class=\"magi-grid\">\n");
        for verdict in &result.verdicts {
            body.push_str(&Self::card(verdict));
        }
        body.push_str("</div>\n");
        body.push_str(&self.footer(context));
        body.push_str("</div>");
        Self::page(&body)
    }

    fn format_error(&self, message: &str) -> String {
        let mut body = String::new();
        let _ = write!(
            body,
            r#"<div style="background: {black}; padding: 30px; border: 3px solid {orange};">
  <div style="text-align: center; color: {orange}; font-size: 20px; font-weight: bold; font-family: 'Courier New', monospace; letter-spacing: 2px;">{message}</div>
</div>"#,
            black = COLOR_BLACK,
            orange = COLOR_ORANGE,
            message = escape(message),
        );
        Self::page(&body)
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use magi_domain::{Assessment, PersonaId};

    fn result_with_reason(reason: &str) -> AggregateResult {
        let verdicts = PersonaId::ALL
            .into_iter()
            .map(|id| {
                Verdict::from_assessment(
                    id.persona(),
                    Assessment {
                        decision: id == PersonaId::Casper,
                        reason: reason.to_string(),
                        score: 8,
                    },
                )
            })
            .collect();
        AggregateResult::from_verdicts("Adopt <AI> tools", verdicts)
    }

    fn fixed_formatter() -> HtmlFormatter {
        let ts = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        HtmlFormatter::new().with_timestamp(ts)
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_reason_is_escaped() {
        let html = fixed_formatter().format(
            &result_with_reason("<b>bold</b>"),
            &ReportContext::default(),
        );
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("PROPOSAL: Adopt &lt;AI&gt; tools"));
    }

    #[test]
    fn test_report_layout() {
        let context = ReportContext {
            model: Some("gemini-pro"),
            cache_entries: 2,
        };
        let html = fixed_formatter().format(&result_with_reason("fine"), &context);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("! 否決 - REJECTED"));
        assert!(html.contains("APPROVE_COUNT: 1/3 SYSTEMS"));
        assert_eq!(html.matches("class=\"magi-card\"").count(), 3);
        assert!(html.contains("width: 80%;"));
        assert!(html.contains("8/10"));
        assert!(html.contains("SYSTEM_MODEL: gemini-pro | CACHE: 2 LIVE ENTRIES"));
        assert!(html.contains("GENERATED: 2025-01-02 03:04:05"));
    }

    #[test]
    fn test_error_page() {
        let html = HtmlFormatter::new().format_error("ERROR: PROPOSAL INPUT REQUIRED.");
        assert!(html.contains("ERROR: PROPOSAL INPUT REQUIRED."));
        assert!(!html.contains("class=\"magi-card\""));
    }
}

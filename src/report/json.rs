use serde::Serialize;

use crate::model::{VitalityBreakdown, VitalitySnapshot};
use crate::pipeline::stage1_window::WindowAudit;

#[derive(Debug, Serialize)]
pub struct ToolMeta<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SummaryJson<'a> {
    pub tool: ToolMeta<'a>,
    pub window: Option<&'a WindowAudit>,
    pub snapshot: Option<&'a VitalitySnapshot>,
    pub breakdown: Option<&'a VitalityBreakdown>,
    /// Set when the coverage gate withheld a score.
    pub insufficient_data: bool,
}

pub fn render_summary_json(summary: &SummaryJson<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

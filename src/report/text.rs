use std::fmt::Write;

use crate::model::{MetricStatus, VitalityBreakdown};
use crate::pipeline::stage1_window::WindowAudit;
use crate::report::format_points;

pub fn render_report_text(breakdown: Option<&VitalityBreakdown>, window: &WindowAudit) -> String {
    let mut out = String::new();

    out.push_str("Vitality Report\n");
    out.push_str("===============\n\n");

    out.push_str("1. Data window\n");
    match (window.window_start, window.window_end) {
        (Some(start), Some(end)) => {
            let _ = writeln!(
                out,
                "Days used: {} of {} ({} to {})",
                window.window_len, window.records_total, start, end
            );
        }
        _ => out.push_str("Days used: 0 (no history supplied)\n"),
    }
    for note in &window.backfilled {
        let _ = writeln!(
            out,
            "Carried forward {} from {}",
            note.id.label(),
            note.source_date
        );
    }
    out.push('\n');

    let Some(breakdown) = breakdown else {
        out.push_str("2. Score\n");
        out.push_str("Not enough data yet: at least two pillars need measurements.\n");
        return out;
    };

    out.push_str("2. Score\n");
    let _ = writeln!(out, "Vitality: {}/100", breakdown.total_score);
    let _ = writeln!(
        out,
        "Pillars used: {} of {}",
        breakdown.pillars_used, breakdown.pillars_possible
    );
    if let Some(note) = &breakdown.hrv_note {
        let _ = writeln!(out, "HRV measured as {note}");
    }
    out.push('\n');

    out.push_str("3. Pillars\n");
    for pillar in &breakdown.pillars {
        let score = pillar
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{}: {} [{}] points {}",
            pillar.label,
            score,
            status_label(pillar.status),
            format_points(pillar.earned_points, pillar.max_points)
        );
        for sub in &pillar.submetrics {
            let _ = writeln!(
                out,
                "  - {}: {} (target {}) [{}] points {}",
                sub.label,
                sub.value_text,
                sub.target_text,
                status_label(sub.status),
                format_points(sub.earned_points, sub.max_points)
            );
        }
    }

    out
}

fn status_label(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Optimal => "OPTIMAL",
        MetricStatus::Ok => "OK",
        MetricStatus::Low => "LOW",
        MetricStatus::Missing => "MISSING",
    }
}

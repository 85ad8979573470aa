use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::{VitalityBreakdown, VitalitySnapshot};
use crate::pipeline::stage1_window::WindowAudit;
use crate::report::json::{SummaryJson, ToolMeta, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{format_number, format_points};

#[derive(Debug, Clone)]
pub struct Stage7Input<'a> {
    pub window: &'a WindowAudit,
    /// `None` when the coverage gate withheld the score.
    pub scored: Option<(&'a VitalitySnapshot, &'a VitalityBreakdown)>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage7Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let tsv_path = out_dir.join("vitality.tsv");
    match input.scored {
        Some((snapshot, breakdown)) => write_submetric_tsv(snapshot, breakdown, &tsv_path)?,
        // A withheld score must not sit next to rows from an earlier run.
        None => remove_if_present(&tsv_path)?,
    }

    let summary = SummaryJson {
        tool: ToolMeta {
            name: &input.tool_name,
            version: &input.tool_version,
        },
        window: Some(input.window),
        snapshot: input.scored.map(|(s, _)| s),
        breakdown: input.scored.map(|(_, b)| b),
        insufficient_data: input.scored.is_none(),
    };
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(input.scored.map(|(_, b)| b), input.window);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!(dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_submetric_tsv(
    snapshot: &VitalitySnapshot,
    breakdown: &VitalityBreakdown,
    path: &Path,
) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "pillar",
        "submetric",
        "direction",
        "raw_value",
        "score",
        "status",
        "points",
        "target",
    ];
    writeln!(w, "{}", header.join("\t"))?;

    for (pillar, pillar_view) in snapshot.pillars.iter().zip(breakdown.pillars.iter()) {
        for (sub, view) in pillar.submetrics.iter().zip(pillar_view.submetrics.iter()) {
            let raw = sub
                .raw_value
                .map(|v| format_number(sub.id, v))
                .unwrap_or_else(|| "NA".to_string());
            let score = view
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "NA".to_string());
            writeln!(
                w,
                "{}\t{}\t{:?}\t{}\t{}\t{}\t{}\t{}",
                pillar.id.name(),
                sub.id.name(),
                view.direction,
                raw,
                score,
                view.status.name(),
                format_points(view.earned_points, view.max_points),
                view.target_text
            )?;
        }
    }
    w.flush()
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;

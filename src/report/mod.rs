pub mod json;
pub mod text;

use crate::model::SubmetricId;

/// Renders a value with the metric's precision, no unit.
pub fn format_number(id: SubmetricId, value: f64) -> String {
    format!("{:.*}", id.precision(), value)
}

/// Renders a value with the metric's precision and unit (`7.5 h`, `85%`).
pub fn format_metric(id: SubmetricId, value: f64) -> String {
    let number = format_number(id, value);
    match id.unit() {
        "%" => format!("{number}%"),
        unit => format!("{number} {unit}"),
    }
}

pub fn format_points(earned: f64, max: f64) -> String {
    format!("{:.1}/{:.1}", earned, max)
}

// src/render/progress.rs

/// Attribute key holding the formatted map progress.
pub const MAP_PROGRESS: &str = "map progress";

/// Attribute key holding the formatted reduce progress.
pub const REDUCE_PROGRESS: &str = "reduce progress";

/// Format a task progress counter.
///
/// `fraction` is the completed share in `[0, 1]` (clamped; NaN counts as 0).
/// With a known, non-zero `total` the result is `"{done}/{total} ({pct}%)"`,
/// otherwise just `"{pct}%"`.
pub fn task_progress_string(total: Option<u64>, fraction: f64) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let pct = (fraction * 100.0).round() as u64;

    match total {
        Some(total) if total > 0 => {
            let done = (total as f64 * fraction).round() as u64;
            format!("{done}/{total} ({pct}%)")
        }
        _ => format!("{pct}%"),
    }
}

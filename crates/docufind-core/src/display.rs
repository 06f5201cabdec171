//! Formatting for result fields, shared by the app and the CLI.

/// Relevance score as displayed next to a result.
///
/// Whole numbers (the backend counts term hits) are shown without a fraction,
/// anything else with two decimals.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{:.2}", score)
    }
}

/// Location line under a result title, e.g. `Documents/raw/report.pdf`.
pub fn format_path(path: &str) -> String {
    format!("Documents/{}", path.trim_start_matches('/'))
}

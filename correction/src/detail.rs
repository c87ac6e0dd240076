//! Text rendering of a [`DetailRecord`].
//!
//! Shared by the browser panel and the terminal client so both show the same
//! breakdown. A fallback correction only reports the fallback notice and
//! elapsed time; accuracy and confidence are meaningless on that path.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::wire::DetailRecord;

/// Notice shown instead of the metric breakdown on the fallback path.
pub const FALLBACK_NOTICE: &str = "⚙️ Gemini fallback used";

/// Rendered detail block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    /// Tint the block differently when the fallback path was used.
    pub fallback: bool,
    pub lines: Vec<String>,
}

/// Render a detail record into display lines.
#[must_use]
pub fn detail_view(detail: &DetailRecord) -> DetailView {
    let elapsed = format!("Time Taken: {}s", format_seconds(detail.time_taken_seconds));
    let lines = if detail.used_fallback {
        vec![FALLBACK_NOTICE.to_owned(), elapsed]
    } else {
        vec![
            format!("Original: {}", detail.original),
            format!("Corrected: {}", detail.corrected),
            format!("Accuracy: {}", format_percent(detail.accuracy)),
            format!("Confidence: {}", format_percent(detail.confidence)),
            elapsed,
        ]
    };
    DetailView { fallback: detail.used_fallback, lines }
}

/// `Some(91.456)` → `"91.46%"`, `None` → `"N/A"`.
///
/// Exact halfway values round away from zero (`12.125` → `"12.13%"`).
#[must_use]
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if is_hundredths_tie(v) => format!("{:.2}%", (v * 100.0).round() / 100.0),
        Some(v) => format!("{v:.2}%"),
        None => "N/A".to_owned(),
    }
}

/// A binary float sits exactly halfway between two hundredths only when it
/// is an odd multiple of 1/8.
fn is_hundredths_tie(v: f64) -> bool {
    let eighths = v * 8.0;
    eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0
}

/// Shortest float form (`0.42`, `1`), `N/A` when the service omitted it.
#[must_use]
pub fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_owned(),
    }
}

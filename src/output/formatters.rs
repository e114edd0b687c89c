//! Formatting utilities for terminal output

use crate::align::DistanceTable;
use crate::core::{Feedback, Transform};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// A transform tag in its display colour
#[must_use]
pub fn colored_tag(transform: Transform) -> ColoredString {
    let tag = transform.tag().to_string();
    match transform {
        Transform::Insert => tag.green().bold(),
        Transform::Delete => tag.red().bold(),
        Transform::Replace => tag.yellow().bold(),
        Transform::Transpose => tag.cyan().bold(),
    }
}

/// Format a script as `[TAGS]` with coloured tags
#[must_use]
pub fn format_transforms(transforms: &[Transform]) -> String {
    let tags: String = transforms.iter().map(|&t| colored_tag(t).to_string()).collect();
    format!("[{tags}]")
}

/// Format feedback as `distance [TAGS]`
#[must_use]
pub fn format_feedback(feedback: &Feedback) -> String {
    if feedback.is_solved() {
        return "0 [solved]".green().bold().to_string();
    }
    format!(
        "{} {}",
        feedback.distance().to_string().bright_white().bold(),
        format_transforms(feedback.transforms())
    )
}

/// Render the distance table as a grid, `row_word` down the side
///
/// Row and column zero are headed `·` (the empty prefix).
#[must_use]
pub fn format_distance_table(row_word: &[char], col_word: &[char], table: &DistanceTable) -> String {
    let widest = (0..table.rows())
        .flat_map(|i| table.row(i).iter())
        .max()
        .map_or(1, |v| v.to_string().len());
    let width = widest.max(1) + 1;

    let mut out = String::new();
    let _ = write!(out, "{:>width$}{:>width$}", "", "·");
    for c in col_word {
        let _ = write!(out, "{c:>width$}");
    }
    out.push('\n');

    for i in 0..table.rows() {
        let head = if i == 0 { '·' } else { row_word[i - 1] };
        let _ = write!(out, "{head:>width$}");
        for cost in table.row(i) {
            let _ = write!(out, "{cost:>width$}");
        }
        out.push('\n');
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the best possible split of `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

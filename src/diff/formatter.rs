use std::path::Path;

use clap::ValueEnum;

use super::engine::{DiffLine, DiffResult, LineKind};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Text output formats for a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffFormat {
    /// Two-column view with per-side line numbers
    SideBySide,
    /// Single-column view with -/+ prefixes
    Unified,
}

/// Formats comparison results into text representations.
pub struct DiffFormatter;

impl DiffFormatter {
    /// Format as a side-by-side comparison within the given total width.
    pub fn format_side_by_side<P: AsRef<Path>>(
        result: &DiffResult,
        left_path: P,
        right_path: P,
        width: usize,
        color: bool,
    ) -> String {
        let half_width = width.saturating_sub(3) / 2; // Account for separator " | "

        let mut output = Vec::new();
        output.push(format!(
            "{:<width$} | {}",
            Self::truncate_line(&format!("--- {}", left_path.as_ref().display()), half_width),
            format!("+++ {}", right_path.as_ref().display()),
            width = half_width
        ));
        output.push("-".repeat(width));

        for (left, right) in Self::rows(result) {
            let left_cell = Self::render_cell(left, half_width);
            let right_cell = Self::render_cell(right, half_width);
            output.push(format!(
                "{} | {}",
                Self::paint(left_cell, left, color),
                Self::paint(right_cell, right, color)
            ));
        }

        output.join("\n")
    }

    /// Format as a minimal unified view covering the whole file.
    pub fn format_unified<P: AsRef<Path>>(
        result: &DiffResult,
        left_path: P,
        right_path: P,
        color: bool,
    ) -> String {
        let mut output = Vec::new();
        output.push(format!("--- {}", left_path.as_ref().display()));
        output.push(format!("+++ {}", right_path.as_ref().display()));
        output.push(format!(
            "@@ -1,{} +1,{} @@",
            result.left_lines.len(),
            result.right_lines.len()
        ));

        for (left, right) in Self::rows(result) {
            match (left, right) {
                (Some(line), Some(_)) => output.push(format!(" {}", line.content)),
                (Some(line), None) => {
                    let text = format!("-{}", line.content);
                    output.push(if color {
                        format!("{}{}{}", RED, text, RESET)
                    } else {
                        text
                    });
                }
                (None, Some(line)) => {
                    let text = format!("+{}", line.content);
                    output.push(if color {
                        format!("{}{}{}", GREEN, text, RESET)
                    } else {
                        text
                    });
                }
                (None, None) => {}
            }
        }

        output.join("\n")
    }

    /// Format comparison statistics as a one-line summary.
    pub fn format_stats(result: &DiffResult) -> String {
        let stats = result.stats();

        if stats.total_changes() == 0 {
            return "No changes".to_string();
        }

        let mut parts = Vec::new();

        if stats.lines_added > 0 {
            parts.push(format!(
                "{} insertion{}",
                stats.lines_added,
                if stats.lines_added == 1 { "" } else { "s" }
            ));
        }

        if stats.lines_removed > 0 {
            parts.push(format!(
                "{} deletion{}",
                stats.lines_removed,
                if stats.lines_removed == 1 { "" } else { "s" }
            ));
        }

        parts.join(", ")
    }

    /// Format with the specified format type.
    pub fn format<P: AsRef<Path>>(
        result: &DiffResult,
        format: DiffFormat,
        left_path: P,
        right_path: P,
        width: usize,
        color: bool,
    ) -> String {
        match format {
            DiffFormat::SideBySide => {
                Self::format_side_by_side(result, left_path, right_path, width, color)
            }
            DiffFormat::Unified => Self::format_unified(result, left_path, right_path, color),
        }
    }

    /// Pair the two annotated sides back into display rows. `Same` lines
    /// pair up; at a divergence the removed rows come out before the added
    /// rows, matching the order the engine emitted them in.
    fn rows(result: &DiffResult) -> Vec<(Option<&DiffLine>, Option<&DiffLine>)> {
        let left = &result.left_lines;
        let right = &result.right_lines;
        let mut rows = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < left.len() || j < right.len() {
            if i < left.len() && left[i].kind == LineKind::Removed {
                rows.push((Some(&left[i]), None));
                i += 1;
            } else if j < right.len() && right[j].kind == LineKind::Added {
                rows.push((None, Some(&right[j])));
                j += 1;
            } else {
                rows.push((Some(&left[i]), Some(&right[j])));
                i += 1;
                j += 1;
            }
        }

        rows
    }

    fn render_cell(line: Option<&DiffLine>, half_width: usize) -> String {
        match line {
            Some(line) => {
                let marker = match line.kind {
                    LineKind::Same => ' ',
                    LineKind::Removed => '-',
                    LineKind::Added => '+',
                };
                let text = format!("{:>4} {} {}", line.line_number, marker, line.content);
                format!(
                    "{:<width$}",
                    Self::truncate_line(&text, half_width),
                    width = half_width
                )
            }
            None => " ".repeat(half_width),
        }
    }

    fn paint(cell: String, line: Option<&DiffLine>, color: bool) -> String {
        if !color {
            return cell;
        }
        match line.map(|l| l.kind) {
            Some(LineKind::Removed) => format!("{}{}{}", RED, cell, RESET),
            Some(LineKind::Added) => format!("{}{}{}", GREEN, cell, RESET),
            _ => cell,
        }
    }

    fn truncate_line(line: &str, max_width: usize) -> String {
        if line.chars().count() <= max_width {
            return line.to_string();
        }
        if max_width > 3 {
            let kept: String = line.chars().take(max_width - 3).collect();
            format!("{}...", kept)
        } else {
            line.chars().take(max_width).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::compare;

    fn sample() -> DiffResult {
        compare("line1\nline2\nline3\n", "line1\nmodified\nline3\n")
    }

    #[test]
    fn test_format_side_by_side() {
        let result = sample();
        let formatted =
            DiffFormatter::format_side_by_side(&result, "old.txt", "new.txt", 80, false);

        assert!(formatted.contains("--- old.txt"));
        assert!(formatted.contains("+++ new.txt"));
        assert!(formatted.contains("- line2"));
        assert!(formatted.contains("+ modified"));
        // Unchanged lines appear on both sides of the separator.
        let same_row = formatted
            .lines()
            .find(|l| l.contains("line1"))
            .expect("missing unchanged row");
        assert_eq!(same_row.matches("line1").count(), 2);
    }

    #[test]
    fn test_side_by_side_orders_removals_first() {
        let result = sample();
        let formatted =
            DiffFormatter::format_side_by_side(&result, "old.txt", "new.txt", 80, false);

        let removed_row = formatted
            .lines()
            .position(|l| l.contains("- line2"))
            .unwrap();
        let added_row = formatted
            .lines()
            .position(|l| l.contains("+ modified"))
            .unwrap();
        assert!(removed_row < added_row);
    }

    #[test]
    fn test_format_unified() {
        let result = sample();
        let formatted = DiffFormatter::format_unified(&result, "old.txt", "new.txt", false);

        assert!(formatted.contains("--- old.txt"));
        assert!(formatted.contains("+++ new.txt"));
        assert!(formatted.contains("@@ -1,3 +1,3 @@"));
        assert!(formatted.contains("-line2"));
        assert!(formatted.contains("+modified"));
        assert!(formatted.contains(" line1"));
    }

    #[test]
    fn test_format_stats() {
        let result = sample();
        let stats = DiffFormatter::format_stats(&result);

        assert!(stats.contains("1 insertion"));
        assert!(stats.contains("1 deletion"));
    }

    #[test]
    fn test_format_stats_no_changes() {
        let result = compare("a\n", "a\n");
        assert_eq!(DiffFormatter::format_stats(&result), "No changes");
    }

    #[test]
    fn test_truncate_line() {
        assert_eq!(DiffFormatter::truncate_line("short", 10), "short");
        assert_eq!(
            DiffFormatter::truncate_line("a longer line", 9),
            "a long..."
        );
    }

    #[test]
    fn test_colored_output_marks_changes() {
        let result = sample();
        let formatted = DiffFormatter::format_unified(&result, "a", "b", true);

        assert!(formatted.contains("\x1b[31m-line2"));
        assert!(formatted.contains("\x1b[32m+modified"));
    }
}

use serde::{Deserialize, Serialize};

/// Classification of a single line in a comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Present on both sides at the aligned position.
    Same,
    /// Present only on the right side.
    Added,
    /// Present only on the left side.
    Removed,
}

/// One annotated line, numbered within its own side starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    pub line_number: usize,
    /// Raw line text without its terminator.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: LineKind,
}

/// The full annotated content of both inputs, in display order.
///
/// `left_lines` never contains an `Added` line and `right_lines` never
/// contains a `Removed` line; the `Same` lines on each side are the aligned
/// common subsequence in matching order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub left_lines: Vec<DiffLine>,
    pub right_lines: Vec<DiffLine>,
}

impl DiffResult {
    /// Count lines per classification.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for line in &self.left_lines {
            match line.kind {
                LineKind::Same => stats.lines_same += 1,
                LineKind::Removed => stats.lines_removed += 1,
                LineKind::Added => {}
            }
        }
        for line in &self.right_lines {
            if line.kind == LineKind::Added {
                stats.lines_added += 1;
            }
        }
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.left_lines.iter().any(|l| l.kind != LineKind::Same)
            || self.right_lines.iter().any(|l| l.kind != LineKind::Same)
    }
}

/// Summary statistics for a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub lines_same: usize,
    pub lines_added: usize,
    pub lines_removed: usize,
}

impl DiffStats {
    pub fn total_changes(&self) -> usize {
        self.lines_added + self.lines_removed
    }

    pub fn net_change(&self) -> isize {
        self.lines_added as isize - self.lines_removed as isize
    }
}

/// Compare two text bodies line by line.
///
/// Splits each input into lines, aligns them on their longest common
/// subsequence, and returns both sides fully annotated. Any two strings
/// produce a well-formed result; the function performs no I/O and keeps no
/// state between calls.
pub fn compare(left_text: &str, right_text: &str) -> DiffResult {
    let left = split_lines(left_text);
    let right = split_lines(right_text);

    let mut result = DiffResult::default();
    let mut left_cursor = 0;
    let mut right_cursor = 0;

    for step in alignment_path(&left, &right) {
        match step {
            Step::Match => {
                push_line(&mut result.left_lines, left[left_cursor], LineKind::Same);
                push_line(&mut result.right_lines, right[right_cursor], LineKind::Same);
                left_cursor += 1;
                right_cursor += 1;
            }
            Step::SkipLeft => {
                push_line(&mut result.left_lines, left[left_cursor], LineKind::Removed);
                left_cursor += 1;
            }
            Step::SkipRight => {
                push_line(&mut result.right_lines, right[right_cursor], LineKind::Added);
                right_cursor += 1;
            }
        }
    }

    result
}

/// Split text into lines: `\n` terminated, one trailing `\r` stripped per
/// line, and the single empty tail element from a trailing `\n` dropped.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if text.ends_with('\n') {
        lines.pop();
    }

    lines
}

/// One move along the recovered alignment, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Match,
    SkipLeft,
    SkipRight,
}

/// Compute the line alignment via the classic LCS length table.
///
/// The table is a flat `(N+1)*(M+1)` vector indexed `i * (M + 1) + j`.
/// Backtracking runs from the bottom-right corner; when both skip moves
/// preserve the LCS length, the right pointer moves first, so after the
/// reversal removals surface before additions at each divergence point.
fn alignment_path(left: &[&str], right: &[&str]) -> Vec<Step> {
    let n = left.len();
    let m = right.len();
    let width = m + 1;

    let mut lengths = vec![0u32; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            lengths[i * width + j] = if left[i - 1] == right[j - 1] {
                lengths[(i - 1) * width + (j - 1)] + 1
            } else {
                lengths[(i - 1) * width + j].max(lengths[i * width + (j - 1)])
            };
        }
    }

    let mut steps = Vec::with_capacity(n + m);
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left[i - 1] == right[j - 1] {
            steps.push(Step::Match);
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || lengths[i * width + (j - 1)] >= lengths[(i - 1) * width + j])
        {
            steps.push(Step::SkipRight);
            j -= 1;
        } else {
            steps.push(Step::SkipLeft);
            i -= 1;
        }
    }

    steps.reverse();
    steps
}

fn push_line(side: &mut Vec<DiffLine>, content: &str, kind: LineKind) {
    side.push(DiffLine {
        line_number: side.len() + 1,
        content: content.to_string(),
        kind,
    });
}

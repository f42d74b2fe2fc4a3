//! Line scanning, block segmentation, comment stripping, and rule detection.
//!
//! These primitives operate on an indexed sequence of raw lines. The parse
//! driver uses them to carve the input into maximal runs of contiguous
//! non-empty lines (blocks), which are the unit of transaction parsing.

/// True iff the line contains at least one non-whitespace character.
#[must_use]
pub fn has_text(line: &str) -> bool {
    !line.trim().is_empty()
}

/// Index of the first line at or after `from` that has text.
///
/// Returns `None` when `from` is past the end or every remaining line is
/// empty or whitespace-only.
#[must_use]
pub fn scan_to_nonempty(lines: &[&str], from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| has_text(line))
        .map(|(index, _)| index)
}

/// Index of the last line of the non-empty run starting at `from`.
///
/// Requires `lines[from]` to have text, otherwise returns `None`. Walks
/// forward while lines have text; the run is bounded by the first empty
/// line or the end of the sequence.
#[must_use]
pub fn scan_to_last_nonempty(lines: &[&str], from: usize) -> Option<usize> {
    if from >= lines.len() || !has_text(lines[from]) {
        return None;
    }
    let mut curr = from;
    while curr + 1 < lines.len() && has_text(lines[curr + 1]) {
        curr += 1;
    }
    Some(curr)
}

/// Remove comments from a block, preserving the order of surviving lines.
///
/// Two passes: lines whose first non-whitespace character is `;` are
/// dropped entirely (not replaced with an empty line, which can change
/// which lines are adjacent); then every remaining line is truncated at
/// its first `;` with trailing whitespace trimmed from the kept prefix.
#[must_use]
pub fn strip_comments<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .filter(|line| !line.trim_start().starts_with(';'))
        .map(|line| match line.find(';') {
            Some(idx) => line[..idx].trim_end(),
            None => *line,
        })
        .collect()
}

/// Whether a comment-stripped block is a rule directive.
///
/// A block is a rule iff its first line begins with `=`. Rules are
/// skipped by the driver whether or not the rest of the block is
/// well-formed.
#[must_use]
pub fn is_rule(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| line.starts_with('='))
}

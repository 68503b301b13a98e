//! Line-wise application of a case transform
//!
//! Multi-line clipboard content keeps its line structure: the transform is
//! applied independently to each newline-delimited segment and the segments
//! are rejoined with newlines. No state crosses line boundaries.

/// Apply `convert` to each newline-delimited segment of `input`
///
/// Empty segments (including a trailing one from a final newline) are
/// passed through the transform like any other segment, so the shape of
/// the input survives the conversion.
pub fn apply_to_lines<F>(input: &str, convert: F) -> String
where
    F: Fn(&str) -> String,
{
    input
        .split('\n')
        .map(|line| convert(line))
        .collect::<Vec<_>>()
        .join("\n")
}

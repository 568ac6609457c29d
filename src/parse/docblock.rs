//! Locates the block-comment description attached to a definition
//!
//! A description is a standalone triple-quoted block sitting directly above
//! the definition, separated from it by blank lines at most. Malformed or
//! unterminated blocks are never partially recovered.

const MARKERS: [&str; 2] = ["\"\"\"", "'''"];

/// Parse a triple-quoted block starting at `lines[0]`.
///
/// Returns the edge-trimmed content (possibly empty) and the index of the
/// closing line within the slice.
fn parse_block(lines: &[&str]) -> Option<(String, usize)> {
    let opening = lines.first()?.trim_start();
    let marker = *MARKERS.iter().find(|m| opening.starts_with(**m))?;
    let rest = &opening[marker.len()..];

    // One-line block: the remainder itself carries the closing marker.
    let rest_end = rest.trim_end();
    if rest_end.len() >= marker.len() && rest_end.ends_with(marker) {
        let inner = &rest_end[..rest_end.len() - marker.len()];
        return Some((inner.trim().to_string(), 0));
    }

    let mut content = vec![rest];
    for (offset, line) in lines[1..].iter().enumerate() {
        let line_end = line.trim_end();
        if line_end.ends_with(marker) {
            content.push(&line_end[..line_end.len() - marker.len()]);
            return Some((content.join("\n").trim().to_string(), offset + 1));
        }
        content.push(line);
    }
    // Closing marker never appeared.
    None
}

/// Extract a docstring from lines starting at its candidate opening line.
///
/// The opening line must begin (after indentation) with a triple-quote
/// marker; text after the marker is the first content line. The block closes
/// on the first line that ends, ignoring trailing whitespace, with the same
/// marker. Content is joined and edge-trimmed, so blank lines hugging the
/// markers disappear while interior blank lines survive.
pub fn find_docstring(lines: &[&str]) -> Option<String> {
    parse_block(lines)
        .map(|(text, _)| text)
        .filter(|text| !text.is_empty())
}

/// Recover the docstring sitting directly above `lines[def_idx]`.
///
/// Blank lines between the block and the definition are allowed; any other
/// intervening content detaches the block.
pub fn docstring_above(lines: &[&str], def_idx: usize) -> Option<String> {
    let mut end = def_idx.min(lines.len());
    while end > 0 && lines[end - 1].trim().is_empty() {
        end -= 1;
    }
    if end == 0 {
        return None;
    }
    let closing = end - 1;
    let closing_text = lines[closing].trim_end();
    let marker = *MARKERS.iter().find(|m| closing_text.ends_with(**m))?;

    // Walk up to the line that opens the block. A bare-marker closing line
    // cannot also open the block, so step past it.
    let mut start = closing;
    if lines[closing].trim() == marker {
        if closing == 0 {
            return None;
        }
        start = closing - 1;
    }
    loop {
        if lines[start].trim_start().starts_with(marker) {
            break;
        }
        if start == 0 {
            return None;
        }
        start -= 1;
    }

    // The recovered block must close exactly on the anchor line, otherwise
    // the marker above belongs to some other block.
    let (text, block_end) = parse_block(&lines[start..=closing])?;
    if start + block_end != closing || text.is_empty() {
        return None;
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_block_with_blank_edges_trimmed() {
        let lines = ["    \"\"\"   ", "", "Some", "docstring...", "   \"\"\"     "];
        assert_eq!(find_docstring(&lines), Some("Some\ndocstring...".into()));
    }

    #[test]
    fn opening_line_text_is_first_content_line() {
        let lines = ["    '''   Another", "docstring...", "   '''     "];
        assert_eq!(find_docstring(&lines), Some("Another\ndocstring...".into()));
    }

    #[test]
    fn closing_line_text_is_last_content_line() {
        let lines = ["\"\"\"A", "docstring, that", "hovers a bit\"\"\"", " ", " "];
        assert_eq!(
            find_docstring(&lines),
            Some("A\ndocstring, that\nhovers a bit".into())
        );
    }

    #[test]
    fn two_quote_run_is_not_a_marker() {
        assert_eq!(find_docstring(&["\"\"Almost a docstring\"\"\""]), None);
    }

    #[test]
    fn content_glued_after_closing_marker_breaks_the_block() {
        assert_eq!(find_docstring(&["\"\"\"Also almost...\"\"\" # Nope"]), None);
    }

    #[test]
    fn unterminated_block_is_not_recovered() {
        assert_eq!(find_docstring(&["\"\"\"Starts here", "and never ends"]), None);
    }

    #[test]
    fn one_line_block() {
        assert_eq!(
            find_docstring(&["\"\"\"Compact.\"\"\""]),
            Some("Compact.".into())
        );
    }

    #[test]
    fn empty_block_counts_as_absent() {
        assert_eq!(find_docstring(&["\"\"\"\"\"\""]), None);
        assert_eq!(find_docstring(&["\"\"\"", "", "\"\"\""]), None);
    }

    #[test]
    fn interior_blank_lines_survive() {
        let lines = ["\"\"\"first", "", "second\"\"\""];
        assert_eq!(find_docstring(&lines), Some("first\n\nsecond".into()));
    }

    #[test]
    fn mismatched_quote_styles_never_close() {
        assert_eq!(find_docstring(&["\"\"\"text", "'''"]), None);
    }

    #[test]
    fn above_finds_adjacent_block() {
        let lines = ["\"\"\"The answer.\"\"\"", "ANSWER = 42"];
        assert_eq!(docstring_above(&lines, 1), Some("The answer.".into()));
    }

    #[test]
    fn above_skips_blank_lines_only() {
        let lines = ["\"\"\"Hovering.\"\"\"", "", "", "ANSWER = 42"];
        assert_eq!(docstring_above(&lines, 3), Some("Hovering.".into()));

        let detached = ["\"\"\"Not yours.\"\"\"", "OTHER = 1", "ANSWER = 42"];
        assert_eq!(docstring_above(&detached, 2), None);
    }

    #[test]
    fn above_recovers_multi_line_block() {
        let lines = [
            "\"\"\"",
            "Lets put some",
            "comments for ATTR1 here",
            "",
            "with multiple lines...",
            "\"\"\"",
            "ATTR1: int = 42  # And some more comments here...",
        ];
        assert_eq!(
            docstring_above(&lines, 6),
            Some("Lets put some\ncomments for ATTR1 here\n\nwith multiple lines...".into())
        );
    }

    #[test]
    fn above_rejects_block_closing_elsewhere() {
        // The bare marker under X opens a new string; the one-line block at
        // the top is not adjacent to the definition.
        let lines = ["\"\"\"Module doc.\"\"\"", "X = 1", "\"\"\"", "ATTR = 2"];
        assert_eq!(docstring_above(&lines, 3), None);
    }

    #[test]
    fn above_with_nothing_before_definition() {
        assert_eq!(docstring_above(&["ATTR1 = 1"], 0), None);
        assert_eq!(docstring_above(&["", "ATTR1 = 1"], 1), None);
    }
}

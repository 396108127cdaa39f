//! Phase 1: Line classifier
//!
//! The classifier converts raw source text into scan lines. For each line
//! it performs:
//! - Whitespace trimming
//! - Trailing-comment extraction (everything after the first "#")
//! - Classification of the code part as a constant definition, a
//!   configuration assignment, or neither
//!
//! Classification never fails; malformed lines are deferred to the
//! processing passes. Section headers such as `constants:` and
//! `configuration:` carry no value and therefore classify as [`LineKind::Other`].

/// Semantic category of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Constant definition (`NAME: value`).
    Const,
    /// Configuration assignment (`key: "@{NAME}"`).
    Config,
    /// Blank line, section header, or unrecognized text.
    Other,
}

/// A single line after the classification phase.
#[derive(Debug, Clone)]
pub struct ScanLine {
    /// Semantic category of the line.
    pub kind: LineKind,
    /// Code part with the comment stripped; replaced in place by the
    /// rendered declaration during the processing passes.
    pub content: String,
    /// One-based line number, used as the secondary ordering key.
    pub line_num: usize,
    /// Trailing comment text, empty if none.
    pub comment: String,
}

/// Classify source text into scan lines, one per input line.
pub fn scan(source: &str) -> Vec<ScanLine> {
    let mut lines = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line_num = idx + 1;
        let stripped = raw.trim();

        if stripped.is_empty() {
            lines.push(ScanLine {
                kind: LineKind::Other,
                content: String::new(),
                line_num,
                comment: String::new(),
            });
            continue;
        }

        let (code, comment) = split_comment(stripped);

        lines.push(ScanLine {
            kind: classify(code),
            content: code.to_string(),
            line_num,
            comment: comment.to_string(),
        });
    }

    lines
}

/// Split a trailing comment off at the first "#", trimming both parts.
fn split_comment(line: &str) -> (&str, &str) {
    match line.split_once('#') {
        Some((code, comment)) => (code.trim(), comment.trim()),
        None => (line, ""),
    }
}

/// Classify the code part of a line.
fn classify(code: &str) -> LineKind {
    if is_reference_line(code) {
        LineKind::Config
    } else if is_key_value_line(code) {
        LineKind::Const
    } else {
        LineKind::Other
    }
}

/// Match the configuration shape: some colon with a nonempty prefix,
/// then optional whitespace, then a double-quoted `@{...}` reference
/// with a nonempty body, ending the line.
fn is_reference_line(code: &str) -> bool {
    code.char_indices().filter(|&(_, c)| c == ':').any(|(i, _)| {
        let rest = code[i + 1..].trim_start();
        i > 0 && rest.starts_with("\"@{") && rest.ends_with("}\"") && rest.len() >= 6
    })
}

/// Match the general key-value shape: some colon that is neither the
/// first nor the last character of the trimmed code.
fn is_key_value_line(code: &str) -> bool {
    code.char_indices()
        .filter(|&(_, c)| c == ':')
        .any(|(i, _)| i > 0 && i + 1 < code.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty_line() {
        let lines = scan("\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Other);
        assert_eq!(lines[0].content, "");
        assert_eq!(lines[0].comment, "");
    }

    #[test]
    fn test_scan_constant_line() {
        let lines = scan("  DEVICE_ID: 12345");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Const);
        assert_eq!(lines[0].content, "DEVICE_ID: 12345");
        assert_eq!(lines[0].line_num, 1);
    }

    #[test]
    fn test_scan_config_line() {
        let lines = scan("  Id: \"@{DEVICE_ID}\"");
        assert_eq!(lines[0].kind, LineKind::Config);
    }

    #[test]
    fn test_scan_config_line_no_space_after_colon() {
        let lines = scan("Id:\"@{DEVICE_ID}\"");
        assert_eq!(lines[0].kind, LineKind::Config);
    }

    #[test]
    fn test_scan_trailing_comment() {
        let lines = scan("DEVICE_ID: 12345 # Device ID");
        assert_eq!(lines[0].kind, LineKind::Const);
        assert_eq!(lines[0].content, "DEVICE_ID: 12345");
        assert_eq!(lines[0].comment, "Device ID");
    }

    #[test]
    fn test_scan_comment_only_line() {
        let lines = scan("# just a comment");
        assert_eq!(lines[0].kind, LineKind::Other);
        assert_eq!(lines[0].content, "");
        assert_eq!(lines[0].comment, "just a comment");
    }

    #[test]
    fn test_scan_comment_splits_at_first_hash() {
        let lines = scan("A: 1 # one # two");
        assert_eq!(lines[0].content, "A: 1");
        assert_eq!(lines[0].comment, "one # two");
    }

    #[test]
    fn test_section_headers_are_other() {
        let lines = scan("constants:\nconfiguration:");
        assert_eq!(lines[0].kind, LineKind::Other);
        assert_eq!(lines[1].kind, LineKind::Other);
    }

    #[test]
    fn test_stray_text_is_other() {
        let lines = scan("stray text\n: leading colon");
        assert_eq!(lines[0].kind, LineKind::Other);
        assert_eq!(lines[1].kind, LineKind::Other);
    }

    #[test]
    fn test_empty_reference_body_is_const() {
        // "@{}" has no body, so the line falls through to the general
        // key-value shape.
        let lines = scan("Id: \"@{}\"");
        assert_eq!(lines[0].kind, LineKind::Const);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let lines = scan("A: 1\nB: 2\nC: 3");
        let nums: Vec<usize> = lines.iter().map(|l| l.line_num).collect();
        assert_eq!(nums, vec![1, 2, 3]);
    }
}

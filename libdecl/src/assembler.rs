//! Phase 3: Assembler
//!
//! Reorders the processed lines and renders the final output text.
//! Constants come first, then configuration assignments, each group in
//! original input order. Comment-only lines attach to the content line
//! that follows them.

use crate::scanner::{LineKind, ScanLine};

/// Sort rank of a line's group. Constants precede configuration.
fn group_rank(kind: LineKind) -> u8 {
    match kind {
        LineKind::Const => 0,
        LineKind::Config => 1,
        LineKind::Other => 2,
    }
}

/// Assemble processed scan lines into the final output text.
///
/// Comment-only lines are buffered and flushed as standalone comment
/// entries in front of the next content line, inheriting its kind and
/// line number so the sort keeps them anchored. A buffered comment with
/// no following content line is dropped.
pub fn assemble(lines: Vec<ScanLine>) -> String {
    let mut anchored: Vec<ScanLine> = Vec::with_capacity(lines.len());
    let mut pending: Vec<String> = Vec::new();

    for line in lines {
        if line.kind == LineKind::Other {
            // Blank lines and headers without a comment vanish here.
            if !line.comment.is_empty() {
                pending.push(line.comment);
            }
            continue;
        }

        for comment in pending.drain(..) {
            anchored.push(ScanLine {
                kind: line.kind,
                content: String::new(),
                line_num: line.line_num,
                comment,
            });
        }
        anchored.push(line);
    }
    // Anything still pending has no anchor and is dropped.

    // Stable sort: constants before configuration, input order within
    // each group. Flushed comments share their anchor's key and stay
    // just ahead of it.
    anchored.sort_by_key(|line| (group_rank(line.kind), line.line_num));

    let mut out: Vec<String> = Vec::with_capacity(anchored.len());
    for line in anchored {
        if !line.comment.is_empty() {
            if line.content.is_empty() {
                out.push(format!("% {}", line.comment));
            } else {
                out.push(format!("{} % {}", line.content, line.comment));
            }
        } else if !line.content.is_empty() {
            out.push(line.content);
        }
    }
    out.join("\n")
}

use super::LogDocument;
use std::fmt::{Display, Formatter};

/// 1-based line reference pointing at supporting evidence in a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRange {
    Single(usize),
    Span(usize, usize),
}

impl Display for LineRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(line) => write!(f, "L{line}"),
            Self::Span(first, last) => write!(f, "L{first}-L{last}"),
        }
    }
}

/// Collect the 1-based lines containing the literal needle. Two or more hits
/// compress to a first-to-last span; a test id can legitimately appear in a
/// header and again in a summary line.
pub fn locate(log: &LogDocument, needle: &str) -> Option<LineRange> {
    let mut first = None;
    let mut last = None;

    for (index, line) in log.raw().lines().enumerate() {
        if line.contains(needle) {
            let number = index + 1;
            if first.is_none() {
                first = Some(number);
            }
            last = Some(number);
        }
    }

    match (first, last) {
        (Some(first), Some(last)) if first == last => Some(LineRange::Single(first)),
        (Some(first), Some(last)) => Some(LineRange::Span(first, last)),
        _ => None,
    }
}

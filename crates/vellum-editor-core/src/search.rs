//! Forward/backward substring search with wraparound.
//!
//! Offsets are char offsets. Matches may overlap: searching `aa` in `aaa`
//! finds both 0 and 1, the way the text widget's own find behaves.

use crate::host::EditorHost;
use crate::text::{byte_to_char, char_to_byte};
use crate::types::Selection;

/// Which way to step through matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Next,
    Prev,
}

/// Lowest match at or after `from + 1`, wrapping to the first match.
///
/// Returns `None` for an empty query or when `query` never occurs.
pub fn search_next(source: &str, query: &str, from: usize) -> Option<usize> {
    if query.is_empty() {
        return None;
    }

    let start = char_to_byte(source, from.saturating_add(1));
    let found = source[start..]
        .find(query)
        .map(|pos| start + pos)
        .or_else(|| source.find(query))?;

    Some(byte_to_char(source, found))
}

/// Highest match starting strictly before `from`, wrapping to the last match.
///
/// Returns `None` for an empty query or when `query` never occurs.
pub fn search_prev(source: &str, query: &str, from: usize) -> Option<usize> {
    if query.is_empty() {
        return None;
    }

    let limit = char_to_byte(source, from);
    let found = source[..limit]
        .char_indices()
        .rev()
        .map(|(byte, _)| byte)
        .find(|&byte| source[byte..].starts_with(query))
        .or_else(|| source.rfind(query))?;

    Some(byte_to_char(source, found))
}

/// Run a search from the host's cursor and select the match.
///
/// On a hit the selection covers the match and focus returns to the text
/// widget. A miss (or empty query) leaves the host untouched.
pub fn apply_search<H: EditorHost + ?Sized>(
    host: &mut H,
    query: &str,
    direction: SearchDirection,
) -> Option<Selection> {
    let source = host.source();
    let from = host.cursor();
    let found = match direction {
        SearchDirection::Next => search_next(&source, query, from),
        SearchDirection::Prev => search_prev(&source, query, from),
    };

    let Some(offset) = found else {
        tracing::debug!(query, ?direction, "search miss");
        return None;
    };

    let selection = Selection::new(offset, offset + query.chars().count());
    host.set_selection(selection);
    host.focus();
    Some(selection)
}

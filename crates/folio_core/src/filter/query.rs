//! `tags` query parameter codec.
//!
//! # Responsibility
//! - Read the initial tag selection from a page query string.
//! - Write a selection back while preserving unrelated parameters.
//!
//! # Invariants
//! - Decoding never fails: missing, blank or garbled values mean "no filter".
//! - `decode_tags(&encode_query(q, s))` equals `s` up to ordering.
//! - The parameter is removed entirely when the selection is empty.

use crate::filter::tags::TagSelection;
use std::borrow::Cow;

/// Query parameter holding the comma-separated selection.
pub const TAGS_PARAM: &str = "tags";
/// Separator between tags inside the parameter value.
pub const TAG_SEPARATOR: char = ',';

/// Parses the tag selection from `query` (leading `?` optional).
///
/// Only the first `tags` parameter is read. Values that did not decode to
/// valid UTF-8 are dropped.
pub fn decode_tags(query: &str) -> TagSelection {
    let raw = strip_question_mark(query);
    let Some(value) = form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == TAGS_PARAM)
        .map(|(_, value)| value)
    else {
        return TagSelection::new();
    };

    TagSelection::from_tags(
        value
            .split(TAG_SEPARATOR)
            .filter(|tag| !tag.contains(char::REPLACEMENT_CHARACTER)),
    )
}

/// Serializes `selection` into `existing` and returns the new query string.
///
/// Behaves like `URLSearchParams.set`/`delete`: the first `tags` parameter is
/// replaced in place, later duplicates are dropped, and the parameter is
/// appended when missing. Returns `""` when no parameters remain, otherwise a
/// `?`-prefixed string.
pub fn encode_query(existing: &str, selection: &TagSelection) -> String {
    let raw = strip_question_mark(existing);
    let joined = join_tags(selection);
    let mut pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = Vec::new();
    let mut placed = false;

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if key != TAGS_PARAM {
            pairs.push((key, value));
            continue;
        }
        if !placed {
            placed = true;
            if let Some(joined) = joined.as_deref() {
                pairs.push((key, Cow::Owned(joined.to_string())));
            }
        }
    }
    if !placed {
        if let Some(joined) = joined {
            pairs.push((Cow::Borrowed(TAGS_PARAM), Cow::Owned(joined)));
        }
    }

    if pairs.is_empty() {
        return String::new();
    }
    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn join_tags(selection: &TagSelection) -> Option<String> {
    if selection.is_empty() {
        None
    } else {
        Some(selection.as_slice().join(","))
    }
}

fn strip_question_mark(query: &str) -> &str {
    let trimmed = query.trim();
    trimmed.strip_prefix('?').unwrap_or(trimmed)
}

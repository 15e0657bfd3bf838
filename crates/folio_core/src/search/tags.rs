//! Tag search for the compact multi-select dropdown.
//!
//! # Invariants
//! - Matching is a case-insensitive substring test.
//! - A blank query returns every tag in input order.

/// Search result with the dropdown's no-match message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSearchResult<'a> {
    pub matches: Vec<&'a str>,
    /// Set only when a non-blank query matched nothing.
    pub empty_message: Option<String>,
}

/// Filters `tags` by `query`.
pub fn search_tags<'a>(tags: &'a [String], query: &str) -> TagSearchResult<'a> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return TagSearchResult {
            matches: tags.iter().map(String::as_str).collect(),
            empty_message: None,
        };
    }

    let matches = tags
        .iter()
        .filter(|tag| tag.to_lowercase().contains(needle.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>();
    let empty_message = if matches.is_empty() {
        Some(format!("No tags found matching \"{}\"", query.trim()))
    } else {
        None
    };

    TagSearchResult {
        matches,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::search_tags;

    fn tags() -> Vec<String> {
        ["Next.js", "Python", "React", "Three.js"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn blank_query_returns_all_tags() {
        let tags = tags();
        let result = search_tags(&tags, "   ");
        assert_eq!(result.matches.len(), 4);
        assert!(result.empty_message.is_none());
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let tags = tags();
        let result = search_tags(&tags, "JS");
        assert_eq!(result.matches, vec!["Next.js", "Three.js"]);
    }

    #[test]
    fn no_match_sets_message() {
        let tags = tags();
        let result = search_tags(&tags, " rust ");
        assert!(result.matches.is_empty());
        assert_eq!(
            result.empty_message.as_deref(),
            Some("No tags found matching \"rust\"")
        );
    }
}

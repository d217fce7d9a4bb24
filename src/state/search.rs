//! Free-text search filter.
//!
//! Case-insensitive substring matching over a fixed set of comment fields.
//! A blank term (empty or whitespace only) matches everything.

use crate::model::Comment;

// ===== SearchField =====

/// Fields scanned by the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Comment title.
    Name,
    /// Author email.
    Email,
    /// Comment text.
    Body,
}

impl SearchField {
    /// All searchable fields.
    pub const ALL: [SearchField; 3] = [SearchField::Name, SearchField::Email, SearchField::Body];

    /// Borrow this field's text from a comment.
    pub fn value(self, comment: &Comment) -> &str {
        match self {
            SearchField::Name => &comment.name,
            SearchField::Email => &comment.email,
            SearchField::Body => &comment.body,
        }
    }
}

// ===== Matching =====

/// Whether `term` is blank, i.e. the filter is a no-op.
pub fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

/// Check a single comment against an already-lowercased needle.
pub fn matches_lowercase(comment: &Comment, needle_lower: &str) -> bool {
    SearchField::ALL
        .iter()
        .any(|field| field.value(comment).to_lowercase().contains(needle_lower))
}

/// Check a single comment against a raw search term.
pub fn matches(comment: &Comment, term: &str) -> bool {
    is_blank(term) || matches_lowercase(comment, &term.to_lowercase())
}

/// Filter comments by search term, preserving source order.
///
/// The term itself is not trimmed for matching: only the blank check looks
/// past surrounding whitespace.
pub fn search_comments<'a>(comments: &'a [Comment], term: &str) -> Vec<&'a Comment> {
    if is_blank(term) {
        return comments.iter().collect();
    }

    let needle = term.to_lowercase();
    comments
        .iter()
        .filter(|comment| matches_lowercase(comment, &needle))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;

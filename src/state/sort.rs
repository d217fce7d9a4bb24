//! Sort engine.
//!
//! Stable ordering of comments by one field. String fields use Unicode
//! collation with the CLDR root order, the same order a browser's
//! `localeCompare` produces; numeric fields compare by value.

use crate::model::{Comment, SortField, SortOrder, SortState};
use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

/// Collator for display strings.
///
/// CLDR root table with non-ignorable punctuation, so `_ . @` and digits
/// sort in front of letters instead of being skipped. No byte tiebreak:
/// canonically equivalent strings compare equal and keep their order.
pub fn locale_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, false)
}

/// Compare two strings in locale order.
///
/// Builds a collator per call; use [`locale_collator`] when comparing many.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    locale_collator().collate(a, b)
}

/// Ascending comparison of two comments on `field`.
pub fn compare_by_field(
    collator: &mut Collator,
    a: &Comment,
    b: &Comment,
    field: SortField,
) -> Ordering {
    match field {
        SortField::PostId => a.post_id.cmp(&b.post_id),
        SortField::Name => collator.collate(a.name.as_str(), b.name.as_str()),
        SortField::Email => collator.collate(a.email.as_str(), b.email.as_str()),
    }
}

/// Order comments according to `sort`.
///
/// `Unsorted` returns the input untouched. Sorting is stable in both
/// directions: equal keys keep their incoming relative order.
pub fn sort_comments(mut comments: Vec<&Comment>, sort: SortState) -> Vec<&Comment> {
    let SortState::Sorted { field, order } = sort else {
        return comments;
    };

    let mut collator = locale_collator();
    comments.sort_by(|a, b| {
        let ordering = compare_by_field(&mut collator, a, b, field);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    comments
}

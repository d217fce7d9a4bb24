//! Sort configuration types.
//!
//! `SortState` is a sum type: either nothing is sorted, or exactly one field
//! is sorted in a concrete order. The "field without direction" state cannot
//! be represented.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ===== SortField =====

/// The fixed set of fields a comment list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Numeric post identifier.
    PostId,
    /// Comment title (string).
    Name,
    /// Author email (string).
    Email,
}

impl SortField {
    /// All sortable fields in column order.
    pub const ALL: [SortField; 3] = [SortField::PostId, SortField::Name, SortField::Email];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortField::PostId => "Post ID",
            SortField::Name => "Name",
            SortField::Email => "Email",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== SortOrder =====

/// Concrete ordering of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest key first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest key first.
    #[serde(rename = "desc")]
    Descending,
}

// ===== SortDirection =====

/// Three-state direction used by the header click cycle.
///
/// `None → Ascending → Descending → None → ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// No sort on this field.
    #[default]
    None,
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// Advance one step in the cycle.
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// The concrete order, if any.
    pub fn order(self) -> Option<SortOrder> {
        match self {
            SortDirection::None => None,
            SortDirection::Ascending => Some(SortOrder::Ascending),
            SortDirection::Descending => Some(SortOrder::Descending),
        }
    }
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Ascending => SortDirection::Ascending,
            SortOrder::Descending => SortDirection::Descending,
        }
    }
}

// ===== SortState =====

/// Active sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "SortStateRecord", into = "SortStateRecord")]
pub enum SortState {
    /// Records keep their source order.
    #[default]
    Unsorted,
    /// Records ordered by `field` in `order`.
    Sorted {
        /// Column the records are ordered by.
        field: SortField,
        /// Direction of the ordering.
        order: SortOrder,
    },
}

impl SortState {
    /// Sorted ascending by `field`.
    pub fn ascending(field: SortField) -> Self {
        SortState::Sorted {
            field,
            order: SortOrder::Ascending,
        }
    }

    /// Sorted descending by `field`.
    pub fn descending(field: SortField) -> Self {
        SortState::Sorted {
            field,
            order: SortOrder::Descending,
        }
    }

    /// Build from separate field/direction parts.
    ///
    /// Returns `None` when exactly one of the two is absent.
    pub fn from_parts(field: Option<SortField>, direction: SortDirection) -> Option<Self> {
        match (field, direction.order()) {
            (None, None) => Some(SortState::Unsorted),
            (Some(field), Some(order)) => Some(SortState::Sorted { field, order }),
            _ => None,
        }
    }

    /// The active field, if any.
    pub fn field(self) -> Option<SortField> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { field, .. } => Some(field),
        }
    }

    /// The three-state direction.
    pub fn direction(self) -> SortDirection {
        match self {
            SortState::Unsorted => SortDirection::None,
            SortState::Sorted { order, .. } => order.into(),
        }
    }

    /// Direction shown for a specific column header.
    pub fn direction_of(self, field: SortField) -> SortDirection {
        if self.field() == Some(field) {
            self.direction()
        } else {
            SortDirection::None
        }
    }

    /// State after the user selects `field`.
    ///
    /// Selecting the active field advances its direction one step; selecting
    /// any other field starts it at ascending. When the cycle reaches `None`
    /// the field is cleared.
    pub fn toggled(self, field: SortField) -> Self {
        let next = if self.field() == Some(field) {
            self.direction().next()
        } else {
            SortDirection::Ascending
        };

        match next.order() {
            Some(order) => SortState::Sorted { field, order },
            None => SortState::Unsorted,
        }
    }
}

// ===== Wire representation =====

/// `{ "field": ..., "direction": ... }` with nulls for the unsorted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SortStateRecord {
    field: Option<SortField>,
    direction: Option<SortOrder>,
}

/// Persisted sort state has a field without a direction or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sort field and direction must both be set or both be null")]
pub struct InconsistentSortState;

impl TryFrom<SortStateRecord> for SortState {
    type Error = InconsistentSortState;

    fn try_from(record: SortStateRecord) -> Result<Self, Self::Error> {
        let direction = record.direction.map(SortDirection::from).unwrap_or_default();
        SortState::from_parts(record.field, direction).ok_or(InconsistentSortState)
    }
}

impl From<SortState> for SortStateRecord {
    fn from(state: SortState) -> Self {
        match state {
            SortState::Unsorted => SortStateRecord {
                field: None,
                direction: None,
            },
            SortState::Sorted { field, order } => SortStateRecord {
                field: Some(field),
                direction: Some(order),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_cycles_none_asc_desc_none() {
        let mut dir = SortDirection::None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            dir = dir.next();
            seen.push(dir);
        }
        assert_eq!(
            seen,
            vec![
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::None,
                SortDirection::Ascending,
            ]
        );
    }

    #[test]
    fn repeated_toggle_on_same_field_walks_the_cycle() {
        let s0 = SortState::Unsorted;
        let s1 = s0.toggled(SortField::Name);
        let s2 = s1.toggled(SortField::Name);
        let s3 = s2.toggled(SortField::Name);
        let s4 = s3.toggled(SortField::Name);

        assert_eq!(s1, SortState::ascending(SortField::Name));
        assert_eq!(s2, SortState::descending(SortField::Name));
        assert_eq!(s3, SortState::Unsorted);
        assert_eq!(s4, SortState::ascending(SortField::Name));
    }

    #[test]
    fn toggling_other_field_restarts_at_ascending() {
        let desc_name = SortState::descending(SortField::Name);
        assert_eq!(
            desc_name.toggled(SortField::Email),
            SortState::ascending(SortField::Email)
        );

        let asc_name = SortState::ascending(SortField::Name);
        assert_eq!(
            asc_name.toggled(SortField::PostId),
            SortState::ascending(SortField::PostId)
        );
    }

    #[test]
    fn cycle_back_to_none_clears_field() {
        let state = SortState::descending(SortField::PostId).toggled(SortField::PostId);
        assert_eq!(state.field(), None);
        assert_eq!(state.direction(), SortDirection::None);
    }

    #[test]
    fn direction_of_reports_none_for_inactive_columns() {
        let state = SortState::ascending(SortField::Email);
        assert_eq!(state.direction_of(SortField::Email), SortDirection::Ascending);
        assert_eq!(state.direction_of(SortField::Name), SortDirection::None);
    }

    #[test]
    fn from_parts_rejects_half_set_state() {
        assert_eq!(
            SortState::from_parts(Some(SortField::Name), SortDirection::None),
            None
        );
        assert_eq!(
            SortState::from_parts(None, SortDirection::Descending),
            None
        );
        assert_eq!(
            SortState::from_parts(None, SortDirection::None),
            Some(SortState::Unsorted)
        );
    }

    #[test]
    fn serializes_with_original_wire_names() {
        let json = serde_json::to_string(&SortState::descending(SortField::PostId)).unwrap();
        assert_eq!(json, r#"{"field":"postId","direction":"desc"}"#);

        let json = serde_json::to_string(&SortState::Unsorted).unwrap();
        assert_eq!(json, r#"{"field":null,"direction":null}"#);
    }

    #[test]
    fn deserialize_rejects_field_without_direction() {
        let result = serde_json::from_str::<SortState>(r#"{"field":"name","direction":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_unknown_field_name() {
        let result = serde_json::from_str::<SortState>(r#"{"field":"body","direction":"asc"}"#);
        assert!(result.is_err());
    }
}

//! Search → sort → paginate pipeline.
//!
//! A pure function of (records, filter state). [`PipelineCache`] only avoids
//! recomputing when neither input changed between frames.

use crate::model::Comment;
use crate::state::filter_state::FilterState;
use crate::state::pagination::{paginate, PaginationInfo};
use crate::state::search::search_comments;
use crate::state::sort::sort_comments;

/// Borrowed output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPage<'a> {
    /// Records on the visible page, in display order.
    pub rows: Vec<&'a Comment>,
    /// Position of the page within the filtered, sorted collection.
    pub info: PaginationInfo,
}

/// Run the full pipeline.
pub fn process<'a>(records: &'a [Comment], state: &FilterState) -> ProcessedPage<'a> {
    let found = search_comments(records, &state.search);
    let sorted = sort_comments(found, state.sort_state);
    let page = paginate(&sorted, state.current_page, state.page_size);

    ProcessedPage {
        rows: page.items.to_vec(),
        info: page.info,
    }
}

/// Owned pipeline output, detached from the record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedView {
    /// Records on the visible page, in display order.
    pub rows: Vec<Comment>,
    /// Position of the page within the filtered, sorted collection.
    pub info: PaginationInfo,
}

impl From<ProcessedPage<'_>> for ProcessedView {
    fn from(page: ProcessedPage<'_>) -> Self {
        Self {
            rows: page.rows.into_iter().cloned().collect(),
            info: page.info,
        }
    }
}

/// Memoises the last [`ProcessedView`].
///
/// Keyed on the data generation (bumped whenever the record collection is
/// replaced) and the full filter state.
#[derive(Debug, Default)]
pub struct PipelineCache {
    entry: Option<(u64, FilterState, ProcessedView)>,
}

impl PipelineCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached view for these inputs, recomputing on any change.
    pub fn get_or_compute(
        &mut self,
        generation: u64,
        records: &[Comment],
        state: &FilterState,
    ) -> &ProcessedView {
        let fresh = matches!(
            &self.entry,
            Some((cached_generation, cached_state, _))
                if *cached_generation == generation && cached_state == state
        );

        if !fresh {
            self.entry = None;
        }

        let (_, _, view) = self.entry.get_or_insert_with(|| {
            (
                generation,
                state.clone(),
                ProcessedView::from(process(records, state)),
            )
        });
        view
    }

    /// Drop the cached view.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

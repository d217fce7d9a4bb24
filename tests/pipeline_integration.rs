//! Worked examples for the search → sort → paginate pipeline, exercised
//! through the public API the way the dashboard drives it.

use commentdash::model::{Comment, PageSize, SortField, SortState};
use commentdash::state::{
    page_numbers, paginate, process, FilterAction, FilterState, FilterStore, PageLink,
    PipelineCache,
};
use commentdash::storage::MemoryStore;

fn fixture(n: u64) -> Vec<Comment> {
    (1..=n)
        .map(|id| {
            Comment::new(
                (id - 1) / 5 + 1,
                id,
                format!("title {id}"),
                format!("author{id}@example.org"),
                if id % 3 == 0 { "Lorem ipsum" } else { "dolor sit amet" },
            )
        })
        .collect()
}

fn ids(rows: &[&Comment]) -> Vec<u64> {
    rows.iter().map(|c| c.id).collect()
}

#[test]
fn second_page_of_twenty_five() {
    let items: Vec<u64> = (1..=25).collect();
    let page = paginate(&items, 2, PageSize::Ten);

    assert_eq!(page.items, &items[10..20]);
    assert_eq!(page.info.total_pages, 3);
    assert_eq!(page.info.start_index, 11);
    assert_eq!(page.info.end_index, 20);
    assert_eq!(page.info.summary(), "11 to 20 of 25 items");
}

#[test]
fn empty_collection_has_no_pages() {
    let items: Vec<u64> = Vec::new();
    for current in [1, 2, 7] {
        let page = paginate(&items, current, PageSize::Ten);
        assert!(page.items.is_empty());
        assert_eq!(page.info.total_items, 0);
        assert_eq!(page.info.total_pages, 0);
    }
    assert!(page_numbers(1, 0).is_empty());
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let data = fixture(25);
    let state = FilterState {
        current_page: 9,
        ..FilterState::default()
    };

    let page = process(&data, &state);

    assert!(page.rows.is_empty());
    assert_eq!(page.info.start_index, 81);
    assert_eq!(page.info.end_index, 25);
    assert!(page.info.start_index > page.info.end_index);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let data = fixture(30);

    let by_body = process(
        &data,
        &FilterState {
            search: "LOREM".to_string(),
            ..FilterState::default()
        },
    );
    assert_eq!(by_body.info.total_items, 10);

    let by_email = process(
        &data,
        &FilterState {
            search: "Author7@".to_string(),
            ..FilterState::default()
        },
    );
    assert_eq!(ids(&by_email.rows), vec![7]);
}

#[test]
fn sort_descending_by_post_id_keeps_ties_in_source_order() {
    let data = fixture(12);
    let state = FilterState {
        sort_state: SortState::descending(SortField::PostId),
        ..FilterState::default()
    };

    let page = process(&data, &state);

    // post 3 holds ids 11-12, post 2 holds 6-10; within a post, source order
    assert_eq!(ids(&page.rows), vec![11, 12, 6, 7, 8, 9, 10, 1, 2, 3]);
}

#[test]
fn dashboard_flow_through_the_store() {
    let data = fixture(120);
    let mut store = FilterStore::load(MemoryStore::new(), FilterState::default());

    store.dispatch(FilterAction::SetPage(4));
    assert_eq!(process(&data, store.state()).info.summary(), "31 to 40 of 120 items");

    store.dispatch(FilterAction::SetPageSize(PageSize::Fifty));
    let page = process(&data, store.state());
    assert_eq!(page.info.current_page, 1);
    assert_eq!(page.info.total_pages, 3);

    store.dispatch(FilterAction::Sort(SortField::Name));
    store.dispatch(FilterAction::Sort(SortField::Name));
    assert_eq!(
        store.state().sort_state,
        SortState::descending(SortField::Name)
    );

    store.dispatch(FilterAction::Search("ipsum".to_string()));
    let page = process(&data, store.state());
    assert_eq!(page.info.total_items, 40);
    assert_eq!(page.rows.len(), 40);
    assert_eq!(page.info.total_pages, 1);
}

#[test]
fn page_strip_for_many_pages() {
    assert_eq!(
        page_numbers(1, 12),
        vec![
            PageLink::Page(1),
            PageLink::Page(2),
            PageLink::Page(3),
            PageLink::Page(4),
            PageLink::Ellipsis,
            PageLink::Page(12),
        ]
    );
    assert_eq!(
        page_numbers(6, 12),
        vec![
            PageLink::Page(1),
            PageLink::Ellipsis,
            PageLink::Page(5),
            PageLink::Page(6),
            PageLink::Page(7),
            PageLink::Ellipsis,
            PageLink::Page(12),
        ]
    );
}

#[test]
fn cache_recomputes_only_on_input_change() {
    let data = fixture(40);
    let mut cache = PipelineCache::new();
    let state = FilterState::default();

    let first = cache.get_or_compute(1, &data, &state).clone();
    assert_eq!(cache.get_or_compute(1, &data, &state), &first);

    let next_page = FilterState {
        current_page: 2,
        ..state
    };
    let second = cache.get_or_compute(1, &data, &next_page);
    assert_eq!(second.rows.first().map(|c| c.id), Some(11));

    let fewer = fixture(5);
    let replaced = cache.get_or_compute(2, &fewer, &next_page);
    assert!(replaced.rows.is_empty());
    assert_eq!(replaced.info.total_items, 5);
}

//! Tests for the paginator and page-number window.

use super::*;
use PageLink::{Ellipsis, Page as P};

fn numbers(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

// ===== paginate =====

#[test]
fn second_page_of_25_items() {
    let items = numbers(25);
    let page = paginate(&items, 2, PageSize::Ten);

    assert_eq!(page.items, &items[10..20]);
    assert_eq!(page.info.total_pages, 3);
    assert_eq!(page.info.total_items, 25);
    assert_eq!(page.info.start_index, 11);
    assert_eq!(page.info.end_index, 20);
}

#[test]
fn last_partial_page_clamps_end() {
    let items = numbers(25);
    let page = paginate(&items, 3, PageSize::Ten);

    assert_eq!(page.items, &[21, 22, 23, 24, 25]);
    assert_eq!(page.info.start_index, 21);
    assert_eq!(page.info.end_index, 25);
    assert_eq!(page.info.visible_len(), 5);
}

#[test]
fn empty_collection_has_zero_pages() {
    let items: Vec<usize> = Vec::new();
    for current in [1, 2, 10] {
        let page = paginate(&items, current, PageSize::Fifty);
        assert!(page.items.is_empty());
        assert_eq!(page.info.total_items, 0);
        assert_eq!(page.info.total_pages, 0);
    }
}

#[test]
fn out_of_range_page_is_empty_not_clamped() {
    let items = numbers(25);
    let page = paginate(&items, 4, PageSize::Ten);

    assert!(page.items.is_empty());
    assert_eq!(page.info.current_page, 4);
    assert_eq!(page.info.start_index, 31);
    assert_eq!(page.info.end_index, 25);
    assert!(page.info.start_index > page.info.end_index);
    assert_eq!(page.info.visible_len(), 0);
}

#[test]
fn page_zero_is_before_the_first_page() {
    let items = numbers(25);
    let page = paginate(&items, 0, PageSize::Ten);

    assert!(page.items.is_empty());
    assert_eq!(page.info.current_page, 0);
    assert_eq!(page.info.total_pages, 3);
    assert_eq!(page.info.summary(), "1 to 0 of 25 items");
    assert!(!page.info.has_previous());
    assert_eq!(page.info.visible_len(), 0);
}

#[test]
fn exact_multiple_has_no_trailing_page() {
    let items = numbers(100);
    let page = paginate(&items, 1, PageSize::Fifty);
    assert_eq!(page.info.total_pages, 2);
    assert_eq!(page.items.len(), 50);
}

#[test]
fn page_size_larger_than_collection() {
    let items = numbers(7);
    let page = paginate(&items, 1, PageSize::Hundred);
    assert_eq!(page.items.len(), 7);
    assert_eq!(page.info.total_pages, 1);
    assert_eq!(page.info.summary(), "1 to 7 of 7 items");
}

#[test]
fn huge_page_number_does_not_overflow() {
    let items = numbers(3);
    let page = paginate(&items, usize::MAX, PageSize::Hundred);
    assert!(page.items.is_empty());
}

#[test]
fn has_previous_and_next() {
    let items = numbers(25);
    let first = paginate(&items, 1, PageSize::Ten).info;
    let middle = paginate(&items, 2, PageSize::Ten).info;
    let last = paginate(&items, 3, PageSize::Ten).info;

    assert!(!first.has_previous() && first.has_next());
    assert!(middle.has_previous() && middle.has_next());
    assert!(last.has_previous() && !last.has_next());
}

// ===== page_numbers =====

#[test]
fn few_pages_are_listed_directly() {
    assert_eq!(page_numbers(1, 0), Vec::<PageLink>::new());
    assert_eq!(page_numbers(1, 1), vec![P(1)]);
    assert_eq!(page_numbers(3, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
}

#[test]
fn window_near_start() {
    assert_eq!(
        page_numbers(1, 50),
        vec![P(1), P(2), P(3), P(4), Ellipsis, P(50)]
    );
    assert_eq!(
        page_numbers(3, 50),
        vec![P(1), P(2), P(3), P(4), Ellipsis, P(50)]
    );
}

#[test]
fn window_near_end() {
    assert_eq!(
        page_numbers(48, 50),
        vec![P(1), Ellipsis, P(47), P(48), P(49), P(50)]
    );
    assert_eq!(
        page_numbers(50, 50),
        vec![P(1), Ellipsis, P(47), P(48), P(49), P(50)]
    );
}

#[test]
fn window_in_the_middle() {
    assert_eq!(
        page_numbers(10, 50),
        vec![P(1), Ellipsis, P(9), P(10), P(11), Ellipsis, P(50)]
    );
}

#[test]
fn window_with_six_pages() {
    assert_eq!(
        page_numbers(4, 6),
        vec![P(1), Ellipsis, P(3), P(4), P(5), P(6)]
    );
}

#[test]
fn window_always_anchors_first_and_last() {
    for total in 6..30 {
        for current in 1..=total {
            let links = page_numbers(current, total);
            assert_eq!(links.first(), Some(&P(1)));
            assert_eq!(links.last(), Some(&P(total)));
            assert!(links.contains(&P(current)), "current {current}/{total} missing");
        }
    }
}

//! Pagination footer: item range, page links and page size.

use crate::state::{page_numbers, PageLink, PaginationInfo};
use crate::view::styles::DashboardStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the footer line for `info`.
///
/// `‹`/`›` are dimmed when there is no previous/next page. The current page
/// is bracketed so it stays visible without colour.
pub fn footer_line(info: &PaginationInfo, styles: &DashboardStyles) -> Line<'static> {
    let mut spans = vec![
        Span::raw(format!(" {}", info.summary())),
        Span::raw("   "),
    ];

    let prev_style = if info.has_previous() {
        styles.page_link
    } else {
        styles.disabled
    };
    spans.push(Span::styled("‹", prev_style));

    for link in page_numbers(info.current_page, info.total_pages) {
        spans.push(Span::raw(" "));
        match link {
            PageLink::Page(n) if n == info.current_page => {
                spans.push(Span::styled(format!("[{n}]"), styles.current_page));
            }
            PageLink::Page(n) => spans.push(Span::styled(n.to_string(), styles.page_link)),
            PageLink::Ellipsis => spans.push(Span::styled("…", styles.muted)),
        }
    }

    let next_style = if info.has_next() {
        styles.page_link
    } else {
        styles.disabled
    };
    spans.push(Span::raw(" "));
    spans.push(Span::styled("›", next_style));

    spans.push(Span::raw("   "));
    spans.push(Span::styled(format!("{} / Page", info.page_size), styles.muted));

    Line::from(spans)
}

/// Draw the footer into `area`.
pub fn render_footer(frame: &mut Frame, area: Rect, info: &PaginationInfo, styles: &DashboardStyles) {
    frame.render_widget(Paragraph::new(footer_line(info, styles)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageSize;
    use crate::state::paginate;
    use crate::view::styles::ColorConfig;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn info_for(total: usize, page: usize) -> PaginationInfo {
        let items: Vec<usize> = (0..total).collect();
        paginate(&items, page, PageSize::Ten).info
    }

    fn styles() -> DashboardStyles {
        DashboardStyles::with_color_config(ColorConfig::new(false))
    }

    #[test]
    fn footer_for_middle_page() {
        let line = footer_line(&info_for(25, 2), &styles());
        assert_eq!(
            text_of(&line),
            " 11 to 20 of 25 items   ‹ 1 [2] 3 ›   10 / Page"
        );
    }

    #[test]
    fn footer_windows_many_pages() {
        let line = footer_line(&info_for(200, 10), &styles());
        assert_eq!(
            text_of(&line),
            " 91 to 100 of 200 items   ‹ 1 … 9 [10] 11 … 20 ›   10 / Page"
        );
    }

    #[test]
    fn footer_for_empty_collection() {
        let line = footer_line(&info_for(0, 1), &styles());
        assert_eq!(text_of(&line), " 1 to 0 of 0 items   ‹ ›   10 / Page");
    }

    #[test]
    fn prev_disabled_on_first_page() {
        let styles = styles();
        let line = footer_line(&info_for(25, 1), &styles);
        let prev = line.spans.iter().find(|s| s.content == "‹").unwrap();
        let next = line.spans.iter().find(|s| s.content == "›").unwrap();
        assert_eq!(prev.style, styles.disabled);
        assert_eq!(next.style, styles.page_link);
    }
}

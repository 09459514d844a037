//! HTML parsing for list and detail pages
//!
//! The target site keeps its listing under a fixed container and its
//! article text inside a known table, so extraction is a handful of fixed
//! structural paths:
//!
//! - list items: `div#part_02 > div.blk01 > div > ul > li`, each holding an
//!   anchor with the link reference plus `span.b1` (numeric id), `span.b2`
//!   (title) and `span.b4` (date)
//! - article content: the text of every `span` under `table#myTable`'s
//!   `td > p` cells, in document order

use scraper::{ElementRef, Html, Selector};

/// One parsed list-page item, scalar fields trimmed of surrounding
/// whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Relative link reference to the detail page
    pub link: String,

    /// Numeric article id shown in the listing
    pub article_id: String,

    /// Entry title; may be empty when the site omits the span
    pub title: String,

    /// Publication date, free-form text
    pub datetime: String,
}

/// Extracts all list items from an index page body
///
/// Items missing individual fields still yield a `ListItem` with those
/// fields empty; an index page with no items at all returns an empty vec
/// and the caller decides whether that is a structure failure.
pub fn parse_list_items(html: &str) -> Vec<ListItem> {
    let document = Html::parse_document(html);

    let item_selector = match Selector::parse("div#part_02 > div.blk01 > div > ul > li") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&item_selector)
        .map(|item| ListItem {
            link: first_attr(&item, "a", "href"),
            article_id: first_text(&item, "a > span.b1"),
            title: first_text(&item, "a > span.b2"),
            datetime: first_text(&item, "a > span.b4"),
        })
        .collect()
}

/// Extracts the ordered sequence of text-bearing content nodes from a
/// detail page body
///
/// Nodes that contain only whitespace are dropped. An article with no
/// content nodes yields an empty vec, which downstream treats as "no
/// match" rather than a structural failure.
pub fn parse_content_nodes(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // html5ever inserts tbody, so tr is matched by descent rather than as
    // a direct child of the table
    let content_selector = match Selector::parse("table#myTable tr > td > p > span") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&content_selector)
        .map(|span| span.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Joined text of the first element matching `selector` under `scope`,
/// trimmed; empty when nothing matches
fn first_text(scope: &ElementRef, selector: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };

    scope
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed attribute value of the first element matching `selector` under
/// `scope`; empty when nothing matches
fn first_attr(scope: &ElementRef, selector: &str, attr: &str) -> String {
    let Ok(selector) = Selector::parse(selector) else {
        return String::new();
    };

    scope
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

//! Pulls quotes out of the HTML that `action=parse&prop=text` renders for a section.
//!
//! Wikiquote pages put each quote in a top level list item, with the source (if any)
//! as a nested list item underneath it. Table of contents entries are also list items,
//! they get filtered out by their `toc*` class.

use lazy_regex::regex_is_match;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::definitions::Quote;

// Fixed selectors, so parsing them can only fail on a typo here.
static QUOTE_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul > li").expect("valid quote selector"));
static NESTED_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul > li > ul > li").expect("valid nested selector"));
static SOURCE_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid source selector"));

/// Anything without a class is fine, otherwise the class must not mention `toc`.
fn is_quote_item(element: &ElementRef) -> bool {
    match element.value().attr("class") {
        Some(class) => !regex_is_match!("toc", class),
        None => true,
    }
}

fn quote_from(element: ElementRef) -> Quote {
    let source = element
        .select(&SOURCE_ITEMS)
        .next()
        .map(|li| li.text().collect::<String>())
        .filter(|text| !text.is_empty());

    Quote {
        quote: element.text().collect(),
        source,
    }
}

/// Get every quote inside a chunk of section HTML, in document order.
///
/// # Arguments
/// - html -> The rendered section, as found in `parse.text["*"]`.
///
/// # Returns
/// - Vec<Quote> -> One entry per top level list item. Empty if there are no lists.
pub fn extract_quotes(html: &str) -> Vec<Quote> {
    let fragment = Html::parse_fragment(html);
    let quotes = fragment
        .select(&QUOTE_ITEMS)
        .filter(|li| !NESTED_ITEMS.matches(li))
        .filter(is_quote_item)
        .map(quote_from)
        .collect::<Vec<Quote>>();

    log::trace!("extracted {} quotes", quotes.len());
    quotes
}

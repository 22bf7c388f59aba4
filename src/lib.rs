//! Search Wikiquote and pull quotes out of its pages.
//!
//! Every call takes an [`ApiClient`] (normally a [`WikiquoteClient`]) and a set of
//! [`RequestOptions`]; there's no global state and nothing is cached.

pub mod definitions;
pub mod errors;
pub mod extract;
pub mod mediawiki_api;
pub mod quotes;
pub mod reqwest_client;

pub use definitions::{PageRef, PageSections, Quote, SearchResult, Section, SectionIndex};
pub use errors::{Result, WikiquoteError};
pub use extract::extract_quotes;
pub use mediawiki_api::{
    get_page_sections, get_page_sections_by_id, search, search_by_title, search_people,
};
pub use quotes::{
    get_random_quote, get_random_quote_by_id, get_random_quote_by_id_with,
    get_random_quote_with, get_section_content, get_section_content_by_id, list, list_by_id,
    pick_quote,
};
pub use reqwest_client::{
    ApiClient, RequestOptions, RequestOptionsBuilder, WIKIQUOTE_API, WikiquoteClient,
};

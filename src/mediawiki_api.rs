use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;

use crate::{
    definitions::{PageRef, PageSections, ParseResponse, SearchResponse, SearchResult},
    errors::{Result, WikiquoteError},
    reqwest_client::{ApiClient, RequestOptions},
};

// Every query is built by hand and nothing is percent encoded, callers have to pass
// values that are already safe to drop into a query string.

pub fn search_by_title_query(query: &str) -> String {
    format!(
        "?srsearch={}&action=query&list=search&srwhat=nearmatch&format=json&origin=*",
        query
    )
}

pub fn search_query(query: &str) -> String {
    format!(
        "?format=json&action=query&list=search&origin=*&continue=&srsearch={}",
        query
    )
}

pub fn search_people_query(query: &str) -> String {
    format!(
        "?srsearch={}&action=query&list=search&origin=*&srwhat=nearmatch&format=json",
        query
    )
}

pub fn page_sections_query(page: &PageRef) -> String {
    format!(
        "?{}&action=parse&origin=*&prop=sections&format=json",
        page.query_param()
    )
}

pub fn section_content_query<I: Display>(page: &PageRef, section: I) -> String {
    format!(
        "?{}&section={}&action=parse&prop=text&format=json&origin=*",
        page.query_param(),
        section
    )
}

/// Turn the generic JSON into the shape we want, naming the shape if it doesn't fit.
pub(crate) fn decode<T: DeserializeOwned>(what: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| WikiquoteError::decode(what, e))
}

async fn run_search<C: ApiClient>(
    client: &C,
    query: String,
    opts: &RequestOptions,
) -> Result<Vec<SearchResult>> {
    let response: SearchResponse = decode("query.search", client.get(&query, opts).await?)?;
    Ok(response.query.search)
}

/// Near match search on page titles.
pub async fn search_by_title<C: ApiClient>(
    client: &C,
    query: &str,
    opts: &RequestOptions,
) -> Result<Vec<SearchResult>> {
    run_search(client, search_by_title_query(query), opts).await
}

/// Full text search over the whole wiki.
pub async fn search<C: ApiClient>(
    client: &C,
    query: &str,
    opts: &RequestOptions,
) -> Result<Vec<SearchResult>> {
    run_search(client, search_query(query), opts).await
}

/// Near match search for people. Same request as [`search_by_title`] with the
/// parameters in another order.
pub async fn search_people<C: ApiClient>(
    client: &C,
    query: &str,
    opts: &RequestOptions,
) -> Result<Vec<SearchResult>> {
    run_search(client, search_people_query(query), opts).await
}

pub(crate) async fn page_sections<C: ApiClient>(
    client: &C,
    page: &PageRef,
    opts: &RequestOptions,
) -> Result<PageSections> {
    let response: ParseResponse<PageSections> =
        decode("parse", client.get(&page_sections_query(page), opts).await?)?;
    Ok(response.parse)
}

/// Get the sections of a page, looked up by title.
///
/// # Returns
/// - Ok(PageSections) -> The `parse` object exactly as the wiki sent it.
/// - Err(WikiquoteError) -> Request failure, or a response without `parse`.
pub async fn get_page_sections<C: ApiClient>(
    client: &C,
    page_title: &str,
    opts: &RequestOptions,
) -> Result<PageSections> {
    page_sections(client, &PageRef::from(page_title), opts).await
}

/// Same as [`get_page_sections`] but by page id.
pub async fn get_page_sections_by_id<C: ApiClient>(
    client: &C,
    page_id: u64,
    opts: &RequestOptions,
) -> Result<PageSections> {
    page_sections(client, &PageRef::from(page_id), opts).await
}

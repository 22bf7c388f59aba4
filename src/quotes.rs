use futures::future;
use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};
use serde::de::Error as _;
use std::fmt::Display;

use crate::{
    definitions::{PageRef, ParseResponse, Quote, SectionText},
    errors::{Result, WikiquoteError},
    extract::extract_quotes,
    mediawiki_api::{decode, page_sections, section_content_query},
    reqwest_client::{ApiClient, RequestOptions},
};

pub(crate) async fn section_content<C: ApiClient, I: Display>(
    client: &C,
    page: &PageRef,
    section: I,
    opts: &RequestOptions,
) -> Result<Vec<Quote>> {
    let query = section_content_query(page, section);
    let response: ParseResponse<SectionText> =
        decode("parse.text", client.get(&query, opts).await?)?;
    Ok(extract_quotes(&response.parse.text.html))
}

/// Get all the quotes in one section of a page.
///
/// # Arguments
/// - page_title -> Title of the page, used as is.
/// - section_index -> Index as given by [`crate::get_page_sections`] (number or string).
///
/// # Returns
/// - Ok(Vec<Quote>) -> Quotes in the order they appear.
/// - Err(WikiquoteError) -> Request failure or a response without `parse.text`.
pub async fn get_section_content<C: ApiClient, I: Display>(
    client: &C,
    page_title: &str,
    section_index: I,
    opts: &RequestOptions,
) -> Result<Vec<Quote>> {
    section_content(client, &PageRef::from(page_title), section_index, opts).await
}

/// Same as [`get_section_content`] but by page id.
pub async fn get_section_content_by_id<C: ApiClient, I: Display>(
    client: &C,
    page_id: u64,
    section_index: I,
    opts: &RequestOptions,
) -> Result<Vec<Quote>> {
    section_content(client, &PageRef::from(page_id), section_index, opts).await
}

/// Every quote on the page. All the section requests go out at once, the first one
/// to fail fails the lot.
pub(crate) async fn list_page<C: ApiClient>(
    client: &C,
    page: &PageRef,
    opts: &RequestOptions,
) -> Result<Vec<Quote>> {
    let sections = page_sections(client, page, opts)
        .await?
        .sections
        .ok_or_else(|| {
            WikiquoteError::decode("parse.sections", serde_json::Error::missing_field("sections"))
        })?;
    log::debug!("Getting {} sections of {}", sections.len(), page);

    let quotes = future::try_join_all(
        sections
            .iter()
            .map(|section| section_content(client, page, &section.index, opts)),
    )
    .await?;

    Ok(quotes.into_iter().flatten().collect_vec())
}

/// All quotes of a page, section after section.
pub async fn list<C: ApiClient>(
    client: &C,
    page_title: &str,
    opts: &RequestOptions,
) -> Result<Vec<Quote>> {
    list_page(client, &PageRef::from(page_title), opts).await
}

/// Same as [`list`] but by page id.
pub async fn list_by_id<C: ApiClient>(
    client: &C,
    page_id: u64,
    opts: &RequestOptions,
) -> Result<Vec<Quote>> {
    list_page(client, &PageRef::from(page_id), opts).await
}

/// Pick one quote uniformly. An empty list is an error, never a blank quote.
pub fn pick_quote<R: Rng + ?Sized>(quotes: &[Quote], rng: &mut R) -> Result<String> {
    quotes
        .choose(rng)
        .map(|q| q.quote.clone())
        .ok_or(WikiquoteError::NoQuotes)
}

/// Random quote text from a page, using the given random source.
pub async fn get_random_quote_with<C: ApiClient, R: Rng + ?Sized>(
    client: &C,
    page_title: &str,
    opts: &RequestOptions,
    rng: &mut R,
) -> Result<String> {
    let quotes = list(client, page_title, opts).await?;
    pick_quote(&quotes, rng)
}

/// Same as [`get_random_quote_with`] but by page id.
pub async fn get_random_quote_by_id_with<C: ApiClient, R: Rng + ?Sized>(
    client: &C,
    page_id: u64,
    opts: &RequestOptions,
    rng: &mut R,
) -> Result<String> {
    let quotes = list_by_id(client, page_id, opts).await?;
    pick_quote(&quotes, rng)
}

/// Random quote text from a page, using the thread local generator.
pub async fn get_random_quote<C: ApiClient>(
    client: &C,
    page_title: &str,
    opts: &RequestOptions,
) -> Result<String> {
    let quotes = list(client, page_title, opts).await?;
    pick_quote(&quotes, &mut rand::thread_rng())
}

pub async fn get_random_quote_by_id<C: ApiClient>(
    client: &C,
    page_id: u64,
    opts: &RequestOptions,
) -> Result<String> {
    let quotes = list_by_id(client, page_id, opts).await?;
    pick_quote(&quotes, &mut rand::thread_rng())
}

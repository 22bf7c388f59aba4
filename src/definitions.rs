use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// One entry of a `list=search` response, trimmed to the fields we care about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub pageid: u64,
    pub wordcount: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchList {
    pub search: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub query: SearchList,
}

/// Wrapper for anything returned under the `parse` key.
#[derive(Debug, Deserialize)]
pub(crate) struct ParseResponse<T> {
    pub parse: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HtmlText {
    #[serde(rename = "*")]
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionText {
    pub text: HtmlText,
}

/// Section index as the wiki hands it out. MediaWiki sends strings (`"1"`, `"T-1"`)
/// but numbers are accepted too, and both are written back into queries verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SectionIndex {
    Number(u64),
    Text(String),
}

impl Display for SectionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionIndex::Number(n) => write!(f, "{}", n),
            SectionIndex::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for SectionIndex {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SectionIndex {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SectionIndex {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single section from a `prop=sections` response.
///
/// Only `index` is typed; `line`, `level`, `anchor` and whatever else the wiki sends
/// are kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Section {
    pub index: SectionIndex,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `parse` object of a `prop=sections` request, passed back as received.
///
/// `sections` is only required by [`crate::list`]; listing alone returns whatever
/// the wiki sent, with or without it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageSections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A quote pulled out of a page section.
///
/// `quote` is the whole list item text (so it also contains the source text when one
/// is nested inside it).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quote {
    pub quote: String,
    pub source: Option<String>,
}

/// How a page is addressed in a `parse` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageRef {
    Title(String),
    Id(u64),
}

impl PageRef {
    /// The `page=` / `pageid=` query parameter. Titles go in as-is, no encoding.
    pub fn query_param(&self) -> String {
        match self {
            PageRef::Title(title) => format!("page={}", title),
            PageRef::Id(id) => format!("pageid={}", id),
        }
    }
}

impl Display for PageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageRef::Title(title) => write!(f, "{}", title),
            PageRef::Id(id) => write!(f, "#{}", id),
        }
    }
}

impl From<&str> for PageRef {
    fn from(value: &str) -> Self {
        Self::Title(value.to_owned())
    }
}

impl From<u64> for PageRef {
    fn from(value: u64) -> Self {
        Self::Id(value)
    }
}

use derive_builder::Builder;
use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde_json::Value;
use std::{future::Future, time::Duration};
use url::Url;

use crate::errors::Result;

/// English Wikiquote's action API.
pub const WIKIQUOTE_API: &str = "https://en.wikiquote.org/w/api.php";
const DEFAULT_USER_AGENT: &str = concat!("wikiquote-rs/", env!("CARGO_PKG_VERSION"));

/// Per-call tweaks on top of what the client was built with.
///
/// Options never carry a query string: the query is always the one the calling
/// operation built.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct RequestOptions {
    /// Use another api endpoint for this call.
    #[builder(setter(into, strip_option), default)]
    pub base_url: Option<String>,
    /// Extra headers sent with the request.
    #[builder(default)]
    pub headers: HeaderMap,
    #[builder(setter(strip_option), default)]
    pub timeout: Option<Duration>,
    #[builder(setter(into, strip_option), default)]
    pub user_agent: Option<String>,
}

/// Anything that can run a GET against a MediaWiki api and hand back the JSON body.
///
/// # Arguments
/// - query -> Literal query string, starting with `?`, appended to the endpoint.
/// - opts -> Caller supplied request options.
///
/// # Returns
/// - Ok(Value) -> The decoded JSON body.
/// - Err(WikiquoteError) -> Transport, status or JSON errors.
pub trait ApiClient {
    fn get(
        &self,
        query: &str,
        opts: &RequestOptions,
    ) -> impl Future<Output = Result<Value>> + Send;
}

/// reqwest backed api client.
#[derive(Debug, Clone)]
pub struct WikiquoteClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl WikiquoteClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// - base_url -> The api endpoint. Defaults to [`WIKIQUOTE_API`]
    /// - user_agent -> User agent to tell the server. Defaults to `wikiquote-rs/<version>`
    ///
    /// # Returns
    /// - a new client object to use, or the reqwest error if the client could not be built.
    pub fn new(base_url: Option<&str>, user_agent: Option<&str>) -> Result<Self> {
        let client = reqwest_middleware::ClientBuilder::new(
            reqwest::ClientBuilder::new()
                .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
                .build()?,
        )
        .build();
        Ok(Self::with_middleware(base_url.unwrap_or(WIKIQUOTE_API), client))
    }

    /// Wrap an already configured middleware stack (tracing, retries, ...).
    pub fn with_middleware(base_url: &str, client: ClientWithMiddleware) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Glue the endpoint and the query string together. The query is not encoded here;
    /// only characters that can't exist in a URL at all get escaped by the parser.
    pub fn build_url(&self, query: &str, opts: &RequestOptions) -> Result<Url> {
        let base = opts.base_url.as_deref().unwrap_or(&self.base_url);
        Ok(Url::parse(&format!("{}{}", base, query))?)
    }

    /// The GET request for `query` with the caller's headers, timeout and user agent.
    pub fn request(&self, query: &str, opts: &RequestOptions) -> Result<RequestBuilder> {
        let url = self.build_url(query, opts)?;
        log::debug!("GET {}", url);

        let mut request = self.client.get(url).headers(opts.headers.clone());
        if let Some(timeout) = opts.timeout {
            request = request.timeout(timeout);
        }
        if let Some(agent) = &opts.user_agent {
            request = request.header(USER_AGENT, agent.as_str());
        }
        Ok(request)
    }
}

impl ApiClient for WikiquoteClient {
    async fn get(&self, query: &str, opts: &RequestOptions) -> Result<Value> {
        let response = self
            .request(query, opts)?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}

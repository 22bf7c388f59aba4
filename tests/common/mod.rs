use serde_json::{Value, json};
use std::{
    collections::{HashMap, HashSet},
    future,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tokio::sync::Barrier;
use wikiquote::{ApiClient, RequestOptions, Result, SectionIndex, WikiquoteError};

/// Canned api: answers known query strings with fixed JSON and records every query
/// together with the options it was sent with.
#[derive(Debug, Default, Clone)]
pub struct FakeWiki {
    responses: HashMap<String, Value>,
    seen: Arc<Mutex<Vec<(String, RequestOptions)>>>,
}

impl FakeWiki {
    pub fn respond(mut self, query: impl Into<String>, body: Value) -> Self {
        self.responses.insert(query.into(), body);
        self
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|(query, _)| query.clone())
            .collect()
    }

    pub fn seen_options(&self) -> Vec<RequestOptions> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|(_, opts)| opts.clone())
            .collect()
    }
}

impl ApiClient for FakeWiki {
    async fn get(&self, query: &str, opts: &RequestOptions) -> Result<Value> {
        self.seen
            .lock()
            .unwrap()
            .push((query.to_string(), opts.clone()));
        match self.responses.get(query) {
            Some(body) => Ok(body.clone()),
            // stand in for a failed request
            None => Err(WikiquoteError::Url(url::ParseError::EmptyHost)),
        }
    }
}

/// Wraps a [`FakeWiki`] so section content requests wait on each other.
///
/// With a barrier of `n`, no section request answers until `n` of them are in flight
/// at once. Stalled queries never answer at all.
#[derive(Debug)]
pub struct GatedWiki {
    inner: FakeWiki,
    barrier: Option<Arc<Barrier>>,
    stalled: HashSet<String>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl GatedWiki {
    pub fn new(inner: FakeWiki) -> Self {
        Self {
            inner,
            barrier: None,
            stalled: HashSet::new(),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn wait_for(mut self, sections: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(sections)));
        self
    }

    pub fn stall(mut self, query: impl Into<String>) -> Self {
        self.stalled.insert(query.into());
        self
    }

    /// Most section requests seen in flight at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl ApiClient for GatedWiki {
    async fn get(&self, query: &str, opts: &RequestOptions) -> Result<Value> {
        if self.stalled.contains(query) {
            return future::pending().await;
        }
        if query.contains("&prop=text&") {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
        self.inner.get(query, opts).await
    }
}

pub fn sections_body(indexes: &[SectionIndex]) -> Value {
    json!({
        "parse": {
            "title": "Test page",
            "pageid": 99,
            "sections": indexes
                .iter()
                .map(|index| json!({ "toclevel": 1, "line": format!("Section {}", index), "index": index }))
                .collect::<Vec<Value>>()
        }
    })
}

pub fn text_body(html: &str) -> Value {
    json!({ "parse": { "title": "Test page", "pageid": 99, "text": { "*": html } } })
}

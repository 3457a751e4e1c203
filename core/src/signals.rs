use crate::persist::{load_pagerank, load_pageviews, load_titles, SignalPaths};
use crate::DocId;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Immutable per-document ranking signals and display titles, loaded once at
/// startup. Unknown ids resolve to documented defaults and never fail.
pub struct SignalStore {
    pagerank: HashMap<DocId, f64>,
    pageviews: HashMap<DocId, u64>,
    titles: HashMap<DocId, String>,
}

impl SignalStore {
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let paths = SignalPaths::new(&root);
        let pagerank = load_pagerank(&paths)
            .with_context(|| format!("loading pagerank table from {}", root.as_ref().display()))?;
        let pageviews = load_pageviews(&paths)
            .with_context(|| format!("loading pageview table from {}", root.as_ref().display()))?;
        let titles = load_titles(&paths)
            .with_context(|| format!("loading title table from {}", root.as_ref().display()))?;
        tracing::info!(
            pagerank = pagerank.len(),
            pageviews = pageviews.len(),
            titles = titles.len(),
            "signal tables loaded"
        );
        Ok(Self { pagerank, pageviews, titles })
    }

    /// Link-graph importance score; 0.0 for unknown ids.
    pub fn pagerank(&self, doc_id: DocId) -> f64 {
        self.pagerank.get(&doc_id).copied().unwrap_or(0.0)
    }

    /// Popularity count; 0 for unknown ids.
    pub fn pageviews(&self, doc_id: DocId) -> u64 {
        self.pageviews.get(&doc_id).copied().unwrap_or(0)
    }

    /// Display title; empty for unknown ids.
    pub fn title(&self, doc_id: DocId) -> &str {
        self.titles.get(&doc_id).map(String::as_str).unwrap_or("")
    }
}

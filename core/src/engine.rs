use crate::persist::load_meta;
use crate::rank::{
    candidate_scores, cosine_similarities, coverage_ranking, query_tfidf_vector, terms_in_vocabulary,
    top_n, DEFAULT_TOP_N,
};
use crate::segment::SegmentReader;
use crate::signals::SignalStore;
use crate::tokenizer::tokenize;
use crate::{synonyms, DocId, Segment};
use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::path::Path;

/// The query-time retrieval engine: three index segments plus the flat
/// signal tables, loaded once and shared read-only by every request.
pub struct SearchEngine {
    title: SegmentReader,
    body: SegmentReader,
    anchor: SegmentReader,
    signals: SignalStore,
}

impl SearchEngine {
    /// Loads every segment and signal table from `root`. Any missing piece
    /// is fatal; the engine never serves partial results.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let meta = load_meta(root)
            .with_context(|| format!("loading index metadata from {}", root.display()))?;
        tracing::info!(num_docs = meta.num_docs, version = meta.version, "opening index");
        let title = SegmentReader::load(root.join(Segment::Title.dir_name()))?;
        let body = SegmentReader::load(root.join(Segment::Body.dir_name()))?;
        let anchor = SegmentReader::load(root.join(Segment::Anchor.dir_name()))?;
        let signals = SignalStore::load(root.join("signals"))?;
        Ok(Self { title, body, anchor, signals })
    }

    fn reader(&self, segment: Segment) -> &SegmentReader {
        match segment {
            Segment::Title => &self.title,
            Segment::Body => &self.body,
            Segment::Anchor => &self.anchor,
        }
    }

    /// Best-effort search: synonym-expanded title coverage with pagerank as
    /// the tie-break, truncated to the top 100. Deliberately not TF-IDF.
    pub fn search(&self, query: &str) -> Result<Vec<(DocId, String)>> {
        let mut tokens = tokenize(query);
        synonyms::expand(&mut tokens);
        let coverage = coverage_ranking(&tokens, &self.title)?;
        let mut ranked: Vec<(DocId, u32, f64)> = coverage
            .into_iter()
            .map(|(doc_id, cov)| (doc_id, cov, self.signals.pagerank(doc_id)))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then(b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal))
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(DEFAULT_TOP_N);
        Ok(self.resolve_titles(ranked.into_iter().map(|(doc_id, _, _)| doc_id)))
    }

    /// TF-IDF/cosine ranking over the body segment, top 100. No synonym
    /// expansion here; the raw tokenized query is what gets vectorized.
    pub fn search_body(&self, query: &str) -> Result<Vec<(DocId, String)>> {
        let tokens = tokenize(query);
        let processed = terms_in_vocabulary(&tokens, &self.body);
        if processed.is_empty() {
            return Ok(Vec::new());
        }
        let query_vec = query_tfidf_vector(&tokens, &processed, &self.body);
        let posting_lists = self.body.posting_lists(&processed)?;
        let candidates = candidate_scores(&self.body, &posting_lists);
        let sim = cosine_similarities(&candidates, &query_vec, &processed);
        let ranked = top_n(sim, DEFAULT_TOP_N);
        Ok(self.resolve_titles(ranked.into_iter().map(|(doc_id, _)| doc_id)))
    }

    /// All documents matching at least one query term in the given field,
    /// ordered by distinct-term coverage. Unbounded length.
    pub fn search_field(&self, query: &str, segment: Segment) -> Result<Vec<(DocId, String)>> {
        let tokens = tokenize(query);
        let mut ranked = coverage_ranking(&tokens, self.reader(segment))?;
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        Ok(self.resolve_titles(ranked.into_iter().map(|(doc_id, _)| doc_id)))
    }

    /// Pagerank scores in input order, 0.0 for unknown ids.
    pub fn pagerank_scores(&self, doc_ids: &[DocId]) -> Vec<f64> {
        doc_ids.iter().map(|&id| self.signals.pagerank(id)).collect()
    }

    /// Pageview counts in input order, 0 for unknown ids.
    pub fn pageview_counts(&self, doc_ids: &[DocId]) -> Vec<u64> {
        doc_ids.iter().map(|&id| self.signals.pageviews(id)).collect()
    }

    fn resolve_titles(&self, doc_ids: impl IntoIterator<Item = DocId>) -> Vec<(DocId, String)> {
        doc_ids
            .into_iter()
            .map(|id| (id, self.signals.title(id).to_string()))
            .collect()
    }
}

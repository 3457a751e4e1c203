use crate::persist::{load_dictionary, load_doc_lens, load_postings_for_term, SegmentPaths};
use crate::{DocId, Posting, TermId};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Read-only view over one index segment: per-term document frequency,
/// per-document length, and on-disk posting lists addressed by term id.
/// Loaded once at startup and shared immutably across requests.
pub struct SegmentReader {
    paths: SegmentPaths,
    dictionary: HashMap<String, TermId>,
    df: Vec<u32>,
    doc_len: HashMap<DocId, u32>,
}

impl SegmentReader {
    /// A missing dictionary or length table is a fatal configuration error;
    /// the service cannot serve without its segments.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let paths = SegmentPaths::new(&root);
        let (dictionary, df) = load_dictionary(&paths)
            .with_context(|| format!("loading segment dictionary from {}", root.as_ref().display()))?;
        let doc_len = load_doc_lens(&paths)
            .with_context(|| format!("loading document lengths from {}", root.as_ref().display()))?;
        tracing::info!(
            segment = %root.as_ref().display(),
            terms = dictionary.len(),
            docs = doc_len.len(),
            "segment loaded"
        );
        Ok(Self { paths, dictionary, df, doc_len })
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.dictionary.contains_key(term)
    }

    /// Count of distinct documents containing the term; 0 for unknown terms.
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.dictionary
            .get(term)
            .and_then(|&tid| self.df.get(tid as usize))
            .copied()
            .unwrap_or(0)
    }

    pub fn document_length(&self, doc_id: DocId) -> Option<u32> {
        self.doc_len.get(&doc_id).copied()
    }

    /// Size of the document-length table; the corpus size N used for idf.
    pub fn num_docs(&self) -> u64 {
        self.doc_len.len() as u64
    }

    /// Batched posting-list retrieval. Terms absent from the segment are
    /// silently omitted; a read failure for a known term is surfaced.
    pub fn posting_lists(&self, terms: &[String]) -> Result<Vec<(String, Vec<Posting>)>> {
        let mut lists = Vec::with_capacity(terms.len());
        for term in terms {
            let Some(&tid) = self.dictionary.get(term) else { continue };
            let postings = load_postings_for_term(&self.paths, tid)
                .with_context(|| format!("loading postings for term {term:?}"))?;
            lists.push((term.clone(), postings));
        }
        Ok(lists)
    }
}

use crate::segment::SegmentReader;
use crate::{DocId, Posting, SENTINEL_DOC_ID};
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Smoothing term added to document frequency before the idf log.
const IDF_EPSILON: f64 = 1e-7;

/// Default result-list cap for the top-100 endpoints.
pub const DEFAULT_TOP_N: usize = 100;

fn idf(reader: &SegmentReader, term: &str) -> f64 {
    let n = reader.num_docs() as f64;
    (n / (reader.document_frequency(term) as f64 + IDF_EPSILON)).log10()
}

/// Distinct query terms restricted to the segment vocabulary, in first-seen
/// order. An empty intersection is an expected outcome, not an error.
pub fn terms_in_vocabulary(tokens: &[String], reader: &SegmentReader) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| reader.contains_term(t.as_str()) && seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// Binary retrieval: for each candidate document, count how many *distinct*
/// query terms occur in its postings for the segment. Repeats of a term in
/// the document or the query count once. Sentinel postings are skipped.
pub fn coverage_ranking(tokens: &[String], reader: &SegmentReader) -> Result<Vec<(DocId, u32)>> {
    let terms = terms_in_vocabulary(tokens, reader);
    if terms.is_empty() {
        return Ok(Vec::new());
    }
    let mut coverage: HashMap<DocId, u32> = HashMap::new();
    for (_, postings) in reader.posting_lists(&terms)? {
        for p in postings {
            if p.doc_id != SENTINEL_DOC_ID {
                *coverage.entry(p.doc_id).or_insert(0) += 1;
            }
        }
    }
    Ok(coverage.into_iter().collect())
}

/// TF-IDF vector for the query itself. Term frequency is normalized by the
/// length of the original (duplicate-preserving) token sequence.
pub fn query_tfidf_vector(
    original: &[String],
    processed: &[String],
    reader: &SegmentReader,
) -> HashMap<String, f64> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in original {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let query_len = original.len() as f64;
    let mut q = HashMap::with_capacity(processed.len());
    for term in processed {
        let tf = counts.get(term.as_str()).copied().unwrap_or(0) as f64 / query_len;
        q.insert(term.clone(), tf * idf(reader, term));
    }
    q
}

/// Sparse candidate pool: (doc_id, term) -> tf-idf contribution, accumulated
/// over the posting lists. Term frequency is normalized by document length.
/// A document missing a length entry is skipped rather than scored wrongly.
pub fn candidate_scores(
    reader: &SegmentReader,
    posting_lists: &[(String, Vec<Posting>)],
) -> HashMap<(DocId, String), f64> {
    let mut candidates: HashMap<(DocId, String), f64> = HashMap::new();
    for (term, postings) in posting_lists {
        let term_idf = idf(reader, term);
        for p in postings {
            if p.doc_id == SENTINEL_DOC_ID {
                continue;
            }
            let Some(len) = reader.document_length(p.doc_id) else { continue };
            if len == 0 {
                continue;
            }
            let tfidf = (p.freq as f64 / len as f64) * term_idf;
            *candidates.entry((p.doc_id, term.clone())).or_insert(0.0) += tfidf;
        }
    }
    candidates
}

/// Cosine similarity per candidate document against the query vector, with
/// both vectors aligned on the processed term order. A zero-norm vector
/// short-circuits to 0.0 rather than dividing by zero.
pub fn cosine_similarities(
    candidates: &HashMap<(DocId, String), f64>,
    query: &HashMap<String, f64>,
    terms: &[String],
) -> HashMap<DocId, f64> {
    let term_index: HashMap<&str, usize> =
        terms.iter().enumerate().map(|(i, t)| (t.as_str(), i)).collect();
    let q: Vec<f64> = terms.iter().map(|t| query.get(t).copied().unwrap_or(0.0)).collect();
    let q_norm = q.iter().map(|w| w * w).sum::<f64>().sqrt();

    let mut rows: HashMap<DocId, Vec<f64>> = HashMap::new();
    for ((doc_id, term), tfidf) in candidates {
        let Some(&col) = term_index.get(term.as_str()) else { continue };
        rows.entry(*doc_id).or_insert_with(|| vec![0.0; terms.len()])[col] += tfidf;
    }

    let mut sim = HashMap::with_capacity(rows.len());
    for (doc_id, row) in rows {
        let dot: f64 = row.iter().zip(&q).map(|(d, w)| d * w).sum();
        let d_norm = row.iter().map(|d| d * d).sum::<f64>().sqrt();
        let denom = d_norm * q_norm;
        let score = if denom == 0.0 { 0.0 } else { dot / denom };
        sim.insert(doc_id, score);
    }
    sim
}

fn round5(score: f64) -> f64 {
    (score * 1e5).round() / 1e5
}

/// Top-n documents by descending similarity, score rounded to 5 decimal
/// digits, ties broken by ascending doc id for reproducible output.
pub fn top_n(sim: HashMap<DocId, f64>, n: usize) -> Vec<(DocId, f64)> {
    let mut ranked: Vec<(DocId, f64)> =
        sim.into_iter().map(|(doc_id, score)| (doc_id, round5(score))).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(a.0.cmp(&b.0))
    });
    ranked.truncate(n);
    ranked
}

use core::persist::{save_dictionary, save_doc_lens, save_postings_for_term, SegmentPaths};
use core::rank::{
    candidate_scores, cosine_similarities, coverage_ranking, query_tfidf_vector,
    terms_in_vocabulary, top_n,
};
use core::segment::SegmentReader;
use core::tokenizer::tokenize;
use core::{DocId, Posting, TermId};
use std::collections::HashMap;
use tempfile::tempdir;

/// Writes one segment with explicit per-term document frequencies (so tests
/// can pin corpus-level statistics independent of the postings written).
fn write_segment(
    dir: &std::path::Path,
    terms: &[(&str, u32, Vec<Posting>)],
    doc_lens: HashMap<DocId, u32>,
) {
    let paths = SegmentPaths::new(dir);
    let mut dict: HashMap<String, TermId> = HashMap::new();
    let mut df = Vec::new();
    for (tid, (term, term_df, postings)) in terms.iter().enumerate() {
        dict.insert(term.to_string(), tid as TermId);
        df.push(*term_df);
        save_postings_for_term(&paths, tid as TermId, postings).unwrap();
    }
    save_dictionary(&paths, &(dict, df)).unwrap();
    save_doc_lens(&paths, &doc_lens).unwrap();
}

/// Reference example: doc 7 has length 10, "hello" freq 2, "world" freq 1,
/// df("hello")=50, df("world")=20, corpus of 1000 documents. The similarity
/// must match the formula computed independently here, at 5-decimal rounding.
#[test]
fn body_similarity_matches_reference_formula() {
    let dir = tempdir().unwrap();
    let mut doc_lens: HashMap<DocId, u32> = (1..=1000).map(|id| (id, 10)).collect();
    doc_lens.insert(7, 10);
    write_segment(
        dir.path(),
        &[
            ("hello", 50, vec![Posting { doc_id: 7, freq: 2 }]),
            ("world", 20, vec![Posting { doc_id: 7, freq: 1 }]),
        ],
        doc_lens,
    );
    let reader = SegmentReader::load(dir.path()).unwrap();
    assert_eq!(reader.num_docs(), 1000);

    let tokens = tokenize("hello world");
    let processed = terms_in_vocabulary(&tokens, &reader);
    let query_vec = query_tfidf_vector(&tokens, &processed, &reader);
    let lists = reader.posting_lists(&processed).unwrap();
    let candidates = candidate_scores(&reader, &lists);
    let sim = cosine_similarities(&candidates, &query_vec, &processed);
    let ranked = top_n(sim, 100);

    let idf_hello = (1000.0_f64 / (50.0 + 1e-7)).log10();
    let idf_world = (1000.0_f64 / (20.0 + 1e-7)).log10();
    let q = [0.5 * idf_hello, 0.5 * idf_world];
    let d = [0.2 * idf_hello, 0.1 * idf_world];
    let dot = q[0] * d[0] + q[1] * d[1];
    let q_norm = (q[0] * q[0] + q[1] * q[1]).sqrt();
    let d_norm = (d[0] * d[0] + d[1] * d[1]).sqrt();
    let expected = ((dot / (q_norm * d_norm)) * 1e5).round() / 1e5;

    assert_eq!(ranked, vec![(7, expected)]);
    assert!(expected > 0.0 && expected <= 1.0);
}

#[test]
fn coverage_counts_distinct_terms_only() {
    let dir = tempdir().unwrap();
    // Doc 10 matches both terms; doc 11 contains "boston" three times.
    write_segment(
        dir.path(),
        &[
            ("boston", 2, vec![Posting { doc_id: 10, freq: 1 }, Posting { doc_id: 11, freq: 3 }]),
            ("celtics", 1, vec![Posting { doc_id: 10, freq: 1 }]),
        ],
        HashMap::new(),
    );
    let reader = SegmentReader::load(dir.path()).unwrap();
    let tokens = tokenize("boston celtics");
    let mut ranked = coverage_ranking(&tokens, &reader).unwrap();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    assert_eq!(ranked, vec![(10, 2), (11, 1)]);
}

#[test]
fn coverage_never_exceeds_distinct_query_terms() {
    let dir = tempdir().unwrap();
    write_segment(
        dir.path(),
        &[("boston", 1, vec![Posting { doc_id: 5, freq: 9 }])],
        HashMap::new(),
    );
    let reader = SegmentReader::load(dir.path()).unwrap();
    // Repeated query term still counts once.
    let ranked = coverage_ranking(&tokenize("boston boston boston"), &reader).unwrap();
    assert_eq!(ranked, vec![(5, 1)]);
}

#[test]
fn sentinel_postings_are_excluded() {
    let dir = tempdir().unwrap();
    write_segment(
        dir.path(),
        &[("boston", 1, vec![Posting { doc_id: 0, freq: 4 }, Posting { doc_id: 5, freq: 1 }])],
        HashMap::new(),
    );
    let reader = SegmentReader::load(dir.path()).unwrap();
    let ranked = coverage_ranking(&tokenize("boston"), &reader).unwrap();
    assert_eq!(ranked, vec![(5, 1)]);
}

#[test]
fn unknown_vocabulary_yields_empty_ranking() {
    let dir = tempdir().unwrap();
    write_segment(dir.path(), &[], HashMap::new());
    let reader = SegmentReader::load(dir.path()).unwrap();
    assert!(coverage_ranking(&tokenize("boston celtics"), &reader).unwrap().is_empty());
    assert!(terms_in_vocabulary(&tokenize("boston"), &reader).is_empty());
}

#[test]
fn postings_without_a_length_entry_are_skipped() {
    let dir = tempdir().unwrap();
    // Doc 99 is posted but has no length entry; doc 7 is well-formed.
    write_segment(
        dir.path(),
        &[(
            "hello",
            2,
            vec![Posting { doc_id: 7, freq: 2 }, Posting { doc_id: 99, freq: 5 }],
        )],
        [(7, 10)].into_iter().collect(),
    );
    let reader = SegmentReader::load(dir.path()).unwrap();

    let tokens = tokenize("hello");
    let processed = terms_in_vocabulary(&tokens, &reader);
    let lists = reader.posting_lists(&processed).unwrap();
    let candidates = candidate_scores(&reader, &lists);
    assert!(candidates.contains_key(&(7, "hello".to_string())));
    assert!(!candidates.keys().any(|(doc_id, _)| *doc_id == 99));

    let query_vec = query_tfidf_vector(&tokens, &processed, &reader);
    let sim = cosine_similarities(&candidates, &query_vec, &processed);
    let ranked = top_n(sim, 100);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].0, 7);
}

#[test]
fn absent_terms_are_omitted_from_posting_lists() {
    let dir = tempdir().unwrap();
    write_segment(
        dir.path(),
        &[("boston", 1, vec![Posting { doc_id: 5, freq: 1 }])],
        HashMap::new(),
    );
    let reader = SegmentReader::load(dir.path()).unwrap();
    let lists = reader
        .posting_lists(&["boston".to_string(), "missing".to_string()])
        .unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].0, "boston");
}

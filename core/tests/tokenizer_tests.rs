use core::tokenizer::tokenize;

#[test]
fn it_lowercases_and_splits() {
    let toks = tokenize("BOSTON Celtics roster");
    assert_eq!(toks, vec!["boston", "celtics", "roster"]);
}

#[test]
fn it_filters_english_stopwords() {
    let toks = tokenize("the quick brown fox and the lazy dog");
    assert!(!toks.contains(&"the".to_string()));
    assert!(!toks.contains(&"and".to_string()));
    assert!(toks.contains(&"quick".to_string()));
}

#[test]
fn it_filters_corpus_stopwords() {
    let toks = tokenize("category references history of wrestling");
    assert_eq!(toks, vec!["wrestling"]);
}

#[test]
fn it_keeps_internal_apostrophes_and_hyphens() {
    let toks = tokenize("men's greco-roman wrestling");
    assert!(toks.contains(&"men's".to_string()));
    assert!(toks.contains(&"greco-roman".to_string()));
}

#[test]
fn it_does_not_stem() {
    let toks = tokenize("running runners");
    assert_eq!(toks, vec!["running", "runners"]);
}

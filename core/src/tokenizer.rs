use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // A word (or #/@ marker) character followed by 2-24 more word characters,
    // single internal apostrophes/hyphens allowed: "men's", "greco-roman".
    static ref RE: Regex = Regex::new(r"(?u)[#@\w](['\-]?\w){2,24}").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let english: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        // Terms ubiquitous in this corpus's markup and boilerplate.
        let corpus: &[&str] = &[
            "category","references","also","external","links","may","first","see","history","people",
            "one","two","part","thumb","including","second","following","many","however","would","became",
        ];
        english.iter().chain(corpus.iter()).copied().collect()
    };
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Tokenize text into index terms: NFKC normalization, lowercase, token
/// grammar match, stopword removal. Order of occurrence and duplicates are
/// preserved since term frequency matters downstream. No stemming.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .filter(|t| !is_stopword(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_tokens_shorter_than_three_chars() {
        let toks = tokenize("go ab abc");
        assert_eq!(toks, vec!["abc"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(tokenize("rust code rust"), vec!["rust", "code", "rust"]);
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::stopwords::ENGLISH;

lazy_static! {
    // Two or more word characters, same shape as the classic vectorizer pattern
    static ref TOKEN: Regex = Regex::new(r"(?u)\b\w\w+\b").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = ENGLISH.iter().copied().collect();
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Lowercase, split into word tokens, drop stop words. Order is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !is_stopword(t))
        .map(str::to_string)
        .collect()
}

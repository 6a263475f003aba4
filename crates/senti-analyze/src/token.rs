//! Shared tokenization for the word-matching analyzers.

/// Words that flip or dampen the sentiment of the next matched word.
pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "can't", "cant", "don't", "dont",
    "doesn't", "doesnt", "didn't", "didnt", "won't", "wont", "wouldn't", "wouldnt", "shouldn't",
    "shouldnt", "couldn't", "couldnt", "isn't", "isnt", "aren't", "arent", "wasn't", "wasnt",
    "weren't", "werent", "hardly", "barely", "scarcely",
];

/// Lowercase a whitespace token and strip edge punctuation, keeping inner
/// apostrophes so contractions match the negation list.
pub(crate) fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .trim_matches('\'')
        .to_lowercase()
}

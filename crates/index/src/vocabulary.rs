use std::collections::HashMap;

/// Frozen set of index terms, alphabetically ordered. A term's position
/// here is its column in every document and query vector.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    /// Keep the `max_terms` most frequent terms across the corpus.
    ///
    /// `corpus_counts` holds the total occurrences of each term over all
    /// documents. Ties on count are broken alphabetically so the cut is
    /// deterministic.
    pub fn select(corpus_counts: &HashMap<String, usize>, max_terms: usize) -> Self {
        let mut ranked: Vec<(&String, usize)> = corpus_counts
            .iter()
            .map(|(term, count)| (term, *count))
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let mut terms: Vec<String> = ranked
            .into_iter()
            .take(max_terms)
            .map(|(term, _)| term.clone())
            .collect();
        terms.sort();

        let positions = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self { terms, positions }
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.positions.contains_key(term)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

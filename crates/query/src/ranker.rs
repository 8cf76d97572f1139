use index::{cosine_similarity, IndexError, TermWeightingIndex};
use ingest::Document;
use std::cmp::Ordering;
use tracing::debug;

/// Document paired with its similarity to a query
#[derive(Debug, Clone, Copy)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    /// Load-order position of the document in the corpus
    pub position: usize,
    pub score: f32,
}

/// Cosine-similarity ranking over a term-weighting index.
pub struct Ranker {
    index: TermWeightingIndex,
}

impl Ranker {
    pub fn new(index: TermWeightingIndex) -> Self {
        Self { index }
    }

    pub fn from_documents(documents: Vec<Document>) -> Result<Self, IndexError> {
        Ok(Self::new(TermWeightingIndex::build(documents)?))
    }

    pub fn index(&self) -> &TermWeightingIndex {
        &self.index
    }

    /// Up to `top_k` documents, best first.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<&Document> {
        self.search_scored(query, top_k)
            .into_iter()
            .map(|hit| hit.document)
            .collect()
    }

    /// Like [`Ranker::search`] but keeps scores.
    pub fn search_scored(&self, query: &str, top_k: usize) -> Vec<ScoredDocument<'_>> {
        rank(&self.index, query, top_k)
    }
}

/// Score every document in `index` against `query` and keep the best `top_k`.
///
/// A blank query returns the first `top_k` documents in load order with
/// score 0. Equal scores keep load order.
pub fn rank<'a>(index: &'a TermWeightingIndex, query: &str, top_k: usize) -> Vec<ScoredDocument<'a>> {
    let documents = index.documents();

    if query.trim().is_empty() {
        return documents
            .iter()
            .enumerate()
            .take(top_k)
            .map(|(position, document)| ScoredDocument {
                document,
                position,
                score: 0.0,
            })
            .collect();
    }

    let query_vector = index.query_vector(query);

    let mut scored: Vec<ScoredDocument<'a>> = documents
        .iter()
        .zip(index.vectors())
        .enumerate()
        .map(|(position, (document, vector))| ScoredDocument {
            document,
            position,
            score: cosine_similarity(&query_vector, vector),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.position.cmp(&b.position))
    });
    scored.truncate(top_k);

    debug!(
        top_k,
        returned = scored.len(),
        best = scored.first().map(|h| h.score).unwrap_or(0.0),
        "Ranked documents"
    );

    scored
}

/// Rank without keeping a [`Ranker`] around.
pub fn search<'a>(index: &'a TermWeightingIndex, query: &str, top_k: usize) -> Vec<&'a Document> {
    rank(index, query, top_k)
        .into_iter()
        .map(|hit| hit.document)
        .collect()
}

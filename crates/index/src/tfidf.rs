use ingest::Document;
use std::collections::HashMap;
use tracing::info;

use crate::error::{IndexError, Result};
use crate::tokenizer::tokenize;
use crate::vocabulary::Vocabulary;

/// Upper bound on vocabulary size unless the caller asks otherwise
pub const DEFAULT_MAX_TERMS: usize = 1000;

/// Term-frequency × inverse-document-frequency vectors over a frozen vocabulary.
///
/// Invariant: `vectors.len() == documents.len()` and every vector has
/// `vocabulary.len()` entries.
#[derive(Debug, Clone)]
pub struct TermWeightingIndex {
    documents: Vec<Document>,
    vocabulary: Vocabulary,
    idf: Vec<f32>,
    vectors: Vec<Vec<f32>>,
}

impl TermWeightingIndex {
    pub fn build(documents: Vec<Document>) -> Result<Self> {
        Self::build_with_limit(documents, DEFAULT_MAX_TERMS)
    }

    /// Build from bare texts; sources are named `doc-0`, `doc-1`, ...
    pub fn build_from_texts<I, S>(texts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::new(format!("doc-{}", i), text))
            .collect();

        Self::build(documents)
    }

    pub fn build_with_limit(documents: Vec<Document>, max_terms: usize) -> Result<Self> {
        if documents.is_empty() {
            return Err(IndexError::Configuration(
                "no documents to index".to_string(),
            ));
        }

        // Per-document term counts, computed once and reused for weighting
        let term_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| count_terms(&tokenize(&doc.text)))
            .collect();

        let mut corpus_counts: HashMap<String, usize> = HashMap::new();
        for counts in &term_counts {
            for (term, count) in counts {
                *corpus_counts.entry(term.clone()).or_insert(0) += count;
            }
        }

        let vocabulary = Vocabulary::select(&corpus_counts, max_terms);

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                if let Some(pos) = vocabulary.position(term) {
                    doc_freq[pos] += 1;
                }
            }
        }

        let total = documents.len() as f32;
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| if df == 0 { 0.0 } else { (total / df as f32).ln() })
            .collect();

        let vectors = term_counts
            .iter()
            .map(|counts| weigh(counts, &vocabulary, &idf))
            .collect();

        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Term-weighting index built"
        );

        Ok(Self {
            documents,
            vocabulary,
            idf,
            vectors,
        })
    }

    /// Project a query onto the frozen vocabulary. Unknown terms are dropped.
    pub fn query_vector(&self, query: &str) -> Vec<f32> {
        let counts = count_terms(&tokenize(query));
        weigh(&counts, &self.vocabulary, &self.idf)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Inverse document frequency of a vocabulary term
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.position(term).map(|pos| self.idf[pos])
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn count_terms(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

fn weigh(counts: &HashMap<String, usize>, vocabulary: &Vocabulary, idf: &[f32]) -> Vec<f32> {
    let mut vector = vec![0.0; vocabulary.len()];
    for (term, count) in counts {
        if let Some(pos) = vocabulary.position(term) {
            vector[pos] = *count as f32 * idf[pos];
        }
    }
    vector
}

/// Cosine of the angle between two equal-length vectors; 0.0 when either is all zeros.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        0.0
    } else {
        dot / (mag_a * mag_b)
    }
}

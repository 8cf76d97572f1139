pub mod error;
mod stopwords;
pub mod tfidf;
pub mod tokenizer;
pub mod vocabulary;

pub use error::IndexError;
pub use tfidf::{cosine_similarity, TermWeightingIndex, DEFAULT_MAX_TERMS};
pub use tokenizer::tokenize;
pub use vocabulary::Vocabulary;

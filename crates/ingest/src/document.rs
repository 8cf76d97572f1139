/// A loaded text file. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name the text was read from, e.g. `langgraph_llms.txt`
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Character count (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

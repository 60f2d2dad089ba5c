//! Type definitions for text statistics

use serde::{Serialize, Serializer};

/// State of the optional token count attached to a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCount {
    /// Tokenizer is still running for this cycle
    Pending,
    /// Final count; 0 when the tokenizer was unavailable
    Counted(usize),
}

impl TokenCount {
    pub fn is_pending(&self) -> bool {
        matches!(self, TokenCount::Pending)
    }

    /// Returns the count if the tokenizer has finished
    pub fn counted(&self) -> Option<usize> {
        match self {
            TokenCount::Pending => None,
            TokenCount::Counted(n) => Some(*n),
        }
    }
}

impl Serialize for TokenCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenCount::Pending => serializer.serialize_str("pending"),
            TokenCount::Counted(n) => serializer.serialize_u64(*n as u64),
        }
    }
}

/// Snapshot of statistics computed over one input text
///
/// Reports are plain values: each recomputation produces a fresh one and
/// nothing else refers back to the text it came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatisticsReport {
    /// Unicode scalar values in the input
    pub total_chars: usize,
    /// `total_chars` minus `spaces`
    pub total_chars_no_spaces: usize,
    /// Maximal runs of ASCII letters, ASCII digits and CJK ideographs
    pub words: usize,
    /// `\n`-separated segments, never less than 1
    pub lines: usize,
    pub paragraphs: usize,
    /// Code points in U+4E00..=U+9FFF
    pub chinese_chars: usize,
    /// ASCII letters
    pub english_chars: usize,
    /// ASCII digits
    pub numbers: usize,
    pub punctuation: usize,
    /// Spaces, tabs and line breaks
    pub spaces: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenCount>,
}

impl TextStatisticsReport {
    /// Report for the empty string
    pub fn empty() -> Self {
        Self {
            lines: 1,
            ..Self::default()
        }
    }

    /// Copy of this report carrying the given token state
    pub fn with_tokens(self, tokens: TokenCount) -> Self {
        Self {
            tokens: Some(tokens),
            ..self
        }
    }

    /// Sum of the classified buckets
    ///
    /// Always `<= total_chars`; the difference is anything
    /// outside the fixed classification (other scripts, emoji, ...).
    pub fn classified_chars(&self) -> usize {
        self.chinese_chars + self.english_chars + self.numbers + self.punctuation + self.spaces
    }
}

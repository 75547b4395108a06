pub mod lexicon;

pub use lexicon::LexiconClassifier;

use crate::domain::types::Sentiment;

/// Capability boundary for feedback polarity. The default implementation is
/// a word-list scorer; anything that maps text to a three-way label fits.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, feedback: &str) -> Sentiment;
}

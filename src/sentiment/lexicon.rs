use crate::domain::types::Sentiment;
use crate::sentiment::SentimentClassifier;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "fast", "quick", "love", "loved", "nice", "happy", "thanks",
    "thank", "awesome", "friendly", "reliable", "best", "perfect", "amazing", "polite", "early",
    "smooth", "helpful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "late", "slow", "terrible", "poor", "rude", "awful", "worst", "angry", "damaged",
    "lost", "horrible", "disappointed", "disappointing", "delay", "delayed", "missing", "broken",
    "unhappy", "wrong",
];

/// Word-list polarity scorer. Positive hits minus negative hits decides the
/// label; a zero balance (including empty feedback) is Neutral.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, feedback: &str) -> Sentiment {
        let mut polarity: i32 = 0;
        for word in feedback
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                polarity += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                polarity -= 1;
            }
        }

        if polarity > 0 {
            Sentiment::Positive
        } else if polarity < 0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

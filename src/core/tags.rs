//! Tag extraction from free-text reviews.
//!
//! A crude relevance-ranking heuristic, not a statistical model: word and
//! two-word-phrase frequency counting over lower-cased review bodies, with a
//! stop-word filter and a weight boost for product-related vocabulary. No
//! stemming, no lemmatization, no document-frequency weighting. The ranking
//! truncates to a candidate pool of 10 before applying the minimum-weight
//! filter and the final cut to 8; that operation order is part of the
//! observable contract and must not be collapsed into a single pass.

use crate::entities::Review;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

/// Maximum number of tags returned.
pub const MAX_TAGS: usize = 8;

/// Size of the ranked candidate pool considered before the weight filter.
const CANDIDATE_POOL: usize = 10;

/// Minimum accumulated weight for a candidate to be shown.
const MIN_WEIGHT: f64 = 2.0;

/// Weight of one occurrence of a product-vocabulary word.
const KEYWORD_WEIGHT: f64 = 3.0;

/// Boost applied to two-word phrases when ranking against single words.
const PHRASE_BOOST: f64 = 1.5;

/// Common function words and filler verbs excluded from tag candidacy.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "should", "could", "can", "may", "might", "must", "shall", "this",
        "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her",
        "us", "them", "my", "your", "his", "its", "our", "their", "very", "so", "too", "just",
        "now", "then", "than", "only", "also", "really", "quite", "all", "some", "any", "no",
        "not", "yes", "well", "get", "got", "getting", "go", "going", "went", "come", "came",
        "coming", "make", "made", "making", "take", "took", "taking", "see", "saw", "seen",
        "look", "looking", "looked", "use", "used", "using", "know", "knew", "known", "think",
        "thought", "thinking", "say", "said", "saying", "tell", "told", "work", "worked",
        "working", "give", "gave", "given", "put", "putting", "one", "two", "three",
    ]
    .into_iter()
    .collect()
});

/// Product-related vocabulary (quality, price, fit, delivery and the like)
/// given extra ranking weight.
static PRODUCT_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "quality",
        "durable",
        "comfortable",
        "lightweight",
        "heavy",
        "soft",
        "hard",
        "smooth",
        "rough",
        "fast",
        "slow",
        "easy",
        "difficult",
        "simple",
        "complex",
        "beautiful",
        "ugly",
        "stylish",
        "cheap",
        "expensive",
        "affordable",
        "reliable",
        "unreliable",
        "sturdy",
        "fragile",
        "perfect",
        "excellent",
        "amazing",
        "terrible",
        "awful",
        "fantastic",
        "wonderful",
        "disappointing",
        "recommend",
        "recommended",
        "worth",
        "value",
        "money",
        "price",
        "delivery",
        "shipping",
        "packaging",
        "design",
        "color",
        "size",
        "fit",
        "uncomfortable",
    ]
    .into_iter()
    .collect()
});

/// Extracts up to [`MAX_TAGS`] representative tags from a sequence of review
/// bodies, ranked by accumulated weight.
///
/// Deterministic for a fixed input; never fails; an empty input yields an
/// empty list.
pub fn extract_tags<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // BTreeMaps keep the candidate order deterministic; ties in the ranking
    // then resolve by table order under the stable sort.
    let mut word_frequency: BTreeMap<String, f64> = BTreeMap::new();
    let mut phrases: BTreeMap<String, f64> = BTreeMap::new();

    for text in texts {
        let words = tokenize(text);

        for word in &words {
            let weight = if PRODUCT_KEYWORDS.contains(word.as_str()) {
                KEYWORD_WEIGHT
            } else {
                1.0
            };
            *word_frequency.entry(word.clone()).or_insert(0.0) += weight;
        }

        // Adjacency is measured after the token filter, within one body:
        // surviving tokens separated by a dropped stop word count as a pair.
        for pair in words.windows(2) {
            let phrase = format!("{} {}", pair[0], pair[1]);
            if phrase.len() > 5 {
                *phrases.entry(phrase).or_insert(0.0) += 1.0;
            }
        }
    }

    let mut candidates: Vec<(String, f64)> = word_frequency.into_iter().collect();
    candidates.extend(
        phrases
            .into_iter()
            .map(|(phrase, freq)| (phrase, freq * PHRASE_BOOST)),
    );

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    candidates.truncate(CANDIDATE_POOL);
    candidates.retain(|(_, weight)| *weight >= MIN_WEIGHT);
    candidates.truncate(MAX_TAGS);

    candidates.into_iter().map(|(text, _)| text).collect()
}

/// [`extract_tags`] over a product's reviews.
pub fn review_tags<'a, I>(reviews: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Review>,
{
    extract_tags(reviews.into_iter().map(|r| r.review_text.as_str()))
}

/// Lower-cases, replaces every non-word character with a space, splits on
/// whitespace, and drops tokens of length <= 2, purely numeric tokens, and
/// stop words. Word characters are ASCII `[A-Za-z0-9_]`.
fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .filter(|word| !word.chars().all(|c| c.is_ascii_digit()))
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_list() {
        let no_texts: [&str; 0] = [];
        assert!(extract_tags(no_texts).is_empty());
        assert!(extract_tags(["", "   ", "\t\n"]).is_empty());
    }

    #[test]
    fn test_stop_words_never_become_tags() {
        assert!(extract_tags(["the and but"]).is_empty());
        // "her"/"him"/"them" and filler verbs are all filtered too.
        assert!(extract_tags(["got them looking, said putting!"]).is_empty());
    }

    #[test]
    fn test_short_and_numeric_tokens_are_dropped() {
        // "ok" is too short, "100" and "2024" are purely numeric.
        assert!(extract_tags(["ok 100 2024", "ok 100 2024"]).is_empty());
        // Mixed alphanumerics survive the numeric filter.
        let tags = extract_tags(["usb3 port", "usb3 port"]);
        assert!(tags.contains(&"usb3".to_string()));
    }

    #[test]
    fn test_punctuation_is_treated_as_whitespace() {
        let tags = extract_tags(["Sturdy, well-built!", "sturdy; (well) built..."]);
        assert!(tags.contains(&"sturdy".to_string()));
        assert!(tags.contains(&"built".to_string()));
    }

    #[test]
    fn test_keyword_boosting_outranks_equal_raw_count() {
        // "quality" is product vocabulary (weight 3 per mention), "banana"
        // is not (weight 1); equal mention counts must rank the keyword first.
        let tags = extract_tags(["banana quality", "banana quality"]);
        let quality_pos = tags.iter().position(|t| t == "quality").unwrap();
        let banana_pos = tags.iter().position(|t| t == "banana").unwrap();
        assert!(quality_pos < banana_pos);
    }

    #[test]
    fn test_phrase_formation_and_boost() {
        let tags = extract_tags(["excellent quality", "excellent quality"]);
        // Both words (weight 6 each) and the phrase (2 * 1.5 = 3) survive.
        assert!(tags.contains(&"excellent".to_string()));
        assert!(tags.contains(&"quality".to_string()));
        assert!(tags.contains(&"excellent quality".to_string()));
    }

    #[test]
    fn test_phrases_skip_dropped_stop_words() {
        // "sturdy and durable": the stop word vanishes before pairing, so
        // the surviving neighbors form the phrase.
        let tags = extract_tags(["sturdy and durable", "sturdy and durable"]);
        assert!(tags.contains(&"sturdy durable".to_string()));
    }

    #[test]
    fn test_minimum_weight_threshold() {
        // Single mentions: words weigh 1, the phrase weighs 1.5 - everything
        // is below the threshold of 2 even though all rank inside the pool.
        assert!(extract_tags(["banana apple"]).is_empty());
    }

    #[test]
    fn test_at_most_eight_tags() {
        // Twelve distinct non-keyword words, each mentioned twice (weight 2):
        // twelve candidates pass the threshold, the pool keeps ten, the final
        // cut keeps eight.
        let body = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let tags = extract_tags([body, body]);
        assert_eq!(tags.len(), MAX_TAGS);
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let texts = [
            "great quality and fast delivery",
            "quality is great but slow delivery",
            "sturdy packaging, excellent value",
        ];
        let first = extract_tags(texts);
        let second = extract_tags(texts);
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_ranking() {
        let tags = extract_tags([
            "great quality and fast delivery",
            "quality is great but slow delivery",
        ]);

        // "quality" and "delivery" accumulate 3 * 2 = 6 each and lead the
        // list in some order; "great" (1 * 2 = 2) survives the threshold;
        // "fast" and "slow" (weight 1) and all single phrases (1.5) do not.
        assert_eq!(tags.len(), 3);
        assert!(tags[..2].contains(&"quality".to_string()));
        assert!(tags[..2].contains(&"delivery".to_string()));
        assert_eq!(tags[2], "great");
    }

    #[test]
    fn test_review_tags_reads_review_text() {
        use crate::test_utils::sample_review_with_text;

        let reviews = vec![
            sample_review_with_text(1, 1, 1, 5, "excellent quality"),
            sample_review_with_text(2, 2, 1, 4, "excellent quality"),
        ];
        let tags = review_tags(&reviews);
        assert!(tags.contains(&"excellent quality".to_string()));
    }
}

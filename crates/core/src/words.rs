//! Datamuse word entries
//!
//! Datamuse packs pronunciation and frequency into the `tags` array as
//! `pron:` and `f:` prefixed strings. Normalization pulls them out into their
//! own fields so the remaining tags are plain parts of speech.

use serde::{Deserialize, Serialize};

pub const PRONUNCIATION_PREFIX: &str = "pron:";
pub const FREQUENCY_PREFIX: &str = "f:";

/// Word entry as returned by the `/words` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawWord {
    pub word: String,
    #[serde(default)]
    pub score: u64,
    #[serde(default, rename = "numSyllables")]
    pub num_syllables: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub defs: Vec<String>,
}

/// Word result ready for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordResult {
    pub word: String,
    pub score: u64,
    pub num_syllables: u32,
    /// Tags left after the prefixed entries were extracted.
    pub parts_of_speech: Vec<String>,
    /// Definitions, each prefixed with its part of speech and a tab.
    pub definitions: Vec<String>,
    pub pronunciation: String,
    pub frequency: f64,
    /// URL that produced this result.
    pub query_url: String,
}

/// Remove every tag starting with `prefix` and return the last one's suffix.
///
/// Returns an empty string when no tag matches. The remaining tags keep
/// their order.
pub fn extract_tag_prefix(tags: Vec<String>, prefix: &str) -> (String, Vec<String>) {
    let mut extracted = String::new();
    let mut remaining = Vec::with_capacity(tags.len());

    for tag in tags {
        match tag.strip_prefix(prefix) {
            Some(value) => extracted = value.to_string(),
            None => remaining.push(tag),
        }
    }

    (extracted, remaining)
}

/// Parse a frequency value, falling back to zero.
pub fn parse_frequency(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

/// Normalize a single entry, stamping it with `query_url`.
pub fn normalize_word(raw: RawWord, query_url: &str) -> WordResult {
    let (pronunciation, tags) = extract_tag_prefix(raw.tags, PRONUNCIATION_PREFIX);
    let (frequency, tags) = extract_tag_prefix(tags, FREQUENCY_PREFIX);

    WordResult {
        word: raw.word,
        score: raw.score,
        num_syllables: raw.num_syllables,
        parts_of_speech: tags,
        definitions: raw.defs,
        pronunciation,
        frequency: parse_frequency(&frequency),
        query_url: query_url.to_string(),
    }
}

/// Normalize a whole response, preserving order.
pub fn normalize_words(raw: Vec<RawWord>, query_url: &str) -> Vec<WordResult> {
    raw.into_iter()
        .map(|entry| normalize_word(entry, query_url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_tags(word: &str, tags: &[&str]) -> RawWord {
        RawWord {
            word: word.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_tag_prefix_found() {
        let tags = vec!["n".to_string(), "pron:F AY1 R".to_string()];
        let (value, remaining) = extract_tag_prefix(tags, PRONUNCIATION_PREFIX);

        assert_eq!(value, "F AY1 R");
        assert_eq!(remaining, vec!["n".to_string()]);
    }

    #[test]
    fn test_extract_tag_prefix_missing() {
        let tags = vec!["n".to_string(), "v".to_string()];
        let (value, remaining) = extract_tag_prefix(tags, FREQUENCY_PREFIX);

        assert_eq!(value, "");
        assert_eq!(remaining, vec!["n".to_string(), "v".to_string()]);
    }

    #[test]
    fn test_extract_tag_prefix_last_match_wins() {
        let tags = vec![
            "pron:FIRST".to_string(),
            "adj".to_string(),
            "pron:SECOND".to_string(),
        ];
        let (value, remaining) = extract_tag_prefix(tags, PRONUNCIATION_PREFIX);

        assert_eq!(value, "SECOND");
        assert_eq!(remaining, vec!["adj".to_string()]);
    }

    #[test]
    fn test_normalize_word_extracts_pronunciation_and_frequency() {
        let raw = raw_with_tags("burn", &["v", "pron:B ER1 N", "f:0.5"]);
        let result = normalize_word(raw, "https://api.datamuse.com/words?ml=fire");

        assert_eq!(result.pronunciation, "B ER1 N");
        assert_eq!(result.frequency, 0.5);
        assert_eq!(result.parts_of_speech, vec!["v".to_string()]);
        assert_eq!(result.query_url, "https://api.datamuse.com/words?ml=fire");
    }

    #[test]
    fn test_normalize_word_bad_frequency_defaults_to_zero() {
        let result = normalize_word(raw_with_tags("odd", &["f:not-a-number"]), "u");

        assert_eq!(result.frequency, 0.0);
        assert!(result.parts_of_speech.is_empty());
    }

    #[test]
    fn test_normalize_word_duplicate_frequency_last_wins() {
        let result = normalize_word(raw_with_tags("twice", &["f:1.5", "n", "f:2.25"]), "u");

        assert_eq!(result.frequency, 2.25);
        assert_eq!(result.parts_of_speech, vec!["n".to_string()]);
    }

    #[test]
    fn test_normalize_word_keeps_other_tags_in_order() {
        let raw = raw_with_tags(
            "burn off",
            &["syn", "v", "results_type:primary_rel", "pron:B ER1 N AO1 F ", "f:0.204818"],
        );
        let result = normalize_word(raw, "u");

        assert_eq!(
            result.parts_of_speech,
            vec![
                "syn".to_string(),
                "v".to_string(),
                "results_type:primary_rel".to_string()
            ]
        );
        assert_eq!(result.pronunciation, "B ER1 N AO1 F ");
        assert_eq!(result.frequency, 0.204818);
    }

    #[test]
    fn test_normalize_words_preserves_order_and_url() {
        let json = r#"[{"word":"pyro","score":522},{"word":"pyrometry","score":339},{"word":"pyrolysis","score":276}]"#;
        let raw: Vec<RawWord> = serde_json::from_str(json).unwrap();
        let url = "https://api.datamuse.com/words?sp=pyro%2A&max=3";

        let results = normalize_words(raw, url);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].word, "pyro");
        assert_eq!(results[0].score, 522);
        assert_eq!(results[1].word, "pyrometry");
        assert_eq!(results[1].score, 339);
        assert_eq!(results[2].word, "pyrolysis");
        assert_eq!(results[2].score, 276);
        assert!(results.iter().all(|r| r.query_url == url));
    }

    #[test]
    fn test_raw_word_deserializes_full_entry() {
        let json = r#"{
            "word": "burn down",
            "score": 30049985,
            "numSyllables": 2,
            "tags": ["syn","v","pron:B ER1 N D AW1 N ","f:0.416113"],
            "defs": ["v\t(transitive) To cause (a structure) to burn to nothing."]
        }"#;
        let raw: RawWord = serde_json::from_str(json).unwrap();

        assert_eq!(raw.num_syllables, 2);
        assert_eq!(raw.tags.len(), 4);

        let result = normalize_word(raw, "u");
        assert_eq!(result.pronunciation, "B ER1 N D AW1 N ");
        assert_eq!(result.frequency, 0.416113);
        assert_eq!(result.definitions.len(), 1);
        assert!(result.definitions[0].starts_with("v\t"));
    }

    #[test]
    fn test_normalize_words_empty() {
        assert!(normalize_words(Vec::new(), "u").is_empty());
    }
}

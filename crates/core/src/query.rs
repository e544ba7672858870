//! Datamuse query parameters and URL construction
//!
//! Pure functions for turning a [`QueryParams`] into the `/words` request URL.
//! Parameters are emitted in a fixed order so the same input always yields the
//! same string.

use serde::{Deserialize, Serialize};

/// Public Datamuse words endpoint.
pub const DATAMUSE_API_URL: &str = "https://api.datamuse.com/words";

/// Primary search style of a query.
///
/// The three lookup styles are mutually exclusive. `Related` sends no primary
/// parameter at all and relies on the relation codes instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    MeansLike,
    SoundsLike,
    SpelledLike,
    #[default]
    Related,
}

impl SearchMode {
    /// Query parameter carrying the search term, if this mode has one.
    pub fn param(self) -> Option<&'static str> {
        match self {
            SearchMode::MeansLike => Some("ml"),
            SearchMode::SoundsLike => Some("sl"),
            SearchMode::SpelledLike => Some("sp"),
            SearchMode::Related => None,
        }
    }
}

/// Parameters for a single `/words` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search_term: String,
    pub mode: SearchMode,
    /// Relation codes such as `ant` or `syn`, each sent as `rel_<code>`.
    pub relation_codes: Vec<String>,
    pub vocabulary: String,
    pub left_context: String,
    pub right_context: String,
    pub metadata: String,
    pub query_echo: String,
    pub topics: Vec<String>,
    /// Result cap. Zero leaves the cap to the server.
    pub max: usize,
}

/// Escape a string for use as a query key or value.
///
/// Unreserved characters pass through, spaces become `+` and everything else
/// is percent-encoded.
pub fn query_escape(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

impl QueryParams {
    /// Build the request URL against `base_url`.
    ///
    /// Never fails: bad input produces a URL the server rejects or answers
    /// with no results.
    pub fn build_url(&self, base_url: &str) -> String {
        let mut pairs: Vec<String> = Vec::new();

        let mut push = |key: &str, value: &str| {
            pairs.push(format!("{}={}", query_escape(key), query_escape(value)));
        };

        // The search term is sent even when empty.
        if let Some(key) = self.mode.param() {
            push(key, &self.search_term);
        }

        for (key, value) in [
            ("v", &self.vocabulary),
            ("lc", &self.left_context),
            ("rc", &self.right_context),
            ("md", &self.metadata),
            ("qe", &self.query_echo),
        ] {
            if !value.is_empty() {
                push(key, value);
            }
        }

        if !self.topics.is_empty() {
            push("topics", &self.topics.join(","));
        }

        for code in &self.relation_codes {
            push(&format!("rel_{code}"), &self.search_term);
        }

        if self.max > 0 {
            push("max", &self.max.to_string());
        }

        format!("{}?{}", base_url, pairs.join("&"))
    }
}

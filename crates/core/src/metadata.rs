//! Display options and the Datamuse `md` metadata string
//!
//! Five of the display toggles have a server-side counterpart: asking to see
//! definitions only makes sense if Datamuse was asked to return them. The
//! [`MetadataFlag`] table is the single place where a toggle is tied to its
//! metadata code, and both directions (flags to string, string to flags) go
//! through it.

use serde::{Deserialize, Serialize};

/// Literal a user can pass as metadata to request none explicitly.
pub const METADATA_NONE: &str = "none";

/// A display toggle that maps onto a Datamuse metadata code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFlag {
    Definitions,
    Frequency,
    PartsOfSpeech,
    Pronunciation,
    Syllables,
}

impl MetadataFlag {
    /// Every flag, in the order codes are appended to a metadata string.
    pub const ALL: [MetadataFlag; 5] = [
        MetadataFlag::Definitions,
        MetadataFlag::Frequency,
        MetadataFlag::PartsOfSpeech,
        MetadataFlag::Pronunciation,
        MetadataFlag::Syllables,
    ];

    /// Single-character code understood by the `md` query parameter.
    pub fn code(self) -> char {
        match self {
            MetadataFlag::Definitions => 'd',
            MetadataFlag::Frequency => 'f',
            MetadataFlag::PartsOfSpeech => 'p',
            MetadataFlag::Pronunciation => 'r',
            MetadataFlag::Syllables => 's',
        }
    }
}

/// Which parts of each result get printed.
///
/// `show_count`, `show_score` and `show_query_url` are display-only; the rest
/// are tied to a [`MetadataFlag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub show_count: bool,
    pub show_definitions: bool,
    pub show_frequency: bool,
    pub show_parts_of_speech: bool,
    pub show_pronunciation: bool,
    pub show_score: bool,
    pub show_query_url: bool,
    pub show_syllables: bool,
}

impl DisplayOptions {
    pub fn shows(&self, flag: MetadataFlag) -> bool {
        match flag {
            MetadataFlag::Definitions => self.show_definitions,
            MetadataFlag::Frequency => self.show_frequency,
            MetadataFlag::PartsOfSpeech => self.show_parts_of_speech,
            MetadataFlag::Pronunciation => self.show_pronunciation,
            MetadataFlag::Syllables => self.show_syllables,
        }
    }

    fn toggle_mut(&mut self, flag: MetadataFlag) -> &mut bool {
        match flag {
            MetadataFlag::Definitions => &mut self.show_definitions,
            MetadataFlag::Frequency => &mut self.show_frequency,
            MetadataFlag::PartsOfSpeech => &mut self.show_parts_of_speech,
            MetadataFlag::Pronunciation => &mut self.show_pronunciation,
            MetadataFlag::Syllables => &mut self.show_syllables,
        }
    }

    /// Turn on the display toggle for every code present in `metadata`.
    ///
    /// Matching is case-insensitive. Toggles already on stay on; nothing is
    /// ever switched off.
    pub fn with_metadata(mut self, metadata: &str) -> Self {
        let metadata = metadata.to_lowercase();

        for flag in MetadataFlag::ALL {
            if metadata.contains(flag.code()) {
                *self.toggle_mut(flag) = true;
            }
        }

        self
    }
}

/// Merge a user-supplied metadata string with the enabled display toggles.
///
/// `"none"` (any case) is read as an empty string. Characters of `existing`
/// keep their position; missing codes are appended in [`MetadataFlag::ALL`]
/// order. Applying the function twice with the same options is a no-op.
pub fn reconcile_metadata(existing: &str, options: &DisplayOptions) -> String {
    let existing = if existing.eq_ignore_ascii_case(METADATA_NONE) {
        ""
    } else {
        existing
    };

    let mut metadata = String::from(existing);

    for flag in MetadataFlag::ALL {
        if options.shows(flag) && !existing.contains(flag.code()) {
            metadata.push(flag.code());
        }
    }

    metadata
}

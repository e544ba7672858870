//! Core library for polyhymnia
//!
//! This crate implements the **Functional Core** of the polyhymnia word finder,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The polyhymnia project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`polyhymnia_core`** (this crate): Pure transformation functions with zero I/O
//! - **`polyhymnia`**: HTTP transport, printing and CLI orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`metadata`]: Display options and the metadata flag string sent to Datamuse
//! - [`query`]: Query parameters and the request URL builder
//! - [`words`]: Raw Datamuse word entries and their normalization
//!
//! # Example Usage
//!
//! ```rust
//! use polyhymnia_core::query::{QueryParams, SearchMode, DATAMUSE_API_URL};
//! use polyhymnia_core::words::{normalize_words, RawWord};
//!
//! let params = QueryParams {
//!     search_term: "pyro*".to_string(),
//!     mode: SearchMode::SpelledLike,
//!     max: 3,
//!     ..Default::default()
//! };
//!
//! let url = params.build_url(DATAMUSE_API_URL);
//! assert_eq!(url, "https://api.datamuse.com/words?sp=pyro%2A&max=3");
//!
//! let raw = vec![RawWord {
//!     word: "pyro".to_string(),
//!     score: 522,
//!     ..Default::default()
//! }];
//!
//! let results = normalize_words(raw, &url);
//! assert_eq!(results[0].query_url, url);
//! ```

pub mod metadata;
pub mod query;
pub mod words;

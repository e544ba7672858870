/// Hard failures of a word query. Any of these aborts the whole query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no search term provided")]
    MissingSearchTerm,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("failed to create request: {0}")]
    Request(String),

    #[error("failed to send request: {0}")]
    Network(String),

    #[error("unexpected response code: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to parse JSON: {0}")]
    Decode(String),
}

//! Error taxonomy for the viewer.
//!
//! None of these are fatal: the session keeps running and the user can
//! resubmit.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// The startup catalog request failed or returned no lists.
    #[error("could not load word lists: {0}")]
    CatalogLoadFailed(String),

    /// A request was attempted with an empty list id or an out-of-range size.
    ///
    /// The form prevents this; the fetcher rejects it before reaching the service.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The grid request was rejected, failed in transport, or came back malformed.
    #[error("grid request failed: {0}")]
    RequestFailed(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

//! Library error type.

use thiserror::Error;

/// Failures surfaced to the adapter layer.
///
/// The two not-found variants are recoverable; the caller drops the event
/// and keeps its state. `InvalidRecipe` only comes out of catalog
/// construction and should be treated as a startup failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no order found with the name {0:?}")]
    UnknownOrder(String),

    #[error("no recipient found with the name {0:?}")]
    UnknownRecipient(String),

    #[error("invalid recipe {name:?}: {reason}")]
    InvalidRecipe {
        name: &'static str,
        reason: String,
    },
}

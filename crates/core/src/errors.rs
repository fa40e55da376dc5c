use thiserror::Error;

/// Failures that can occur before a request ever reaches the engine.
///
/// The engine itself is total; only the boundary that receives and
/// parses a payload can fail, and every boundary maps this error into
/// the fixed fallback response instead of propagating it.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("empty request payload")]
    EmptyPayload,
    #[error("malformed request payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

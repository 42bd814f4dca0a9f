//! Error types for event decoding.

use thiserror::Error;

/// Errors produced while decoding a raw payload into a typed event.
///
/// Decode failures belong to the transport adapter; they never occur
/// inside the dispatch path, which only ever sees fully decoded events.
#[derive(Debug, Error)]
pub enum EventDecodeError {
    /// The kind string does not name a supported event kind.
    #[error("Unsupported event kind: {kind}")]
    UnknownKind { kind: String },

    /// The payload is not a well-formed instance of the named kind.
    #[error("Malformed {kind} payload: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

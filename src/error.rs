use std::error::Error as StdError;
use std::fmt;

use crate::http::TransportError;
use crate::json::JsonError;
use crate::model::id::InteractionId;
use crate::model::ModelError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than the
/// usual 2 (`Result<T, Error>`). This is because all functions that return a result return
/// this crate's [`Error`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A common error enum returned by most of the library's functionality within a custom
/// [`Result`].
///
/// None of these are retried by the library. [`Error::AlreadyResponded`] and
/// [`Error::Dispatch`] are recoverable by the caller; [`Error::ProtocolInvariant`] points at a
/// defect in whatever produced the interaction.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A precondition that the producer of the interaction guarantees was violated.
    ProtocolInvariant(ProtocolInvariantViolation),
    /// The interaction was already given its initial response. No delivery was attempted.
    AlreadyResponded(InteractionId),
    /// The transport failed to deliver the response. The interaction is still awaiting a
    /// response, so the same entry point may be called again.
    Dispatch(TransportError),
    /// The response payload failed validation before it was sent.
    Model(ModelError),
    /// An error from the `serde_json` crate while encoding the payload.
    Json(JsonError),
}

impl Error {
    /// Returns true when the interaction can still receive its initial response after this
    /// error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }
}

impl From<ProtocolInvariantViolation> for Error {
    fn from(e: ProtocolInvariantViolation) -> Error {
        Error::ProtocolInvariant(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Error {
        Error::Dispatch(e)
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Error {
        Error::Model(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProtocolInvariant(inner) => fmt::Display::fmt(&inner, f),
            Self::AlreadyResponded(id) => {
                write!(f, "Interaction {id} has already been responded to")
            },
            Self::Dispatch(inner) => write!(f, "Failed to dispatch interaction response: {inner}"),
            Self::Model(inner) => fmt::Display::fmt(&inner, f),
            Self::Json(inner) => fmt::Display::fmt(&inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::ProtocolInvariant(inner) => Some(inner),
            Self::Dispatch(inner) => Some(inner),
            Self::Model(inner) => Some(inner),
            Self::Json(inner) => Some(inner),
            Self::AlreadyResponded(_) => None,
        }
    }
}

/// A field that every component interaction carries was absent.
///
/// Discord only sends interactions for components that have a custom id, and always includes at
/// least the id of the message the component is on. Seeing one of these means the interaction
/// was built or parsed incorrectly upstream.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ProtocolInvariantViolation {
    MissingCustomId,
    MissingMessageId,
}

impl fmt::Display for ProtocolInvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCustomId => f.write_str("Component interaction is missing its custom id"),
            Self::MissingMessageId => {
                f.write_str("Component interaction is missing its message id")
            },
        }
    }
}

impl StdError for ProtocolInvariantViolation {}

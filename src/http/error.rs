use std::error::Error as StdError;
use std::fmt;

/// The parts of a rejected request worth keeping around after the response is gone.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ErrorResponse {
    pub status_code: u16,
    pub body: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

/// A failed delivery, as reported by a [`Transport`].
///
/// [`Transport`]: super::Transport
#[derive(Debug)]
#[non_exhaustive]
pub enum TransportError {
    /// When a non-successful status code was received for a request.
    UnsuccessfulRequest(ErrorResponse),
    /// The request did not complete within the transport's deadline.
    Timeout,
    /// Any other failure of the underlying client.
    Other(Box<dyn StdError + Send + Sync>),
}

impl TransportError {
    /// Returns the status code of a rejected request, if the remote end answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnsuccessfulRequest(response) => Some(response.status_code),
            _ => None,
        }
    }
}

impl From<ErrorResponse> for TransportError {
    fn from(response: ErrorResponse) -> TransportError {
        TransportError::UnsuccessfulRequest(response)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsuccessfulRequest(response) => write!(
                f,
                "A non-successful response status code was received: {}",
                response.status_code
            ),
            Self::Timeout => f.write_str("The request timed out"),
            Self::Other(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Other(inner) => Some(&**inner),
            _ => None,
        }
    }
}

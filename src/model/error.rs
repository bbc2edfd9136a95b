//! Error enum definition wrapping potential model implementation errors.

use std::error::Error as StdError;
use std::fmt;

/// Limits Discord enforces on message payloads.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Maximum {
    /// Characters of message content.
    MessageLength,
    /// Embeds attached to a single message.
    EmbedCount,
    /// Combined text of all embeds on a message.
    EmbedLength,
}

impl Maximum {
    pub(crate) fn check_overflow(self, value: usize) -> Result<(), Error> {
        let max = self.value();
        if value > max {
            Err(Error::TooLarge {
                maximum: self,
                value,
            })
        } else {
            Ok(())
        }
    }

    /// The largest accepted value.
    #[must_use]
    pub fn value(self) -> usize {
        match self {
            Self::MessageLength => crate::constants::MESSAGE_CODE_LIMIT,
            Self::EmbedCount => crate::constants::EMBED_MAX_COUNT,
            Self::EmbedLength => crate::constants::EMBED_MAX_LENGTH,
        }
    }
}

impl fmt::Display for Maximum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageLength => f.write_str("Message length"),
            Self::EmbedCount => f.write_str("Embed count"),
            Self::EmbedLength => f.write_str("Embed length"),
        }
    }
}

/// An error returned from the [`model`] module.
///
/// This is always wrapped within the library's [`Error::Model`] variant.
///
/// [`model`]: crate::model
/// [`Error::Model`]: crate::Error::Model
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A response payload exceeded one of Discord's limits.
    TooLarge { maximum: Maximum, value: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge {
                maximum,
                value,
            } => {
                write!(f, "{maximum} too large: {value} > {}", maximum.value())
            },
        }
    }
}

impl StdError for Error {}

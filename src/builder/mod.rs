//! A set of builders used to make using methods on certain structs simpler to use.
//!
//! These are used when not all parameters are required, all parameters are optional, and/or sane
//! default values for required parameters can be applied by a builder.

// Option<Option<T>> is required to tell "left unset" apart from "explicitly cleared"
#![allow(clippy::option_option)]

use async_trait::async_trait;

use crate::internal::prelude::*;
use crate::model::ModelError;

/// Common trait for all HTTP request builders in this module.
#[async_trait]
pub trait Builder {
    /// Additional data that's only required when sending a request off to the API.
    type Context<'ctx>;
    /// The type returned by the request.
    type Built;

    /// Serializes a builder's fields and sends the request off the API, returning the response.
    async fn execute(self, ctx: Self::Context<'_>) -> Result<Self::Built>;
}

pub(crate) fn check_lengths(
    content: Option<&str>,
    embeds: Option<&[CreateEmbed]>,
) -> StdResult<(), ModelError> {
    use crate::model::error::Maximum;

    if let Some(content) = content {
        Maximum::MessageLength.check_overflow(content.chars().count())?;
    }

    if let Some(embeds) = embeds {
        Maximum::EmbedCount.check_overflow(embeds.len())?;

        let length = embeds.iter().map(CreateEmbed::get_length).sum();
        Maximum::EmbedLength.check_overflow(length)?;
    }

    Ok(())
}

mod create_allowed_mentions;
mod create_components;
mod create_embed;
mod create_response_message;

pub use create_allowed_mentions::*;
pub use create_components::*;
pub use create_embed::*;
pub use create_response_message::*;

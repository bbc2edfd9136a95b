//! The boundary through which interaction responses leave the process.
//!
//! Rate limiting, retries, authentication and the HTTP client itself all live behind the
//! [`Transport`] trait. The library never retries a failed delivery on its own: the
//! [`ResponseDispatcher`] only hands each response to the transport once, and reports the outcome
//! to its caller.
//!
//! A transport must not report failure for a response that the remote end accepted. The
//! dispatcher treats any [`TransportError`] as "not delivered" and allows the interaction to be
//! responded to again.
//!
//! [`ResponseDispatcher`]: crate::dispatch::ResponseDispatcher

mod error;
#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

pub use self::error::{ErrorResponse, TransportError};
use crate::model::application::InteractionResponseType;
use crate::model::id::InteractionId;

/// Sends the initial response to an interaction.
///
/// `payload` is the encoded `data` object of the interaction callback, or `None` when the
/// response type carries no data. Implementations forward it unchanged.
///
/// Sending is not idempotent: calling this twice for the same interaction sends two responses.
/// Guarding against that is the [`ResponseDispatcher`]'s job.
///
/// [`ResponseDispatcher`]: crate::dispatch::ResponseDispatcher
#[async_trait]
pub trait Transport: Send + Sync {
    /// Delivers a response of the given `kind` for the interaction `interaction_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the response was not delivered.
    async fn send_interaction_response(
        &self,
        interaction_id: InteractionId,
        kind: InteractionResponseType,
        payload: Option<Bytes>,
    ) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send_interaction_response(
        &self,
        interaction_id: InteractionId,
        kind: InteractionResponseType,
        payload: Option<Bytes>,
    ) -> Result<(), TransportError> {
        (**self).send_interaction_response(interaction_id, kind, payload).await
    }
}

//! The state machine enforcing a single initial response per interaction.
//!
//! Every interaction starts out [`ResponseState::Pending`]. The first response the [`Transport`]
//! reports as delivered moves it to [`ResponseState::Responded`], where it stays. Any later
//! attempt fails with [`Error::AlreadyResponded`] before reaching the transport.
//!
//! Checking the state, sending, and recording the result happen under one per-interaction lock,
//! so when several tasks race to respond, exactly one delivery is attempted at a time and at most
//! one ever succeeds. A failed delivery leaves the interaction pending.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
#[cfg(feature = "tracing_instrument")]
use tracing::instrument;
use tracing::{debug, trace};

use crate::builder::ResponseSpec;
use crate::http::Transport;
use crate::internal::prelude::*;
use crate::json;
use crate::model::application::InteractionResponseType;
use crate::model::id::InteractionId;

/// Whether an interaction has received its initial response.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResponseState {
    /// No response has been delivered yet.
    Pending,
    /// A response was delivered. Terminal.
    Responded,
}

/// Sends the initial response of one interaction, at most once.
///
/// Each entry point maps to exactly one response type:
///
/// | Method                       | Response type             | Payload            |
/// |------------------------------|---------------------------|--------------------|
/// | [`Self::update_message`]     | `UPDATE_MESSAGE`          | the message edit   |
/// | [`Self::defer_update`]       | `DEFERRED_UPDATE_MESSAGE` | none               |
/// | [`Self::defer_update_ephemeral`] | `DEFERRED_UPDATE_MESSAGE` | `{"flags": 64}` |
pub struct ResponseDispatcher {
    interaction_id: InteractionId,
    transport: Arc<dyn Transport>,
    state: Mutex<ResponseState>,
    // Mirrors `state` once it turns terminal, for lock-free reads.
    responded: AtomicBool,
}

impl ResponseDispatcher {
    #[must_use]
    pub fn new(interaction_id: InteractionId, transport: Arc<dyn Transport>) -> Self {
        Self {
            interaction_id,
            transport,
            state: Mutex::new(ResponseState::Pending),
            responded: AtomicBool::new(false),
        }
    }

    /// The interaction this dispatcher responds to.
    #[must_use]
    pub fn interaction_id(&self) -> InteractionId {
        self.interaction_id
    }

    /// The current state. A response being delivered right now still reads as pending.
    #[must_use]
    pub fn state(&self) -> ResponseState {
        if self.responded.load(Ordering::Acquire) {
            ResponseState::Responded
        } else {
            ResponseState::Pending
        }
    }

    #[must_use]
    pub fn is_responded(&self) -> bool {
        self.state() == ResponseState::Responded
    }

    /// Responds by editing the message the component is on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyResponded`] if a response was already delivered,
    /// [`Error::Model`] if the edit exceeds Discord's message limits, [`Error::Json`] if it cannot
    /// be encoded, or [`Error::Dispatch`] if the transport failed. Only the first leaves the
    /// interaction responded.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, spec)))]
    pub async fn update_message(&self, spec: ResponseSpec) -> Result<()> {
        self.ensure_pending()?;
        spec.check_lengths()?;

        self.dispatch(InteractionResponseType::UpdateMessage, Some(&spec)).await
    }

    /// Acknowledges the interaction without changing the message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyResponded`] if a response was already delivered, or
    /// [`Error::Dispatch`] if the transport failed.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self)))]
    pub async fn defer_update(&self) -> Result<()> {
        self.dispatch(InteractionResponseType::DeferredUpdateMessage, None).await
    }

    /// Acknowledges the interaction, signalling that the follow-up will be ephemeral.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyResponded`] if a response was already delivered,
    /// [`Error::Json`] if the payload cannot be encoded, or [`Error::Dispatch`] if the transport
    /// failed.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self)))]
    pub async fn defer_update_ephemeral(&self) -> Result<()> {
        let spec = ResponseSpec::deferred_ephemeral();
        self.dispatch(InteractionResponseType::DeferredUpdateMessage, Some(&spec)).await
    }

    fn ensure_pending(&self) -> Result<()> {
        if self.is_responded() {
            debug!("Interaction {} already responded to, not sending", self.interaction_id);
            return Err(Error::AlreadyResponded(self.interaction_id));
        }

        Ok(())
    }

    async fn dispatch(
        &self,
        kind: InteractionResponseType,
        spec: Option<&ResponseSpec>,
    ) -> Result<()> {
        self.ensure_pending()?;
        let payload = spec.map(json::to_bytes).transpose()?;

        let mut state = self.state.lock().await;
        // Another caller may have responded while this one waited for the lock.
        if *state == ResponseState::Responded {
            debug!("Interaction {} already responded to, not sending", self.interaction_id);
            return Err(Error::AlreadyResponded(self.interaction_id));
        }

        trace!("Sending {:?} response to interaction {}", kind, self.interaction_id);
        if let Err(why) =
            self.transport.send_interaction_response(self.interaction_id, kind, payload).await
        {
            debug!("Response to interaction {} not delivered: {}", self.interaction_id, why);
            return Err(Error::Dispatch(why));
        }

        *state = ResponseState::Responded;
        self.responded.store(true, Ordering::Release);
        debug!("Interaction {} responded with {:?}", self.interaction_id, kind);

        Ok(())
    }
}

impl std::fmt::Debug for ResponseDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseDispatcher")
            .field("interaction_id", &self.interaction_id)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

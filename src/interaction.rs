//! The handler-facing view of a received component interaction.

use std::sync::Arc;

#[cfg(feature = "tracing_instrument")]
use tracing::instrument;

use crate::builder::CreateResponseMessage;
use crate::dispatch::{ResponseDispatcher, ResponseState};
use crate::http::Transport;
use crate::internal::prelude::*;
use crate::model::application::ComponentInteraction;
use crate::model::channel::Message;
use crate::model::id::MessageId;
use crate::settings::DefaultsProvider;

/// A component interaction, together with everything needed to respond to it.
///
/// Created once per received interaction by whatever dispatches events, and handed to the
/// handlers. It can be shared between tasks behind an [`Arc`]; however many of them try,
/// only one of [`Self::edit`], [`Self::acknowledge`] and [`Self::acknowledge_ephemeral`] ever
/// succeeds.
pub struct InteractionContext {
    interaction: ComponentInteraction,
    defaults: Arc<dyn DefaultsProvider>,
    dispatcher: ResponseDispatcher,
}

impl InteractionContext {
    #[must_use]
    pub fn new(
        interaction: ComponentInteraction,
        transport: Arc<dyn Transport>,
        defaults: Arc<dyn DefaultsProvider>,
    ) -> Self {
        let dispatcher = ResponseDispatcher::new(interaction.id, transport);

        Self {
            interaction,
            defaults,
            dispatcher,
        }
    }

    /// The interaction as received.
    #[must_use]
    pub fn interaction(&self) -> &ComponentInteraction {
        &self.interaction
    }

    /// Gets the developer-defined custom id of the component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProtocolInvariant`] if the interaction has no custom id, which Discord
    /// never sends for component interactions.
    pub fn custom_id(&self) -> Result<&str> {
        Ok(self.interaction.custom_id()?)
    }

    /// Gets the message the component is on.
    ///
    /// For ephemeral messages this may be absent; use [`Self::message_id`] instead.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.interaction.message()
    }

    /// Gets the Id of the message the component is on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProtocolInvariant`] if the message Id is missing, which Discord never
    /// sends for component interactions.
    pub fn message_id(&self) -> Result<MessageId> {
        Ok(self.interaction.message_id()?)
    }

    /// Whether the initial response has been delivered.
    #[must_use]
    pub fn state(&self) -> ResponseState {
        self.dispatcher.state()
    }

    #[must_use]
    pub fn is_responded(&self) -> bool {
        self.dispatcher.is_responded()
    }

    /// Responds by immediately editing the message the component is on.
    ///
    /// Fields the builder leaves unset are filled from the process-wide defaults, read once for
    /// this call.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyResponded`] if the interaction was already responded to,
    /// [`Error::Model`] if the edit is too large, or [`Error::Dispatch`] if the response could
    /// not be delivered. After anything but the first, the edit may be tried again.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self, builder)))]
    pub async fn edit(&self, builder: CreateResponseMessage) -> Result<()> {
        let spec = builder.build(&self.defaults.snapshot());
        self.dispatcher.update_message(spec).await
    }

    /// Responds by acknowledging the interaction without changing the message. The user sees a
    /// loading state until the message is updated with a follow-up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyResponded`] if the interaction was already responded to, or
    /// [`Error::Dispatch`] if the response could not be delivered.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self)))]
    pub async fn acknowledge(&self) -> Result<()> {
        self.dispatcher.defer_update().await
    }

    /// Responds by acknowledging the interaction, signalling that the follow-up will be
    /// ephemeral.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyResponded`] if the interaction was already responded to, or
    /// [`Error::Dispatch`] if the response could not be delivered.
    #[cfg_attr(feature = "tracing_instrument", instrument(skip(self)))]
    pub async fn acknowledge_ephemeral(&self) -> Result<()> {
        self.dispatcher.defer_update_ephemeral().await
    }
}

impl std::fmt::Debug for InteractionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionContext")
            .field("interaction", &self.interaction)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

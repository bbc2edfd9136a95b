use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::ComponentType;
use crate::error::ProtocolInvariantViolation;
use crate::internal::prelude::*;
use crate::model::channel::Message;
use crate::model::id::{ApplicationId, ChannelId, InteractionId, MessageId};

/// An interaction triggered by a message component.
///
/// Delivered by Discord when a user clicks a button or submits a select menu on a message the
/// application sent. The value is read-only: responding to it goes through an
/// [`InteractionContext`].
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-structure).
///
/// [`InteractionContext`]: crate::InteractionContext
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ComponentInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The data of the interaction which was triggered.
    pub data: ComponentInteractionData,
    /// The channel Id this interaction was sent from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    /// The message this interaction was triggered by, if its contents were sent along.
    ///
    /// **Note**: For ephemeral messages only [`Self::message_id`] is guaranteed to be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    /// The Id of the message this interaction was triggered by, when the message itself was not
    /// sent along.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<MessageId>,
    /// A continuation token for responding to the interaction.
    pub token: SecretString,
    /// Always `1`.
    #[serde(default = "default_version")]
    pub version: u8,
    /// The selected language of the invoking user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

fn default_version() -> u8 {
    1
}

impl ComponentInteraction {
    /// Gets the developer-defined custom id of the component.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolInvariantViolation::MissingCustomId`] if the interaction carries no
    /// custom id. Discord never sends interactions for components without one (such as link
    /// buttons), so this points at a bug in whatever produced the interaction.
    pub fn custom_id(&self) -> StdResult<&str, ProtocolInvariantViolation> {
        self.data.custom_id.as_deref().ok_or(ProtocolInvariantViolation::MissingCustomId)
    }

    /// Gets the message the component is on, if its contents were sent along.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_deref()
    }

    /// Gets the Id of the message the component is on.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolInvariantViolation::MissingMessageId`] if neither the message nor its Id
    /// is present. At least the Id is always present on component interactions.
    pub fn message_id(&self) -> StdResult<MessageId, ProtocolInvariantViolation> {
        self.message
            .as_ref()
            .map(|message| message.id)
            .or(self.message_id)
            .ok_or(ProtocolInvariantViolation::MissingMessageId)
    }
}

/// The data of an interaction triggered by a message component.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-message-component-data-structure).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ComponentInteractionData {
    /// The custom id of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// The type of the component.
    pub component_type: ComponentType,
    /// The values the user selected, for select menus.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// The response types reachable from a component interaction.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type).
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum InteractionResponseType {
    /// Acknowledges the interaction; the message is updated later. The user sees a loading
    /// state until then.
    DeferredUpdateMessage = 6,
    /// Edits the message the component was attached to.
    UpdateMessage = 7,
}

impl Serialize for InteractionResponseType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

bitflags! {
    /// The flags for an interaction response message.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object-message-flags)
    /// ([only some are valid in this context](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages))
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct InteractionResponseFlags: u64 {
        /// Do not include any embeds when serializing this message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Interaction message will only be visible to sender and will
        /// be quickly deleted.
        const EPHEMERAL = 1 << 6;
        /// Does not trigger push notifications or desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
    }
}

impl Serialize for InteractionResponseFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::json;

    fn interaction(data: Value) -> ComponentInteraction {
        serde_json::from_value(data).unwrap()
    }

    #[test]
    fn test_component_interaction_deserialize() {
        let interaction = interaction(json!({
            "id": "846462639134605312",
            "application_id": "772277888223051776",
            "type": 3,
            "data": {"custom_id": "click_one", "component_type": 2},
            "channel_id": "345626669114982402",
            "message": {"id": "846462631144226826", "channel_id": "345626669114982402"},
            "token": "unique_interaction_token",
            "version": 1,
            "locale": "en-US",
        }));

        assert_eq!(interaction.custom_id().unwrap(), "click_one");
        assert_eq!(interaction.message_id().unwrap(), MessageId::new(846462631144226826));
        assert_eq!(interaction.data.component_type, ComponentType::Button);
        assert_eq!(interaction.token.expose_secret(), "unique_interaction_token");
    }

    #[test]
    fn test_missing_custom_id() {
        let interaction = interaction(json!({
            "id": "1",
            "application_id": "2",
            "data": {"component_type": 2},
            "message_id": "3",
            "token": "t",
        }));

        assert_eq!(interaction.custom_id(), Err(ProtocolInvariantViolation::MissingCustomId));
    }

    #[test]
    fn test_message_id_without_message() {
        let interaction = interaction(json!({
            "id": "1",
            "application_id": "2",
            "data": {"custom_id": "menu", "component_type": 3, "values": ["a", "b"]},
            "message_id": "3",
            "token": "t",
        }));

        assert!(interaction.message().is_none());
        assert_eq!(interaction.message_id(), Ok(MessageId::new(3)));
        assert_eq!(interaction.data.values, ["a", "b"]);

        let interaction = self::interaction(json!({
            "id": "1",
            "application_id": "2",
            "data": {"custom_id": "menu", "component_type": 3},
            "token": "t",
        }));

        assert_eq!(interaction.message_id(), Err(ProtocolInvariantViolation::MissingMessageId));
    }

    #[test]
    fn test_response_type_codes() {
        assert_eq!(serde_json::to_value(InteractionResponseType::UpdateMessage).unwrap(), 7);
        assert_eq!(serde_json::to_value(InteractionResponseType::DeferredUpdateMessage).unwrap(), 6);
        assert_eq!(serde_json::to_value(InteractionResponseFlags::EPHEMERAL).unwrap(), 64);
    }
}

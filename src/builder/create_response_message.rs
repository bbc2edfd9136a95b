use async_trait::async_trait;
use serde::Serialize;

use super::{check_lengths, Builder, CreateActionRow, CreateAllowedMentions, CreateEmbed};
use crate::interaction::InteractionContext;
use crate::internal::prelude::*;
use crate::model::application::InteractionResponseFlags;
use crate::model::ModelError;
use crate::settings::ResponseDefaults;

/// Collects the fields of a component message edit.
///
/// Every field starts out unset. [`Self::build`] turns the builder into a [`ResponseSpec`],
/// filling each field that was left unset from the process-wide [`ResponseDefaults`]. A field the
/// caller set, even to "no restriction" via [`Self::clear_allowed_mentions`], is never replaced by
/// a default.
///
/// The setters take `self` by value, so a partially configured builder can be cloned and reused
/// without one branch affecting another.
///
/// # Examples
///
/// ```rust
/// use component_response::builder::{CreateAllowedMentions, CreateEmbed, CreateResponseMessage};
/// use component_response::settings::ResponseDefaults;
///
/// let defaults = ResponseDefaults::new().allowed_mentions(CreateAllowedMentions::new());
///
/// let builder = CreateResponseMessage::new()
///     .content("Vote counted!")
///     .embed(CreateEmbed::new().title("Results").field("Yes", "12", true));
///
/// let spec = builder.build(&defaults);
/// assert_eq!(spec.content(), Some("Vote counted!"));
/// assert_eq!(spec.allowed_mentions(), Some(&CreateAllowedMentions::new()));
/// ```
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages).
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct CreateResponseMessage {
    content: Option<String>,
    embeds: Option<Vec<CreateEmbed>>,
    components: Option<Vec<CreateActionRow>>,
    allowed_mentions: Option<Option<CreateAllowedMentions>>,
    suppress_embeds: Option<bool>,
}

impl CreateResponseMessage {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Adds an embed to the message.
    ///
    /// Calling this while editing a message will overwrite the embeds currently on it.
    pub fn embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.get_or_insert_with(Vec::new).push(embed);
        self
    }

    /// Sets the embeds of the message, replacing any added so far.
    ///
    /// Passing an empty list removes all embeds from the edited message.
    pub fn embeds(mut self, embeds: impl Into<Vec<CreateEmbed>>) -> Self {
        self.embeds = Some(embeds.into());
        self
    }

    /// Sets the components of this message.
    ///
    /// Passing an empty list removes all components from the edited message.
    pub fn components(mut self, components: impl Into<Vec<CreateActionRow>>) -> Self {
        self.components = Some(components.into());
        self
    }

    /// Adds a clickable button to this message.
    ///
    /// Convenience method that wraps [`Self::components`]. Arranges buttons in action rows
    /// automatically.
    pub fn button(mut self, button: super::CreateButton) -> Self {
        let rows = self.components.get_or_insert_with(Vec::new);
        let row_with_space_left = rows.last_mut().and_then(|row| match row {
            CreateActionRow::Buttons(buttons)
                if buttons.len() < crate::constants::BUTTONS_PER_ROW =>
            {
                Some(buttons)
            },
            CreateActionRow::Buttons(_) => None,
        });
        match row_with_space_left {
            Some(row) => row.push(button),
            None => rows.push(CreateActionRow::buttons(vec![button])),
        }
        self
    }

    /// Set the allowed mentions for the message, overriding the process-wide default.
    pub fn allowed_mentions(mut self, allowed_mentions: CreateAllowedMentions) -> Self {
        self.allowed_mentions = Some(Some(allowed_mentions));
        self
    }

    /// Sends the message without any allowed mentions restriction, even if a process-wide
    /// default is configured. Discord then applies its own parsing rules to the content.
    pub fn clear_allowed_mentions(mut self) -> Self {
        self.allowed_mentions = Some(None);
        self
    }

    /// Sets whether embeds are hidden on the edited message, overriding the process-wide
    /// default.
    pub fn suppress_embeds(mut self, suppress: bool) -> Self {
        self.suppress_embeds = Some(suppress);
        self
    }

    /// Resolves the builder against `defaults` into an immutable [`ResponseSpec`].
    ///
    /// Each field is resolved on its own: the caller's value if one was set, otherwise the
    /// default, otherwise absent. The builder is left untouched, so building again with other
    /// defaults gives the same caller-set fields.
    pub fn build(&self, defaults: &ResponseDefaults) -> ResponseSpec {
        let allowed_mentions = match &self.allowed_mentions {
            Some(explicit) => explicit.clone(),
            None => defaults.allowed_mentions.clone(),
        };

        let flags = self.suppress_embeds.or(defaults.suppress_embeds).map(|suppress| {
            let mut flags = InteractionResponseFlags::empty();
            flags.set(InteractionResponseFlags::SUPPRESS_EMBEDS, suppress);
            flags
        });

        ResponseSpec {
            content: self.content.clone(),
            embeds: self.embeds.clone(),
            components: self.components.clone(),
            allowed_mentions,
            flags,
        }
    }
}

#[async_trait]
impl Builder for CreateResponseMessage {
    type Context<'ctx> = &'ctx InteractionContext;
    type Built = ();

    /// Edits the message the component is on, as [`InteractionContext::edit`].
    ///
    /// # Errors
    ///
    /// See [`InteractionContext::edit`].
    async fn execute(self, ctx: Self::Context<'_>) -> Result<Self::Built> {
        ctx.edit(self).await
    }
}

/// The resolved data of an interaction response, as sent to Discord.
///
/// Built by [`CreateResponseMessage::build`] for message edits. Once built it cannot be changed;
/// every response call builds its own.
///
/// The ephemeral flag can only be set by [`InteractionContext::acknowledge_ephemeral`]. An edit
/// cannot change whether a message is ephemeral, so builders never produce it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[non_exhaustive]
pub struct ResponseSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<CreateEmbed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Vec<CreateActionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_mentions: Option<CreateAllowedMentions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<InteractionResponseFlags>,
}

impl ResponseSpec {
    /// The data of a deferred acknowledgement whose follow-up will be ephemeral.
    pub(crate) fn deferred_ephemeral() -> Self {
        Self {
            flags: Some(InteractionResponseFlags::EPHEMERAL),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn embeds(&self) -> Option<&[CreateEmbed]> {
        self.embeds.as_deref()
    }

    #[must_use]
    pub fn components(&self) -> Option<&[CreateActionRow]> {
        self.components.as_deref()
    }

    #[must_use]
    pub fn allowed_mentions(&self) -> Option<&CreateAllowedMentions> {
        self.allowed_mentions.as_ref()
    }

    #[must_use]
    pub fn flags(&self) -> Option<InteractionResponseFlags> {
        self.flags
    }

    /// Whether the response asks for an ephemeral follow-up.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|flags| flags.contains(InteractionResponseFlags::EPHEMERAL))
    }

    /// Checks the payload against Discord's message limits.
    pub(crate) fn check_lengths(&self) -> StdResult<(), ModelError> {
        check_lengths(self.content.as_deref(), self.embeds.as_deref())
    }
}

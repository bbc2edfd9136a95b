//! Process-wide defaults applied to every response.
//!
//! Build a [`ResponseDefaults`] once at start-up and share it behind an [`Arc`]. It is read, never
//! written, while responses are being built.
//!
//! [`Arc`]: std::sync::Arc

use crate::builder::CreateAllowedMentions;

/// Defaults for response fields the caller leaves unset.
///
/// # Examples
///
/// Suppress all mentions unless a response says otherwise:
///
/// ```rust
/// use component_response::builder::CreateAllowedMentions;
/// use component_response::settings::ResponseDefaults;
///
/// let defaults = ResponseDefaults::new().allowed_mentions(CreateAllowedMentions::new());
/// assert!(defaults.allowed_mentions.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResponseDefaults {
    /// The mention policy for message edits that do not set their own.
    ///
    /// Defaults to `None`, leaving mention parsing to Discord.
    pub allowed_mentions: Option<CreateAllowedMentions>,
    /// Whether message edits that do not say otherwise hide the message's embeds.
    ///
    /// Defaults to `None`, leaving the flag off the payload.
    pub suppress_embeds: Option<bool>,
}

impl ResponseDefaults {
    /// Equivalent to [`Self::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default mention policy.
    #[must_use]
    pub fn allowed_mentions(mut self, allowed_mentions: CreateAllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Sets the default for hiding embeds on edited messages.
    #[must_use]
    pub fn suppress_embeds(mut self, suppress: bool) -> Self {
        self.suppress_embeds = Some(suppress);
        self
    }
}

/// Read access to the process-wide response defaults.
///
/// Implemented by [`ResponseDefaults`] itself. Applications that keep their configuration
/// elsewhere can implement it on their own type; the values returned must not change while a
/// single response is being built, which [`Self::snapshot`] ensures by copying them out once.
pub trait DefaultsProvider: Send + Sync {
    /// The default mention policy, if one is configured.
    fn allowed_mentions(&self) -> Option<CreateAllowedMentions>;

    /// The default for hiding embeds on edited messages, if one is configured.
    fn suppress_embeds(&self) -> Option<bool> {
        None
    }

    /// Copies the current defaults out into a value that can be handed to
    /// [`CreateResponseMessage::build`].
    ///
    /// [`CreateResponseMessage::build`]: crate::builder::CreateResponseMessage::build
    fn snapshot(&self) -> ResponseDefaults {
        ResponseDefaults {
            allowed_mentions: self.allowed_mentions(),
            suppress_embeds: self.suppress_embeds(),
        }
    }
}

impl DefaultsProvider for ResponseDefaults {
    fn allowed_mentions(&self) -> Option<CreateAllowedMentions> {
        self.allowed_mentions.clone()
    }

    fn suppress_embeds(&self) -> Option<bool> {
        self.suppress_embeds
    }

    fn snapshot(&self) -> ResponseDefaults {
        self.clone()
    }
}

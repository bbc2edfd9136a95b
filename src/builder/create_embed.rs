//! Developer note:
//!
//! This is a set of embed builders for rich embeds, attached to a message edit through
//! [`CreateResponseMessage::embed`].
//!
//! The only builder that should be exposed is [`CreateEmbed`]. The rest of these have no real
//! reason for being exposed, but are for completeness' sake.
//!
//! Documentation for embeds can be found [here].
//!
//! [`CreateResponseMessage::embed`]: super::CreateResponseMessage::embed
//! [here]: https://discord.com/developers/docs/resources/channel#embed-object

use serde::Serialize;

use crate::model::Colour;

/// A builder to create an embed in a message
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#embed-object)
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[must_use]
pub struct CreateEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "color")]
    #[serde(skip_serializing_if = "Option::is_none")]
    colour: Option<Colour>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<CreateEmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<CreateEmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<CreateEmbedImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<CreateEmbedField>,
}

impl CreateEmbed {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colour of the left-hand side of the embed.
    ///
    /// This is an alias of [`Self::colour`].
    pub fn color<C: Into<Colour>>(self, colour: C) -> Self {
        self.colour(colour)
    }

    /// Set the colour of the left-hand side of the embed.
    pub fn colour<C: Into<Colour>>(mut self, colour: C) -> Self {
        self.colour = Some(colour.into());
        self
    }

    /// Set the description of the embed.
    ///
    /// **Note**: This can't be longer than 4096 characters.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a field. Note that this will not overwrite other fields, and will add to them.
    ///
    /// **Note**: Maximum amount of characters you can put is 256 in a field name and 1024 in a
    /// field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(CreateEmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Set the footer of the embed.
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(CreateEmbedFooter {
            text: text.into(),
        });
        self
    }

    /// Set the image associated with the embed. This only supports HTTP(S).
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(CreateEmbedImage {
            url: url.into(),
        });
        self
    }

    /// Set the thumbnail of the embed. This only supports HTTP(S).
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(CreateEmbedImage {
            url: url.into(),
        });
        self
    }

    /// Set the title of the embed.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the URL to direct to when clicking on the title.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Counts the characters Discord includes in its combined embed length limit.
    pub(super) fn get_length(&self) -> usize {
        let mut length = 0;

        if let Some(description) = &self.description {
            length += description.chars().count();
        }

        for field in &self.fields {
            length += field.name.chars().count();
            length += field.value.chars().count();
        }

        if let Some(footer) = &self.footer {
            length += footer.text.chars().count();
        }

        if let Some(title) = &self.title {
            length += title.chars().count();
        }

        length
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
struct CreateEmbedField {
    name: String,
    value: String,
    inline: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
struct CreateEmbedFooter {
    text: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
struct CreateEmbedImage {
    url: String,
}

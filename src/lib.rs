//! Response-correctness core for Discord message component interactions.
//!
//! When a user clicks a button or picks from a select menu, Discord delivers a one-shot
//! [`ComponentInteraction`]. The receiving application must answer it with exactly one initial
//! response, either by editing the message the component is on or by deferring the update.
//!
//! This crate owns that answer:
//!
//! - [`InteractionContext`] is the view handed to event handlers. It exposes the component's
//!   custom id, the originating message, and the three response entry points: [`edit`],
//!   [`acknowledge`] and [`acknowledge_ephemeral`].
//! - [`CreateResponseMessage`] collects the fields of an edit and merges them with the
//!   process-wide [`ResponseDefaults`] into an immutable [`ResponseSpec`].
//! - [`ResponseDispatcher`] guarantees that at most one response is ever delivered per
//!   interaction, even when several tasks race to respond.
//!
//! Delivery itself goes through the [`Transport`] trait, which the embedding application
//! implements on top of its HTTP client.
//!
//! # Example
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # async fn run(
//! #     interaction: component_response::model::application::ComponentInteraction,
//! #     transport: Arc<dyn component_response::http::Transport>,
//! # ) -> component_response::Result<()> {
//! use component_response::builder::{CreateAllowedMentions, CreateResponseMessage};
//! use component_response::settings::ResponseDefaults;
//! use component_response::InteractionContext;
//!
//! let defaults = Arc::new(
//!     ResponseDefaults::new().allowed_mentions(CreateAllowedMentions::new()),
//! );
//! let ctx = InteractionContext::new(interaction, transport, defaults);
//!
//! if ctx.custom_id()? == "refresh" {
//!     ctx.edit(CreateResponseMessage::new().content("Refreshed!")).await?;
//! } else {
//!     ctx.acknowledge().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`edit`]: InteractionContext::edit
//! [`acknowledge`]: InteractionContext::acknowledge
//! [`acknowledge_ephemeral`]: InteractionContext::acknowledge_ephemeral
//! [`ComponentInteraction`]: crate::model::application::ComponentInteraction
//! [`CreateResponseMessage`]: crate::builder::CreateResponseMessage
//! [`ResponseSpec`]: crate::builder::ResponseSpec
//! [`ResponseDefaults`]: crate::settings::ResponseDefaults
//! [`ResponseDispatcher`]: crate::dispatch::ResponseDispatcher
//! [`Transport`]: crate::http::Transport
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::module_name_repetitions,
    clippy::unreadable_literal,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
mod internal;

pub mod builder;
pub mod constants;
pub mod dispatch;
pub mod http;
pub mod interaction;
pub mod json;
pub mod model;
pub mod prelude;
pub mod settings;

mod error;
mod secret_string;

pub use crate::error::{Error, ProtocolInvariantViolation, Result};
pub use crate::interaction::InteractionContext;
pub use crate::secret_string::SecretString;

// Re-exports of crates used internally which are already publically exposed.
pub use async_trait::async_trait;
pub use bytes;

//! A set of exports which can be helpful to use.
//!
//! Note that the `ComponentResponseError` re-export is equivalent to [`crate::Error`], although
//! is re-exported as a separate name to remove likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use component_response::prelude::*;
//! ```

pub use crate::builder::Builder;
pub use crate::dispatch::ResponseState;
pub use crate::error::Error as ComponentResponseError;
pub use crate::http::{Transport, TransportError};
pub use crate::interaction::InteractionContext;
pub use crate::model::ModelError;
pub use crate::settings::{DefaultsProvider, ResponseDefaults};

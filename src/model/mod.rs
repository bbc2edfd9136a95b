//! Mappings of objects received from the API, with helper methods for the response flow.
//!
//! Only the parts of the Discord object graph that a component interaction response touches are
//! modelled here. Everything else in a payload is ignored on deserialization.

pub mod application;
pub mod channel;
pub mod colour;
pub mod error;
pub mod id;

pub use self::colour::Colour;
pub use self::error::Error as ModelError;

/// Re-exports of all model types, for glob imports.
pub mod prelude {
    pub use super::application::*;
    pub use super::channel::*;
    pub use super::error::Maximum;
    pub use super::id::*;
    pub use super::{Colour, ModelError};
}

//! Models related to interactions with application components.

mod component;
mod interaction;

pub use component::*;
pub use interaction::*;

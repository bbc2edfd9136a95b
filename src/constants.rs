//! A set of constants used by the library.

/// The maximum unicode code points allowed within a message by Discord.
pub const MESSAGE_CODE_LIMIT: usize = 2000;

/// The maximum number of embeds in a message.
pub const EMBED_MAX_COUNT: usize = 10;

/// The maximum combined length of the text of all embeds in a message.
pub const EMBED_MAX_LENGTH: usize = 6000;

/// The maximum number of buttons in a single action row.
pub const BUTTONS_PER_ROW: usize = 5;

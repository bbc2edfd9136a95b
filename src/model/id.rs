//! A collection of newtypes defining type-strong IDs.

use std::fmt;
use std::num::NonZeroU64;

use serde::de::{Error as DeError, Visitor};

use crate::internal::prelude::*;

/// An identifier for an Application.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ApplicationId(NonZeroU64);

/// An identifier for a Channel
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChannelId(NonZeroU64);

/// An identifier for an interaction.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InteractionId(NonZeroU64);

/// An identifier for a Message
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MessageId(NonZeroU64);

/// An identifier for a Role
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RoleId(NonZeroU64);

/// An identifier for a User
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UserId(NonZeroU64);

id_u64! {
    ApplicationId;
    ChannelId;
    InteractionId;
    MessageId;
    RoleId;
    UserId;
}

struct SnowflakeVisitor;

impl<'de> Visitor<'de> for SnowflakeVisitor {
    type Value = NonZeroU64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a non-zero string or integer snowflake")
    }

    fn visit_u64<E: DeError>(self, value: u64) -> StdResult<Self::Value, E> {
        NonZeroU64::new(value).ok_or_else(|| E::custom("invalid value, expected non-zero"))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> StdResult<Self::Value, E> {
        let value = u64::try_from(value).map_err(E::custom)?;
        self.visit_u64(value)
    }

    fn visit_str<E: DeError>(self, value: &str) -> StdResult<Self::Value, E> {
        value.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionId, MessageId};
    use crate::json::{assert_json, json};

    #[test]
    fn test_id_serde() {
        let id = MessageId::new(175928847299117063);
        assert_json(&id, json!("175928847299117063"));

        let from_int: InteractionId = serde_json::from_value(json!(846332853338390529_u64)).unwrap();
        assert_eq!(from_int, InteractionId::new(846332853338390529));
    }

    #[test]
    fn test_zero_id_is_rejected() {
        assert!(serde_json::from_value::<MessageId>(json!("0")).is_err());
        assert!(serde_json::from_value::<MessageId>(json!("not a number")).is_err());
    }
}

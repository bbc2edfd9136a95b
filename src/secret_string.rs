use std::sync::Arc;

/// A cheaply clonable String that never shows up in `Debug` output.
///
/// Interaction tokens authorize follow-up requests for fifteen minutes, so they are kept out of
/// logs.
#[derive(Clone, serde::Deserialize, serde::Serialize, PartialEq, Eq)]
pub struct SecretString(Arc<str>);

impl SecretString {
    #[must_use]
    pub fn new(inner: Arc<str>) -> Self {
        Self(inner)
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_tuple(std::any::type_name::<Self>()).field(&"<secret>").finish()
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

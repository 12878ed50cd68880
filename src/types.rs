use std::fmt;

use memzero::Memzero;

pub use serde_json::Value as Json;

/// Wallet password as received from the UI.
///
/// The bytes are zeroed out when the value is dropped and `Debug` never
/// prints them.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Memzero<Vec<u8>>);

impl Password {
    /// Wrap a password.
    pub fn new<T: Into<String>>(password: T) -> Self {
        Password(password.into().into_bytes().into())
    }

    /// The password as text.
    pub fn as_str(&self) -> &str {
        // Only ever built from a `String`, so the bytes are valid UTF-8.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Length of the password in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the password is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Password::new(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Password::new(password)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(***)")
    }
}

//! Authentication token definitions.

use derive_more::{Debug, From};
use secrecy::{ExposeSecret as _, SecretString};

/// Short-lived token authorizing API requests.
#[derive(Clone, Debug, From)]
#[debug("AccessToken(***)")]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Creates a new [`AccessToken`] out of the provided raw value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Exposes the raw value of this [`AccessToken`].
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Long-lived token used to obtain a new [`AccessToken`].
#[derive(Clone, Debug, From)]
#[debug("RefreshToken(***)")]
pub struct RefreshToken(SecretString);

impl RefreshToken {
    /// Creates a new [`RefreshToken`] out of the provided raw value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Exposes the raw value of this [`RefreshToken`].
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Pair of authentication tokens of a signed-in user.
#[derive(Clone, Debug)]
pub struct Tokens {
    /// [`AccessToken`] of the user.
    pub access: AccessToken,

    /// [`RefreshToken`] of the user, if any was issued.
    pub refresh: Option<RefreshToken>,
}

//! Login form input and its emptiness check.

use serde::Deserialize;
use validator::Validate;

/// Why a login attempt was blocked before submission.
///
/// The display text is the exact message shown to the user, both in the
/// browser alert and in the stub endpoint's error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmptyField {
    #[error("Username and password field is empty!!!")]
    Both,
    #[error("Username is empty!!")]
    Username,
    #[error("Password is empty!!!")]
    Password,
}

impl EmptyField {
    /// Field names (as posted) that were found empty.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            EmptyField::Both => &["user", "pass"],
            EmptyField::Username => &["user"],
            EmptyField::Password => &["pass"],
        }
    }
}

/// Username/password pair as posted by the login form (`user`, `pass`).
///
/// Missing fields deserialize as empty strings so that a hand-crafted request
/// goes through the same check as a browser submission.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct Credentials {
    #[serde(rename = "user", default)]
    #[validate(length(min = 1))]
    pub username: String,

    #[serde(rename = "pass", default)]
    #[validate(length(min = 1))]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Decides whether the form may be submitted.
    ///
    /// Both fields empty wins over a single empty field; a lone empty username
    /// is reported before a lone empty password.
    pub fn check(&self) -> Result<(), EmptyField> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let fields = errors.field_errors();
        match (
            fields.contains_key("username"),
            fields.contains_key("password"),
        ) {
            (true, true) => Err(EmptyField::Both),
            (true, false) => Err(EmptyField::Username),
            (false, true) => Err(EmptyField::Password),
            (false, false) => Ok(()),
        }
    }
}

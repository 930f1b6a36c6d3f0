//! Current-user lookup for toggling login UI.
//!
//! Credentials live with the API client; this module only asks "who is
//! signed in" and treats every failure as "nobody".

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::i18n::Translator;

/// The signed-in user as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User identifier. Numeric ids are kept in their decimal form.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

impl CurrentUser {
    /// Name to greet the user with: display name, else email.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum UserId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match UserId::deserialize(deserializer)? {
        UserId::Text(id) => id,
        UserId::Number(id) => id.to_string(),
    })
}

/// Something that can report the signed-in user.
pub trait SessionSource: Send + Sync {
    /// Fetch the current user. Fails when nobody is signed in.
    fn current_user(&self) -> Result<CurrentUser>;
}

/// Whether anyone is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No user, or the lookup failed
    #[default]
    Anonymous,
    /// A user is signed in
    Authenticated(CurrentUser),
}

impl SessionState {
    /// Look up the current user, degrading any failure to `Anonymous`.
    pub fn load(source: &dyn SessionSource) -> Self {
        match source.current_user() {
            Ok(user) => SessionState::Authenticated(user),
            Err(e) => {
                log::debug!("No session: {}", e);
                SessionState::Anonymous
            }
        }
    }

    /// Signed-in user, if any.
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    /// Check if the login link should be shown.
    pub fn shows_login_prompt(&self) -> bool {
        matches!(self, SessionState::Anonymous)
    }

    /// Navigation label: a greeting when signed in, the login link otherwise.
    pub fn nav_label(&self, translator: &Translator) -> String {
        match self.user().and_then(CurrentUser::display_name) {
            Some(name) => translator.t_with("nav.greeting", &[("name", name)]),
            None if self.user().is_some() => translator.t("nav.logout"),
            None => translator.t("nav.login"),
        }
    }
}

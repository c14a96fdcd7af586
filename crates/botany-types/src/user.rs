//! The shared account identity space.
//!
//! Bots live in the same identifier and username space as human accounts, so
//! the format policy for both is defined here and reused by the bot
//! validator. Validation of full human accounts happens in the owning
//! service, not in this workspace.

use serde::{Deserialize, Serialize};

use crate::bot::Bot;

/// Account identifiers are exactly 26 characters (ULID rendering).
pub const ID_LENGTH: usize = 26;

pub const USERNAME_MIN_LENGTH: usize = 1;
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Maximum rune count for a first name; bot display names share this bound.
pub const USER_FIRST_NAME_MAX_RUNES: usize = 64;

/// Usernames that mention handling reserves for itself.
const RESERVED_USERNAMES: &[&str] = &["all", "channel", "here", "system"];

/// True if `id` has the shape of an account identifier.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH
}

/// True if `username` satisfies the account username policy: 1 to 64 runes,
/// lowercase ASCII letters, digits, `.`, `-`, `_`, and not a reserved name.
pub fn is_valid_username(username: &str) -> bool {
    let runes = username.chars().count();
    if runes < USERNAME_MIN_LENGTH || runes > USERNAME_MAX_LENGTH {
        return false;
    }

    let allowed = username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_'));
    if !allowed {
        return false;
    }

    !RESERVED_USERNAMES.contains(&username)
}

/// The minimal human-account record kept in the shared user store for a bot.
///
/// A bot and its user record share one primary key; this struct is the user
/// side of that join.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
}

impl From<&Bot> for User {
    /// Project a bot onto the user record stored alongside it.
    ///
    /// Bots have no mailbox, so the email is a synthesized placeholder.
    /// Description, creator, and timestamps stay on the bot side of the join.
    fn from(bot: &Bot) -> Self {
        Self {
            id: bot.user_id.clone(),
            username: bot.username.clone(),
            email: format!("{}@localhost", bot.username.to_lowercase()),
            first_name: bot.display_name.clone(),
        }
    }
}

//! Bot accounts: machine-driven entities in the shared account space.
//!
//! A bot's primary key doubles as the primary key of its user record in the
//! shared account store; `User::from(&bot)` produces that record. Everything
//! here is pure and in-memory -- persistence and transport live elsewhere.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, STATUS_BAD_REQUEST, TraceContext};
use crate::etag::etag;
use crate::user::{self, USER_FIRST_NAME_MAX_RUNES};

/// Display names share the first-name bound of the account identity space.
pub const BOT_DISPLAY_NAME_MAX_RUNES: usize = USER_FIRST_NAME_MAX_RUNES;

/// Maximum rune count for a bot description.
pub const BOT_DESCRIPTION_MAX_RUNES: usize = 1024;

/// A bot account. Field names match the wire representation and are fixed
/// for compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bot {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub description: String,
    pub creator_id: String,
    /// Epoch milliseconds; zero until `pre_save` stamps the first save.
    pub create_at: i64,
    pub update_at: i64,
    /// Epoch milliseconds of soft deletion; zero means active.
    pub delete_at: i64,
}

/// Sparse field overrides for an existing bot.
///
/// An absent field means "leave unchanged"; an empty string is a real value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An ordered collection of bots; order is caller-determined.
pub type BotList = Vec<Bot>;

/// Fields a caller supplies to create a bot. Identity and timestamps are
/// assigned by the lifecycle service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBotRequest {
    pub username: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl Bot {
    /// Minimum identifying fields for logging this bot in error context.
    pub fn trace(&self) -> TraceContext {
        TraceContext::from([("user_id".to_string(), self.user_id.clone())])
    }

    fn rejected(&self, message_key: &'static str) -> AppError {
        AppError::new(
            "Bot.IsValid",
            message_key,
            self.trace(),
            "",
            STATUS_BAD_REQUEST,
        )
    }

    /// Check every persistence invariant, stopping at the first violation.
    ///
    /// A bot must never reach a store while this returns an error.
    pub fn is_valid(&self) -> Result<(), AppError> {
        if !user::is_valid_id(&self.user_id) {
            return Err(self.rejected("model.bot.is_valid.user_id.app_error"));
        }

        if !user::is_valid_username(&self.username) {
            return Err(self.rejected("model.bot.is_valid.username.app_error"));
        }

        if self.display_name.chars().count() > BOT_DISPLAY_NAME_MAX_RUNES {
            return Err(self.rejected("model.bot.is_valid.display_name.app_error"));
        }

        if self.description.chars().count() > BOT_DESCRIPTION_MAX_RUNES {
            return Err(self.rejected("model.bot.is_valid.description.app_error"));
        }

        if !user::is_valid_id(&self.creator_id) {
            return Err(self.rejected("model.bot.is_valid.creator_id.app_error"));
        }

        if self.create_at == 0 {
            return Err(self.rejected("model.bot.is_valid.create_at.app_error"));
        }

        if self.update_at == 0 {
            return Err(self.rejected("model.bot.is_valid.update_at.app_error"));
        }

        Ok(())
    }

    /// Stamp timestamps before the first save and clear any soft-delete mark.
    pub fn pre_save(&mut self, now_millis: i64) {
        self.create_at = now_millis;
        self.update_at = now_millis;
        self.delete_at = 0;
    }

    /// Stamp the update timestamp before saving a modified bot.
    pub fn pre_update(&mut self, now_millis: i64) {
        self.update_at = now_millis;
    }

    /// Overwrite the fields the patch carries; absent fields stay untouched.
    ///
    /// Identity, creator, and timestamps are never patchable. No validation
    /// happens here -- run `is_valid` before persisting the result.
    pub fn apply_patch(&mut self, patch: &BotPatch) {
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }

        if let Some(display_name) = &patch.display_name {
            self.display_name = display_name.clone();
        }

        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }

    /// Cache validator for a single bot; changes whenever the bot does.
    pub fn etag(&self) -> String {
        etag(&[&self.user_id, &self.update_at])
    }

    /// Serialize to the wire representation.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from the wire representation.
    ///
    /// Malformed input yields the zero bot rather than an error; existing
    /// callers treat an empty result as "not found". Anything decoding
    /// untrusted input must check for that itself.
    pub fn from_json(data: &str) -> Bot {
        serde_json::from_str(data).unwrap_or_default()
    }
}

impl BotPatch {
    /// Serialize to the wire representation; absent fields are omitted.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize a patch, reporting malformed input instead of swallowing
    /// it: an all-absent patch and a failed decode are different answers.
    pub fn from_json(data: &str) -> Result<BotPatch, serde_json::Error> {
        serde_json::from_str(data)
    }
}

/// Serialize an ordered collection of bots.
pub fn bot_list_to_json(bots: &[Bot]) -> String {
    serde_json::to_string(bots).unwrap_or_default()
}

/// Deserialize an ordered collection of bots; malformed input yields an
/// empty list rather than an error (see `Bot::from_json`).
pub fn bot_list_from_json(data: &str) -> BotList {
    serde_json::from_str(data).unwrap_or_default()
}

/// Cache validator for a collection of bots.
///
/// Scans for the greatest update timestamp; when several bots share it, the
/// last one in iteration order wins. Callers depend on that order
/// sensitivity, so it is part of the contract.
pub fn bot_list_etag(bots: &[Bot]) -> String {
    let mut id = "0";
    let mut latest: i64 = 0;
    let delta: i64 = 0;

    for bot in bots {
        if bot.update_at >= latest {
            latest = bot.update_at;
            id = &bot.user_id;
        }
    }

    let len = bots.len();
    etag(&[&id, &latest, &delta, &len])
}

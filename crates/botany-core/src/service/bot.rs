//! Bot lifecycle service.
//!
//! Walks a bot through the states the model defines: mint an identity, stamp
//! timestamps, validate, and project the user record for the shared account
//! store. Storage itself is the caller's concern.

use tracing::debug;

use botany_types::bot::{Bot, BotPatch, CreateBotRequest};
use botany_types::error::AppError;
use botany_types::user::User;

use crate::clock::Clock;
use crate::id::IdGenerator;

/// Service orchestrating bot creation and updates.
///
/// Generic over the clock and identifier ports so tests can pin both.
pub struct BotService<C: Clock, G: IdGenerator> {
    clock: C,
    ids: G,
}

impl<C: Clock, G: IdGenerator> BotService<C, G> {
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Build a persist-ready bot from a creation request.
    ///
    /// Mints the shared identity, stamps creation timestamps, and validates.
    /// The returned bot has passed every invariant, so handing it straight
    /// to a store is safe.
    pub fn create_bot(
        &self,
        request: CreateBotRequest,
        creator_id: &str,
    ) -> Result<Bot, AppError> {
        let mut bot = Bot {
            user_id: self.ids.new_id(),
            username: request.username,
            display_name: request.display_name.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            creator_id: creator_id.to_string(),
            ..Bot::default()
        };

        bot.pre_save(self.clock.now_millis());
        bot.is_valid()?;

        debug!(user_id = %bot.user_id, username = %bot.username, "created bot");
        Ok(bot)
    }

    /// Apply a sparse patch to a loaded bot, stamp the update, and validate.
    ///
    /// On error the bot may already hold patched field values; callers
    /// working from a store should re-load, or patch a clone and keep the
    /// original untouched.
    pub fn patch_bot(&self, bot: &mut Bot, patch: &BotPatch) -> Result<(), AppError> {
        bot.apply_patch(patch);
        bot.pre_update(self.clock.now_millis());
        bot.is_valid()?;

        debug!(user_id = %bot.user_id, "patched bot");
        Ok(())
    }

    /// The user record stored alongside a bot in the shared account store.
    pub fn user_record(&self, bot: &Bot) -> User {
        User::from(bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_ID: &str = "0123456789abcdefghjkmnpqrs";

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    struct FixedIds(&'static str);

    impl IdGenerator for FixedIds {
        fn new_id(&self) -> String {
            self.0.to_string()
        }
    }

    fn service(now: i64) -> BotService<FixedClock, FixedIds> {
        BotService::new(FixedClock(now), FixedIds(BOT_ID))
    }

    fn request() -> CreateBotRequest {
        CreateBotRequest {
            username: "night-helper".to_string(),
            display_name: Some("Night Helper".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_create_bot_stamps_and_validates() {
        let creator = "c".repeat(26);
        let bot = service(1_700_000_000_000)
            .create_bot(request(), &creator)
            .unwrap();

        assert_eq!(bot.user_id, BOT_ID);
        assert_eq!(bot.creator_id, creator);
        assert_eq!(bot.create_at, 1_700_000_000_000);
        assert_eq!(bot.update_at, 1_700_000_000_000);
        assert_eq!(bot.delete_at, 0);
        assert!(bot.is_valid().is_ok());
    }

    #[test]
    fn test_create_bot_rejects_bad_username() {
        let mut req = request();
        req.username = "Night Helper".to_string();

        let err = service(1_700_000_000_000)
            .create_bot(req, &"c".repeat(26))
            .unwrap_err();
        assert_eq!(err.operation, "Bot.IsValid");
        assert_eq!(err.message_key, "model.bot.is_valid.username.app_error");
    }

    #[test]
    fn test_create_bot_rejects_short_creator() {
        let err = service(1_700_000_000_000)
            .create_bot(request(), "too-short")
            .unwrap_err();
        assert_eq!(err.message_key, "model.bot.is_valid.creator_id.app_error");
    }

    #[test]
    fn test_patch_bot_bumps_update_at_only() {
        let creator = "c".repeat(26);
        let mut bot = service(100).create_bot(request(), &creator).unwrap();

        let patch = BotPatch {
            description: Some("now with a description".to_string()),
            ..BotPatch::default()
        };
        service(200).patch_bot(&mut bot, &patch).unwrap();

        assert_eq!(bot.create_at, 100);
        assert_eq!(bot.update_at, 200);
        assert_eq!(bot.description, "now with a description");
    }

    #[test]
    fn test_patch_bot_rejects_invalid_result() {
        let creator = "c".repeat(26);
        let mut bot = service(100).create_bot(request(), &creator).unwrap();

        let patch = BotPatch {
            username: Some("NOT VALID".to_string()),
            ..BotPatch::default()
        };
        let err = service(200).patch_bot(&mut bot, &patch).unwrap_err();
        assert_eq!(err.message_key, "model.bot.is_valid.username.app_error");
    }

    #[test]
    fn test_user_record_joins_on_identity() {
        let creator = "c".repeat(26);
        let svc = service(100);
        let bot = svc.create_bot(request(), &creator).unwrap();

        let user = svc.user_record(&bot);
        assert_eq!(user.id, bot.user_id);
        assert_eq!(user.username, "night-helper");
        assert_eq!(user.email, "night-helper@localhost");
        assert_eq!(user.first_name, "Night Helper");
    }
}

//! Discord bot surface over the audit helpers.
//!
//! A thin prefix-command bot: `!saved <realm> <character> [difficulty]`
//! reports the weekly raid lockout, `!gear <realm> <character>` runs the
//! enchant/gem audit. Replies use the same chat-friendly report strings as
//! the library helpers.

use chrono::Utc;
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Client, Context, EventHandler, GatewayIntents};

use crate::audit::{audit_equipment, lockout_status, no_data_message};
use crate::models::Difficulty;
use crate::{BlizzardClient, Result};

/// Discord message length cap.
const MAX_REPLY_LEN: usize = 2000;

/// Configuration for the bot's commands.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Command prefix character
    pub prefix: char,
    /// Expansion name for lockout checks
    pub expansion: String,
    /// Raid instance name for lockout checks
    pub raid: String,
    /// Difficulty used when the command doesn't name one
    pub default_difficulty: Difficulty,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: '!',
            expansion: "The War Within".to_string(),
            raid: "Nerub-ar Palace".to_string(),
            default_difficulty: Difficulty::Heroic,
        }
    }
}

/// Serenity event handler backed by a [`BlizzardClient`].
pub struct Handler {
    client: BlizzardClient,
    config: BotConfig,
}

impl Handler {
    /// Create a handler.
    pub fn new(client: BlizzardClient, config: BotConfig) -> Self {
        Self { client, config }
    }

    /// Parse and execute a command, returning the reply text.
    ///
    /// Returns `None` for messages that are not commands.
    async fn handle_command(&self, content: &str) -> Option<String> {
        let rest = content.strip_prefix(self.config.prefix)?;
        let mut words = rest.split_whitespace();

        let reply = match words.next()? {
            "saved" => self.saved_command(&words.collect::<Vec<_>>()).await,
            "gear" => self.gear_command(&words.collect::<Vec<_>>()).await,
            _ => return None,
        };

        Some(truncate_reply(reply))
    }

    async fn saved_command(&self, args: &[&str]) -> String {
        let (realm, name) = match args {
            [realm, name, ..] => ((*realm).into(), (*name).into()),
            _ => return "Usage: saved <realm> <character> [difficulty]".to_string(),
        };

        let difficulty = match args.get(2) {
            Some(word) => match Difficulty::parse(word) {
                Ok(d) => d,
                Err(e) => return e.to_string(),
            },
            None => self.config.default_difficulty,
        };

        let raids = match self.client.encounters().raids(&realm, &name).await {
            Ok(raids) => raids,
            Err(e) => return format!("Lookup failed for {}-{}: {}", name, realm, e),
        };

        match lockout_status(
            &raids,
            &self.config.expansion,
            &self.config.raid,
            difficulty,
            self.client.region(),
            Utc::now(),
        ) {
            Some(status) => status.report(),
            None => no_data_message(&self.config.raid, difficulty),
        }
    }

    async fn gear_command(&self, args: &[&str]) -> String {
        let (realm, name) = match args {
            [realm, name] => ((*realm).into(), (*name).into()),
            _ => return "Usage: gear <realm> <character>".to_string(),
        };

        match self.client.equipment().get(&realm, &name).await {
            Ok(equipment) => audit_equipment(&equipment).report(),
            Err(e) => format!("Lookup failed for {}-{}: {}", name, realm, e),
        }
    }
}

fn truncate_reply(mut reply: String) -> String {
    if reply.len() > MAX_REPLY_LEN {
        let mut cut = MAX_REPLY_LEN - '…'.len_utf8();
        while !reply.is_char_boundary(cut) {
            cut -= 1;
        }
        reply.truncate(cut);
        reply.push('…');
    }
    reply
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(reply) = self.handle_command(&msg.content).await else {
            return;
        };

        if let Err(e) = msg.reply(&ctx.http, reply).await {
            tracing::error!("Failed to reply: {}", e);
        }
    }
}

/// Run the bot until the gateway connection ends.
pub async fn run(token: &str, client: BlizzardClient, config: BotConfig) -> Result<()> {
    let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut discord = Client::builder(token, intents)
        .event_handler(Handler::new(client, config))
        .await?;

    discord.start().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_reply() {
        let short = truncate_reply("hello".to_string());
        assert_eq!(short, "hello");

        let long = truncate_reply("x".repeat(3000));
        assert!(long.len() <= MAX_REPLY_LEN + '…'.len_utf8());
        assert!(long.ends_with('…'));
    }

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.prefix, '!');
        assert_eq!(config.default_difficulty, Difficulty::Heroic);
    }
}

//! Discord bot over the lockout and gear checks.
//!
//! Run with: cargo run --example bot --features bot -- [client.toml]
//!
//! Requires DISCORD_TOKEN, and Battle.net credentials either in the TOML
//! file given as the first argument or in BLIZZARD_CLIENT_ID /
//! BLIZZARD_CLIENT_SECRET.

use battlenet_rs::bot::{run, BotConfig};
use battlenet_rs::{BlizzardClient, Credentials, Error, Region};

#[tokio::main]
async fn main() -> battlenet_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let credentials = match std::env::args().nth(1) {
        Some(path) => Credentials::from_file(path)?,
        None => Credentials::from_env()?,
    };

    let token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| Error::Config("DISCORD_TOKEN is not set".to_string()))?;

    let client = BlizzardClient::authenticate(credentials, Region::Eu).await?;

    run(&token, client, BotConfig::default()).await
}

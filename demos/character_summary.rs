//! Basic authentication and profile lookup.
//!
//! Run with: cargo run --example character_summary -- <realm> <character> [client.toml]
//!
//! Credentials come from BLIZZARD_CLIENT_ID / BLIZZARD_CLIENT_SECRET, or
//! from a client.toml file passed as the third argument.

use battlenet_rs::{BlizzardClient, Credentials, Region};

#[tokio::main]
async fn main() -> battlenet_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (realm, name) = match args.as_slice() {
        [realm, name, ..] => (realm.as_str(), name.as_str()),
        _ => {
            eprintln!("Usage: character_summary <realm> <character> [client.toml]");
            std::process::exit(2);
        }
    };
    let credentials = match args.get(2) {
        Some(path) => Credentials::from_file(path)?,
        None => Credentials::from_env()?,
    };

    let client = BlizzardClient::authenticate(credentials, Region::Eu).await?;

    let summary = client.profile().summary(&realm.into(), &name.into()).await?;

    println!("{} ({})", summary.name, summary.realm.name);
    println!("  Level: {}", summary.level);
    if let Some(class) = summary.class_name() {
        println!("  Class: {}", class);
    }
    if let Some(ilvl) = summary.equipped_item_level {
        println!("  Equipped item level: {}", ilvl);
    }

    Ok(())
}

//! Weekly raid-lockout check.
//!
//! Run with: cargo run --example raid_lockout -- <realm> <character> [difficulty]

use battlenet_rs::audit::{lockout_status, no_data_message};
use battlenet_rs::models::Difficulty;
use battlenet_rs::{BlizzardClient, Credentials, Region};
use chrono::Utc;

const EXPANSION: &str = "The War Within";
const RAID: &str = "Nerub-ar Palace";

#[tokio::main]
async fn main() -> battlenet_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (realm, name) = match args.as_slice() {
        [realm, name, ..] => (realm.as_str(), name.as_str()),
        _ => {
            eprintln!("Usage: raid_lockout <realm> <character> [difficulty]");
            std::process::exit(2);
        }
    };
    let difficulty = match args.get(2) {
        Some(word) => Difficulty::parse(word)?,
        None => Difficulty::Heroic,
    };

    let client = BlizzardClient::authenticate(Credentials::from_env()?, Region::Eu).await?;

    let raids = client.encounters().raids(&realm.into(), &name.into()).await?;

    let report = lockout_status(&raids, EXPANSION, RAID, difficulty, client.region(), Utc::now())
        .map(|status| status.report())
        .unwrap_or_else(|| no_data_message(RAID, difficulty));

    println!("{}", report);
    Ok(())
}

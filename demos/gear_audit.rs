//! Enchant and gem audit for a character's equipped gear.
//!
//! Run with: cargo run --example gear_audit -- <realm> <character>

use battlenet_rs::audit::audit_equipment;
use battlenet_rs::{BlizzardClient, Credentials, Region};

#[tokio::main]
async fn main() -> battlenet_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (realm, name) = match args.as_slice() {
        [realm, name] => (realm.as_str(), name.as_str()),
        _ => {
            eprintln!("Usage: gear_audit <realm> <character>");
            std::process::exit(2);
        }
    };

    let client = BlizzardClient::authenticate(Credentials::from_env()?, Region::Eu).await?;

    let equipment = client.equipment().get(&realm.into(), &name.into()).await?;

    println!("{}", audit_equipment(&equipment).report());
    Ok(())
}

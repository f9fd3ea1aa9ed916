//! Authentication for the Battle.net API.
//!
//! Battle.net protects the Profile API with the OAuth2 client-credentials
//! grant: the id/secret pair from the developer portal is exchanged for a
//! short-lived bearer token.
//!
//! # Example
//!
//! ```no_run
//! use battlenet_rs::{Credentials, Region, Session};
//!
//! # async fn example() -> battlenet_rs::Result<()> {
//! let creds = Credentials::from_file("client.toml")?;
//! let session = Session::authenticate(creds, Region::Eu).await?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::Session;

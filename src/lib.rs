//! Typed client for the organisation account API.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use account_api_client::client::HttpClient;
//! use account_api_client::Config;
//! use tokio_util::sync::CancellationToken;
//!
//! let client = HttpClient::connect(&Config::from_env()?);
//! let cancel = CancellationToken::new();
//! let account = client
//!     .fetch_account(&cancel, "1dfaf917-c6d6-4e18-b7e7-972e66492976")
//!     .await?;
//! println!("{:?}", account.data.version);
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod header;
pub mod host;
pub mod middleware;

pub use account::AccountData;
pub use api::Envelope;
pub use client::Client;
pub use config::Config;
pub use error::{ApiErrorBody, BoxError, Error};
pub use host::Host;

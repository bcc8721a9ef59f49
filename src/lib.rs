//! # Tellus - Reservation API Client
//!
//! Command line client for the Tellus room reservation API, a Mason+JSON
//! hypermedia API. The client knows a single URL, the rooms list; everything
//! else is reached by following `@controls` and filling in the forms their
//! schemas describe.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tellus::client::ApiClient;
//! use tellus::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let client = ApiClient::http(settings.api.clone(), settings.timeout(), settings.debug)?;
//!
//!     for room in client.get_rooms(None).await? {
//!         println!("{}", room.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - **client**: transport and one operation per link relation
//! - **commands**: CLI commands built on the client and the form builder
//! - **config**: layered settings
//! - **render**: plain-text output

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod render;

pub use tellus_mason as mason;

//! SwishRadar: ESPN Fantasy Basketball gateway
//!
//! Pulls league metadata, rosters, and free agents from ESPN's fantasy API
//! and re-exposes them as normalized JSON to internal consumers.
//!
//! ## Features
//!
//! - **Season Fallback**: ESPN does not say which season is current, so every
//!   acquisition walks an ordered list of candidate seasons and keeps the first
//!   one that answers with a valid payload
//! - **Response Validation**: bad statuses, empty bodies, and HTML login pages
//!   are told apart before any JSON decoding happens
//! - **Permissive Decoding**: unknown upstream fields are ignored and missing
//!   ones defaulted
//! - **Gateway**: acquisition routes plus a verbatim proxy to the ESPN service
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swishradar::{
//!     core::{create_http_client_with_timeout, Credentials},
//!     espn::{EspnClient, LeagueAcquirer, SeasonFallback},
//!     LeagueId, Season,
//! };
//!
//! # async fn example() -> swishradar::Result<()> {
//! let http = create_http_client_with_timeout(30)?;
//! let client = EspnClient::new(http, "https://lm-api-reads.fantasy.espn.com");
//! let seasons = SeasonFallback::around(Season::new(2026));
//! let credentials = Credentials::new("{SWID}", "espn_s2 value");
//!
//! let league = LeagueAcquirer::new(&client, &seasons)
//!     .acquire(&credentials, LeagueId::new(1356604871))
//!     .await?;
//! println!("{} ({} teams)", league.name, league.teams.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_FBA_LEAGUE_ID=1356604871
//! export ESPN_SWID='{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}'
//! export ESPN_S2=AEB...
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod espn;
pub mod gateway;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Season};
pub use cli::GatewayConfig;
pub use error::{EspnError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FBA_LEAGUE_ID";

//! ESPN Fantasy Basketball acquisition layer
//!
//! - `http`: one authenticated fetch per (resource, season)
//! - `validate`: status/body/JSON checks before decoding
//! - `season`: ordered season candidates
//! - `acquire`: season-fallback orchestration
//! - `types`: permissive wire envelopes

pub mod acquire;
pub mod http;
pub mod season;
pub mod types;
pub mod validate;

pub use acquire::{
    AcquisitionError, Acquired, AttemptFailure, FreeAgentAcquirer, LeagueAcquirer, SeasonAttempt,
    DEFAULT_FREE_AGENT_LIMIT,
};
pub use http::{EspnClient, Resource, TransportError};
pub use season::SeasonFallback;
pub use validate::{FailureKind, RawResponse, ValidationError};

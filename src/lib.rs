pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod services;

pub use domain::{MedalRecord, RankDeltaEntry, RankedEntry, Standings};
pub use error::{JoinMismatch, MedalError, Result, RowError};
pub use services::standings_service::compute_standings;

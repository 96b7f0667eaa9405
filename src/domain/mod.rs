mod medal;

pub use medal::{MedalRecord, RankDeltaEntry, RankedEntry, Standings};

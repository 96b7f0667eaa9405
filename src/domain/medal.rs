use serde::{Deserialize, Serialize};

/// One country's medal counts as read from the standings page.
///
/// `total` is taken from the page as-is and is not checked against
/// `gold + silver + bronze`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedalRecord {
    pub country: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl MedalRecord {
    pub fn new(
        country: impl Into<String>,
        gold: u32,
        silver: u32,
        bronze: u32,
        total: u32,
    ) -> Self {
        Self {
            country: country.into(),
            gold,
            silver,
            bronze,
            total,
        }
    }

    /// Weighted Gold Score: `gold + silver/2 + bronze/3`.
    pub fn weighted_score(&self) -> f64 {
        f64::from(self.gold) + f64::from(self.silver) / 2.0 + f64::from(self.bronze) / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub record: MedalRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDeltaEntry {
    pub country: String,
    pub rank_by_medals: usize,
    pub rank_by_weighted_score: usize,
    /// Positive when the weighted score ranks the country higher.
    pub rank_change: i64,
}

/// Everything computed from one page of standings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub by_medals: Vec<RankedEntry>,
    pub by_weighted_score: Vec<RankedEntry>,
    pub rank_changes: Vec<RankDeltaEntry>,
    /// Rows that could not be parsed.
    pub errors: Vec<String>,
    /// Records the two rankings disagree on. Empty unless ranking itself is broken.
    pub diagnostics: Vec<String>,
}

impl Standings {
    pub fn is_empty(&self) -> bool {
        self.by_medals.is_empty()
    }
}

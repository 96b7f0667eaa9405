use crate::domain::{MedalRecord, RankedEntry};

/// Orders records by gold, then silver, then bronze, all descending.
///
/// Records equal on all three keep their input order.
pub fn rank_by_medals(records: &[MedalRecord]) -> Vec<RankedEntry> {
    let mut sorted: Vec<&MedalRecord> = records.iter().collect();
    sorted.sort_by(|a, b| (b.gold, b.silver, b.bronze).cmp(&(a.gold, a.silver, a.bronze)));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedEntry {
            rank: i + 1,
            record: record.clone(),
            weighted_score: None,
        })
        .collect()
}

/// Orders records by Weighted Gold Score, descending, keeping input order on ties.
pub fn rank_by_weighted_score(records: &[MedalRecord]) -> Vec<RankedEntry> {
    let mut scored: Vec<(f64, &MedalRecord)> = records
        .iter()
        .map(|record| (record.weighted_score(), record))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (score, record))| RankedEntry {
            rank: i + 1,
            record: record.clone(),
            weighted_score: Some(score),
        })
        .collect()
}

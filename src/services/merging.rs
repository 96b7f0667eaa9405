use crate::domain::{MedalRecord, RankDeltaEntry, RankedEntry};
use crate::error::JoinMismatch;
use std::collections::{HashMap, VecDeque};

/// Joins the two rankings and computes how far each country moves.
///
/// Entries are paired by their record, so a country listed twice on the page
/// is matched occurrence by occurrence instead of being collapsed. Anything
/// only one side has is returned as a [`JoinMismatch`] next to the joined
/// rows. Output follows `by_medals` order.
pub fn merge_rankings(
    by_medals: &[RankedEntry],
    by_weighted: &[RankedEntry],
) -> (Vec<RankDeltaEntry>, Vec<JoinMismatch>) {
    let mut weighted_ranks: HashMap<&MedalRecord, VecDeque<usize>> =
        HashMap::with_capacity(by_weighted.len());
    for entry in by_weighted {
        weighted_ranks
            .entry(&entry.record)
            .or_default()
            .push_back(entry.rank);
    }

    let mut merged = Vec::with_capacity(by_medals.len());
    let mut mismatches = Vec::new();

    for entry in by_medals {
        let paired = weighted_ranks
            .get_mut(&entry.record)
            .and_then(VecDeque::pop_front);

        match paired {
            Some(rank_by_weighted_score) => merged.push(RankDeltaEntry {
                country: entry.record.country.clone(),
                rank_by_medals: entry.rank,
                rank_by_weighted_score,
                rank_change: entry.rank as i64 - rank_by_weighted_score as i64,
            }),
            None => mismatches.push(JoinMismatch {
                country: entry.record.country.clone(),
                missing_from: "weighted score",
            }),
        }
    }

    // Ranks still queued belong to records the medals ranking never had.
    for entry in by_weighted {
        if let Some(ranks) = weighted_ranks.get_mut(&entry.record) {
            if ranks.contains(&entry.rank) {
                ranks.retain(|&rank| rank != entry.rank);
                mismatches.push(JoinMismatch {
                    country: entry.record.country.clone(),
                    missing_from: "medals",
                });
            }
        }
    }

    merged.sort_by_key(|e| e.rank_by_medals);
    (merged, mismatches)
}

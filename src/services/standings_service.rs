use crate::domain::Standings;
use crate::error::{MedalError, Result};
use crate::infrastructure::{FetchedPage, Selectors};
use crate::services::merging::merge_rankings;
use crate::services::ranking::{rank_by_medals, rank_by_weighted_score};
use crate::services::scraping::{extract_records, ScrapingService};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::{error, info};

/// Where the standings page comes from.
#[derive(Debug, Clone)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
}

/// Extracts, ranks and merges in one pass.
///
/// Malformed rows end up in [`Standings::errors`] and records the two rankings
/// disagree on in [`Standings::diagnostics`]. Neither stops the computation.
pub fn compute_standings(html: &str, selectors: &Selectors) -> Standings {
    let extraction = extract_records(html, selectors);

    let by_medals = rank_by_medals(&extraction.records);
    let by_weighted_score = rank_by_weighted_score(&extraction.records);
    let (rank_changes, mismatches) = merge_rankings(&by_medals, &by_weighted_score);

    let diagnostics: Vec<String> = mismatches.iter().map(ToString::to_string).collect();
    for diagnostic in &diagnostics {
        error!("Ranking join broken: {diagnostic}");
    }

    Standings {
        by_medals,
        by_weighted_score,
        rank_changes,
        errors: extraction.errors,
        diagnostics,
    }
}

pub struct StandingsService {
    scraping: ScrapingService,
    source: PageSource,
    last_updated: Option<DateTime<Local>>,
}

impl StandingsService {
    pub fn new(scraping: ScrapingService, source: PageSource) -> Self {
        Self {
            scraping,
            source,
            last_updated: None,
        }
    }

    /// Time of the last successful load, if any.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub async fn refresh(&mut self) -> Result<Standings> {
        info!("Starting standings refresh");

        let html = match &self.source {
            PageSource::Url(url) => match self.scraping.fetch(url).await? {
                FetchedPage::Success(body) => body,
                FetchedPage::Failure(status) => return Err(MedalError::Fetch { status }),
            },
            PageSource::File(path) => {
                info!("Reading standings page from {:?}", path);
                tokio::fs::read_to_string(path).await?
            }
        };
        let standings = compute_standings(&html, self.scraping.selectors());
        self.last_updated = Some(Local::now());
        info!(
            "Standings refresh completed: {} countries, {} rows skipped",
            standings.by_medals.len(),
            standings.errors.len()
        );
        Ok(standings)
    }
}

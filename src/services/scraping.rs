use crate::config::RowSelectors;
use crate::error::Result;
use crate::infrastructure::{
    Extraction, FetchedPage, MedalScraper, OlympicsClient, OlympicsScraper, Selectors,
};
use reqwest::Client;
use scraper::Html;
use tracing::info;

/// Parses `html` and extracts one record per well-formed country row.
pub fn extract_records(html: &str, selectors: &Selectors) -> Extraction {
    let document = Html::parse_document(html);
    OlympicsScraper.extract_records(&document, selectors)
}

pub struct ScrapingService {
    client: OlympicsClient,
    selectors: Selectors,
}

impl ScrapingService {
    pub fn new(client: Client, selectors: &RowSelectors) -> Result<Self> {
        info!("Created new Scraping service");
        Ok(Self {
            client: OlympicsClient::new(client),
            selectors: Selectors::new(selectors)?,
        })
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.client.fetch(url).await
    }
}

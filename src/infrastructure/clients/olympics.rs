use crate::error::Result;
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

/// Outcome of requesting the standings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedPage {
    Success(String),
    Failure(u16),
}

pub struct OlympicsClient {
    client: Client,
}

impl OlympicsClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        info!("Fetching {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            warn!("{url} answered with status {status}");
            return Ok(FetchedPage::Failure(status.as_u16()));
        }

        let body = response.text().await?;
        info!("Fetched {} bytes from {url}", body.len());
        Ok(FetchedPage::Success(body))
    }
}

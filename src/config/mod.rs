use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod cli;
mod locale;

pub use cli::OutputFormat;
pub use locale::{Columns, Locale, Translations};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36";

/// CSS selectors locating a country row and the cells inside it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RowSelectors {
    pub row: String,
    pub country: String,
    /// Matches the gold, silver and bronze cells, in that order.
    pub medal: String,
    pub total: String,
}

impl Default for RowSelectors {
    fn default() -> Self {
        Self {
            row: ".elhe7kv0".to_string(),
            country: ".elhe7kv5".to_string(),
            medal: ".e1oix8v91.emotion-srm-81g9w1".to_string(),
            total: ".e1oix8v91.emotion-srm-5nhv3o".to_string(),
        }
    }
}

impl RowSelectors {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading row selectors from {:?}", path);
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}

pub struct Config {
    pub args: Args,
    pub selectors: RowSelectors,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let selectors = match &args.selectors_file {
            Some(path) => RowSelectors::load(path)?,
            None => RowSelectors::default(),
        };

        let http_client = build_http_client(args.lang, Duration::from_secs(args.timeout))?;

        Ok(Self {
            args,
            selectors,
            http_client,
        })
    }

    pub fn translations(&self) -> &'static Translations {
        self.args.lang.translations()
    }

    /// The page to fetch: an explicit `--url`, else the locale's page.
    pub fn data_url(&self) -> &str {
        self.args
            .url
            .as_deref()
            .unwrap_or(self.translations().data_url)
    }
}

pub fn build_http_client(locale: Locale, timeout: Duration) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(match locale {
            Locale::En => "en-US,en;q=0.9",
            Locale::Fr => "fr-FR,fr;q=0.9",
        }),
    );

    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_override_wins_over_locale() {
        let args = Args::parse_from(["medalboard", "--lang", "fr", "--url", "http://localhost/x"]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.data_url(), "http://localhost/x");
    }

    #[test]
    fn locale_url_is_used_by_default() {
        let config = Config::from_args(Args::parse_from(["medalboard", "--lang", "fr"])).unwrap();
        assert_eq!(config.data_url(), "https://olympics.com/fr/paris-2024/medailles");
        assert_eq!(config.selectors, RowSelectors::default());
    }

    #[test]
    fn partial_selector_file_keeps_defaults() {
        let selectors: RowSelectors = serde_json::from_str(r#"{"row": "tr.country"}"#).unwrap();
        assert_eq!(selectors.row, "tr.country");
        assert_eq!(selectors.total, RowSelectors::default().total);
    }
}

use crate::config::RowSelectors;
use crate::domain::MedalRecord;
use crate::error::{MedalError, Result};
use scraper::{Html, Selector};

pub(crate) mod olympics;

/// Records pulled out of a page, plus one message per row that had to be skipped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub records: Vec<MedalRecord>,
    pub errors: Vec<String>,
}

pub trait MedalScraper {
    fn extract_records(&self, document: &Html, selectors: &Selectors) -> Extraction;
}

pub struct Selectors {
    pub row: Selector,
    pub country: Selector,
    pub medal: Selector,
    pub total: Selector,
}

impl Selectors {
    pub fn new(config: &RowSelectors) -> Result<Self> {
        Ok(Self {
            row: parse_selector(&config.row)?,
            country: parse_selector(&config.country)?,
            medal: parse_selector(&config.medal)?,
            total: parse_selector(&config.total)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| MedalError::Selector(format!("{selector}: {e}")))
}

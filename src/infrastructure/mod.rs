mod clients;
mod scrapers;

pub use clients::olympics::{FetchedPage, OlympicsClient};
pub use scrapers::{olympics::OlympicsScraper, Extraction, MedalScraper, Selectors};

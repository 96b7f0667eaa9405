pub mod merging;
pub mod ranking;
pub mod scraping;
pub mod standings_service;

use super::{Extraction, MedalScraper, Selectors};
use crate::domain::MedalRecord;
use crate::error::RowError;
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

/// Reads the olympics.com medal table, one record per country row.
pub struct OlympicsScraper;

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_count(field: &'static str, raw: Option<String>) -> Result<u32, RowError> {
    let value = raw.ok_or(RowError::MissingField(field))?;
    value
        .parse::<u32>()
        .map_err(|_| RowError::InvalidNumber { field, value })
}

fn parse_counts(
    row: ElementRef,
    selectors: &Selectors,
    country: &str,
) -> Result<MedalRecord, RowError> {
    // Gold, silver and bronze share the same markup and are told apart by position.
    let mut medals = row.select(&selectors.medal).map(element_text);
    let gold = parse_count("gold", medals.next())?;
    let silver = parse_count("silver", medals.next())?;
    let bronze = parse_count("bronze", medals.next())?;
    let total = parse_count("total", row.select(&selectors.total).next().map(element_text))?;

    Ok(MedalRecord::new(country, gold, silver, bronze, total))
}

fn parse_row(
    row: ElementRef,
    selectors: &Selectors,
) -> Result<MedalRecord, (Option<String>, RowError)> {
    let country = row
        .select(&selectors.country)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty())
        .ok_or((None, RowError::MissingField("country")))?;

    parse_counts(row, selectors, &country).map_err(|e| (Some(country), e))
}

impl MedalScraper for OlympicsScraper {
    fn extract_records(&self, document: &Html, selectors: &Selectors) -> Extraction {
        let mut extraction = Extraction::default();

        for (index, row) in document.select(&selectors.row).enumerate() {
            match parse_row(row, selectors) {
                Ok(record) => {
                    debug!(
                        "Parsed {}: {} gold, {} silver, {} bronze, {} total",
                        record.country, record.gold, record.silver, record.bronze, record.total
                    );
                    extraction.records.push(record);
                }
                Err((country, cause)) => {
                    let context = match country {
                        Some(country) => format!("row {} ({})", index + 1, country),
                        None => format!("row {}", index + 1),
                    };
                    let message = format!("{context}: {cause}");
                    warn!("Skipping {message}");
                    extraction.errors.push(message);
                }
            }
        }

        extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RowSelectors;

    fn row(country: &str, gold: &str, silver: &str, bronze: &str, total: Option<&str>) -> String {
        let total = total
            .map(|t| format!(r#"<span class="e1oix8v91 emotion-srm-5nhv3o">{t}</span>"#))
            .unwrap_or_default();
        format!(
            r#"<div class="elhe7kv0">
                <span class="elhe7kv5"> {country} </span>
                <span class="e1oix8v91 emotion-srm-81g9w1">{gold}</span>
                <span class="e1oix8v91 emotion-srm-81g9w1">{silver}</span>
                <span class="e1oix8v91 emotion-srm-81g9w1">{bronze}</span>
                {total}
            </div>"#
        )
    }

    fn extract(rows: &[String]) -> Extraction {
        let html = format!("<html><body>{}</body></html>", rows.join("\n"));
        let document = Html::parse_document(&html);
        let selectors = Selectors::new(&RowSelectors::default()).unwrap();
        OlympicsScraper.extract_records(&document, &selectors)
    }

    #[test]
    fn extracts_rows_in_document_order() {
        let extraction = extract(&[
            row("United States of America", "40", "44", "42", Some("126")),
            row("People's Republic of China", "40", "27", "24", Some("91")),
        ]);

        assert!(extraction.errors.is_empty());
        assert_eq!(
            extraction.records,
            vec![
                MedalRecord::new("United States of America", 40, 44, 42, 126),
                MedalRecord::new("People's Republic of China", 40, 27, 24, 91),
            ]
        );
    }

    #[test]
    fn total_is_taken_from_the_page() {
        let extraction = extract(&[row("Japan", "20", "12", "13", Some("99"))]);
        assert_eq!(extraction.records[0].total, 99);
    }

    #[test]
    fn row_without_total_is_skipped() {
        let extraction = extract(&[
            row("France", "16", "26", "22", Some("64")),
            row("Australia", "18", "19", "16", None),
            row("Japan", "20", "12", "13", Some("45")),
        ]);

        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].country, "France");
        assert_eq!(extraction.records[1].country, "Japan");
        assert_eq!(extraction.errors, vec!["row 2 (Australia): missing total".to_string()]);
    }

    #[test]
    fn non_numeric_count_is_skipped() {
        let extraction = extract(&[row("Italy", "12", "-", "15", Some("40"))]);

        assert!(extraction.records.is_empty());
        assert_eq!(
            extraction.errors,
            vec![r#"row 1 (Italy): invalid silver value "-""#.to_string()]
        );
    }

    #[test]
    fn row_without_country_is_skipped() {
        let html =
            r#"<div class="elhe7kv0"><span class="e1oix8v91 emotion-srm-81g9w1">1</span></div>"#;
        let extraction = extract(&[html.to_string()]);

        assert!(extraction.records.is_empty());
        assert_eq!(extraction.errors, vec!["row 1: missing country".to_string()]);
    }

    #[test]
    fn row_with_too_few_medal_cells_is_skipped() {
        let html = r#"<div class="elhe7kv0">
            <span class="elhe7kv5">Kenya</span>
            <span class="e1oix8v91 emotion-srm-81g9w1">4</span>
            <span class="e1oix8v91 emotion-srm-5nhv3o">4</span>
        </div>"#;
        let extraction = extract(&[html.to_string()]);

        assert_eq!(extraction.errors, vec!["row 1 (Kenya): missing silver".to_string()]);
    }

    #[test]
    fn page_without_rows_yields_nothing() {
        let extraction = extract(&[]);
        assert_eq!(extraction, Extraction::default());
    }
}

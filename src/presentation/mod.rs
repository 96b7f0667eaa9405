use crate::config::{Locale, Translations};
use crate::domain::Standings;
use crate::error::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

mod table;

pub use table::{medals_table, rank_change_color, rank_change_table, weighted_score_table};

pub fn format_last_updated(last_updated: Option<DateTime<Local>>) -> String {
    last_updated
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "None".to_string())
}

pub fn render_table(
    standings: &Standings,
    t: &Translations,
    last_updated: Option<DateTime<Local>>,
) -> String {
    let c = &t.columns;
    let mut lines = vec![
        t.page_title.to_string(),
        format!("{} {}", t.last_updated, format_last_updated(last_updated)),
        String::new(),
        t.medals_explanation.to_string(),
        String::new(),
    ];

    let problems: Vec<String> = standings
        .errors
        .iter()
        .chain(&standings.diagnostics)
        .map(|message| format!("{} {}", t.error_parsing, message))
        .collect();
    if !problems.is_empty() {
        lines.extend(problems);
        lines.push(String::new());
    }

    lines.extend([
        t.sorted_by_medals.to_string(),
        medals_table(&standings.by_medals, c).to_string(),
        String::new(),
        t.sorted_by_weighted_score.to_string(),
        weighted_score_table(&standings.by_weighted_score, c).to_string(),
        String::new(),
        t.rank_change.to_string(),
        rank_change_table(&standings.rank_changes, c).to_string(),
    ]);

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    locale: Locale,
    last_updated: Option<String>,
    #[serde(flatten)]
    standings: &'a Standings,
}

pub fn render_json(
    standings: &Standings,
    locale: Locale,
    last_updated: Option<DateTime<Local>>,
) -> Result<String> {
    let report = JsonReport {
        locale,
        last_updated: last_updated.map(|t| format_last_updated(Some(t))),
        standings,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MedalRecord;
    use crate::services::merging::merge_rankings;
    use crate::services::ranking::{rank_by_medals, rank_by_weighted_score};

    fn standings() -> Standings {
        let records = vec![
            MedalRecord::new("A", 3, 2, 1, 6),
            MedalRecord::new("B", 2, 5, 5, 12),
            MedalRecord::new("C", 3, 2, 1, 6),
        ];
        let by_medals = rank_by_medals(&records);
        let by_weighted_score = rank_by_weighted_score(&records);
        let (rank_changes, _) = merge_rankings(&by_medals, &by_weighted_score);
        Standings {
            by_medals,
            by_weighted_score,
            rank_changes,
            errors: vec!["row 4 (D): missing total".to_string()],
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn table_contains_all_sections() {
        let out = render_table(&standings(), Locale::En.translations(), None);

        assert!(out.starts_with("Olympics Ranking\n"));
        assert!(out.contains("Last Updated None"));
        assert!(out.contains("Error parsing element: row 4 (D): missing total"));
        assert!(out.contains("Sorted by Number of Medals"));
        assert!(out.contains("Sorted by Weighted Gold Score"));
        assert!(out.contains("Rank Change from Medals to Weighted Score"));
        assert!(out.contains("6.167"));
        assert!(out.contains("4.333"));
        assert!(out.contains("+2"));
    }

    #[test]
    fn join_diagnostics_are_listed() {
        let mut standings = standings();
        standings.diagnostics =
            vec![r#"country "Z" is missing from the medals ranking"#.to_string()];

        let out = render_table(&standings, Locale::En.translations(), None);
        assert!(out.contains(r#"country "Z" is missing from the medals ranking"#));
        assert!(out.contains("Sorted by Number of Medals"));
    }

    #[test]
    fn french_headers() {
        let out = render_table(&standings(), Locale::Fr.translations(), None);
        assert!(out.contains("Classement Olympique"));
        assert!(out.contains("Pays"));
        assert!(out.contains("Score en or pondéré"));
        assert!(out.contains("Dernière mise à jour None"));
    }

    #[test]
    fn json_report_flattens_standings() {
        let json = render_json(&standings(), Locale::Fr, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["locale"], "fr");
        assert!(value["last_updated"].is_null());
        assert_eq!(value["by_medals"][0]["country"], "A");
        assert_eq!(value["by_medals"][0]["rank"], 1);
        assert!(value["by_medals"][0].get("weighted_score").is_none());
        assert_eq!(value["by_weighted_score"][0]["country"], "B");
        assert_eq!(value["rank_changes"][2]["rank_change"], 2);
        assert_eq!(value["errors"][0], "row 4 (D): missing total");
        assert_eq!(value["diagnostics"], serde_json::json!([]));
    }
}

use crate::config::Columns;
use crate::domain::{RankDeltaEntry, RankedEntry};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn ranking_table(entries: &[RankedEntry], columns: &Columns, with_score: bool) -> Table {
    let mut header = vec![
        "#",
        columns.country,
        columns.gold,
        columns.silver,
        columns.bronze,
        columns.total,
    ];
    if with_score {
        header.push(columns.weighted_score);
    }

    let mut table = new_table(header);
    for e in entries {
        let mut row = vec![
            e.rank.to_string(),
            e.record.country.clone(),
            e.record.gold.to_string(),
            e.record.silver.to_string(),
            e.record.bronze.to_string(),
            e.record.total.to_string(),
        ];
        if with_score {
            row.push(
                e.weighted_score
                    .map(|s| format!("{s:.3}"))
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
        table.add_row(row);
    }

    align_right(&mut table, &[0, 2, 3, 4, 5, 6]);
    table
}

pub fn medals_table(entries: &[RankedEntry], columns: &Columns) -> Table {
    ranking_table(entries, columns, false)
}

pub fn weighted_score_table(entries: &[RankedEntry], columns: &Columns) -> Table {
    ranking_table(entries, columns, true)
}

/// Green when weighting helps a country, red when it hurts.
pub fn rank_change_color(change: i64) -> Option<Color> {
    match change.signum() {
        1 => Some(Color::Green),
        -1 => Some(Color::Red),
        _ => None,
    }
}

pub fn rank_change_table(entries: &[RankDeltaEntry], columns: &Columns) -> Table {
    let mut table = new_table(vec![
        columns.country,
        columns.rank_by_medals,
        columns.rank_by_weighted_score,
        columns.rank_change,
    ]);

    for e in entries {
        let change = if e.rank_change > 0 {
            format!("+{}", e.rank_change)
        } else {
            e.rank_change.to_string()
        };
        let cells = [
            e.country.clone(),
            e.rank_by_medals.to_string(),
            e.rank_by_weighted_score.to_string(),
            change,
        ];

        let color = rank_change_color(e.rank_change);
        table.add_row(Row::from(cells.map(|text| match color {
            Some(color) => Cell::new(text).fg(color),
            None => Cell::new(text),
        })));
    }

    align_right(&mut table, &[1, 2, 3]);
    table
}

//! Terminal rendering for detected columns and analysis results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use senti_model::{ColumnProfile, Label, ScoredColumn};

/// Rows shown in the per-entry detail table before output is cut off.
pub const DETAIL_PREVIEW_ROWS: usize = 10;
/// Characters of each entry shown in the detail table.
const PREVIEW_CHARS: usize = 60;

/// Detected text columns as a display table, in table column order.
pub fn profile_table(profiles: &[ColumnProfile]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Avg length"),
        header_cell("Unique entries"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(&profile.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", profile.avg_entry_len)),
            Cell::new(profile.unique_entries),
        ]);
    }
    table
}

/// Aggregate statistics for one scored column as plain text lines.
pub fn summary_text(scored: &ScoredColumn) -> String {
    let total = scored.len();
    let mut lines = vec![format!("Rows analyzed: {total}")];
    if total > 0 {
        let mean = scored.polarities.iter().sum::<f64>() / total as f64;
        lines.push(format!("Mean polarity: {mean:+.3}"));
        for label in [Label::Positive, Label::Neutral, Label::Negative] {
            let count = scored
                .labels
                .iter()
                .filter(|&&candidate| candidate == label)
                .count();
            let share = 100.0 * count as f64 / total as f64;
            lines.push(format!("{label}: {count} ({share:.1}%)"));
        }
        if let Some(subjectivity) = &scored.subjectivity {
            let mean = subjectivity.iter().sum::<f64>() / total as f64;
            lines.push(format!("Mean subjectivity: {mean:.3}"));
        }
    }
    lines.join("\n")
}

/// Per-entry results, capped at [`DETAIL_PREVIEW_ROWS`] rows.
pub fn detail_table(texts: &[String], scored: &ScoredColumn) -> Table {
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Row"),
        header_cell("Text"),
        header_cell("Polarity"),
        header_cell("Label"),
    ];
    if scored.subjectivity.is_some() {
        header.push(header_cell("Subjectivity"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, text) in texts.iter().take(DETAIL_PREVIEW_ROWS).enumerate() {
        let label = scored.labels[index];
        let mut row = vec![
            Cell::new(index + 1),
            Cell::new(preview(text)),
            Cell::new(format!("{:+.3}", scored.polarities[index])).fg(label_color(label)),
            label_cell(label),
        ];
        if let Some(subjectivity) = &scored.subjectivity {
            row.push(Cell::new(format!("{:.3}", subjectivity[index])));
        }
        table.add_row(row);
    }
    table
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(PREVIEW_CHARS).collect();
        cut.push('…');
        cut
    }
}

fn label_cell(label: Label) -> Cell {
    match label {
        Label::Neutral => dim_cell(label),
        _ => Cell::new(label)
            .fg(label_color(label))
            .add_attribute(Attribute::Bold),
    }
}

fn label_color(label: Label) -> Color {
    match label {
        Label::Positive => Color::Green,
        Label::Neutral => Color::DarkGrey,
        Label::Negative => Color::Red,
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoredColumn {
        ScoredColumn {
            polarities: vec![0.8, -0.6, 0.0],
            labels: vec![Label::Positive, Label::Negative, Label::Neutral],
            subjectivity: Some(vec![0.75, 0.5, 0.25]),
        }
    }

    #[test]
    fn summary_text_is_stable() {
        insta::assert_snapshot!(summary_text(&sample()), @r"
        Rows analyzed: 3
        Mean polarity: +0.067
        Positive: 1 (33.3%)
        Neutral: 1 (33.3%)
        Negative: 1 (33.3%)
        Mean subjectivity: 0.500
        ");
    }

    #[test]
    fn empty_column_summarizes_without_statistics() {
        let scored = ScoredColumn {
            polarities: Vec::new(),
            labels: Vec::new(),
            subjectivity: None,
        };
        assert_eq!(summary_text(&scored), "Rows analyzed: 0");
    }

    #[test]
    fn detail_table_caps_the_preview() {
        let texts: Vec<String> = (0..25).map(|idx| format!("entry number {idx}")).collect();
        let scored = ScoredColumn {
            polarities: vec![0.0; 25],
            labels: vec![Label::Neutral; 25],
            subjectivity: None,
        };
        let table = detail_table(&texts, &scored);
        assert_eq!(table.row_iter().count(), DETAIL_PREVIEW_ROWS);
    }

    #[test]
    fn long_entries_are_truncated_in_the_preview() {
        let text = "x".repeat(200);
        assert_eq!(preview(&text).chars().count(), PREVIEW_CHARS + 1);
        assert_eq!(preview("short"), "short");
    }
}

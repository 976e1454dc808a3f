use super::{report::SeasonSummary, summary::TraitCount};
use prettytable::{row, Cell, Row, Table};

/// Placeholder shown for absent busiest day/plot.
pub const EMPTY_CELL: &str = "-";

pub struct View {}

impl View {
    /// One column per season, one row per statistic.
    pub fn summary_table(summaries: &[SeasonSummary]) -> Table {
        let mut table = Table::new();

        let mut header = vec![Cell::new("STATISTIC")];
        header.extend(summaries.iter().map(|s| Cell::new(&s.season)));
        table.add_row(Row::new(header));

        let rows: [(&str, fn(&SeasonSummary) -> String); 8] = [
            ("Fields", |s| s.field_count.to_string()),
            ("Plots", |s| s.plot_count.to_string()),
            ("Observations", |s| s.observation_count.to_string()),
            ("Active time", |s| s.active_duration.clone()),
            ("Collectors", |s| s.collector_count.to_string()),
            ("Photos", |s| s.image_observation_count.to_string()),
            ("Busiest day", |s| s.busiest_day.clone().unwrap_or_else(|| EMPTY_CELL.to_string())),
            ("Busiest plot", |s| s.busiest_unit.clone().unwrap_or_else(|| EMPTY_CELL.to_string())),
        ];
        for (label, value) in rows {
            let mut cells = vec![Cell::new(label)];
            cells.extend(summaries.iter().map(|s| Cell::new(&value(s))));
            table.add_row(Row::new(cells));
        }

        table
    }

    pub fn summaries(summaries: &[SeasonSummary]) {
        Self::summary_table(summaries).printstd();
    }

    pub fn trait_counts(counts: &[TraitCount]) {
        let mut table = Table::new();
        table.add_row(row!["TRAIT", "OBSERVATIONS"]);
        for count in counts {
            table.add_row(row![count.name, count.count]);
        }
        table.printstd();
    }

    pub fn seasons(seasons: &[(String, usize)]) {
        let mut table = Table::new();
        table.add_row(row!["SEASON", "OBSERVATIONS"]);
        for (season, count) in seasons {
            table.add_row(row![season, count]);
        }
        table.printstd();
    }
}

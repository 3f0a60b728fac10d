use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::comparison::CombinedSeries;
use crate::dataset::{PlayerRecord, SCOUT_COLUMNS};

const PROJECTION_HEADERS: &[&str] = &["Player", "Role", "Line", "Age", "Projected Overall"];

pub struct ExportReport {
    pub players: usize,
    pub projection_points: usize,
}

pub fn default_export_path(dir: &Path) -> PathBuf {
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("scout_{stamp}.xlsx"))
}

/// Writes the scout result (`Players`) and, when present, the projection
/// comparison (`Projection`) to an xlsx workbook.
pub fn export_scout_workbook(
    path: &Path,
    players: &[&PlayerRecord],
    comparison: Option<&CombinedSeries>,
) -> Result<ExportReport> {
    let mut player_rows = vec![
        SCOUT_COLUMNS
            .iter()
            .map(|column| column.label().to_string())
            .collect::<Vec<_>>(),
    ];
    player_rows.extend(players.iter().map(|record| player_row(record)));

    let mut projection_rows = vec![
        PROJECTION_HEADERS
            .iter()
            .map(|header| header.to_string())
            .collect::<Vec<_>>(),
    ];
    if let Some(series) = comparison {
        projection_rows.extend(projection_rows_of(series));
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Players")?;
        write_rows(sheet, &player_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Projection")?;
        write_rows(sheet, &projection_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        players: player_rows.len().saturating_sub(1),
        projection_points: projection_rows.len().saturating_sub(1),
    })
}

/// Body rows of the `Projection` sheet, one per point, in series order.
pub fn projection_rows_of(series: &CombinedSeries) -> Vec<Vec<String>> {
    series
        .points
        .iter()
        .map(|point| {
            let line = series
                .style_of(&point.series, point.role)
                .map(|style| style.label())
                .unwrap_or_default();
            vec![
                point.series.clone(),
                point.role.label().to_string(),
                line.to_string(),
                point.age.to_string(),
                format!("{:.2}", point.rating),
            ]
        })
        .collect()
}

fn player_row(record: &PlayerRecord) -> Vec<String> {
    SCOUT_COLUMNS
        .iter()
        .map(|column| record.cell(*column))
        .collect()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}

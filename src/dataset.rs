use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "player_url", default)]
    pub url: String,
    #[serde(rename = "short_name")]
    pub name: String,
    #[serde(rename = "player_positions", default)]
    pub positions: String,
    pub overall: u32,
    pub potential: u32,
    pub age: u32,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub height_cm: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub value_eur: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub wage_eur: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "club_name", default)]
    pub club: String,
    #[serde(rename = "nationality_name", default)]
    pub nationality: String,
    #[serde(default)]
    pub club_position: String,
    #[serde(rename = "league_name", default)]
    pub league: String,
}

impl PlayerRecord {
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Url => self.url.clone(),
            Column::Name => self.name.clone(),
            Column::Positions => self.positions.clone(),
            Column::Overall => self.overall.to_string(),
            Column::Potential => self.potential.to_string(),
            Column::Age => self.age.to_string(),
            Column::HeightCm => format_number(self.height_cm),
            Column::ValueEur => format_number(self.value_eur),
            Column::WageEur => format_number(self.wage_eur),
            Column::WeightKg => format_number(self.weight_kg),
            Column::Club => self.club.clone(),
            Column::Nationality => self.nationality.clone(),
            Column::ClubPosition => self.club_position.clone(),
            Column::League => self.league.clone(),
        }
    }
}

fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.1}"),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Url,
    Name,
    Positions,
    Overall,
    Potential,
    Age,
    HeightCm,
    ValueEur,
    WageEur,
    WeightKg,
    Club,
    Nationality,
    ClubPosition,
    League,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::Url,
        Column::Name,
        Column::Positions,
        Column::Overall,
        Column::Potential,
        Column::Age,
        Column::HeightCm,
        Column::ValueEur,
        Column::WageEur,
        Column::WeightKg,
        Column::Club,
        Column::Nationality,
        Column::ClubPosition,
        Column::League,
    ];

    /// Header name in the source CSV.
    pub fn header(self) -> &'static str {
        match self {
            Column::Url => "player_url",
            Column::Name => "short_name",
            Column::Positions => "player_positions",
            Column::Overall => "overall",
            Column::Potential => "potential",
            Column::Age => "age",
            Column::HeightCm => "height_cm",
            Column::ValueEur => "value_eur",
            Column::WageEur => "wage_eur",
            Column::WeightKg => "weight_kg",
            Column::Club => "club_name",
            Column::Nationality => "nationality_name",
            Column::ClubPosition => "club_position",
            Column::League => "league_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Url => "URL",
            Column::Name => "Name",
            Column::Positions => "Positions",
            Column::Overall => "OVR",
            Column::Potential => "POT",
            Column::Age => "Age",
            Column::HeightCm => "Height",
            Column::ValueEur => "Value (EUR)",
            Column::WageEur => "Wage (EUR)",
            Column::WeightKg => "Weight",
            Column::Club => "Club",
            Column::Nationality => "Nation",
            Column::ClubPosition => "Club Pos",
            Column::League => "League",
        }
    }

    pub fn from_name(name: &str) -> Option<Column> {
        let name = name.trim();
        Column::ALL
            .into_iter()
            .find(|column| column.header().eq_ignore_ascii_case(name))
    }
}

/// Columns shown in the curated data view.
pub const CURATED_COLUMNS: &[Column] = &[
    Column::Url,
    Column::Name,
    Column::Positions,
    Column::Overall,
    Column::Potential,
    Column::Age,
    Column::HeightCm,
    Column::ValueEur,
    Column::WageEur,
    Column::WeightKg,
    Column::Club,
    Column::Nationality,
    Column::ClubPosition,
];

/// Columns shown for scout results.
pub const SCOUT_COLUMNS: &[Column] = &[
    Column::Name,
    Column::Positions,
    Column::Overall,
    Column::Potential,
    Column::Age,
    Column::ValueEur,
    Column::Club,
    Column::Nationality,
    Column::ClubPosition,
];

const REQUIRED_HEADERS: &[&str] = &["short_name", "overall", "potential", "age"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    Overall,
    Potential,
    HeightCm,
    WeightKg,
    ValueEur,
    WageEur,
}

impl NumericField {
    pub fn value(self, record: &PlayerRecord) -> Option<f64> {
        match self {
            NumericField::Age => Some(f64::from(record.age)),
            NumericField::Overall => Some(f64::from(record.overall)),
            NumericField::Potential => Some(f64::from(record.potential)),
            NumericField::HeightCm => record.height_cm,
            NumericField::WeightKg => record.weight_kg,
            NumericField::ValueEur => record.value_eur,
            NumericField::WageEur => record.wage_eur,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::Overall => "Overall",
            NumericField::Potential => "Potential",
            NumericField::HeightCm => "Height",
            NumericField::WeightKg => "Weight",
            NumericField::ValueEur => "Value",
            NumericField::WageEur => "Wage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    ClubPosition,
    League,
    Nationality,
    Club,
}

impl CategoricalField {
    pub fn value(self, record: &PlayerRecord) -> &str {
        match self {
            CategoricalField::ClubPosition => &record.club_position,
            CategoricalField::League => &record.league,
            CategoricalField::Nationality => &record.nationality,
            CategoricalField::Club => &record.club,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoricalField::ClubPosition => "Positions",
            CategoricalField::League => "Leagues",
            CategoricalField::Nationality => "Nations",
            CategoricalField::Club => "Clubs",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub errors: Vec<String>,
}

impl LoadReport {
    fn skip(&mut self, msg: String) {
        const MAX_ERRORS: usize = 8;
        self.rows_skipped += 1;
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(msg);
        }
    }
}

/// The player table, loaded once per session and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PlayerRecord>,
    raw: RawTable,
    source: String,
}

impl Dataset {
    pub fn from_records(records: Vec<PlayerRecord>, source: impl Into<String>) -> Self {
        let headers = Column::ALL
            .iter()
            .map(|column| column.header().to_string())
            .collect();
        let rows = records
            .iter()
            .map(|record| Column::ALL.iter().map(|c| record.cell(*c)).collect())
            .collect();
        Self {
            records,
            raw: RawTable { headers, rows },
            source: source.into(),
        }
    }

    pub fn load_csv(path: &Path) -> Result<(Self, LoadReport)> {
        let file =
            File::open(path).with_context(|| format!("open dataset {}", path.display()))?;
        Self::load_from_reader(file, path.display().to_string())
    }

    pub fn load_from_reader<R: Read>(
        reader: R,
        source: impl Into<String>,
    ) -> Result<(Self, LoadReport)> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);
        let headers = reader.headers().context("read csv header")?.clone();

        let missing: Vec<&str> = REQUIRED_HEADERS
            .iter()
            .copied()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .collect();
        if !missing.is_empty() {
            return Err(anyhow!("dataset is missing columns: {}", missing.join(", ")));
        }

        let mut report = LoadReport::default();
        let mut records = Vec::new();
        let mut rows = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            // +2: header line and 1-based numbering.
            let line = idx + 2;
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    report.skip(format!("line {line}: {err}"));
                    continue;
                }
            };
            match row.deserialize::<PlayerRecord>(Some(&headers)) {
                Ok(record) => {
                    rows.push(row.iter().map(str::to_string).collect());
                    records.push(record);
                }
                Err(err) => report.skip(format!("line {line}: {err}")),
            }
        }
        report.rows_loaded = records.len();

        let dataset = Self {
            records,
            raw: RawTable {
                headers: headers.iter().map(str::to_string).collect(),
                rows,
            },
            source: source.into(),
        };
        Ok((dataset, report))
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn raw(&self) -> &RawTable {
        &self.raw
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest present value of a numeric column.
    pub fn numeric_bounds(&self, field: NumericField) -> Option<(f64, f64)> {
        self.records
            .iter()
            .filter_map(|record| field.value(record))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Distinct values of a categorical column in order of first appearance.
    pub fn distinct(&self, field: CategoricalField) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for record in &self.records {
            let value = field.value(record);
            if seen.insert(value) {
                out.push(value.to_string());
            }
        }
        out
    }
}

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::comparison::CombinedSeries;
use crate::dataset::PlayerRecord;

pub const AGE_HISTOGRAM_BINS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Histogram,
    Scatter,
    Choropleth,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartSpec {
    fn new(kind: ChartKind, title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryValue {
    pub label: String,
    pub value: f64,
}

/// Ages in `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    pub lo: u32,
    pub hi: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub player_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "rows", rename_all = "snake_case")]
pub enum ChartData {
    Categories(Vec<CategoryValue>),
    Histogram(Vec<HistogramBin>),
    Points(Vec<[f64; 2]>),
    Countries(Vec<CountryCount>),
    Series(CombinedSeries),
}

/// What the rendering surface draws: chart settings plus the data bound to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub spec: ChartSpec,
    pub data: ChartData,
}

pub fn dashboard_charts(records: &[PlayerRecord]) -> Vec<Chart> {
    vec![
        Chart {
            spec: ChartSpec::new(ChartKind::Bar, "Players per overall", "Overall", "Players"),
            data: ChartData::Categories(overall_counts(records)),
        },
        Chart {
            spec: ChartSpec::new(ChartKind::Bar, "Potential by age", "Age", "Mean potential"),
            data: ChartData::Categories(potential_by_age(records)),
        },
        Chart {
            spec: ChartSpec::new(
                ChartKind::HorizontalBar,
                "Players per position",
                "Players",
                "Position",
            ),
            data: ChartData::Categories(position_counts(records)),
        },
        Chart {
            spec: ChartSpec::new(ChartKind::Histogram, "Age distribution", "Age", "Players"),
            data: ChartData::Histogram(age_histogram(records, AGE_HISTOGRAM_BINS)),
        },
        Chart {
            spec: ChartSpec::new(ChartKind::Scatter, "Overall vs value", "Overall", "Value"),
            data: ChartData::Points(overall_value_points(records)),
        },
        Chart {
            spec: ChartSpec::new(
                ChartKind::Choropleth,
                "Players per nation",
                "Country",
                "Players",
            ),
            data: ChartData::Countries(nationality_counts(records)),
        },
    ]
}

pub fn comparison_chart(series: CombinedSeries) -> Chart {
    Chart {
        spec: ChartSpec::new(ChartKind::Line, &series.title, "Age", "Projected overall"),
        data: ChartData::Series(series),
    }
}

/// Player count per overall rating, ascending by rating.
pub fn overall_counts(records: &[PlayerRecord]) -> Vec<CategoryValue> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.overall).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(overall, count)| CategoryValue {
            label: overall.to_string(),
            value: count as f64,
        })
        .collect()
}

/// Mean potential per age, ascending by age.
pub fn potential_by_age(records: &[PlayerRecord]) -> Vec<CategoryValue> {
    let mut sums: BTreeMap<u32, (u64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.age).or_insert((0, 0));
        entry.0 += u64::from(record.potential);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(age, (total, count))| CategoryValue {
            label: age.to_string(),
            value: total as f64 / count as f64,
        })
        .collect()
}

/// Player count per club position, largest first. Blank positions are dropped.
pub fn position_counts(records: &[PlayerRecord]) -> Vec<CategoryValue> {
    value_counts(records.iter().map(|r| r.club_position.as_str()))
        .into_iter()
        .map(|(label, count)| CategoryValue {
            label,
            value: count as f64,
        })
        .collect()
}

pub fn nationality_counts(records: &[PlayerRecord]) -> Vec<CountryCount> {
    value_counts(records.iter().map(|r| r.nationality.as_str()))
        .into_iter()
        .map(|(country, player_count)| CountryCount {
            country,
            player_count,
        })
        .collect()
}

pub fn age_histogram(records: &[PlayerRecord], bins: u32) -> Vec<HistogramBin> {
    let Some(min) = records.iter().map(|r| r.age).min() else {
        return Vec::new();
    };
    let max = records.iter().map(|r| r.age).max().unwrap_or(min);

    let span = (max - min).saturating_add(1);
    let width = span.div_ceil(bins.max(1)).max(1);
    let count = span.div_ceil(width);
    let mut out: Vec<HistogramBin> = (0..count)
        .map(|i| HistogramBin {
            lo: min.saturating_add(i * width),
            hi: min.saturating_add((i + 1).saturating_mul(width)),
            count: 0,
        })
        .collect();
    for record in records {
        let idx = ((record.age - min) / width) as usize;
        if let Some(bin) = out.get_mut(idx) {
            bin.count += 1;
        }
    }
    out
}

/// `[overall, value]` pairs; rows without a market value are skipped.
pub fn overall_value_points(records: &[PlayerRecord]) -> Vec<[f64; 2]> {
    records
        .iter()
        .filter_map(|r| r.value_eur.map(|v| [f64::from(r.overall), v]))
        .collect()
}

// Descending by count, ties in order of first appearance.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        match index.get(value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

use serde::Serialize;

use crate::cohort::CohortKind;
use crate::projection::Trajectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    pub fn for_role(role: CohortKind) -> Self {
        match role {
            CohortKind::Prospect => LineStyle::Solid,
            CohortKind::Star => LineStyle::Dashed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub series: String,
    pub role: CohortKind,
    pub line: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub series: String,
    pub role: CohortKind,
    pub age: u32,
    pub rating: f64,
}

/// Two trajectories flattened into one labeled, chart-ready collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedSeries {
    pub title: String,
    pub styles: Vec<SeriesStyle>,
    pub points: Vec<SeriesPoint>,
}

impl CombinedSeries {
    /// Names may repeat across roles, so a series is keyed by both.
    pub fn style_of(&self, series: &str, role: CohortKind) -> Option<LineStyle> {
        self.styles
            .iter()
            .find(|s| s.series == series && s.role == role)
            .map(|s| s.line)
    }

    /// `(age, rating)` pairs of one series, in age order.
    pub fn series_points(&self, style: &SeriesStyle) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.series == style.series && p.role == style.role)
            .map(|p| (f64::from(p.age), p.rating))
            .collect()
    }

    pub fn age_bounds(&self) -> Option<(u32, u32)> {
        let lo = self.points.iter().map(|p| p.age).min()?;
        let hi = self.points.iter().map(|p| p.age).max()?;
        Some((lo, hi))
    }

    pub fn rating_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.rating).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

pub fn assemble(first: &Trajectory, second: &Trajectory) -> CombinedSeries {
    let mut styles = Vec::with_capacity(2);
    let mut points = Vec::with_capacity(first.len() + second.len());
    for trajectory in [first, second] {
        styles.push(SeriesStyle {
            series: trajectory.player.clone(),
            role: trajectory.role,
            line: LineStyle::for_role(trajectory.role),
        });
        points.extend(trajectory.points.iter().map(|p| SeriesPoint {
            series: trajectory.player.clone(),
            role: trajectory.role,
            age: p.age,
            rating: p.rating,
        }));
    }
    CombinedSeries {
        title: format!("Projected overall: {} vs {}", first.player, second.player),
        styles,
        points,
    }
}

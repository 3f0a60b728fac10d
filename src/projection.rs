use serde::Serialize;

use crate::cohort::CohortKind;
use crate::dataset::PlayerRecord;

pub const PEAK_AGE: u32 = 27;
pub const RETIREMENT_AGE: u32 = 38;

/// Piecewise-linear aging model used for the projection chart.
///
/// Prospects grow linearly from their current overall to their potential at
/// `peak_age`, then decline from the potential to `overall - prospect_decline`
/// over `peak_age + 1 ..= retirement_age`. Stars only decline, from their
/// current overall to `overall - star_decline` at `retirement_age`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgingCurve {
    pub peak_age: u32,
    pub retirement_age: u32,
    pub prospect_decline: f64,
    pub star_decline: f64,
}

impl Default for AgingCurve {
    fn default() -> Self {
        Self {
            peak_age: PEAK_AGE,
            retirement_age: RETIREMENT_AGE,
            prospect_decline: 10.0,
            star_decline: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub age: u32,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub player: String,
    pub role: CohortKind,
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rating_at(&self, age: u32) -> Option<f64> {
        self.points.iter().find(|p| p.age == age).map(|p| p.rating)
    }
}

impl AgingCurve {
    pub fn project(&self, record: &PlayerRecord, role: CohortKind) -> Trajectory {
        let points = match role {
            CohortKind::Prospect => {
                self.prospect_curve(record.age, record.overall, record.potential)
            }
            CohortKind::Star => self.star_curve(record.age, record.overall),
        };
        Trajectory {
            player: record.name.clone(),
            role,
            points,
        }
    }

    pub fn prospect_curve(&self, age: u32, overall: u32, potential: u32) -> Vec<TrajectoryPoint> {
        let start = f64::from(overall);
        let peak = f64::from(potential);

        // Past the peak the growth phase collapses to the current point.
        let growth_end = age.max(self.peak_age);
        let growth_ages = if age <= self.peak_age {
            age..=self.peak_age
        } else {
            age..=age
        };
        let mut points = sample(growth_ages, start, peak);

        // Decline starts the year after growth ends so the peak age is not repeated.
        let decline_ages = growth_end.saturating_add(1)..=self.retirement_age;
        points.extend(sample(decline_ages, peak, start - self.prospect_decline));
        points
    }

    pub fn star_curve(&self, age: u32, overall: u32) -> Vec<TrajectoryPoint> {
        let start = f64::from(overall);
        if age > self.retirement_age {
            return vec![TrajectoryPoint { age, rating: start }];
        }
        sample(age..=self.retirement_age, start, start - self.star_decline)
    }
}

fn sample(ages: std::ops::RangeInclusive<u32>, from: f64, to: f64) -> Vec<TrajectoryPoint> {
    let ages: Vec<u32> = ages.collect();
    linspace(from, to, ages.len())
        .into_iter()
        .zip(ages)
        .map(|(rating, age)| TrajectoryPoint { age, rating })
        .collect()
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
/// A single sample is `start`; zero samples is empty.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

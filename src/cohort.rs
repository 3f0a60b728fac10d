use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::PlayerRecord;
use crate::error::ScoutError;

pub const PROSPECT_MAX_AGE: u32 = 23;
pub const PROSPECT_MIN_POTENTIAL: u32 = 85;
pub const STAR_MIN_AGE_EXCLUSIVE: u32 = 26;
pub const STAR_MIN_OVERALL: u32 = 87;

/// Which fixed cohort a record was drawn from. Doubles as the series role of
/// a projected trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CohortKind {
    Prospect,
    Star,
}

impl CohortKind {
    // The age bounds (<= 23 vs > 26) keep the two cohorts disjoint.
    pub fn admits(self, record: &PlayerRecord) -> bool {
        match self {
            CohortKind::Prospect => {
                record.age <= PROSPECT_MAX_AGE && record.potential >= PROSPECT_MIN_POTENTIAL
            }
            CohortKind::Star => {
                record.age > STAR_MIN_AGE_EXCLUSIVE && record.overall >= STAR_MIN_OVERALL
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CohortKind::Prospect => "prospect",
            CohortKind::Star => "star",
        }
    }
}

impl fmt::Display for CohortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Cohort<'a> {
    kind: CohortKind,
    members: Vec<&'a PlayerRecord>,
}

impl<'a> Cohort<'a> {
    pub fn select(kind: CohortKind, records: &'a [PlayerRecord]) -> Self {
        let mut members: Vec<&PlayerRecord> = records.iter().filter(|r| kind.admits(r)).collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Self { kind, members }
    }

    pub fn kind(&self) -> CohortKind {
        self.kind
    }

    pub fn members(&self) -> &[&'a PlayerRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Selection list: member names, sorted, each listed once.
    pub fn names(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = self.members.iter().map(|r| r.name.as_str()).collect();
        names.dedup();
        names
    }

    pub fn lookup(&self, name: &str) -> Result<&'a PlayerRecord, ScoutError> {
        self.members
            .iter()
            .copied()
            .find(|r| r.name == name)
            .ok_or_else(|| ScoutError::NotFound {
                cohort: self.kind,
                name: name.to_string(),
            })
    }
}

pub fn prospects(records: &[PlayerRecord]) -> Cohort<'_> {
    Cohort::select(CohortKind::Prospect, records)
}

pub fn stars(records: &[PlayerRecord]) -> Cohort<'_> {
    Cohort::select(CohortKind::Star, records)
}

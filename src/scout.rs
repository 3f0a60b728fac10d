use crate::cohort::{self, CohortKind};
use crate::comparison::{self, CombinedSeries};
use crate::dataset::{Dataset, PlayerRecord};
use crate::error::ScoutError;
use crate::filter::{self, FilterCriteria};
use crate::projection::{AgingCurve, Trajectory};

/// Snapshot of the scout widgets for one recomputation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoutInput {
    pub criteria: FilterCriteria,
    pub prospect: Option<String>,
    pub star: Option<String>,
}

impl ScoutInput {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            prospect: None,
            star: None,
        }
    }

    pub fn with_prospect(mut self, name: impl Into<String>) -> Self {
        self.prospect = Some(name.into());
        self
    }

    pub fn with_star(mut self, name: impl Into<String>) -> Self {
        self.star = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Ready {
        prospect: Trajectory,
        star: Trajectory,
        series: CombinedSeries,
    },
    /// At least one cohort is empty, so there is nothing to compare.
    NoCandidates { prospects: bool, stars: bool },
}

impl Comparison {
    pub fn series(&self) -> Option<&CombinedSeries> {
        match self {
            Comparison::Ready { series, .. } => Some(series),
            Comparison::NoCandidates { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoutView<'a> {
    pub matches: Vec<&'a PlayerRecord>,
    pub prospect_names: Vec<&'a str>,
    pub star_names: Vec<&'a str>,
    pub comparison: Comparison,
}

/// Filter, derive both cohorts, project the selected pair and assemble the
/// comparison. Cohorts are drawn from the whole dataset, not the filtered
/// subset. An unset selection falls back to the first name in its cohort.
pub fn evaluate<'a>(
    dataset: &'a Dataset,
    input: &ScoutInput,
    curve: &AgingCurve,
) -> Result<ScoutView<'a>, ScoutError> {
    let records = dataset.records();
    let matches = filter::apply(records, &input.criteria);

    let prospects = cohort::prospects(records);
    let stars = cohort::stars(records);
    let prospect_names = prospects.names();
    let star_names = stars.names();

    let comparison = if prospects.is_empty() || stars.is_empty() {
        Comparison::NoCandidates {
            prospects: prospects.is_empty(),
            stars: stars.is_empty(),
        }
    } else {
        let prospect = pick(&prospects, input.prospect.as_deref(), &prospect_names)?;
        let star = pick(&stars, input.star.as_deref(), &star_names)?;
        let prospect = curve.project(prospect, CohortKind::Prospect);
        let star = curve.project(star, CohortKind::Star);
        let series = comparison::assemble(&prospect, &star);
        Comparison::Ready {
            prospect,
            star,
            series,
        }
    };

    Ok(ScoutView {
        matches,
        prospect_names,
        star_names,
        comparison,
    })
}

fn pick<'a, 's>(
    cohort: &cohort::Cohort<'a>,
    selected: Option<&'s str>,
    names: &[&'s str],
) -> Result<&'a PlayerRecord, ScoutError> {
    match selected.or_else(|| names.first().copied()) {
        Some(name) => cohort.lookup(name),
        None => Err(ScoutError::NotFound {
            cohort: cohort.kind(),
            name: String::new(),
        }),
    }
}

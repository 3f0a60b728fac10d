use std::collections::BTreeSet;

use crate::dataset::{CategoricalField, Dataset, NumericField, PlayerRecord};

/// Inclusive on both ends. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Numeric(NumericField),
    Categorical(CategoricalField),
}

impl From<NumericField> for FilterField {
    fn from(field: NumericField) -> Self {
        FilterField::Numeric(field)
    }
}

impl From<CategoricalField> for FilterField {
    fn from(field: CategoricalField) -> Self {
        FilterField::Categorical(field)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Range {
        field: NumericField,
        range: NumericRange,
    },
    OneOf {
        field: CategoricalField,
        allowed: BTreeSet<String>,
    },
}

impl Predicate {
    pub fn field(&self) -> FilterField {
        match self {
            Predicate::Range { field, .. } => FilterField::Numeric(*field),
            Predicate::OneOf { field, .. } => FilterField::Categorical(*field),
        }
    }

    pub fn matches(&self, record: &PlayerRecord) -> bool {
        match self {
            // A missing value never falls inside a range.
            Predicate::Range { field, range } => field
                .value(record)
                .map(|v| range.contains(v))
                .unwrap_or(false),
            Predicate::OneOf { field, allowed } => allowed.contains(field.value(record)),
        }
    }
}

/// One predicate per field; setting a field again replaces its predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    predicates: Vec<Predicate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full-domain criteria for the scout view: every slider spans the observed
    /// range and every multi-select holds all observed values.
    pub fn scout_defaults(dataset: &Dataset) -> Self {
        let mut criteria = Self::new();
        for field in [
            NumericField::Age,
            NumericField::Overall,
            NumericField::Potential,
        ] {
            if let Some((lo, hi)) = dataset.numeric_bounds(field) {
                criteria.set_range(field, lo, hi);
            }
        }
        for field in [CategoricalField::ClubPosition, CategoricalField::League] {
            criteria.set_values(field, dataset.distinct(field));
        }
        criteria
    }

    pub fn with_range(mut self, field: NumericField, min: f64, max: f64) -> Self {
        self.set_range(field, min, max);
        self
    }

    pub fn with_values<I, S>(mut self, field: CategoricalField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_values(field, values);
        self
    }

    pub fn without(mut self, field: impl Into<FilterField>) -> Self {
        self.remove(field);
        self
    }

    pub fn set_range(&mut self, field: NumericField, min: f64, max: f64) {
        self.upsert(Predicate::Range {
            field,
            range: NumericRange::new(min, max),
        });
    }

    pub fn set_values<I, S>(&mut self, field: CategoricalField, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.upsert(Predicate::OneOf {
            field,
            allowed: values.into_iter().map(Into::into).collect(),
        });
    }

    pub fn remove(&mut self, field: impl Into<FilterField>) {
        let field = field.into();
        self.predicates.retain(|p| p.field() != field);
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn range(&self, field: NumericField) -> Option<NumericRange> {
        self.predicates.iter().find_map(|p| match p {
            Predicate::Range { field: f, range } if *f == field => Some(*range),
            _ => None,
        })
    }

    pub fn matches(&self, record: &PlayerRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    fn upsert(&mut self, predicate: Predicate) {
        let field = predicate.field();
        match self.predicates.iter_mut().find(|p| p.field() == field) {
            Some(slot) => *slot = predicate,
            None => self.predicates.push(predicate),
        }
    }
}

/// Records satisfying every predicate, in dataset order.
pub fn apply<'a>(records: &'a [PlayerRecord], criteria: &FilterCriteria) -> Vec<&'a PlayerRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

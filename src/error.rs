use thiserror::Error;

use crate::cohort::CohortKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoutError {
    #[error("no {cohort} named {name:?}")]
    NotFound { cohort: CohortKind, name: String },
}

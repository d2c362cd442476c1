use crate::estimate::EstimateError;
use crate::model::TravelMode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("cannot estimate trip: {source}")]
    InvalidInput {
        #[from]
        source: EstimateError,
    },
    #[error("no trip has been planned yet")]
    NoActivePlan,
    #[error("current plan has no {0} option")]
    MissingResult(TravelMode),
    #[error("no destination entered")]
    MissingDestination,
}

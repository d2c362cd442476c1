use crate::persistence::SaveOutcome;

/// result status of a mutation addressed by trip id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripMutation {
    Applied(SaveOutcome),
    /// no trip with that id. nothing changed.
    NotFound,
}

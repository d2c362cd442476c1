//! EcoScore: a 0-100 composite of carbon, cost and duration for one option,
//! normalized against the options of the same planning request. scores from
//! different requests are not comparable.
use crate::model::ModeEstimate;

pub const CO2_WEIGHT: f64 = 60.0;
pub const COST_WEIGHT: f64 = 20.0;
pub const DURATION_WEIGHT: f64 = 20.0;

/// floor for the CO₂ normalization denominator, avoids dividing by zero when
/// every option is emission free
const MIN_CO2_DENOMINATOR: f64 = 0.001;

/// computes the EcoScore of `candidate` relative to `population`.
///
/// each metric is divided by its maximum over population ∪ {candidate} and
/// capped at 1, then combined as `100 - (co2 * 60 + cost * 20 + duration * 20)`,
/// clamped to [0, 100] and rounded.
pub fn score(candidate: &ModeEstimate, population: &[ModeEstimate]) -> u8 {
    let everyone = || population.iter().chain(std::iter::once(candidate));
    let max_co2 = everyone().map(|e| e.co2_kg).fold(f64::MIN, f64::max);
    let max_cost = everyone().map(|e| e.cost).max().unwrap_or_default();
    let max_duration = everyone()
        .map(|e| e.duration_minutes)
        .max()
        .unwrap_or_default();

    let norm_co2 = (candidate.co2_kg / max_co2.max(MIN_CO2_DENOMINATOR)).min(1.0);
    let norm_cost = (candidate.cost as f64 / max_cost.max(1) as f64).min(1.0);
    let norm_duration = (candidate.duration_minutes as f64 / max_duration.max(1) as f64).min(1.0);

    let raw = 100.0
        - (norm_co2 * CO2_WEIGHT + norm_cost * COST_WEIGHT + norm_duration * DURATION_WEIGHT);
    raw.clamp(0.0, 100.0).round() as u8
}

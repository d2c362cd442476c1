use super::{EstimateError, ModeRates};
use crate::model::{ModeEstimate, TravelMode};

/// derives a duration, cost and CO₂ estimate for each of the five travel modes.
///
/// # Arguments
///
/// * `distance_km`               - trip distance, must be positive
/// * `external_duration_minutes` - route duration reported by a route provider.
///                                 overrides the formula duration for transit,
///                                 car and carpool. walk and cycle always use
///                                 the formula. zero is treated as absent.
///
/// # Returns
///
/// five estimates in enumeration order Walk, Cycle, Transit, Car, Carpool
pub fn estimate(
    distance_km: f64,
    external_duration_minutes: Option<u32>,
) -> Result<Vec<ModeEstimate>, EstimateError> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(EstimateError::InvalidDistance(distance_km));
    }
    let external = external_duration_minutes.filter(|d| *d > 0);
    let result = TravelMode::ALL
        .iter()
        .map(|mode| estimate_mode(mode, distance_km, external))
        .collect();
    Ok(result)
}

fn estimate_mode(mode: &TravelMode, distance_km: f64, external: Option<u32>) -> ModeEstimate {
    let rates = ModeRates::for_mode(mode);
    let duration_minutes = match external {
        Some(minutes) if mode.is_motorized() => minutes,
        _ => rates.duration_minutes(distance_km),
    };
    let co2_kg = rates.co2_kg(distance_km);
    let eco_saved_kg = match mode {
        TravelMode::Carpool => Some(co2_kg),
        _ => None,
    };
    ModeEstimate {
        mode: *mode,
        duration_minutes,
        co2_kg,
        cost: rates.cost(distance_km),
        eco_saved_kg,
    }
}

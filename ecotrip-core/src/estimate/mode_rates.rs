use crate::model::TravelMode;

/// fixed per-kilometer rate constants for a travel mode.
///
/// durations, costs and emissions are all linear in distance, with a floor
/// on cost and CO₂ for the motorized modes so that very short trips still
/// carry the minimum fare and the minimum tailpipe estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeRates {
    pub minutes_per_km: f64,
    pub cost_per_km: f64,
    pub min_cost: f64,
    pub co2_kg_per_km: f64,
    pub min_co2_kg: f64,
}

impl ModeRates {
    const WALK: ModeRates = ModeRates {
        minutes_per_km: 12.0,
        cost_per_km: 0.0,
        min_cost: 0.0,
        co2_kg_per_km: 0.0,
        min_co2_kg: 0.0,
    };
    const CYCLE: ModeRates = ModeRates {
        minutes_per_km: 6.0,
        cost_per_km: 0.0,
        min_cost: 0.0,
        co2_kg_per_km: 0.0,
        min_co2_kg: 0.0,
    };
    const TRANSIT: ModeRates = ModeRates {
        minutes_per_km: 4.0,
        cost_per_km: 2.0,
        min_cost: 10.0,
        co2_kg_per_km: 0.05,
        min_co2_kg: 0.05,
    };
    const CAR: ModeRates = ModeRates {
        minutes_per_km: 3.5,
        cost_per_km: 6.0,
        min_cost: 10.0,
        co2_kg_per_km: 0.2,
        min_co2_kg: 0.2,
    };
    const CARPOOL: ModeRates = ModeRates {
        minutes_per_km: 3.2,
        cost_per_km: 3.0,
        min_cost: 10.0,
        co2_kg_per_km: 0.1,
        min_co2_kg: 0.1,
    };

    pub fn for_mode(mode: &TravelMode) -> ModeRates {
        match mode {
            TravelMode::Walk => Self::WALK,
            TravelMode::Cycle => Self::CYCLE,
            TravelMode::Transit => Self::TRANSIT,
            TravelMode::Car => Self::CAR,
            TravelMode::Carpool => Self::CARPOOL,
        }
    }

    /// formula duration in whole minutes, never below one minute
    pub fn duration_minutes(&self, distance_km: f64) -> u32 {
        let minutes = (distance_km * self.minutes_per_km).round();
        (minutes as u32).max(1)
    }

    pub fn cost(&self, distance_km: f64) -> u32 {
        self.min_cost.max(distance_km * self.cost_per_km).round() as u32
    }

    pub fn co2_kg(&self, distance_km: f64) -> f64 {
        self.min_co2_kg.max(distance_km * self.co2_kg_per_km)
    }
}

use super::TripPreferences;
use crate::model::ModeEstimate;

/// reorders estimates by the active preferences.
///
/// each active preference is applied as a stable ascending sort over the
/// whole sequence, in the fixed order fastest, lowest carbon, cheapest. the
/// sorts are not combined into a multi-key comparator: a later active
/// preference re-sorts everything, so the last one applied decides the
/// final order and earlier ones only survive among its ties.
pub fn apply_preferences(
    estimates: &[ModeEstimate],
    prefs: &TripPreferences,
) -> Vec<ModeEstimate> {
    let mut result = estimates.to_vec();
    if prefs.fastest {
        result.sort_by_key(|e| e.duration_minutes);
    }
    if prefs.lowest_carbon {
        result.sort_by(|a, b| a.co2_kg.total_cmp(&b.co2_kg));
    }
    if prefs.cheapest {
        result.sort_by_key(|e| e.cost);
    }
    log::debug!(
        "applied preferences {:?}, order: {:?}",
        prefs,
        result.iter().map(|e| e.mode).collect::<Vec<_>>()
    );
    result
}

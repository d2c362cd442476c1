use super::eco_score_ops;
use crate::model::ModeEstimate;
use serde::{Deserialize, Serialize};

/// headline picks for a set of planning results.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub fastest: ModeEstimate,
    pub cheapest: ModeEstimate,
    pub best: ModeEstimate,
    pub best_eco_score: u8,
}

/// selects the fastest, cheapest and highest EcoScore entries of `results`.
/// ties go to the entry that appears first. returns None when `results` is empty.
pub fn recommend(results: &[ModeEstimate]) -> Option<Recommendation> {
    // min_by_key keeps the first of several equal minima
    let fastest = results.iter().min_by_key(|e| e.duration_minutes)?;
    let cheapest = results.iter().min_by_key(|e| e.cost)?;
    let (best, best_eco_score) = results
        .iter()
        .map(|e| (e, eco_score_ops::score(e, results)))
        .fold(None, |acc: Option<(&ModeEstimate, u8)>, (e, s)| match acc {
            Some((_, best_score)) if best_score >= s => acc,
            _ => Some((e, s)),
        })?;
    Some(Recommendation {
        fastest: fastest.clone(),
        cheapest: cheapest.clone(),
        best: best.clone(),
        best_eco_score,
    })
}

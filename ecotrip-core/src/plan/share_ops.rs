use crate::model::ModeEstimate;

/// currency symbol used when rendering costs
pub const CURRENCY: &str = "₹";

/// "Free" for zero cost, otherwise the amount with its currency symbol
pub fn format_cost(cost: u32) -> String {
    if cost == 0 {
        String::from("Free")
    } else {
        format!("{CURRENCY}{cost}")
    }
}

/// plain-text summary of one option, for sharing outside the app
pub fn share_text(estimate: &ModeEstimate, distance_km: f64, eco_score: u8) -> String {
    [
        format!("{} {}", estimate.mode.icon(), estimate.mode),
        format!("Distance: {distance_km:.1} km"),
        format!("Duration: {} min", estimate.duration_minutes),
        format!("CO₂: {:.1} kg", estimate.co2_kg),
        format!("Cost: {}", format_cost(estimate.cost)),
        format!("EcoScore: {eco_score}/100"),
    ]
    .join("\n")
}

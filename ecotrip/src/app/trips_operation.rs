use super::{operation, AppError, EcoTripConfig};
use chrono::Utc;
use clap::Subcommand;
use ecotrip_core::{
    model::TripRecord,
    trips::{TripFilter, TripMutation, TripRepository, TripSortKey},
};

#[derive(Debug, Clone, Subcommand)]
pub enum TripsOperation {
    /// list trips, optionally filtered by mode
    List {
        /// "all" or a travel mode
        #[arg(long, default_value_t = TripFilter::All)]
        filter: TripFilter,
        /// recent, co2 or duration
        #[arg(long, default_value_t = TripSortKey::Recent)]
        sort: TripSortKey,
    },
    /// recently saved planning results, newest first
    Recent,
    /// toggle the favorite flag of a trip
    Favorite { id: String },
    /// delete a trip
    Delete { id: String },
    /// totals over all trips
    Summary,
}

impl TripsOperation {
    pub fn run(&self, conf: &EcoTripConfig) -> Result<String, AppError> {
        let now = Utc::now();
        let mut repository = TripRepository::load(operation::open_store(conf), now);
        match self {
            TripsOperation::List { filter, sort } => {
                let trips = repository.view(filter, sort);
                if trips.is_empty() {
                    return Ok(format!("no {filter} trips"));
                }
                Ok(trips.iter().map(render_trip).collect::<Vec<_>>().join("\n"))
            }
            TripsOperation::Recent => {
                let lines = repository
                    .recent()
                    .iter()
                    .map(|t| {
                        format!(
                            "{} {} → {}  {} min  {}",
                            t.mode.icon(),
                            t.origin,
                            t.destination,
                            t.duration_minutes,
                            t.timestamp.format("%Y-%m-%d %H:%M")
                        )
                    })
                    .collect::<Vec<_>>();
                if lines.is_empty() {
                    Ok(String::from("no saved trips"))
                } else {
                    Ok(lines.join("\n"))
                }
            }
            TripsOperation::Favorite { id } => match repository.toggle_favorite(id) {
                TripMutation::Applied(outcome) => {
                    let favorite = repository.find(id).map(|t| t.favorite).unwrap_or_default();
                    let state = if favorite { "marked" } else { "unmarked" };
                    Ok(format!("{state} {id} as favorite{}", operation::outcome_note(outcome)))
                }
                TripMutation::NotFound => Err(AppError::TripNotFound(id.clone())),
            },
            TripsOperation::Delete { id } => match repository.delete(id) {
                TripMutation::Applied(outcome) => {
                    Ok(format!("deleted {id}{}", operation::outcome_note(outcome)))
                }
                TripMutation::NotFound => Err(AppError::TripNotFound(id.clone())),
            },
            TripsOperation::Summary => {
                let summary = repository.aggregate();
                let most_used = summary
                    .most_used_mode
                    .map(|m| format!("{} {m}", m.icon()))
                    .unwrap_or_else(|| String::from("-"));
                Ok(format!(
                    "trips: {}\nCO₂ saved: {:.1} kg\nmost used mode: {most_used}\naverage duration: {} min",
                    summary.total_trips,
                    summary.total_co2_saved_kg,
                    summary.average_duration_minutes
                ))
            }
        }
    }
}

fn render_trip(trip: &TripRecord) -> String {
    let star = if trip.favorite { "★" } else { " " };
    format!(
        "{star} {:<18} {} {} → {}  {:.1} km  {} min  saved {:.1} kg",
        trip.id,
        trip.mode.icon(),
        trip.origin,
        trip.destination,
        trip.distance_km,
        trip.duration_minutes,
        trip.co2_saved_kg
    )
}

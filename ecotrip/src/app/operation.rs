use super::{AppError, EcoTripConfig, RewardsOperation, TripsOperation};
use crate::store::FileStore;
use chrono::Utc;
use clap::Subcommand;
use ecotrip_core::{
    model::{ModeEstimate, TravelMode},
    persistence::{KeyValueStore, MemoryStore, SaveOutcome},
    plan::{share_ops, PlanOutcome, PlanResult, PlanningSession, QuickPlan, RouteSource},
    preference::TripPreferences,
    provider::{HaversineRouteProvider, OfflineGazetteer, Place},
    rewards::RewardsLedger,
    trips::TripRepository,
};
use std::sync::Arc;

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// compare every travel mode for a trip
    Plan {
        /// origin as text or "lat, lng"
        #[arg(long)]
        from: String,
        /// destination as text or "lat, lng"
        #[arg(long)]
        to: String,
        /// travel mode passed to the route provider
        #[arg(long, default_value_t = TravelMode::Car)]
        mode: TravelMode,
        /// order results by duration
        #[arg(long)]
        fastest: bool,
        /// order results by CO₂ emitted
        #[arg(long)]
        lowest_carbon: bool,
        /// order results by cost
        #[arg(long)]
        cheapest: bool,
        /// save the result for this mode to the recent trips
        #[arg(long)]
        save: Option<TravelMode>,
        /// add the result for this mode to the trip list
        #[arg(long)]
        record: Option<TravelMode>,
        /// print shareable text for this mode
        #[arg(long)]
        share: Option<TravelMode>,
    },
    /// cheapest way to a destination, with nearby places
    Quick {
        /// destination as text or "lat, lng"
        #[arg(long)]
        to: String,
        /// optional origin as text or "lat, lng"
        #[arg(long)]
        from: Option<String>,
    },
    /// saved planning results and the trip list
    Trips {
        #[command(subcommand)]
        op: TripsOperation,
    },
    /// points, badges and the rewards store
    Rewards {
        #[command(subcommand)]
        op: RewardsOperation,
    },
    /// print the effective configuration
    Config,
    /// reset the trip list and rewards account to their starting state
    Reset,
}

impl Operation {
    /// runs the operation, returning the text to print
    pub fn run(&self, conf: &EcoTripConfig) -> Result<String, AppError> {
        match self {
            Operation::Plan {
                from,
                to,
                mode,
                fastest,
                lowest_carbon,
                cheapest,
                save,
                record,
                share,
            } => {
                let requested = TripPreferences {
                    fastest: *fastest,
                    lowest_carbon: *lowest_carbon,
                    cheapest: *cheapest,
                    avoid_traffic: conf.preferences.avoid_traffic,
                };
                let preferences = if requested.any_active() {
                    requested
                } else {
                    conf.preferences
                };
                let mut session = planning_session(conf, preferences);
                let outcome = session.plan(resolve(from), resolve(to), mode)?;
                let PlanOutcome::Planned(result) = outcome else {
                    return Ok(String::new());
                };
                let mut lines = render_plan(&result, &session);
                let now = Utc::now();
                if save.is_some() || record.is_some() {
                    let mut repository = TripRepository::load(open_store(conf), now);
                    if let Some(m) = save {
                        let saved = session.save_result(m, &mut repository, now)?;
                        lines.push(format!("saved {m} trip{}", outcome_note(saved)));
                    }
                    if let Some(m) = record {
                        let saved = session.record_result(m, &mut repository, now)?;
                        lines.push(format!("added {m} trip to my trips{}", outcome_note(saved)));
                    }
                }
                if let Some(m) = share {
                    lines.push(String::new());
                    lines.push(session.share_text(m)?);
                }
                Ok(lines.join("\n"))
            }
            Operation::Quick { to, from } => {
                let session = planning_session(conf, TripPreferences::default());
                let origin = from.as_deref().map(resolve);
                let quick = session.quick_plan(origin.as_ref(), &resolve(to))?;
                Ok(render_quick_plan(&quick))
            }
            Operation::Trips { op } => op.run(conf),
            Operation::Rewards { op } => op.run(conf),
            Operation::Config => conf.to_toml(),
            Operation::Reset => {
                let store = open_store(conf);
                let mut repository = TripRepository::load(store.clone(), Utc::now());
                let trips = repository.reset(Utc::now());
                let rewards = RewardsLedger::load(store).reset();
                Ok(format!(
                    "trips reset{}\nrewards reset{}",
                    outcome_note(trips),
                    outcome_note(rewards)
                ))
            }
        }
    }
}

/// the store under the configured data directory. when it cannot be opened
/// the application still runs, with changes lasting for this invocation only.
pub(crate) fn open_store(conf: &EcoTripConfig) -> Arc<dyn KeyValueStore> {
    match FileStore::new(&conf.data_directory) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::warn!("changes will not be saved: {e}");
            Arc::new(MemoryStore::new())
        }
    }
}

fn planning_session(conf: &EcoTripConfig, preferences: TripPreferences) -> PlanningSession {
    if conf.offline {
        PlanningSession::offline(OfflineGazetteer::default(), preferences)
    } else {
        PlanningSession::new(
            Box::new(HaversineRouteProvider),
            OfflineGazetteer::default(),
            preferences,
        )
    }
}

/// coordinates and known points of interest become located places
fn resolve(text: &str) -> Place {
    Place::resolve(text, Some(&OfflineGazetteer::default()))
}

pub(crate) fn outcome_note(outcome: SaveOutcome) -> &'static str {
    match outcome {
        SaveOutcome::Persisted => "",
        SaveOutcome::MemoryOnly => " (not saved to disk)",
    }
}

fn source_note(source: RouteSource) -> &'static str {
    match source {
        RouteSource::Provider => "",
        RouteSource::Offline => " (offline estimate)",
    }
}

fn render_estimate(estimate: &ModeEstimate, eco_score: u8) -> String {
    let saved = estimate
        .eco_saved_kg
        .map(|kg| format!("  saves {kg:.1} kg"))
        .unwrap_or_default();
    format!(
        "{} {:<8} {:>4} min {:>6.2} kg CO₂ {:>6}  EcoScore {:>3}{saved}",
        estimate.mode.icon(),
        estimate.mode.to_string(),
        estimate.duration_minutes,
        estimate.co2_kg,
        share_ops::format_cost(estimate.cost),
        eco_score,
    )
}

fn render_plan(result: &PlanResult, session: &PlanningSession) -> Vec<String> {
    let mut lines = vec![format!(
        "{} → {}: {:.1} km{}",
        result.origin,
        result.destination,
        result.distance_km,
        source_note(result.route_source)
    )];
    lines.extend(
        result
            .estimates
            .iter()
            .map(|e| render_estimate(e, session.eco_score(e))),
    );
    if let Some(rec) = &result.recommendation {
        lines.push(format!(
            "fastest: {}  cheapest: {}  best: {} ({}/100)",
            rec.fastest.mode, rec.cheapest.mode, rec.best.mode, rec.best_eco_score
        ));
    }
    lines
}

fn render_quick_plan(quick: &QuickPlan) -> String {
    let mut lines = vec![format!(
        "{} {} to {}: {} min, {}, {:.1} km{}",
        quick.mode.icon(),
        quick.mode,
        quick.destination,
        quick.duration_minutes,
        share_ops::format_cost(quick.price),
        quick.distance_km,
        source_note(quick.route_source)
    )];
    if !quick.nearby.is_empty() {
        lines.push(String::from("nearby:"));
        lines.extend(
            quick
                .nearby
                .iter()
                .map(|p| format!("  {}", p.destination_label())),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::Operation;
    use crate::app::{EcoTripConfig, TripsOperation};
    use ecotrip_core::{model::TravelMode, trips::TripFilter, trips::TripSortKey};

    fn config_in(dir: &tempfile::TempDir) -> EcoTripConfig {
        EcoTripConfig {
            data_directory: dir.path().join("data"),
            offline: true,
            ..Default::default()
        }
    }

    fn plan(to: &str, save: Option<TravelMode>, record: Option<TravelMode>) -> Operation {
        Operation::Plan {
            from: String::from("Hotel"),
            to: String::from(to),
            mode: TravelMode::Car,
            fastest: false,
            lowest_carbon: false,
            cheapest: true,
            save,
            record,
            share: Some(TravelMode::Transit),
        }
    }

    #[test]
    fn test_plan_offline() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let conf = config_in(&dir);
        let output = plan("Goa beach", None, None)
            .run(&conf)
            .expect("test invariant failed");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Hotel → Goa beach: 6.8 km (offline estimate)");
        // cheapest first, walk before cycle on equal cost
        assert!(lines[1].contains("Walk"));
        assert!(lines[2].contains("Cycle"));
        assert!(output.contains("🚌 Transit\nDistance: 6.8 km"));
    }

    #[test]
    fn test_plan_between_known_places_online() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let conf = EcoTripConfig {
            data_directory: dir.path().join("data"),
            offline: false,
            ..Default::default()
        };
        let output = Operation::Plan {
            from: String::from("Eiffel Tower"),
            to: String::from("Louvre Museum"),
            mode: TravelMode::Walk,
            fastest: false,
            lowest_carbon: false,
            cheapest: false,
            save: None,
            record: None,
            share: None,
        }
        .run(&conf)
        .expect("test invariant failed");
        let first = output.lines().next().expect("test invariant failed");
        assert!(first.starts_with("Eiffel Tower → Louvre Museum: 3."), "{first}");
        assert!(!first.contains("offline"));
    }

    #[test]
    fn test_plan_record_then_list() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let conf = config_in(&dir);
        let output = plan("London", Some(TravelMode::Cycle), Some(TravelMode::Transit))
            .run(&conf)
            .expect("test invariant failed");
        assert!(output.contains("saved Cycle trip"));
        assert!(output.contains("added Transit trip to my trips"));

        let listed = TripsOperation::List {
            filter: TripFilter::Mode(TravelMode::Transit),
            sort: TripSortKey::Recent,
        }
        .run(&conf)
        .expect("test invariant failed");
        assert!(listed.contains("London"));

        let recent = TripsOperation::Recent
            .run(&conf)
            .expect("test invariant failed");
        assert!(recent.contains("Hotel → London"));
    }

    #[test]
    fn test_quick_and_reset() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let conf = config_in(&dir);
        let quick = Operation::Quick {
            to: String::from("Paris"),
            from: None,
        }
        .run(&conf)
        .expect("test invariant failed");
        assert!(quick.starts_with("🚶 Walk to Paris"));
        assert!(quick.contains("Eiffel Tower"));

        let reset = Operation::Reset.run(&conf).expect("test invariant failed");
        assert_eq!(reset, "trips reset\nrewards reset");
    }
}

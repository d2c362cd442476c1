use super::{
    share_ops, PlanError, PlanOutcome, PlanResult, QuickPlan, RequestTicket, RouteLookup, RouteSource,
};
use crate::estimate::{self, ModeRates};
use crate::model::{ModeEstimate, SavedTrip, TravelMode, TripRecord};
use crate::persistence::SaveOutcome;
use crate::preference::{self, TripPreferences};
use crate::provider::{OfflineGazetteer, Place, RouteEstimate, RouteProvider};
use crate::score::{self, Recommendation};
use crate::trips::TripRepository;
use chrono::{DateTime, Utc};

/// explicit state of the trip planner for one user session.
///
/// collaborators are injected: the route provider answers online lookups
/// and the gazetteer is the offline fallback. requests are tagged with a
/// [`RequestTicket`] and a completion carrying any ticket other than the
/// latest one is dropped, so a slow response can never overwrite the
/// results of a newer request.
pub struct PlanningSession {
    route_provider: Option<Box<dyn RouteProvider>>,
    gazetteer: OfflineGazetteer,
    preferences: TripPreferences,
    latest: RequestTicket,
    current: Option<PlanResult>,
}

impl PlanningSession {
    pub fn new(
        route_provider: Box<dyn RouteProvider>,
        gazetteer: OfflineGazetteer,
        preferences: TripPreferences,
    ) -> PlanningSession {
        PlanningSession {
            route_provider: Some(route_provider),
            gazetteer,
            preferences,
            latest: RequestTicket(0),
            current: None,
        }
    }

    /// a session that never asks a route provider, every distance comes
    /// from the gazetteer
    pub fn offline(gazetteer: OfflineGazetteer, preferences: TripPreferences) -> PlanningSession {
        PlanningSession {
            route_provider: None,
            gazetteer,
            preferences,
            latest: RequestTicket(0),
            current: None,
        }
    }

    pub fn preferences(&self) -> &TripPreferences {
        &self.preferences
    }

    /// takes effect on the next planning request
    pub fn set_preferences(&mut self, preferences: TripPreferences) {
        self.preferences = preferences;
    }

    pub fn current(&self) -> Option<&PlanResult> {
        self.current.as_ref()
    }

    /// results of the current plan, empty until a plan completes
    pub fn results(&self) -> &[ModeEstimate] {
        self.current
            .as_ref()
            .map(|p| p.estimates.as_slice())
            .unwrap_or_default()
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.current.as_ref().and_then(|p| p.recommendation.as_ref())
    }

    /// EcoScore of `estimate` against the current results
    pub fn eco_score(&self, estimate: &ModeEstimate) -> u8 {
        score::score(estimate, self.results())
    }

    /// starts a new request, superseding any request still in flight
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest = RequestTicket(self.latest.0 + 1);
        log::debug!("started {}", self.latest);
        self.latest
    }

    /// asks the route provider for a route, degrading to the offline
    /// gazetteer keyed on the destination name when it fails
    pub fn lookup_route(&self, origin: &Place, destination: &Place, mode: &TravelMode) -> RouteLookup {
        let Some(provider) = &self.route_provider else {
            return self.offline_lookup(destination);
        };
        match provider.route(origin, destination, mode) {
            Ok(estimate) => RouteLookup {
                estimate,
                source: RouteSource::Provider,
            },
            Err(e) => {
                log::warn!(
                    "route lookup to '{}' failed, using offline estimate: {e}",
                    destination.label()
                );
                self.offline_lookup(destination)
            }
        }
    }

    fn offline_lookup(&self, destination: &Place) -> RouteLookup {
        let distance_km = self.gazetteer.distance_km(destination.label());
        RouteLookup {
            estimate: RouteEstimate::from_km(distance_km, None),
            source: RouteSource::Offline,
        }
    }

    /// applies the response of a request. a stale ticket is discarded. an
    /// unusable distance clears the current results and is returned as an error.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        origin: Place,
        destination: Place,
        lookup: RouteLookup,
    ) -> Result<PlanOutcome, PlanError> {
        if ticket != self.latest {
            log::debug!("discarding {ticket}, latest is {}", self.latest);
            return Ok(PlanOutcome::Discarded {
                request: ticket,
                latest: self.latest,
            });
        }
        let distance_km = lookup.estimate.distance_km();
        let estimates = match estimate::estimate(distance_km, lookup.estimate.duration_minutes()) {
            Ok(estimates) => estimates,
            Err(e) => {
                self.current = None;
                return Err(PlanError::from(e));
            }
        };
        let ordered = preference::apply_preferences(&estimates, &self.preferences);
        let recommendation = score::recommend(&ordered);
        let result = PlanResult {
            request: ticket,
            origin,
            destination,
            distance_km,
            route_source: lookup.source,
            estimates: ordered,
            recommendation,
        };
        self.current = Some(result.clone());
        Ok(PlanOutcome::Planned(result))
    }

    /// plans a trip in one step: start a request, look up the route, complete it
    pub fn plan(
        &mut self,
        origin: Place,
        destination: Place,
        mode: &TravelMode,
    ) -> Result<PlanOutcome, PlanError> {
        let ticket = self.begin_request();
        let lookup = self.lookup_route(&origin, &destination, mode);
        self.complete(ticket, origin, destination, lookup)
    }

    /// quick trip plan from a destination alone.
    ///
    /// with a located origin and destination the route provider is asked for
    /// a driving route; otherwise, or when it fails, the gazetteer distance is
    /// used with the car formula as the motorized duration. the cheapest
    /// option wins, ties going to the earlier mode.
    pub fn quick_plan(
        &self,
        origin: Option<&Place>,
        destination: &Place,
    ) -> Result<QuickPlan, PlanError> {
        if destination.label().is_empty() {
            return Err(PlanError::MissingDestination);
        }
        let online = match (origin, destination.coordinate()) {
            (Some(o), Some(_)) if o.coordinate().is_some() => Some(self.lookup_route(
                o,
                destination,
                &TravelMode::Car,
            )),
            _ => None,
        };
        let (distance_km, duration_minutes, route_source) = match online {
            Some(lookup) if lookup.source == RouteSource::Provider => (
                lookup.estimate.distance_km(),
                lookup.estimate.duration_minutes(),
                RouteSource::Provider,
            ),
            _ => {
                let distance_km = self.gazetteer.distance_km(destination.label());
                let car_minutes = ModeRates::for_mode(&TravelMode::Car).duration_minutes(distance_km);
                (distance_km, Some(car_minutes), RouteSource::Offline)
            }
        };
        let estimates = estimate::estimate(distance_km, duration_minutes)?;
        let recommendation = score::recommend(&estimates).ok_or(PlanError::NoActivePlan)?;
        let cheapest = recommendation.cheapest;
        Ok(QuickPlan {
            destination: destination.label().to_string(),
            mode: cheapest.mode,
            price: cheapest.cost,
            duration_minutes: cheapest.duration_minutes,
            distance_km,
            route_source,
            nearby: self.gazetteer.nearby(destination.label()),
        })
    }

    /// the current result for `mode`
    pub fn result_for(&self, mode: &TravelMode) -> Result<&ModeEstimate, PlanError> {
        let plan = self.current.as_ref().ok_or(PlanError::NoActivePlan)?;
        plan.estimates
            .iter()
            .find(|e| e.mode == *mode)
            .ok_or(PlanError::MissingResult(*mode))
    }

    /// shareable text for the current result of `mode`
    pub fn share_text(&self, mode: &TravelMode) -> Result<String, PlanError> {
        let plan = self.current.as_ref().ok_or(PlanError::NoActivePlan)?;
        let estimate = self.result_for(mode)?;
        Ok(share_ops::share_text(
            estimate,
            plan.distance_km,
            self.eco_score(estimate),
        ))
    }

    /// saves the current result for `mode` to the recent trips
    pub fn save_result(
        &self,
        mode: &TravelMode,
        repository: &mut TripRepository,
        now: DateTime<Utc>,
    ) -> Result<SaveOutcome, PlanError> {
        let saved = self.saved_trip(mode, now)?;
        Ok(repository.save_recent(saved))
    }

    /// adds the current result for `mode` to the trip list
    pub fn record_result(
        &self,
        mode: &TravelMode,
        repository: &mut TripRepository,
        now: DateTime<Utc>,
    ) -> Result<SaveOutcome, PlanError> {
        let saved = self.saved_trip(mode, now)?;
        let distance_km = self
            .current
            .as_ref()
            .map(|p| p.distance_km)
            .ok_or(PlanError::NoActivePlan)?;
        let record = TripRecord::from_saved(repository.next_id(now), &saved, distance_km);
        Ok(repository.record(record))
    }

    fn saved_trip(&self, mode: &TravelMode, now: DateTime<Utc>) -> Result<SavedTrip, PlanError> {
        let plan = self.current.as_ref().ok_or(PlanError::NoActivePlan)?;
        let estimate = self.result_for(mode)?;
        Ok(SavedTrip::from_estimate(
            plan.origin.label(),
            plan.destination.label(),
            estimate,
            now,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::PlanningSession;
    use crate::estimate::EstimateError;
    use crate::model::TravelMode;
    use crate::persistence::{MemoryStore, SaveOutcome};
    use crate::plan::{PlanError, PlanOutcome, RouteLookup, RouteSource};
    use crate::preference::TripPreferences;
    use crate::provider::{
        HaversineRouteProvider, OfflineGazetteer, Place, ProviderError, RouteEstimate,
        RouteProvider,
    };
    use crate::trips::TripRepository;
    use chrono::Utc;
    use std::sync::Arc;

    /// answers every lookup with a fixed route
    struct FixedRoute(f64, Option<f64>);

    impl RouteProvider for FixedRoute {
        fn route(
            &self,
            _origin: &Place,
            _destination: &Place,
            _mode: &TravelMode,
        ) -> Result<RouteEstimate, ProviderError> {
            Ok(RouteEstimate::from_km(self.0, self.1))
        }
    }

    struct Offline;

    impl RouteProvider for Offline {
        fn route(
            &self,
            _origin: &Place,
            _destination: &Place,
            _mode: &TravelMode,
        ) -> Result<RouteEstimate, ProviderError> {
            Err(ProviderError::Unavailable(String::from("no network")))
        }
    }

    fn session(provider: Box<dyn RouteProvider>, prefs: TripPreferences) -> PlanningSession {
        PlanningSession::new(provider, OfflineGazetteer::default(), prefs)
    }

    fn planned(outcome: PlanOutcome) -> crate::plan::PlanResult {
        match outcome {
            PlanOutcome::Planned(result) => result,
            PlanOutcome::Discarded { .. } => panic!("test failed, request was discarded"),
        }
    }

    #[test]
    fn test_plan_with_provider_duration() {
        let mut s = session(Box::new(FixedRoute(10.0, Some(28.0))), TripPreferences::default());
        let result = planned(
            s.plan(Place::parse("Home"), Place::parse("Work"), &TravelMode::Car)
                .expect("test invariant failed"),
        );
        assert_eq!(result.route_source, RouteSource::Provider);
        let durations: Vec<u32> = result.estimates.iter().map(|e| e.duration_minutes).collect();
        assert_eq!(durations, vec![120, 60, 28, 28, 28]);
        let rec = result.recommendation.expect("test invariant failed");
        assert_eq!(rec.fastest.mode, TravelMode::Transit);
        assert_eq!(s.results().len(), 5);
        let text = s.share_text(&TravelMode::Walk).expect("test invariant failed");
        assert!(text.starts_with("🚶 Walk\nDistance: 10.0 km\nDuration: 120 min"));
    }

    #[test]
    fn test_provider_failure_degrades_to_gazetteer() {
        let mut s = session(Box::new(Offline), TripPreferences::planner_default());
        let result = planned(
            s.plan(Place::parse("Hotel"), Place::parse("Paris"), &TravelMode::Transit)
                .expect("test invariant failed"),
        );
        assert_eq!(result.route_source, RouteSource::Offline);
        assert!((result.distance_km - 8.5).abs() < 1e-9);
        // fastest first: carpool at round(8.5 * 3.2) = 27 minutes
        assert_eq!(result.estimates[0].mode, TravelMode::Carpool);
        assert_eq!(result.estimates[0].duration_minutes, 27);
    }

    #[test]
    fn test_offline_session_skips_provider() {
        let mut s = PlanningSession::offline(OfflineGazetteer::default(), TripPreferences::default());
        let result = planned(
            s.plan(Place::parse("Hotel"), Place::parse("Delhi"), &TravelMode::Car)
                .expect("test invariant failed"),
        );
        assert_eq!(result.route_source, RouteSource::Offline);
        assert!((result.distance_km - 12.2).abs() < 1e-9);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut s = session(Box::new(FixedRoute(4.0, None)), TripPreferences::default());
        let first = s.begin_request();
        let second = s.begin_request();
        let slow = RouteLookup {
            estimate: RouteEstimate::from_km(40.0, None),
            source: RouteSource::Provider,
        };
        let fresh = RouteLookup {
            estimate: RouteEstimate::from_km(4.0, None),
            source: RouteSource::Provider,
        };
        let newer = s
            .complete(second, Place::parse("A"), Place::parse("B"), fresh)
            .expect("test invariant failed");
        assert!(matches!(newer, PlanOutcome::Planned(_)));
        let stale = s
            .complete(first, Place::parse("A"), Place::parse("C"), slow)
            .expect("test invariant failed");
        assert_eq!(
            stale,
            PlanOutcome::Discarded {
                request: first,
                latest: second
            }
        );
        let current = s.current().expect("test invariant failed");
        assert_eq!(current.destination.label(), "B");
        assert!((current.distance_km - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distance_clears_results() {
        let mut s = session(Box::new(FixedRoute(6.0, None)), TripPreferences::default());
        s.plan(Place::parse("A"), Place::parse("B"), &TravelMode::Walk)
            .expect("test invariant failed");
        assert_eq!(s.results().len(), 5);

        let ticket = s.begin_request();
        let lookup = RouteLookup {
            estimate: RouteEstimate::from_km(0.0, None),
            source: RouteSource::Provider,
        };
        let result = s.complete(ticket, Place::parse("A"), Place::parse("A"), lookup);
        assert_eq!(
            result,
            Err(PlanError::InvalidInput {
                source: EstimateError::InvalidDistance(0.0)
            })
        );
        assert!(s.results().is_empty());
        assert!(s.recommendation().is_none());
    }

    #[test]
    fn test_quick_plan_offline() {
        let s = session(Box::new(HaversineRouteProvider), TripPreferences::default());
        let quick = s
            .quick_plan(None, &Place::parse("Mumbai"))
            .expect("test invariant failed");
        assert_eq!(quick.route_source, RouteSource::Offline);
        assert_eq!(quick.mode, TravelMode::Walk);
        assert_eq!(quick.price, 0);
        assert_eq!(quick.duration_minutes, 125);
        assert_eq!(quick.nearby.len(), 3);
        assert_eq!(
            s.quick_plan(None, &Place::parse("  ")),
            Err(PlanError::MissingDestination)
        );
    }

    #[test]
    fn test_quick_plan_online() {
        let s = session(Box::new(FixedRoute(2.0, Some(9.0))), TripPreferences::default());
        let origin = Place::parse("48.8584, 2.2945");
        let quick = s
            .quick_plan(Some(&origin), &Place::parse("48.8606, 2.3376"))
            .expect("test invariant failed");
        assert_eq!(quick.route_source, RouteSource::Provider);
        assert!((quick.distance_km - 2.0).abs() < 1e-9);
        assert!(quick.nearby.is_empty());
    }

    #[test]
    fn test_save_and_record_results() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = TripRepository::load(store, Utc::now());
        let mut s = session(Box::new(FixedRoute(10.0, None)), TripPreferences::default());

        let before_plan = s.save_result(&TravelMode::Cycle, &mut repo, Utc::now());
        assert_eq!(before_plan, Err(PlanError::NoActivePlan));

        s.plan(Place::parse("Home"), Place::parse("College"), &TravelMode::Cycle)
            .expect("test invariant failed");
        let outcome = s
            .save_result(&TravelMode::Cycle, &mut repo, Utc::now())
            .expect("test invariant failed");
        assert_eq!(outcome, SaveOutcome::Persisted);
        let latest = &repo.recent()[0];
        assert_eq!(latest.mode, TravelMode::Cycle);
        assert_eq!(latest.destination, "College");
        assert_eq!(latest.duration_minutes, 60);

        s.record_result(&TravelMode::Carpool, &mut repo, Utc::now())
            .expect("test invariant failed");
        let recorded = repo.trips().last().expect("test invariant failed");
        assert_eq!(recorded.mode, TravelMode::Carpool);
        // car baseline 2.0 kg minus carpool 1.0 kg
        assert!((recorded.co2_saved_kg - 1.0).abs() < 1e-9);
        assert_eq!(repo.trips().len(), 4);
    }
}

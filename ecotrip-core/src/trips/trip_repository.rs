use super::{seed_trips, TripFilter, TripMutation, TripSortKey, TripSummary};
use crate::model::{SavedTrip, TripRecord};
use crate::persistence::{persistence_ops, KeyValueStore, SaveOutcome, StorageKey};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// durable store of recently saved planning results and of the "My Trips"
/// collection.
///
/// every mutation builds the complete updated collection, writes it as a
/// single blob and then swaps it into memory in one assignment, so no
/// reader sees a partial update. when the write fails the new collection is
/// still kept in memory for the rest of the session.
pub struct TripRepository {
    store: Arc<dyn KeyValueStore>,
    recent: Vec<SavedTrip>,
    trips: Vec<TripRecord>,
}

impl TripRepository {
    /// number of saved planning results kept in the recent list
    pub const RECENT_LIMIT: usize = 5;

    /// loads both collections from `store`. a missing or unreadable recent
    /// list starts empty, a missing or unreadable trip list starts from the
    /// seeded trips.
    pub fn load(store: Arc<dyn KeyValueStore>, now: DateTime<Utc>) -> TripRepository {
        let recent = persistence_ops::load_json(store.as_ref(), StorageKey::RecentTrips)
            .unwrap_or_else(|e| {
                log::warn!("starting with no recent trips: {e}");
                None
            })
            .unwrap_or_default();
        let trips = match persistence_ops::load_json(store.as_ref(), StorageKey::MyTrips) {
            Ok(Some(trips)) => trips,
            Ok(None) => {
                log::debug!("no stored trips, using seeded trips");
                seed_trips(now)
            }
            Err(e) => {
                log::warn!("using seeded trips: {e}");
                seed_trips(now)
            }
        };
        TripRepository {
            store,
            recent,
            trips,
        }
    }

    /// saved planning results, newest first
    pub fn recent(&self) -> &[SavedTrip] {
        &self.recent
    }

    /// all trips in insertion order
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    pub fn find(&self, id: &str) -> Option<&TripRecord> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn list(&self, filter: &TripFilter) -> Vec<TripRecord> {
        self.trips
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    pub fn sort(trips: &[TripRecord], key: &TripSortKey) -> Vec<TripRecord> {
        key.sort(trips)
    }

    /// filtered then sorted view of the trip list
    pub fn view(&self, filter: &TripFilter, key: &TripSortKey) -> Vec<TripRecord> {
        Self::sort(&self.list(filter), key)
    }

    pub fn aggregate(&self) -> TripSummary {
        TripSummary::from_trips(&self.trips)
    }

    /// prepends a saved planning result, keeping the most recent entries
    pub fn save_recent(&mut self, trip: SavedTrip) -> SaveOutcome {
        let next: Vec<SavedTrip> = std::iter::once(trip)
            .chain(self.recent.iter().cloned())
            .take(Self::RECENT_LIMIT)
            .collect();
        let outcome = persistence_ops::save_json(self.store.as_ref(), StorageKey::RecentTrips, &next);
        self.recent = next;
        outcome
    }

    /// appends a trip to the trip list
    pub fn record(&mut self, trip: TripRecord) -> SaveOutcome {
        let mut next = self.trips.clone();
        next.push(trip);
        self.commit_trips(next)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> TripMutation {
        if self.find(id).is_none() {
            log::debug!("toggle favorite: no trip with id '{id}'");
            return TripMutation::NotFound;
        }
        let next = self
            .trips
            .iter()
            .map(|t| {
                let mut trip = t.clone();
                if trip.id == id {
                    trip.favorite = !trip.favorite;
                }
                trip
            })
            .collect();
        TripMutation::Applied(self.commit_trips(next))
    }

    /// permanently removes a trip. confirmation is the caller's concern.
    pub fn delete(&mut self, id: &str) -> TripMutation {
        if self.find(id).is_none() {
            log::debug!("delete: no trip with id '{id}'");
            return TripMutation::NotFound;
        }
        let next = self.trips.iter().filter(|t| t.id != id).cloned().collect();
        TripMutation::Applied(self.commit_trips(next))
    }

    /// generates an id not used by any stored trip
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let base = format!("trip-{}", now.timestamp_millis());
        if self.find(&base).is_none() {
            return base;
        }
        (1..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| self.find(candidate).is_none())
            .unwrap_or(base)
    }

    /// explicit data reset: clears the recent list and restores the seeded trips
    pub fn reset(&mut self, now: DateTime<Utc>) -> SaveOutcome {
        let removed = persistence_ops::remove(self.store.as_ref(), StorageKey::RecentTrips);
        self.recent = vec![];
        let saved = self.commit_trips(seed_trips(now));
        match (removed, saved) {
            (SaveOutcome::Persisted, SaveOutcome::Persisted) => SaveOutcome::Persisted,
            _ => SaveOutcome::MemoryOnly,
        }
    }

    fn commit_trips(&mut self, next: Vec<TripRecord>) -> SaveOutcome {
        let outcome = persistence_ops::save_json(self.store.as_ref(), StorageKey::MyTrips, &next);
        self.trips = next;
        outcome
    }
}

#[cfg(test)]
mod test {
    use super::TripRepository;
    use crate::model::{SavedTrip, TravelMode, TripRecord};
    use crate::persistence::persistence_ops::test::UnavailableStore;
    use crate::persistence::{KeyValueStore, MemoryStore, SaveOutcome, StorageKey};
    use crate::trips::{TripFilter, TripMutation, TripSortKey};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use itertools::Itertools;
    use std::sync::Arc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0)
            .single()
            .expect("test invariant failed")
    }

    fn trip(id: &str, mode: TravelMode, duration_minutes: u32, co2_saved_kg: f64) -> TripRecord {
        TripRecord {
            id: id.to_string(),
            origin: String::from("A"),
            destination: String::from("B"),
            mode,
            duration_minutes,
            distance_km: 2.0,
            cost: 0,
            co2_saved_kg,
            timestamp: now(),
            favorite: false,
        }
    }

    fn saved(destination: &str, minutes_ago: i64) -> SavedTrip {
        SavedTrip {
            origin: String::from("Home"),
            destination: destination.to_string(),
            mode: TravelMode::Transit,
            duration_minutes: 40,
            co2_kg: 0.5,
            cost: 20,
            timestamp: now() - Duration::minutes(minutes_ago),
        }
    }

    fn empty_repository() -> TripRepository {
        let mut repo = TripRepository::load(Arc::new(MemoryStore::new()), now());
        for id in ["t1", "t2", "t3"] {
            repo.delete(id);
        }
        repo
    }

    #[test]
    fn test_missing_store_seeds_trips() {
        let repo = TripRepository::load(Arc::new(MemoryStore::new()), now());
        assert_eq!(repo.trips().len(), 3);
        assert!(repo.recent().is_empty());
        let newest = TripRepository::sort(repo.trips(), &TripSortKey::Recent);
        assert_eq!(newest[0].id, "t1");
    }

    #[test]
    fn test_unavailable_store_seeds_and_keeps_changes_in_memory() {
        let mut repo = TripRepository::load(Arc::new(UnavailableStore), now());
        assert_eq!(repo.trips().len(), 3);
        let result = repo.toggle_favorite("t2");
        assert_eq!(result, TripMutation::Applied(SaveOutcome::MemoryOnly));
        assert!(repo.find("t2").expect("test invariant failed").favorite);
    }

    #[test]
    fn test_aggregate_most_used_mode() {
        let mut repo = empty_repository();
        repo.record(trip("a", TravelMode::Cycle, 10, 1.0));
        repo.record(trip("b", TravelMode::Cycle, 20, 0.5));
        repo.record(trip("c", TravelMode::Walk, 31, 0.25));
        let summary = repo.aggregate();
        assert_eq!(summary.total_trips, 3);
        assert_eq!(summary.most_used_mode, Some(TravelMode::Cycle));
        assert_eq!(summary.average_duration_minutes, 20);
        assert!((summary.total_co2_saved_kg - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_ties_follow_mode_order() {
        let mut repo = empty_repository();
        repo.record(trip("a", TravelMode::Car, 10, 0.0));
        repo.record(trip("b", TravelMode::Transit, 10, 0.0));
        assert_eq!(repo.aggregate().most_used_mode, Some(TravelMode::Transit));
    }

    #[test]
    fn test_aggregate_of_nothing() {
        let summary = empty_repository().aggregate();
        assert_eq!(summary.total_trips, 0);
        assert_eq!(summary.most_used_mode, None);
        assert_eq!(summary.average_duration_minutes, 0);
    }

    #[test]
    fn test_filter_and_sort() {
        let mut repo = empty_repository();
        repo.record(trip("a", TravelMode::Walk, 30, 0.3));
        repo.record(trip("b", TravelMode::Cycle, 12, 0.9));
        repo.record(trip("c", TravelMode::Walk, 12, 0.3));

        let walks = repo.list(&TripFilter::Mode(TravelMode::Walk));
        assert_eq!(walks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["a", "c"]);

        let by_co2 = repo.view(&TripFilter::All, &TripSortKey::Co2);
        assert_eq!(by_co2.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), ["b", "a", "c"]);

        let by_duration = repo.view(&TripFilter::All, &TripSortKey::Duration);
        assert_eq!(
            by_duration.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            ["b", "c", "a"]
        );
    }

    #[test]
    fn test_toggle_and_delete_missing_id_are_no_ops() {
        let mut repo = TripRepository::load(Arc::new(MemoryStore::new()), now());
        let before = repo.trips().to_vec();
        assert_eq!(repo.toggle_favorite("nope"), TripMutation::NotFound);
        assert_eq!(repo.delete("nope"), TripMutation::NotFound);
        assert_eq!(repo.trips(), before.as_slice());
    }

    #[test]
    fn test_mutations_survive_reload() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = TripRepository::load(store.clone(), now());
        repo.toggle_favorite("t1");
        repo.delete("t3");
        let reloaded = TripRepository::load(store, now());
        assert_eq!(reloaded.trips().len(), 2);
        assert!(!reloaded.find("t1").expect("test invariant failed").favorite);
        assert!(reloaded.find("t3").is_none());
    }

    #[test]
    fn test_saved_trip_is_most_recent_after_reload() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = TripRepository::load(store.clone(), now());
        repo.save_recent(saved("Cuttack", 10));
        let latest = saved("Puri", 0);
        assert_eq!(repo.save_recent(latest.clone()), SaveOutcome::Persisted);

        let reloaded = TripRepository::load(store, now());
        assert_eq!(reloaded.recent().first(), Some(&latest));
    }

    #[test]
    fn test_recent_list_is_capped() {
        let mut repo = TripRepository::load(Arc::new(MemoryStore::new()), now());
        for i in 0..8 {
            repo.save_recent(saved(&format!("stop {i}"), 60 - i));
        }
        assert_eq!(repo.recent().len(), TripRepository::RECENT_LIMIT);
        assert_eq!(repo.recent()[0].destination, "stop 7");
        assert_eq!(repo.recent()[4].destination, "stop 3");
    }

    #[test]
    fn test_next_id_avoids_collisions() {
        let mut repo = empty_repository();
        let first = repo.next_id(now());
        repo.record(trip(&first, TravelMode::Walk, 5, 0.0));
        let second = repo.next_id(now());
        assert_ne!(first, second);
        assert_eq!(second, format!("{first}-1"));
    }

    #[test]
    fn test_reset_restores_seeds() {
        let mut repo = empty_repository();
        repo.save_recent(saved("Goa", 0));
        assert_eq!(repo.reset(now()), SaveOutcome::Persisted);
        assert!(repo.recent().is_empty());
        assert_eq!(repo.trips().len(), 3);
    }
    #[test]
    fn test_inexact_floats_reload_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let mut trip = saved("Puri", 0);
        trip.co2_kg = 0.051375000000000004;
        let mut record = TripRecord::from_saved(String::from("p1"), &trip, 1.0275);
        record.co2_saved_kg = 0.1 + 0.2;

        let mut repo = TripRepository::load(store.clone(), now());
        repo.save_recent(trip.clone());
        repo.record(record.clone());

        let reloaded = TripRepository::load(store, now());
        assert_eq!(reloaded.recent(), &[trip]);
        assert_eq!(reloaded.find("p1"), Some(&record));
    }

    #[test]
    fn test_loads_blobs_in_stored_layout() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                StorageKey::MyTrips,
                r#"[{"id":"x1","origin":"Home","destination":"Market","mode":"Cycle","durationMin":12,"distanceKm":2.5,"cost":0,"co2Saved":0.5,"timestamp":"2025-03-14T08:00:00.000Z"}]"#,
            )
            .expect("test invariant failed");
        store
            .set(
                StorageKey::RecentTrips,
                r#"[{"from":"Home","to":"Market","mode":"Transit","durationMin":10,"co2Kg":0.125,"cost":10,"date":"2025-03-14T08:30:00.000Z"}]"#,
            )
            .expect("test invariant failed");

        let mut repo = TripRepository::load(store.clone(), now());
        assert_eq!(repo.trips().iter().map(|t| t.id.as_str()).collect_vec(), ["x1"]);
        let x1 = repo.find("x1").expect("test invariant failed");
        assert_eq!(x1.duration_minutes, 12);
        assert!(!x1.favorite);
        assert_eq!(repo.recent()[0].duration_minutes, 10);
        assert_eq!(repo.recent()[0].origin, "Home");

        repo.toggle_favorite("x1");
        let blob = store
            .get(StorageKey::MyTrips)
            .expect("test invariant failed")
            .expect("test invariant failed");
        assert!(blob.contains("\"durationMin\":12"));
        assert!(blob.contains("\"id\":\"x1\""));
    }

    #[test]
    fn test_exact_ties_keep_insertion_order() {
        let mut repo = empty_repository();
        for id in ["a", "b", "c", "d"] {
            repo.record(trip(id, TravelMode::Walk, 20, 0.4));
        }
        for key in [TripSortKey::Recent, TripSortKey::Co2, TripSortKey::Duration] {
            let ids = repo
                .view(&TripFilter::All, &key)
                .iter()
                .map(|t| t.id.clone())
                .collect_vec();
            assert_eq!(ids, ["a", "b", "c", "d"], "sorting by {key}");
        }
    }
}

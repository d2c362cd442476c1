use crate::model::{TravelMode, TripRecord};
use chrono::{DateTime, Duration, Utc};

/// the starting "My Trips" collection for a user with no stored trips
pub fn seed_trips(now: DateTime<Utc>) -> Vec<TripRecord> {
    vec![
        TripRecord {
            id: String::from("t1"),
            origin: String::from("Bhubaneswar"),
            destination: String::from("Cuttack"),
            mode: TravelMode::Cycle,
            duration_minutes: 25,
            distance_km: 8.0,
            cost: 0,
            co2_saved_kg: 2.4,
            timestamp: now,
            favorite: true,
        },
        TripRecord {
            id: String::from("t2"),
            origin: String::from("Home"),
            destination: String::from("College"),
            mode: TravelMode::Transit,
            duration_minutes: 35,
            distance_km: 12.0,
            cost: 10,
            co2_saved_kg: 0.8,
            timestamp: now - Duration::days(1),
            favorite: false,
        },
        TripRecord {
            id: String::from("t3"),
            origin: String::from("Hostel"),
            destination: String::from("Railway Station"),
            mode: TravelMode::Walk,
            duration_minutes: 15,
            distance_km: 1.2,
            cost: 0,
            co2_saved_kg: 0.1,
            timestamp: now - Duration::days(2),
            favorite: false,
        },
    ]
}

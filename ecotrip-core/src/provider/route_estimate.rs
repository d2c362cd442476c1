use uom::si::{
    f64::{Length, Time},
    length::kilometer,
    time::minute,
};

/// distance and optional travel time reported by a route provider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteEstimate {
    pub distance: Length,
    pub duration: Option<Time>,
}

impl RouteEstimate {
    pub fn from_km(distance_km: f64, duration_minutes: Option<f64>) -> RouteEstimate {
        RouteEstimate {
            distance: Length::new::<kilometer>(distance_km),
            duration: duration_minutes.map(Time::new::<minute>),
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance.get::<kilometer>()
    }

    /// duration rounded to whole minutes
    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration
            .map(|t| t.get::<minute>())
            .filter(|m| m.is_finite() && *m >= 0.0)
            .map(|m| m.round() as u32)
    }
}

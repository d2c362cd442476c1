use super::{Place, ProviderError, RouteEstimate, RouteProvider};
use crate::model::TravelMode;
use geo::{line_measures::LengthMeasurable, line_string, Haversine, LineString, Point};
use uom::si::{f64::Length, length::meter};

/// straight-line distance between two located places. reports no duration,
/// so the estimator falls back to its per-mode formulas.
#[derive(Clone, Copy, Debug, Default)]
pub struct HaversineRouteProvider;

impl HaversineRouteProvider {
    pub fn compute_haversine(src_point: Point<f64>, dst_point: Point<f64>) -> Length {
        let line: LineString<f64> = line_string![src_point.0, dst_point.0];
        Length::new::<meter>(line.length(&Haversine))
    }
}

impl RouteProvider for HaversineRouteProvider {
    fn route(
        &self,
        origin: &Place,
        destination: &Place,
        _mode: &TravelMode,
    ) -> Result<RouteEstimate, ProviderError> {
        let src = origin
            .coordinate()
            .ok_or_else(|| ProviderError::UnresolvedPlace(origin.label().to_string()))?;
        let dst = destination
            .coordinate()
            .ok_or_else(|| ProviderError::UnresolvedPlace(destination.label().to_string()))?;
        let distance = Self::compute_haversine(src.into(), dst.into());
        Ok(RouteEstimate {
            distance,
            duration: None,
        })
    }
}

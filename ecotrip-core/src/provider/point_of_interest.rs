use super::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PointOfInterest {
    pub name: String,
    pub coordinate: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
}

impl PointOfInterest {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> PointOfInterest {
        PointOfInterest {
            name: name.to_string(),
            coordinate: Coordinate::new(latitude, longitude),
            vicinity: None,
        }
    }

    /// text to use as a destination when this point is picked
    pub fn destination_label(&self) -> String {
        match &self.vicinity {
            Some(v) => format!("{}, {}", self.name, v),
            None => self.name.clone(),
        }
    }
}

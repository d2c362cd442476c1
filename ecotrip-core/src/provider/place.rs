use super::{Coordinate, GeocodeProvider};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an origin or destination as entered by the user. free text is accepted as
/// is, so a missing geocoder never blocks planning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Place {
    Located { label: String, coordinate: Coordinate },
    Text { label: String },
}

impl Place {
    /// "lat, lng" text becomes a located place, anything else stays text
    pub fn parse(text: &str) -> Place {
        let label = text.trim().to_string();
        match label.parse::<Coordinate>() {
            Ok(coordinate) => Place::Located { label, coordinate },
            Err(_) => Place::Text { label },
        }
    }

    /// parses `text` and, when it is not already a coordinate, asks the
    /// geocoder if there is one. a geocoding failure keeps the text.
    pub fn resolve(text: &str, geocoder: Option<&dyn GeocodeProvider>) -> Place {
        match (Place::parse(text), geocoder) {
            (Place::Text { label }, Some(g)) => match g.geocode(&label) {
                Ok(coordinate) => Place::Located { label, coordinate },
                Err(e) => {
                    log::warn!("keeping '{label}' as plain text: {e}");
                    Place::Text { label }
                }
            },
            (place, _) => place,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Place::Located { label, .. } => label,
            Place::Text { label } => label,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Place::Located { coordinate, .. } => Some(*coordinate),
            Place::Text { .. } => None,
        }
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

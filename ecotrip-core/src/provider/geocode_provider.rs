use super::{Coordinate, ProviderError};

/// resolves free text to a coordinate
pub trait GeocodeProvider {
    fn geocode(&self, query: &str) -> Result<Coordinate, ProviderError>;
}

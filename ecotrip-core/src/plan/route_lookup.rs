use crate::provider::RouteEstimate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    Provider,
    Offline,
}

impl Display for RouteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RouteSource::Provider => "provider",
            RouteSource::Offline => "offline",
        };
        write!(f, "{}", s)
    }
}

/// a route estimate tagged with where it came from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteLookup {
    pub estimate: RouteEstimate,
    pub source: RouteSource,
}

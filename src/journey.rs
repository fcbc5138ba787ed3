use chrono::{DateTime, Duration, Local};

/// A resolved stop or address, as returned by the location endpoint.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: String,
    pub name: String,
}

/// One continuous segment of a journey. `line` is `None` for walking
/// transfers, which carry no transport line.
#[derive(Debug, Clone)]
pub struct Leg {
    pub line: Option<String>,
    /// Origin stop name, carried from the planner but not rendered.
    #[allow(dead_code)]
    pub origin: String,
    pub departure: DateTime<Local>,
    pub arrival: DateTime<Local>,
}

/// One proposed journey from origin to destination, legs in travel order.
#[derive(Debug, Clone)]
pub struct Journey {
    pub legs: Vec<Leg>,
}

impl Journey {
    pub fn departure(&self) -> Option<DateTime<Local>> {
        self.legs.first().map(|leg| leg.departure)
    }

    pub fn arrival(&self) -> Option<DateTime<Local>> {
        self.legs.last().map(|leg| leg.arrival)
    }

    pub fn duration(&self) -> Option<Duration> {
        match (self.departure(), self.arrival()) {
            (Some(dep), Some(arr)) => Some(arr.signed_duration_since(dep)),
            _ => None,
        }
    }

    /// Transport-line names of the named legs, in travel order.
    /// Walking legs have no line and do not appear.
    pub fn route(&self) -> Vec<&str> {
        self.legs
            .iter()
            .filter_map(|leg| leg.line.as_deref())
            .collect()
    }
}

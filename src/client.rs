use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};
use log::warn;
use serde::Deserialize;

use crate::journey::{Journey, Leg, Location};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("journey planner returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("no location found for \"{0}\"")]
    NoSuchLocation(String),
}

/// Blocking client for the journey planner's REST endpoints. One
/// instance lives for the whole process; `resolve_location` runs once
/// per endpoint at startup, `query_journeys` once per fetch cycle.
pub struct JourneyClient {
    http: reqwest::blocking::Client,
    host: String,
}

impl JourneyClient {
    pub fn new(host: &str) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("rejseplan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            host: host.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a free-text address or stop name to a stable location id.
    pub fn resolve_location(&self, query: &str) -> Result<Location, ClientError> {
        let url = format!("{}/locations", self.host);
        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("results", "1")])
            .send()?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let hits: Vec<WireLocation> = response.json()?;
        hits.into_iter()
            .find_map(WireLocation::into_location)
            .ok_or_else(|| ClientError::NoSuchLocation(query.to_string()))
    }

    /// Fetches itineraries from `origin_id` to `destination_id` departing
    /// at `date` or later. Journeys whose legs are missing departure or
    /// arrival times are dropped; the upstream is best-effort.
    pub fn query_journeys(
        &self,
        origin_id: &str,
        destination_id: &str,
        date: DateTime<Local>,
        min_change_time: u32,
        max_changes: i32,
    ) -> Result<Vec<Journey>, ClientError> {
        let url = format!("{}/journeys", self.host);
        let departure = date.to_rfc3339();
        let transfer_time = min_change_time.to_string();
        let transfers = max_changes.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("from", origin_id),
                ("to", destination_id),
                ("departure", departure.as_str()),
                ("transferTime", transfer_time.as_str()),
                ("transfers", transfers.as_str()),
            ])
            .send()?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let body: JourneysResponse = response.json()?;
        let mut journeys = Vec::with_capacity(body.journeys.len());
        for wire in body.journeys {
            match wire.into_journey() {
                Some(journey) => journeys.push(journey),
                None => warn!("dropping journey with incomplete legs"),
            }
        }
        Ok(journeys)
    }
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    id: Option<String>,
    name: Option<String>,
    address: Option<String>,
}

impl WireLocation {
    fn into_location(self) -> Option<Location> {
        let id = self.id?;
        let name = self.name.or(self.address).unwrap_or_else(|| id.clone());
        Some(Location { id, name })
    }
}

#[derive(Debug, Deserialize)]
struct JourneysResponse {
    #[serde(default)]
    journeys: Vec<WireJourney>,
}

#[derive(Debug, Deserialize)]
struct WireJourney {
    #[serde(default)]
    legs: Vec<WireLeg>,
}

#[derive(Debug, Deserialize)]
struct WireLeg {
    origin: WirePlace,
    departure: Option<DateTime<FixedOffset>>,
    arrival: Option<DateTime<FixedOffset>>,
    line: Option<WireLine>,
    #[serde(default)]
    walking: bool,
}

#[derive(Debug, Deserialize)]
struct WirePlace {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireLine {
    name: Option<String>,
}

impl WireJourney {
    fn into_journey(self) -> Option<Journey> {
        if self.legs.is_empty() {
            return None;
        }
        let mut legs = Vec::with_capacity(self.legs.len());
        for wire in self.legs {
            let departure = wire.departure?.with_timezone(&Local);
            let arrival = wire.arrival?.with_timezone(&Local);
            let line = if wire.walking {
                None
            } else {
                wire.line
                    .and_then(|line| line.name)
                    .filter(|name| !name.is_empty())
            };
            legs.push(Leg {
                line,
                origin: wire.origin.name.unwrap_or_default(),
                departure,
                arrival,
            });
        }
        Some(Journey { legs })
    }
}

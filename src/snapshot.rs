use chrono::{DateTime, Local};

use crate::journey::Journey;
use crate::time::seconds_between;

/// The itineraries returned by one fetch, kept as a unit until the next
/// fetch replaces them. Between fetches the same snapshot is re-rendered
/// every second against a fresh "now", so the countdown ages while the
/// absolute times stay fixed.
#[derive(Debug, Clone)]
pub struct Snapshot {
    journeys: Vec<Journey>,
}

impl Snapshot {
    pub fn new(journeys: Vec<Journey>) -> Self {
        Self { journeys }
    }

    /// One display line per journey plus the seconds-until-departure
    /// list the scheduler feeds on. A journey that arrived without legs
    /// is skipped; an overdue departure renders as negative minutes.
    pub fn process(&self, now: DateTime<Local>) -> (Vec<String>, Vec<i64>) {
        let mut lines = Vec::with_capacity(self.journeys.len());
        let mut seconds_until_departure = Vec::with_capacity(self.journeys.len());

        for journey in &self.journeys {
            let (departure, arrival, duration) =
                match (journey.departure(), journey.arrival(), journey.duration()) {
                    (Some(dep), Some(arr), Some(dur)) => (dep, arr, dur),
                    _ => continue,
                };

            let seconds = seconds_between(&now, &departure);
            let minutes = seconds as f64 / 60.0;

            lines.push(format!(
                "In {:5.1} min: {} -> {} ({}min): {}",
                minutes,
                departure.format("%H:%M"),
                arrival.format("%H:%M"),
                duration.num_minutes(),
                journey.route().join("; ")
            ));
            seconds_until_departure.push(seconds);
        }

        (lines, seconds_until_departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::Leg;
    use chrono::{Duration, TimeZone};

    fn base_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 6, 8, 0, 0).unwrap()
    }

    fn leg(line: Option<&str>, dep: DateTime<Local>, arr: DateTime<Local>) -> Leg {
        Leg {
            line: line.map(String::from),
            origin: "Somewhere St.".to_string(),
            departure: dep,
            arrival: arr,
        }
    }

    fn single_leg_journey(line: &str, dep: DateTime<Local>, travel_minutes: i64) -> Journey {
        Journey {
            legs: vec![leg(Some(line), dep, dep + Duration::minutes(travel_minutes))],
        }
    }

    #[test]
    fn empty_snapshot_yields_empty_outputs() {
        let snapshot = Snapshot::new(vec![]);
        let (lines, seconds) = snapshot.process(base_now());
        assert!(lines.is_empty());
        assert!(seconds.is_empty());
    }

    #[test]
    fn renders_one_line_per_journey_in_input_order() {
        let now = base_now();
        let snapshot = Snapshot::new(vec![
            single_leg_journey("Bus 1A", now + Duration::minutes(5), 20),
            single_leg_journey("Re 2100", now + Duration::minutes(12), 35),
            single_leg_journey("Metro M2", now + Duration::minutes(30), 15),
        ]);

        let (lines, seconds) = snapshot.process(now);
        assert_eq!(seconds, vec![300, 720, 1800]);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("In   5.0 min: 08:05 -> 08:25 (20min)"));
        assert!(lines[1].starts_with("In  12.0 min: 08:12 -> 08:47 (35min)"));
        assert!(lines[2].starts_with("In  30.0 min: 08:30 -> 08:45 (15min)"));
    }

    #[test]
    fn route_label_skips_walking_legs() {
        let now = base_now();
        let dep = now + Duration::minutes(10);
        let journey = Journey {
            legs: vec![
                leg(None, dep, dep + Duration::minutes(5)),
                leg(
                    Some("Bus 150S"),
                    dep + Duration::minutes(5),
                    dep + Duration::minutes(25),
                ),
                leg(
                    Some("Re 2100"),
                    dep + Duration::minutes(30),
                    dep + Duration::minutes(50),
                ),
            ],
        };

        let (lines, _) = snapshot_of(journey).process(now);
        assert!(lines[0].ends_with(": Bus 150S; Re 2100"));
    }

    #[test]
    fn overdue_departure_renders_negative_minutes() {
        let now = base_now();
        let journey = single_leg_journey("Bus 1A", now - Duration::seconds(90), 20);

        let (lines, seconds) = snapshot_of(journey).process(now);
        assert_eq!(seconds, vec![-90]);
        assert!(lines[0].starts_with("In  -1.5 min:"));
    }

    #[test]
    fn journey_without_legs_is_skipped() {
        let now = base_now();
        let snapshot = Snapshot::new(vec![
            Journey { legs: vec![] },
            single_leg_journey("Bus 1A", now + Duration::minutes(5), 20),
        ]);

        let (lines, seconds) = snapshot.process(now);
        assert_eq!(lines.len(), 1);
        assert_eq!(seconds, vec![300]);
    }

    fn snapshot_of(journey: Journey) -> Snapshot {
        Snapshot::new(vec![journey])
    }
}

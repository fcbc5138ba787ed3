use std::thread;
use std::time::Duration;

use chrono::Local;
use log::{info, warn};

use crate::client::JourneyClient;
use crate::display;
use crate::journey::Location;
use crate::scheduler::WaitPolicy;
use crate::snapshot::Snapshot;

/// Minimum transfer time requested from the planner, in minutes.
const MIN_CHANGE_TIME: u32 = 0;
/// Maximum number of changes; -1 leaves the choice to the planner.
const MAX_CHANGES: i32 = -1;

/// The two states of the monitor: querying the planner, or replaying
/// the snapshot locally once a second until the next query is due.
enum State {
    Fetching,
    LocalTick { snapshot: Snapshot, wait: u64 },
}

/// Watches one origin/destination pair. Owns its snapshot and wait
/// plan, so several monitors could run side by side without sharing
/// anything.
pub struct Monitor {
    client: JourneyClient,
    origin: Location,
    destination: Location,
    policy: WaitPolicy,
}

impl Monitor {
    pub fn new(
        client: JourneyClient,
        origin: Location,
        destination: Location,
        policy: WaitPolicy,
    ) -> Self {
        Self {
            client,
            origin,
            destination,
            policy,
        }
    }

    /// Runs until the process is terminated. Every state produces a
    /// screen update, so the display never hangs blank.
    pub fn run(self) -> ! {
        let mut state = State::Fetching;
        loop {
            state = match state {
                State::Fetching => self.fetch(),
                State::LocalTick { snapshot, wait } => self.tick(snapshot, wait),
            };
        }
    }

    fn fetch(&self) -> State {
        let outcome = self.client.query_journeys(
            &self.origin.id,
            &self.destination.id,
            Local::now(),
            MIN_CHANGE_TIME,
            MAX_CHANGES,
        );

        match outcome {
            Ok(journeys) => {
                let snapshot = Snapshot::new(journeys);
                let seconds = self.render(&snapshot, None);
                let wait = match self.policy.compute_wait(&seconds) {
                    Some(wait) => wait,
                    // No nearest departure to adapt to; poll at the slowest rate.
                    None => self.policy.max_wait,
                };
                info!(
                    "{} itineraries, next upstream query in {}s",
                    seconds.len(),
                    wait
                );
                State::LocalTick { snapshot, wait }
            }
            Err(err) => {
                warn!("journey query failed: {}", err);
                display::render(
                    &[
                        format!("Journey query failed: {}", err),
                        format!("Retrying in {} seconds", self.policy.min_wait),
                    ],
                    None,
                );
                thread::sleep(Duration::from_secs(self.policy.min_wait));
                State::Fetching
            }
        }
    }

    /// Replays the snapshot once a second for `wait` seconds. Absolute
    /// times stay fixed while the countdown ages against a fresh "now".
    fn tick(&self, snapshot: Snapshot, wait: u64) -> State {
        for elapsed in 0..wait {
            thread::sleep(Duration::from_secs(1));
            let status = format!("Next update in {} seconds", wait - elapsed);
            self.render(&snapshot, Some(&status));
        }
        State::Fetching
    }

    fn render(&self, snapshot: &Snapshot, status: Option<&str>) -> Vec<i64> {
        let (journey_lines, seconds) = snapshot.process(Local::now());
        let mut lines = vec![format!(
            "=== {} -> {} ===",
            self.origin.name, self.destination.name
        )];
        if journey_lines.is_empty() {
            lines.push("No itineraries returned by the journey planner".to_string());
        } else {
            lines.extend(journey_lines);
        }
        display::render(&lines, status);
        seconds
    }
}

/// Floor on the wait between two upstream queries, so the journey
/// planner is never polled more than once a minute.
pub const DEFAULT_MIN_WAIT_SECS: u64 = 60;
/// Ceiling on the wait, bounding staleness even when the upstream
/// returns a departure far in the future.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 1200;
/// Divisor on the naive wait-until-nearest-departure. Querying ahead of
/// the naive expiry catches delays and cancellations announced early.
pub const OVERSAMPLING_FACTOR: f64 = 2.0;

/// Decides how long to wait before the next upstream fetch, from the
/// seconds-until-departure of the itineraries currently on screen.
#[derive(Debug, Clone, Copy)]
pub struct WaitPolicy {
    pub min_wait: u64,
    pub max_wait: u64,
    pub oversampling: f64,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            min_wait: DEFAULT_MIN_WAIT_SECS,
            max_wait: DEFAULT_MAX_WAIT_SECS,
            oversampling: OVERSAMPLING_FACTOR,
        }
    }
}

impl WaitPolicy {
    /// Seconds to wait before the next fetch, or `None` when there are
    /// no itineraries to adapt to. Overdue departures (negative
    /// seconds) participate in the minimum; the `min_wait` clamp keeps
    /// them from driving the interval to zero.
    pub fn compute_wait(&self, seconds_until_departure: &[i64]) -> Option<u64> {
        let earliest = seconds_until_departure.iter().min()?;
        let raw = *earliest as f64 / self.oversampling;
        let clamped = raw.clamp(self.min_wait as f64, self.max_wait as f64);
        Some(clamped as u64)
    }
}

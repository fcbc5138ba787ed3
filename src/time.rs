use chrono::{DateTime, TimeZone};

/// Signed whole seconds from `now` to `target`.
///
/// Subtracts full date+time values, so a target shortly after midnight
/// seen from just before midnight is a small positive delta, not almost
/// a day. A departure already in the past comes out negative.
pub fn seconds_between<Tz1, Tz2>(now: &DateTime<Tz1>, target: &DateTime<Tz2>) -> i64
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    target
        .clone()
        .signed_duration_since(now.clone())
        .num_seconds()
}

//! Relative time labels.
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// A clock set before the epoch reads as `0`.
#[must_use]
pub fn now_millis() -> u64
{
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

/// Formats how long ago `timestamp` was, relative to `now`.
///
/// Both arguments are milliseconds since the Unix epoch. Every unit is
/// floored, and timestamps in the future read as "just now".
///
/// # Arguments
///
/// * `timestamp` - The moment being described
/// * `now` - The current time
///
/// # Returns
///
/// `"just now"`, `"N min ago"`, `"N hrs ago"` or `"N days ago"`
#[must_use]
pub fn time_ago(timestamp: u64, now: u64) -> String
{
    let elapsed = now.saturating_sub(timestamp) / 1000;

    if elapsed < SECS_PER_MINUTE
    {
        "just now".to_owned()
    }
    else if elapsed < SECS_PER_HOUR
    {
        format!("{} min ago", elapsed / SECS_PER_MINUTE)
    }
    else if elapsed < SECS_PER_DAY
    {
        format!("{} hrs ago", elapsed / SECS_PER_HOUR)
    }
    else
    {
        format!("{} days ago", elapsed / SECS_PER_DAY)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const NOW: u64 = 1_760_000_000_000;

    fn secs_ago(secs: u64) -> u64
    {
        NOW - secs * 1000
    }

    #[test]
    fn labels_each_unit()
    {
        assert_eq!(time_ago(secs_ago(30), NOW), "just now");
        assert_eq!(time_ago(secs_ago(150), NOW), "2 min ago");
        assert_eq!(time_ago(secs_ago(7200), NOW), "2 hrs ago");
        assert_eq!(time_ago(secs_ago(172_800), NOW), "2 days ago");
    }

    #[test]
    fn boundaries_round_down()
    {
        assert_eq!(time_ago(secs_ago(59), NOW), "just now");
        assert_eq!(time_ago(secs_ago(60), NOW), "1 min ago");
        assert_eq!(time_ago(secs_ago(3599), NOW), "59 min ago");
        assert_eq!(time_ago(secs_ago(3600), NOW), "1 hrs ago");
        assert_eq!(time_ago(secs_ago(86_399), NOW), "23 hrs ago");
        assert_eq!(time_ago(secs_ago(86_400), NOW), "1 days ago");
        // 59.999 seconds is still under a minute
        assert_eq!(time_ago(NOW - 59_999, NOW), "just now");
    }

    #[test]
    fn future_timestamp_is_just_now()
    {
        assert_eq!(time_ago(NOW + 5_000, NOW), "just now");
    }

    #[test]
    fn now_is_after_2020()
    {
        assert!(now_millis() > 1_577_836_800_000);
    }
}

//! Human-readable durations and distances.
//!
//! Durations use fixed divisors (365-day years, 30-day months), not a
//! calendar. Distances are rounded half-up to whole metres and switch to
//! whole kilometres at a threshold.

use orrery_core::CelestialBody;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;
/// Seconds in a flat 30-day month.
pub const SECONDS_PER_MONTH: u64 = 2_592_000;
/// Seconds in a day.
pub const SECONDS_PER_DAY: u64 = 86_400;
/// Seconds in an hour.
pub const SECONDS_PER_HOUR: u64 = 3_600;
/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Metres in a kilometre; also the default metre/kilometre switch point.
pub const METRES_PER_KILOMETRE: f64 = 1000.0;

/// Distances at or above this are still rendered in kilometres.
const MEGAMETRE: f64 = 1e6;

const UNITS: [(u64, &str); 6] = [
    (SECONDS_PER_YEAR, "year"),
    (SECONDS_PER_MONTH, "month"),
    (SECONDS_PER_DAY, "day"),
    (SECONDS_PER_HOUR, "hour"),
    (SECONDS_PER_MINUTE, "minute"),
    (1, "second"),
];

/// Values ending in 1 stay singular, except 11.
fn is_singular(value: u64) -> bool {
    value % 10 == 1 && value != 11
}

/// Render a whole number of seconds as `"1 day 1 hour 1 minute 1 second"`.
///
/// Units with a zero count are left out, so zero seconds renders as an
/// empty string. A unit is pluralized unless its count's last digit is 1
/// and the count is not 11: `1 second`, `11 seconds`, `21 second`.
///
/// # Examples
///
/// ```
/// use orrery_stats::format_duration;
///
/// assert_eq!(format_duration(90_061), "1 day 1 hour 1 minute 1 second");
/// assert_eq!(format_duration(31_536_000), "1 year");
/// assert_eq!(format_duration(0), "");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let mut remaining = seconds;
    let mut phrases = Vec::with_capacity(UNITS.len());
    for (divisor, unit) in UNITS {
        let count = remaining / divisor;
        remaining %= divisor;
        if count == 0 {
            continue;
        }
        let suffix = if is_singular(count) { "" } else { "s" };
        phrases.push(format!("{count} {unit}{suffix}"));
    }
    phrases.join(" ")
}

/// Round a distance half-up to whole metres: `floor(d + 0.5)`.
pub fn round_distance(metres: f64) -> f64 {
    (metres + 0.5).floor()
}

/// Euclidean distance between the `(x, y)` positions of two bodies.
pub fn body_distance(a: &CelestialBody, b: &CelestialBody) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Render a distance with the default 1000 m threshold.
///
/// # Examples
///
/// ```
/// use orrery_stats::format_distance;
///
/// assert_eq!(format_distance(42.3), "42 meters");
/// assert_eq!(format_distance(1500.0), "1.0 km");
/// assert_eq!(format_distance(2999.0), "2.0 km");
/// ```
pub fn format_distance(metres: f64) -> String {
    format_distance_with(metres, METRES_PER_KILOMETRE)
}

/// Render a distance, switching to kilometres at `kilometre_threshold`.
///
/// The distance is first rounded to whole metres. Below the threshold it
/// is written as `<n> meters`; otherwise the kilometre count is truncated
/// (not rounded) and written as `<n>.0 km`. Non-finite distances fail the
/// metre comparison and go through the kilometre branch (`NaN.0 km`,
/// `inf.0 km`).
#[allow(clippy::if_same_then_else)]
pub fn format_distance_with(metres: f64, kilometre_threshold: f64) -> String {
    let rounded = round_distance(metres);
    if rounded < kilometre_threshold {
        format!("{rounded:.0} meters")
    } else if rounded < MEGAMETRE {
        whole_kilometres(rounded)
    } else {
        // No larger unit: same rendering as below a megametre.
        whole_kilometres(rounded)
    }
}

fn whole_kilometres(metres: f64) -> String {
    format!("{:.0}.0 km", (metres / METRES_PER_KILOMETRE).floor())
}

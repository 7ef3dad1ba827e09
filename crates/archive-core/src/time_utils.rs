use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::models::{CreatedAt, INVALID_DATE};

/// `created_at` layout used by the archive, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

// ── System timezone detection ─────────────────────────────────────────────────

/// Detect the IANA timezone name of the running system.
///
/// Falls back to `"UTC"` if detection fails.
pub fn get_system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

/// Resolve a `--timezone` value to a [`Tz`].
///
/// `"auto"` (any case) resolves to the system timezone. Unknown names fall
/// back to UTC with a warning.
pub fn resolve_timezone(tz_name: &str) -> Tz {
    let name = if tz_name.eq_ignore_ascii_case("auto") {
        get_system_timezone()
    } else {
        tz_name.to_string()
    };
    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("Unrecognised timezone \"{}\", falling back to UTC", name);
        Tz::UTC
    })
}

// ── Archive timestamp parsing ─────────────────────────────────────────────────

/// Parse a tweet `created_at` string into a UTC [`DateTime`].
///
/// Tries, in order: the archive layout ([`ARCHIVE_TIMESTAMP_FORMAT`]),
/// RFC 3339 (with `Z` or an offset), then RFC 2822. Returns `None` for empty
/// or unrecognised input.
pub fn parse_archive_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_str(s, ARCHIVE_TIMESTAMP_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    debug!("Could not parse timestamp \"{}\"", s);
    None
}

// ── 12-hour / 24-hour format detection ───────────────────────────────────────

/// Timezone prefixes of regions that conventionally use a 12-hour clock.
///
/// Checked with `starts_with` against the lowercased IANA name; the
/// `america/` entry comes last so that more specific 24-hour exceptions could
/// be listed before it.
const TWELVE_HOUR_ZONE_PREFIXES: &[&str] = &[
    "australia/",
    "pacific/auckland",
    "pacific/chatham",
    "asia/manila",
    "asia/kolkata",
    "asia/calcutta",
    "asia/karachi",
    "asia/dhaka",
    "asia/kuala_lumpur",
    "asia/kuching",
    "asia/riyadh",
    "asia/dubai",
    "asia/amman",
    "asia/tehran",
    "africa/cairo",
    "america/",
    "us/",
    "canada/",
];

/// Decide whether to use 12-hour clock display.
///
/// Priority:
/// 1. `explicit` `"12h"` → `true`, `"24h"` → `false`.
/// 2. Region derived from `timezone` (e.g. `"America/New_York"` → 12h).
/// 3. Default: 24-hour.
pub fn detect_time_format(timezone: &str, explicit: Option<&str>) -> bool {
    if let Some(fmt) = explicit {
        match fmt.to_lowercase().as_str() {
            "12h" => return true,
            "24h" => return false,
            _ => {}
        }
    }

    let lower = timezone.to_lowercase();
    TWELVE_HOUR_ZONE_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

// ── DisplayClock ──────────────────────────────────────────────────────────────

/// Renders tweet timestamps as separate date and time strings in a fixed
/// timezone and clock convention.
#[derive(Debug, Clone, Copy)]
pub struct DisplayClock {
    tz: Tz,
    twelve_hour: bool,
}

impl DisplayClock {
    pub fn new(tz: Tz, twelve_hour: bool) -> Self {
        Self { tz, twelve_hour }
    }

    /// Build a clock from raw `--timezone` / `--time-format` values,
    /// resolving `"auto"` for both.
    pub fn from_settings(timezone: &str, time_format: &str) -> Self {
        let tz = resolve_timezone(timezone);
        let twelve_hour = detect_time_format(tz.name(), Some(time_format));
        Self::new(tz, twelve_hour)
    }

    /// A UTC, 24-hour clock. Useful for deterministic output.
    pub fn utc() -> Self {
        Self::new(Tz::UTC, false)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn is_twelve_hour(&self) -> bool {
        self.twelve_hour
    }

    /// Date portion, e.g. `"2018-10-10"`, or [`INVALID_DATE`].
    pub fn format_date(&self, created_at: &CreatedAt) -> String {
        match created_at {
            CreatedAt::Valid(dt) => dt.with_timezone(&self.tz).format("%Y-%m-%d").to_string(),
            CreatedAt::Invalid => INVALID_DATE.to_string(),
        }
    }

    /// Time portion, e.g. `"20:19:24"` or `"08:19:24 PM"`, or [`INVALID_DATE`].
    pub fn format_time(&self, created_at: &CreatedAt) -> String {
        match created_at {
            CreatedAt::Valid(dt) => {
                let local = dt.with_timezone(&self.tz);
                if self.twelve_hour {
                    local.format("%I:%M:%S %p").to_string()
                } else {
                    local.format("%H:%M:%S").to_string()
                }
            }
            CreatedAt::Invalid => INVALID_DATE.to_string(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

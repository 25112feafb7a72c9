//! Human-readable timestamps.
//!
//! `format_date` renders an instant as `"Mar 1, 2025 10:00 AM (in 3 days)"`:
//! an absolute part in the viewer's local time followed by a rounded relative
//! distance.
//!
//! Local time is resolved per instant through [`LocalZone`], so a July
//! meeting viewed in January still shows its summer-time wall clock.

use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

// =============================================================================
// LOCAL ZONE
// =============================================================================

/// Source of the UTC offset in force at a given moment.
///
/// A fixed [`UtcOffset`] is a zone with no daylight-saving changes.
pub trait LocalZone {
    /// Offset in force at the instant `at`.
    fn offset_at(&self, at: OffsetDateTime) -> UtcOffset;

    /// Offset in force for the wall-clock time `local`.
    fn offset_for_local(&self, local: PrimitiveDateTime) -> UtcOffset;

    /// `at` expressed in the offset in force at that instant.
    fn localize(&self, at: OffsetDateTime) -> OffsetDateTime {
        at.to_offset(self.offset_at(at))
    }
}

impl LocalZone for UtcOffset {
    fn offset_at(&self, _at: OffsetDateTime) -> UtcOffset {
        *self
    }

    fn offset_for_local(&self, _local: PrimitiveDateTime) -> UtcOffset {
        *self
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Format `at` relative to `now`, with the absolute part in `zone`.
#[must_use]
pub fn format_date(at: OffsetDateTime, now: OffsetDateTime, zone: &impl LocalZone) -> String {
    format!("{} ({})", format_absolute(at, zone), format_distance(at, now))
}

/// `"MMM d, yyyy h:mm AM"` in the offset `zone` has at `at`.
#[must_use]
pub fn format_absolute(at: OffsetDateTime, zone: &impl LocalZone) -> String {
    let local = zone.localize(at);
    local
        .format(format_description!(
            "[month repr:short] [day padding:none], [year] [hour repr:12 padding:none]:[minute] [period]"
        ))
        .unwrap_or_else(|_| local.to_string())
}

/// Relative distance with direction, e.g. `"in about 2 hours"` or `"3 days ago"`.
#[must_use]
pub fn format_distance(at: OffsetDateTime, now: OffsetDateTime) -> String {
    if at > now {
        format!("in {}", distance_words(now, at))
    } else {
        format!("{} ago", distance_words(at, now))
    }
}

/// Rounded distance between two instants, `earlier <= later`.
///
/// Up to two months the scale is driven by elapsed minutes. Past that, the
/// month and year wording uses whole calendar months between the two dates.
#[must_use]
pub fn distance_words(earlier: OffsetDateTime, later: OffsetDateTime) -> String {
    let seconds = (later - earlier).whole_seconds().max(0);
    let minutes = (seconds + 30) / 60;

    if minutes < 2 {
        return if minutes == 0 { "less than a minute".to_owned() } else { "1 minute".to_owned() };
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_owned();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes + MINUTES_IN_HOUR / 2) / MINUTES_IN_HOUR;
        return format!("about {hours} hours");
    }
    if minutes < 2_520 {
        return "1 day".to_owned();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes + MINUTES_IN_DAY / 2) / MINUTES_IN_DAY;
        return format!("{days} days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
        return if months <= 1 { "about 1 month".to_owned() } else { format!("about {months} months") };
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
        return format!("{nearest} months");
    }

    let years = months / 12;
    let remainder = months % 12;
    if remainder < 3 {
        plural_years("about", years)
    } else if remainder < 9 {
        plural_years("over", years)
    } else {
        plural_years("almost", years + 1)
    }
}

/// Whole calendar months from `earlier` to `later`, compared in UTC.
///
/// A month only counts once `later` reaches the same day and time of day.
fn calendar_months_between(earlier: OffsetDateTime, later: OffsetDateTime) -> i64 {
    let a = earlier.to_offset(UtcOffset::UTC);
    let b = later.to_offset(UtcOffset::UTC);
    let mut months = i64::from(b.year() - a.year()) * 12 + i64::from(u8::from(b.month()))
        - i64::from(u8::from(a.month()));
    if months > 0 && (b.day(), b.time()) < (a.day(), a.time()) {
        months -= 1;
    }
    months.max(0)
}

fn plural_years(prefix: &str, years: i64) -> String {
    if years == 1 { format!("{prefix} 1 year") } else { format!("{prefix} {years} years") }
}

/// Render an instant as `datetime-local` input text (`YYYY-MM-DDTHH:MM`).
#[must_use]
pub fn to_datetime_local(at: OffsetDateTime, zone: &impl LocalZone) -> String {
    let local = zone.localize(at);
    local
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .unwrap_or_default()
}

/// Parse `datetime-local` input text as wall-clock time in `zone`.
///
/// Accepts both the minute form and the optional-seconds form browsers emit.
///
/// # Errors
///
/// Returns the parse error when the text matches neither form.
pub fn parse_datetime_local(raw: &str, zone: &impl LocalZone) -> Result<OffsetDateTime, time::error::Parse> {
    let raw = raw.trim();
    let parsed = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))?;
    Ok(parsed.assume_offset(zone.offset_for_local(parsed)))
}

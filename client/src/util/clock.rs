//! Wall-clock helpers.
//!
//! In the browser the viewer's offset comes from `Date.getTimezoneOffset`,
//! evaluated on the date being converted so daylight-saving changes are
//! honored. During SSR there is no viewer, so everything renders in UTC.

use meetings::format::LocalZone;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// The viewer's time zone rules, as the browser reports them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewerZone;

impl LocalZone for ViewerZone {
    fn offset_at(&self, at: OffsetDateTime) -> UtcOffset {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(unix_millis(at)));
            offset_from_js_minutes(date.get_timezone_offset())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = at;
            UtcOffset::UTC
        }
    }

    fn offset_for_local(&self, local: PrimitiveDateTime) -> UtcOffset {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new_with_year_month_day_hr_min(
                u32::try_from(local.year()).unwrap_or_default(),
                i32::from(u8::from(local.month())) - 1,
                i32::from(local.day()),
                i32::from(local.hour()),
                i32::from(local.minute()),
            );
            offset_from_js_minutes(date.get_timezone_offset())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = local;
            UtcOffset::UTC
        }
    }
}

/// Now, expressed in the viewer's offset.
#[must_use]
pub fn now_local() -> OffsetDateTime {
    ViewerZone.localize(OffsetDateTime::now_utc())
}

#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_precision_loss)]
fn unix_millis(at: OffsetDateTime) -> f64 {
    (at.unix_timestamp_nanos() / 1_000_000) as f64
}

/// Convert a JS timezone offset (minutes *behind* UTC) into a `UtcOffset`.
#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation)]
fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    let seconds = (-minutes * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

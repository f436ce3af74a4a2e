//! Time parsing/formatting leaves shared by the wire model and the renderer.

use chrono::{Datelike, NaiveDateTime, Timelike};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::model::Stamp;

/// Wire format for every timestamp the server emits: `"HH:MM DD.MM.YYYY"`,
/// local wall-clock time, no timezone indicator, seconds always zero.
pub const STAMP_FORMAT: &str = "%H:%M %d.%m.%Y";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid timestamp {raw:?}, expected \"HH:MM DD.MM.YYYY\"")]
pub struct StampError {
    raw: String,
}

/// Empty input means "no value"; a well-formed string parses; anything else
/// is rejected so a garbage payload fails decoding instead of rendering an
/// out-of-range instant.
pub fn parse_stamp(raw: &str) -> Result<Option<Stamp>, StampError> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(raw, STAMP_FORMAT)
        .map(|t| Some(Stamp(t)))
        .map_err(|_| StampError {
            raw: raw.to_owned(),
        })
}

/// Month abbreviations are a configuration input, not an ambient platform
/// setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
}

impl Locale {
    fn month_abbr(self, month0: usize) -> &'static str {
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        match self {
            Locale::En => EN[month0],
        }
    }
}

/// `"Mar 4, 09:05"` — short month, non-padded day, zero-padded 24h time.
pub fn format_label(stamp: Stamp, locale: Locale) -> String {
    let t = stamp.0;
    format!(
        "{} {}, {:02}:{:02}",
        locale.month_abbr(t.month0() as usize),
        t.day(),
        t.hour(),
        t.minute()
    )
}

/// `"{h}h {m}m"` when at least an hour, `"{m}m"` otherwise (including "0m").
/// Inverted inputs yield negative components, not a clamp.
pub fn format_duration(start: Stamp, end: Stamp) -> String {
    let ms = (end.0 - start.0).num_milliseconds();
    let hours = ms / 3_600_000;
    let minutes = ms % 3_600_000 / 60_000;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(raw: &str) -> Stamp {
        parse_stamp(raw).unwrap().unwrap()
    }

    #[test]
    fn empty_input_is_no_value() {
        assert_eq!(parse_stamp(""), Ok(None));
    }

    #[test]
    fn parses_wire_format_components() {
        let t = stamp("09:05 04.03.2024").0;
        assert_eq!(
            (t.year(), t.month(), t.day(), t.hour(), t.minute(), t.second()),
            (2024, 3, 4, 9, 5, 0)
        );
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert!(parse_stamp("not a time").is_err());
        assert!(parse_stamp("09:05").is_err());
        assert!(parse_stamp("09:05 04.13.2024").is_err());
    }

    #[test]
    fn label_uses_short_month_and_padded_time() {
        assert_eq!(format_label(stamp("09:05 04.03.2024"), Locale::En), "Mar 4, 09:05");
        assert_eq!(format_label(stamp("23:59 31.12.2024"), Locale::En), "Dec 31, 23:59");
    }

    #[test]
    fn duration_splits_hours_and_minutes() {
        let from = stamp("10:00 04.03.2024");
        assert_eq!(format_duration(from, stamp("11:30 04.03.2024")), "1h 30m");
        assert_eq!(format_duration(from, stamp("10:45 04.03.2024")), "45m");
        assert_eq!(format_duration(from, from), "0m");
    }

    #[test]
    fn duration_spans_midnight() {
        let from = stamp("23:00 04.03.2024");
        let to = stamp("01:30 05.03.2024");
        assert_eq!(format_duration(from, to), "2h 30m");
    }
}

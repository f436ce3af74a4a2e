//! Wire model for the power status payload served at `/api/state` and
//! embedded into the page as the bootstrap value.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::util::{STAMP_FORMAT, parse_stamp};

/// Top-level grid state. `Pending` stands for "payload not loaded yet" and is
/// never sent by the server once real data exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grid {
    On,
    Off,
    #[default]
    Pending,
}

/// State of a single closed or open interval in the history timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    On,
    Off,
}

/// A local wall-clock instant carried as `"HH:MM DD.MM.YYYY"` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stamp(pub NaiveDateTime);

impl Serialize for Stamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(STAMP_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Stamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match parse_stamp(&raw) {
            Ok(Some(stamp)) => Ok(stamp),
            Ok(None) => Err(de::Error::custom("timestamp must not be empty")),
            Err(err) => Err(de::Error::custom(err)),
        }
    }
}

/// Codec for optional timestamps: `null` and `""` both mean "no value".
pub mod opt_stamp {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Stamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(stamp) => stamp.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Stamp>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse_stamp(&raw).map_err(de::Error::custom),
        }
    }
}

/// A currently-active off-period. `to` absent means no known end time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outage {
    /// Outage classification as reported upstream, e.g. "emergency".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, with = "opt_stamp")]
    pub from: Option<Stamp>,
    #[serde(default, with = "opt_stamp")]
    pub to: Option<Stamp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub state: EntryState,
    pub from: Stamp,
    /// Absent for the single currently-ongoing interval, normally the last.
    #[serde(default, with = "opt_stamp")]
    pub to: Option<Stamp>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerState {
    #[serde(default)]
    pub outage: Option<Outage>,
    pub grid: Grid,
    #[serde(default)]
    pub history: Vec<HistoryItem>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub demo: bool,
}

impl PowerState {
    /// The pre-bootstrap value rendered before any payload arrives.
    pub fn pending() -> Self {
        Self {
            outage: None,
            grid: Grid::Pending,
            history: Vec::new(),
            address: String::new(),
            version: String::new(),
            demo: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let raw = r#"{
            "outage": {"type": "emergency", "from": "20:25 04.03.2024", "to": "22:00 04.03.2024"},
            "grid": "off",
            "history": [
                {"state": "on", "from": "08:00 04.03.2024", "to": "20:25 04.03.2024"},
                {"state": "off", "from": "20:25 04.03.2024", "to": null}
            ],
            "address": "Kyiv, Khreshchatyk St, 1",
            "version": "1.4.2"
        }"#;
        let state: PowerState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.grid, Grid::Off);
        assert_eq!(state.address, "Kyiv, Khreshchatyk St, 1");
        assert_eq!(state.version, "1.4.2");
        assert!(!state.demo);

        let outage = state.outage.unwrap();
        assert_eq!(outage.kind.as_deref(), Some("emergency"));
        assert!(outage.from.is_some());
        assert!(outage.to.is_some());

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].state, EntryState::On);
        assert!(state.history[0].to.is_some());
        assert!(state.history[1].to.is_none());
    }

    #[test]
    fn empty_string_and_null_both_mean_open_interval() {
        for raw in [
            r#"{"state": "off", "from": "20:25 04.03.2024", "to": ""}"#,
            r#"{"state": "off", "from": "20:25 04.03.2024", "to": null}"#,
            r#"{"state": "off", "from": "20:25 04.03.2024"}"#,
        ] {
            let item: HistoryItem = serde_json::from_str(raw).unwrap();
            assert_eq!(item.to, None, "input: {raw}");
        }
    }

    #[test]
    fn malformed_timestamp_fails_the_decode() {
        let raw = r#"{"state": "on", "from": "yesterday-ish", "to": null}"#;
        assert!(serde_json::from_str::<HistoryItem>(raw).is_err());

        let raw = r#"{"state": "on", "from": "08:00 04.03.2024", "to": "soon"}"#;
        assert!(serde_json::from_str::<HistoryItem>(raw).is_err());
    }

    #[test]
    fn stamp_round_trips_through_the_wire_format() {
        let item: HistoryItem =
            serde_json::from_str(r#"{"state": "on", "from": "09:05 04.03.2024"}"#).unwrap();
        let encoded = serde_json::to_string(&item).unwrap();
        assert!(encoded.contains(r#""from":"09:05 04.03.2024""#), "encoded: {encoded}");
        let decoded: HistoryItem = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn demo_flag_is_carried_and_defaults_off() {
        let raw = r#"{"grid": "on", "demo": true}"#;
        let state: PowerState = serde_json::from_str(raw).unwrap();
        assert!(state.demo);

        let raw = r#"{"grid": "on"}"#;
        let state: PowerState = serde_json::from_str(raw).unwrap();
        assert!(!state.demo);
    }

    #[test]
    fn pending_state_is_empty() {
        let state = PowerState::pending();
        assert_eq!(state.grid, Grid::Pending);
        assert!(state.outage.is_none());
        assert!(state.history.is_empty());
    }
}

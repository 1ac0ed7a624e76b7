//! Invitation records as authored in `invites.json`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of `invites.json`, kept exactly as authored.
///
/// Only `slug` is ever inspected. Everything else is display data that is
/// served back unchanged, so an incomplete or oddly typed record never
/// affects lookups for other couples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredInvitation(Value);

impl StoredInvitation {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The record's `slug`, if it has a string one.
    pub fn slug(&self) -> Option<&str> {
        self.0.get("slug").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Full display data for one couple's wedding page.
///
/// Display fields are opaque text: absent or `null` reads as empty and
/// other scalars are shown as written. Unknown keys are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRecord {
    /// Lookup key, canonically `"<bride>-<groom>"` in lowercase.
    #[serde(default, deserialize_with = "display_text")]
    pub slug: String,
    #[serde(default, deserialize_with = "display_text")]
    pub bride_name: String,
    #[serde(default, deserialize_with = "display_text")]
    pub groom_name: String,
    /// Display string, not a structured date.
    #[serde(default, deserialize_with = "display_text")]
    pub wedding_date: String,
    /// Events in display order.
    #[serde(default, deserialize_with = "event_list")]
    pub events: Vec<EventRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single ceremony or function listed on the invitation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "display_text")]
    pub title: String,
    #[serde(default, deserialize_with = "display_text")]
    pub date: String,
    #[serde(default, deserialize_with = "display_text")]
    pub time: String,
    #[serde(default, deserialize_with = "display_text")]
    pub location: String,
    #[serde(default, deserialize_with = "display_text")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn display_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Non-array `events` reads as no events; non-object entries are skipped.
fn event_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<EventRecord>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

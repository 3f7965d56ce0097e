//! Keyed lookups into the cached directory documents.
//!
//! The cached exports are treated as opaque JSON: an object holding a
//! record array per collection (`users`, `rptrs`), each record carrying
//! an `id` plus string fields like `callsign`, `name`, `city`, and
//! `state`. Lookups scan the requested collection for a matching `id`
//! and pull out one field. Read-only; the cache is never mutated here.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Collection holding user records in the export.
const USERS: &str = "users";

/// Collection holding repeater records.
const REPEATERS: &str = "rptrs";

/// One loaded directory document.
pub struct Directory {
    doc: Value,
}

impl Directory {
    /// Load a cached export from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read directory file: {}", path.display()))?;

        let doc = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse directory file: {}", path.display()))?;

        Ok(Self { doc })
    }

    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    /// Find the record in array `collection` whose `id` equals `id` and
    /// return `field` as a string.
    ///
    /// Depending on the dump generation the `id` appears either as a
    /// JSON number or a string; both are matched against the queried
    /// text form.
    pub fn field(&self, collection: &str, id: &str, field: &str) -> Option<String> {
        let records = self.doc.get(collection)?.as_array()?;
        let record = records.iter().find(|r| id_matches(r.get("id"), id))?;

        match record.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Callsign registered for a user ID.
    pub fn user_callsign(&self, id: &str) -> Option<String> {
        self.field(USERS, id, "callsign")
    }

    /// Callsign registered for a repeater ID.
    pub fn repeater_callsign(&self, id: &str) -> Option<String> {
        self.field(REPEATERS, id, "callsign")
    }

    /// Full alias for a user: `callsign, city, state`.
    /// Fields missing from the record join as empty strings.
    pub fn user_alias(&self, id: &str) -> String {
        self.join_user_fields(id, &["callsign", "city", "state"])
    }

    /// Short alias for a user: `callsign, name`.
    pub fn user_alias_short(&self, id: &str) -> String {
        self.join_user_fields(id, &["callsign", "name"])
    }

    fn join_user_fields(&self, id: &str, fields: &[&str]) -> String {
        fields
            .iter()
            .map(|f| self.field(USERS, id, f).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn id_matches(value: Option<&Value>, id: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Directory {
        Directory::from_value(json!({
            "users": [
                {"id": "3106001", "callsign": "W1AW", "name": "Hiram Maxim",
                 "city": "Newington", "state": "Connecticut"},
                {"id": 3106002, "callsign": "K1ABC", "name": "Jane Doe"}
            ],
            "rptrs": [
                {"id": 310600, "callsign": "W1AW/R", "city": "Newington"}
            ]
        }))
    }

    #[test]
    fn test_user_callsign_string_id() {
        assert_eq!(fixture().user_callsign("3106001").as_deref(), Some("W1AW"));
    }

    #[test]
    fn test_user_callsign_numeric_id() {
        assert_eq!(fixture().user_callsign("3106002").as_deref(), Some("K1ABC"));
    }

    #[test]
    fn test_unknown_user_is_none() {
        assert_eq!(fixture().user_callsign("999"), None);
    }

    #[test]
    fn test_repeater_callsign() {
        assert_eq!(
            fixture().repeater_callsign("310600").as_deref(),
            Some("W1AW/R")
        );
    }

    #[test]
    fn test_user_alias_full() {
        assert_eq!(
            fixture().user_alias("3106001"),
            "W1AW, Newington, Connecticut"
        );
    }

    #[test]
    fn test_user_alias_missing_fields_join_empty() {
        // K1ABC has no city/state; the joined pieces stay empty.
        assert_eq!(fixture().user_alias("3106002"), "K1ABC, , ");
    }

    #[test]
    fn test_user_alias_short() {
        assert_eq!(fixture().user_alias_short("3106001"), "W1AW, Hiram Maxim");
    }

    #[test]
    fn test_missing_collection_is_none() {
        let dir = Directory::from_value(json!({}));
        assert_eq!(dir.user_callsign("1"), None);
        assert_eq!(dir.repeater_callsign("1"), None);
    }
}

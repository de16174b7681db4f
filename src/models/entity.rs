use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::EntityKind;

/// Serialized timestamp shape: ISO-8601 with microseconds and no offset,
/// e.g. `2024-05-01T09:30:00.000000`. Used for both rendering and parsing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Attribute names a user-issued update may not touch: the identity and
/// timestamp fields, and the serialized type tag. The tag is part of the
/// file format, not an attribute; letting it into the attribute map would
/// write a second `__class__` key into the backing file.
pub fn is_protected(name: &str) -> bool {
    matches!(name, "id" | "created_at" | "updated_at" | "__class__")
}

/// One stored record: a typed bag of attributes with identity and timestamps.
///
/// The serialized form is the record's attribute map plus `id`, the two
/// timestamps and the `__class__` type tag, which is exactly the shape each
/// entry takes in the backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "__class__")]
    kind: EntityKind,
    id: String,
    #[serde(with = "timestamp")]
    created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    updated_at: DateTime<Utc>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Entity {
    /// Build a brand-new record: fresh v4 id, both timestamps from a single
    /// clock read, attributes initialized to the kind's declared defaults.
    pub fn new(kind: EntityKind) -> Self {
        let now = Utc::now();
        Entity {
            kind,
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            attributes: kind.defaults(),
        }
    }

    /// Rebuild a record from its serialized map (the reload path). The type
    /// tag, id and timestamps become the typed fields; every other entry is
    /// carried verbatim. Returns None when a required field is missing or
    /// unparseable, so reload can skip the entry.
    pub fn from_map(map: Map<String, Value>) -> Option<Entity> {
        serde_json::from_value(Value::Object(map)).ok()
    }

    /// The record's serialized map form. Round-trip compatible with
    /// [`Entity::from_map`].
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct always serializes to an object.
            _ => Map::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The record's subtype fields (everything beyond identity and timestamps).
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Refresh `updated_at`. The store flush that completes a save is the
    /// caller's responsibility.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Set a named attribute, inserting it if the record never had it.
    /// Protected names are refused and leave the record untouched; returns
    /// whether the attribute was set.
    pub fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        if is_protected(name) {
            return false;
        }
        self.attributes.insert(name.to_string(), value);
        true
    }
}

impl fmt::Display for Entity {
    /// `[<Kind>] (<id>) <full field map as JSON>`. Display only, never
    /// parsed back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "[{}] ({}) {}", self.kind.as_str(), self.id, fields)
    }
}

/// Serde adapter pinning both timestamps to [`TIMESTAMP_FORMAT`].
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .map_err(serde::de::Error::custom)?;
        Ok(naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_has_valid_unique_id() {
        let first = Entity::new(EntityKind::BaseModel);
        let second = Entity::new(EntityKind::BaseModel);

        assert!(Uuid::parse_str(first.id()).is_ok());
        assert!(Uuid::parse_str(second.id()).is_ok());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_new_entity_timestamps_match() {
        let entity = Entity::new(EntityKind::User);
        assert_eq!(entity.created_at(), entity.updated_at());
    }

    #[test]
    fn test_new_entity_starts_from_kind_defaults() {
        let entity = Entity::new(EntityKind::User);
        assert_eq!(entity.attributes()["email"], Value::from(""));
        assert_eq!(entity.attributes().len(), 4);
    }

    #[test]
    fn test_map_round_trip_is_exact() {
        let mut entity = Entity::new(EntityKind::Review);
        entity.set_attribute("text", Value::from("quiet street"));

        let map = entity.to_map();
        let rebuilt = Entity::from_map(map.clone()).unwrap();

        assert_eq!(rebuilt.to_map(), map);
        assert_eq!(rebuilt.id(), entity.id());
        assert_eq!(rebuilt.kind(), EntityKind::Review);
        assert_eq!(rebuilt.attributes()["text"], Value::from("quiet street"));
    }

    #[test]
    fn test_to_map_carries_tag_and_formatted_timestamps() {
        let entity = Entity::new(EntityKind::State);
        let map = entity.to_map();

        assert_eq!(map["__class__"], Value::from("State"));
        assert_eq!(map["id"], Value::from(entity.id()));
        let created = map["created_at"].as_str().unwrap();
        assert_eq!(
            created,
            entity.created_at().format(TIMESTAMP_FORMAT).to_string()
        );
    }

    #[test]
    fn test_from_map_rejects_missing_id() {
        let mut map = Entity::new(EntityKind::User).to_map();
        map.remove("id");
        assert!(Entity::from_map(map).is_none());
    }

    #[test]
    fn test_from_map_rejects_bad_timestamp() {
        let mut map = Entity::new(EntityKind::User).to_map();
        map.insert("created_at".to_string(), Value::from("yesterday"));
        assert!(Entity::from_map(map).is_none());
    }

    #[test]
    fn test_from_map_rejects_unknown_tag() {
        let mut map = Entity::new(EntityKind::User).to_map();
        map.insert("__class__".to_string(), Value::from("Ghost"));
        assert!(Entity::from_map(map).is_none());
    }

    #[test]
    fn test_touch_strictly_advances_updated_at() {
        let mut entity = Entity::new(EntityKind::Amenity);
        let before = entity.updated_at();

        // The clock has to tick between the two reads.
        std::thread::sleep(std::time::Duration::from_millis(2));
        entity.touch();

        assert!(entity.updated_at() > before);
        assert!(entity.updated_at() >= entity.created_at());
    }

    #[test]
    fn test_set_attribute_refuses_protected_names() {
        let mut entity = Entity::new(EntityKind::City);
        let id = entity.id().to_string();
        let created = entity.created_at();

        assert!(!entity.set_attribute("id", Value::from("other")));
        assert!(!entity.set_attribute("created_at", Value::from("now")));
        assert!(!entity.set_attribute("updated_at", Value::from("now")));

        assert_eq!(entity.id(), id);
        assert_eq!(entity.created_at(), created);
        assert!(!entity.attributes().contains_key("id"));
    }

    #[test]
    fn test_set_attribute_refuses_type_tag() {
        let mut entity = Entity::new(EntityKind::User);

        assert!(!entity.set_attribute("__class__", Value::from("Ghost")));

        // The serialized form still carries exactly one tag, the real one.
        let map = entity.to_map();
        assert_eq!(map["__class__"], Value::from("User"));
        assert!(!entity.attributes().contains_key("__class__"));
        assert_eq!(Entity::from_map(map).unwrap().kind(), EntityKind::User);
    }

    #[test]
    fn test_set_attribute_inserts_new_names() {
        let mut entity = Entity::new(EntityKind::BaseModel);
        assert!(entity.set_attribute("nickname", Value::from("bm")));
        assert_eq!(entity.attributes()["nickname"], Value::from("bm"));
    }

    #[test]
    fn test_display_embeds_kind_id_and_fields() {
        let mut entity = Entity::new(EntityKind::Place);
        entity.set_attribute("name", Value::from("Loft"));
        let text = entity.to_string();

        assert!(text.starts_with("[Place] ("));
        assert!(text.contains(entity.id()));
        assert!(text.contains("\"name\":\"Loft\""));
    }

    #[test]
    fn test_is_protected() {
        assert!(is_protected("id"));
        assert!(is_protected("created_at"));
        assert!(is_protected("updated_at"));
        assert!(is_protected("__class__"));
        assert!(!is_protected("name"));
        assert!(!is_protected("Id"));
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed set of record types the console can instantiate.
///
/// The variant name doubles as the type tag written to the backing file and
/// as the prefix of the store key, so reconstruction never evaluates an
/// arbitrary string: unknown tags simply fail the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    BaseModel,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl EntityKind {
    /// Every kind the store knows how to reconstruct.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::BaseModel,
        EntityKind::User,
        EntityKind::State,
        EntityKind::City,
        EntityKind::Amenity,
        EntityKind::Place,
        EntityKind::Review,
    ];

    /// The type tag for this kind, as it appears in keys and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::BaseModel => "BaseModel",
            EntityKind::User => "User",
            EntityKind::State => "State",
            EntityKind::City => "City",
            EntityKind::Amenity => "Amenity",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
        }
    }

    /// Look up a type tag. Tags are case-sensitive; unknown ones map to None.
    pub fn from_tag(tag: &str) -> Option<EntityKind> {
        match tag {
            "BaseModel" => Some(EntityKind::BaseModel),
            "User" => Some(EntityKind::User),
            "State" => Some(EntityKind::State),
            "City" => Some(EntityKind::City),
            "Amenity" => Some(EntityKind::Amenity),
            "Place" => Some(EntityKind::Place),
            "Review" => Some(EntityKind::Review),
            _ => None,
        }
    }

    /// The declared fields of this kind with their default values.
    pub fn defaults(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        match self {
            EntityKind::BaseModel => {}
            EntityKind::User => {
                fields.insert("email".to_string(), Value::from(""));
                fields.insert("password".to_string(), Value::from(""));
                fields.insert("first_name".to_string(), Value::from(""));
                fields.insert("last_name".to_string(), Value::from(""));
            }
            EntityKind::State => {
                fields.insert("name".to_string(), Value::from(""));
            }
            EntityKind::City => {
                fields.insert("state_id".to_string(), Value::from(""));
                fields.insert("name".to_string(), Value::from(""));
            }
            EntityKind::Amenity => {
                fields.insert("name".to_string(), Value::from(""));
            }
            EntityKind::Place => {
                fields.insert("city_id".to_string(), Value::from(""));
                fields.insert("user_id".to_string(), Value::from(""));
                fields.insert("name".to_string(), Value::from(""));
                fields.insert("description".to_string(), Value::from(""));
                fields.insert("number_rooms".to_string(), Value::from(0));
                fields.insert("number_bathrooms".to_string(), Value::from(0));
                fields.insert("max_guest".to_string(), Value::from(0));
                fields.insert("price_by_night".to_string(), Value::from(0));
                fields.insert("latitude".to_string(), Value::from(0.0));
                fields.insert("longitude".to_string(), Value::from(0.0));
                fields.insert("amenity_ids".to_string(), Value::Array(Vec::new()));
            }
            EntityKind::Review => {
                fields.insert("place_id".to_string(), Value::from(""));
                fields.insert("user_id".to_string(), Value::from(""));
                fields.insert("text".to_string(), Value::from(""));
            }
        }
        fields
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

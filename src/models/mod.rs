mod entity;
mod kind;

pub use entity::{is_protected, Entity, TIMESTAMP_FORMAT};
pub use kind::EntityKind;

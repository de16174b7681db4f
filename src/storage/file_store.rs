use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::models::{Entity, EntityKind};

/// File-backed object store: every known record lives in memory, and the
/// whole map is flushed to a single JSON document on save.
///
/// The store is an explicit handle: whoever opens it owns it and passes it
/// on. Exactly one is expected per backing file; concurrent writers are not
/// supported (last writer wins).
pub struct FileStore {
    path: PathBuf,
    objects: HashMap<String, Entity>,
}

impl FileStore {
    /// Open a store on the given backing file and immediately reload
    /// whatever it holds. A missing file is a valid empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut store = FileStore {
            path: path.as_ref().to_path_buf(),
            objects: HashMap::new(),
        };
        store.reload();
        store
    }

    /// Store key for a kind/id pair, `<Kind>.<id>`, the store's sole index.
    pub fn key(kind: EntityKind, id: &str) -> String {
        format!("{}.{}", kind.as_str(), id)
    }

    /// The live mapping of every known key to its entity.
    pub fn all(&self) -> &HashMap<String, Entity> {
        &self.objects
    }

    /// Insert an entity under its derived key. An existing entry with the
    /// same key is overwritten.
    pub fn insert(&mut self, entity: Entity) {
        let key = Self::key(entity.kind(), entity.id());
        self.objects.insert(key, entity);
    }

    pub fn get(&self, kind: EntityKind, id: &str) -> Option<&Entity> {
        self.objects.get(&Self::key(kind, id))
    }

    pub fn get_mut(&mut self, kind: EntityKind, id: &str) -> Option<&mut Entity> {
        self.objects.get_mut(&Self::key(kind, id))
    }

    /// Remove the matching entity, returning it if it was present.
    pub fn remove(&mut self, kind: EntityKind, id: &str) -> Option<Entity> {
        self.objects.remove(&Self::key(kind, id))
    }

    pub fn contains(&self, kind: EntityKind, id: &str) -> bool {
        self.objects.contains_key(&Self::key(kind, id))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Serialize every stored entity into one JSON document and replace the
    /// backing file. The write goes to a sibling temp file first and is
    /// renamed over the target, so a crash mid-write cannot truncate the
    /// store.
    pub fn save(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.objects)?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Load the backing file into the map. Best-effort and never an error:
    /// a missing or unreadable file leaves the map as it is, a malformed
    /// document is treated the same as an absent one, and entries with an
    /// unknown type tag or unparseable fields are skipped. Parsed entries
    /// keep the key they had in the file.
    pub fn reload(&mut self) {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return,
        };

        let parsed: Map<String, Value> = match serde_json::from_str(&content) {
            Ok(parsed) => parsed,
            Err(_) => return,
        };

        for (key, value) in parsed {
            let entry = match value {
                Value::Object(entry) => entry,
                _ => continue,
            };
            if let Some(entity) = Entity::from_map(entry) {
                self.objects.insert(key, entity);
            }
        }
    }
}

use crate::models::{Entity, EntityKind};
use crate::storage::FileStore;

use super::error::CommandError;
use super::parser::{coerce_value, tokenize};
use super::result::CommandResult;

/// Executes one console line at a time against the object store.
///
/// Every mutating verb flushes the whole store before returning, so the
/// backing file always reflects the last accepted command.
pub struct CommandEngine {
    store: FileStore,
}

impl CommandEngine {
    /// Build an engine around an already-opened store.
    pub fn new(store: FileStore) -> Self {
        CommandEngine { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn execute(&mut self, line: &str) -> Result<CommandResult, CommandError> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(CommandResult::Noop);
        }

        let args = &tokens[1..];
        match tokens[0].as_str() {
            "create" => self.do_create(args),
            "show" => self.do_show(args),
            "destroy" => self.do_destroy(args),
            "all" => self.do_all(args),
            "update" => self.do_update(args),
            "help" => Ok(CommandResult::Help),
            "quit" => Ok(CommandResult::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    // The validation ladder every instance verb walks, in order: class name
    // present, class known, id present, id found. Error parity depends on
    // the order, so the helpers are called in exactly this sequence.

    fn resolve_kind(args: &[String]) -> Result<EntityKind, CommandError> {
        let name = args.first().ok_or(CommandError::ClassNameMissing)?;
        EntityKind::from_tag(name).ok_or(CommandError::ClassNotFound)
    }

    fn resolve_id(args: &[String]) -> Result<&str, CommandError> {
        args.get(1)
            .map(String::as_str)
            .ok_or(CommandError::InstanceIdMissing)
    }

    fn do_create(&mut self, args: &[String]) -> Result<CommandResult, CommandError> {
        let kind = Self::resolve_kind(args)?;

        let entity = Entity::new(kind);
        let id = entity.id().to_string();
        self.store.insert(entity);
        self.store.save()?;

        Ok(CommandResult::Created(id))
    }

    fn do_show(&self, args: &[String]) -> Result<CommandResult, CommandError> {
        let kind = Self::resolve_kind(args)?;
        let id = Self::resolve_id(args)?;

        let entity = self
            .store
            .get(kind, id)
            .ok_or(CommandError::InstanceNotFound)?;

        Ok(CommandResult::Show(entity.to_string()))
    }

    fn do_destroy(&mut self, args: &[String]) -> Result<CommandResult, CommandError> {
        let kind = Self::resolve_kind(args)?;
        let id = Self::resolve_id(args)?;

        if self.store.remove(kind, id).is_none() {
            return Err(CommandError::InstanceNotFound);
        }
        self.store.save()?;

        Ok(CommandResult::Destroyed)
    }

    fn do_all(&self, args: &[String]) -> Result<CommandResult, CommandError> {
        // The filter is a prefix match on the store key.
        let prefix = match args.first() {
            Some(name) => {
                let kind = EntityKind::from_tag(name).ok_or(CommandError::ClassNotFound)?;
                Some(format!("{}.", kind.as_str()))
            }
            None => None,
        };

        let mut entries: Vec<(&String, &Entity)> = self
            .store
            .all()
            .iter()
            .filter(|(key, _)| match &prefix {
                Some(prefix) => key.starts_with(prefix.as_str()),
                None => true,
            })
            .collect();

        // Map order is arbitrary; sort by key for a stable listing.
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let lines = entries
            .into_iter()
            .map(|(_, entity)| entity.to_string())
            .collect();

        Ok(CommandResult::All(lines))
    }

    fn do_update(&mut self, args: &[String]) -> Result<CommandResult, CommandError> {
        let kind = Self::resolve_kind(args)?;
        let id = Self::resolve_id(args)?;
        if !self.store.contains(kind, id) {
            return Err(CommandError::InstanceNotFound);
        }

        let attr = args.get(2).ok_or(CommandError::AttributeNameMissing)?;
        let raw = args.get(3).ok_or(CommandError::ValueMissing)?;
        let value = coerce_value(raw);

        let entity = self
            .store
            .get_mut(kind, id)
            .ok_or(CommandError::InstanceNotFound)?;

        if !entity.set_attribute(attr, value) {
            // Protected attribute: silently refused, nothing changes and
            // nothing is flushed.
            return Ok(CommandResult::Updated);
        }
        entity.touch();
        self.store.save()?;

        Ok(CommandResult::Updated)
    }
}

pub mod cli;
pub mod command;
pub mod models;
pub mod storage;


pub use cli::Console;
pub use command::{CommandEngine, CommandError, CommandResult};
pub use models::{Entity, EntityKind};
pub use storage::FileStore;

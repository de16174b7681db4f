mod engine;
mod error;
mod parser;
mod result;

pub use engine::CommandEngine;
pub use error::CommandError;
pub use parser::{coerce_value, tokenize};
pub use result::CommandResult;

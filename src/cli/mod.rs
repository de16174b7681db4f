mod display;
mod interface;

pub use interface::Console;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use staybook::{CommandEngine, Console, FileStore};

#[derive(Parser)]
#[command(name = "staybook")]
#[command(about = "Interactive console for the Staybook object store", version)]
struct Cli {
    /// JSON file backing the object store.
    #[arg(long, default_value = "staybook.json")]
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = FileStore::open(&cli.file);
    let engine = CommandEngine::new(store);

    Console::new(engine).run()?;
    Ok(())
}

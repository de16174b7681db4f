use std::io::{self, BufRead, Write};

use crate::command::{CommandEngine, CommandResult};

use super::display::print_result;

pub struct Console {
    engine: CommandEngine,
    prompt: String,
}

impl Console {
    pub fn new(engine: CommandEngine) -> Self {
        Console {
            engine,
            prompt: "staybook> ".to_string(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.run_from(io::stdin().lock())
    }

    fn run_from<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        println!("Welcome to the Staybook console!");
        println!("Type 'help' for available commands");
        println!("Type 'quit' or press Ctrl-D to exit");

        loop {
            print!("{}", self.prompt);
            io::stdout().flush()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => {
                    // End of input stream counts as a quit.
                    println!();
                    break;
                }
                Ok(_) => {}
                // A line that cannot be read (undecodable bytes, transient
                // failure) is advisory; the session keeps going.
                Err(_) => {
                    println!("Error reading input");
                    continue;
                }
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.engine.execute(line) {
                Ok(CommandResult::Quit) => break,
                Ok(result) => print_result(&result),
                Err(error) => println!("{}", error),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;
    use tempfile::TempDir;

    fn console(path: &std::path::Path) -> Console {
        Console::new(CommandEngine::new(FileStore::open(path)))
    }

    #[test]
    fn test_undecodable_line_is_advisory_and_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        // One line of bytes that is not UTF-8, then a command that must
        // still be processed.
        let script: &[u8] = b"\xff\xfe bad bytes\ncreate BaseModel\nquit\n";
        console(&path).run_from(script).unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        // No quit; the stream just ends.
        console(&path).run_from(&b"create User\n"[..]).unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.len(), 1);
    }
}

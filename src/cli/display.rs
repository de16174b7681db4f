use crate::command::CommandResult;
use crate::models::EntityKind;

pub fn print_result(result: &CommandResult) {
    match result {
        CommandResult::Created(id) => println!("{}", id),
        CommandResult::Show(text) => println!("{}", text),
        CommandResult::All(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        CommandResult::Help => print_help(),
        // Mutations and quits confirm by staying silent.
        CommandResult::Destroyed
        | CommandResult::Updated
        | CommandResult::Noop
        | CommandResult::Quit => {}
    }
}

fn print_help() {
    let kinds: Vec<&str> = EntityKind::ALL.iter().map(|kind| kind.as_str()).collect();

    println!("\nAvailable commands:");
    println!("  create <class>                         - Create an instance, print its id");
    println!("  show <class> <id>                      - Print one instance");
    println!("  destroy <class> <id>                   - Delete an instance");
    println!("  all [class]                            - List instances, optionally one class");
    println!("  update <class> <id> <attr> <value>     - Set an attribute (quote multi-word values)");
    println!("  help                                   - Show this help message");
    println!("  quit                                   - Exit the console");
    println!();
    println!("Available classes:");
    println!("  {}", kinds.join(", "));
}

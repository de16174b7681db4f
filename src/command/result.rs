/// What a successfully executed command hands back for display.
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// `create`: the new entity's id, printed for the user.
    Created(String),
    /// `show`: the entity's display form.
    Show(String),
    /// `destroy`: entity removed and the store flushed. Prints nothing.
    Destroyed,
    /// `all`: display form of every matching entity, sorted by store key.
    All(Vec<String>),
    /// `update`: attribute set (or silently refused) and the store flushed.
    /// Prints nothing.
    Updated,
    /// `help`: the verb listing.
    Help,
    /// `quit` or end-of-input: the loop should stop.
    Quit,
    /// Empty input line.
    Noop,
}

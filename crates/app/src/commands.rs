//! Line commands understood by the interactive prompt.

pub const HELP: &str = "\
commands:
  item              show the item being split
  press <slot>      press a participant slot (toggle, or rename in edit mode)
  all               select every participant
  clear             clear the selection
  ok                confirm the split of the current item
  undo              undo the last confirmed split
  edit              switch between selecting and renaming
  rename <slot> <name>
  summary           show what everyone owes so far
  help
  quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Item,
    Press(usize),
    SelectAll,
    Clear,
    Confirm,
    Undo,
    Edit,
    Rename { index: usize, name: String },
    Summary,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs a slot number")]
    MissingSlot(&'static str),
    #[error("invalid slot: {0}")]
    InvalidSlot(String),
    #[error("`rename` needs a name")]
    MissingName,
    #[error("empty command")]
    Empty,
}

fn parse_slot(keyword: &'static str, raw: Option<&str>) -> Result<usize, ParseError> {
    let raw = raw.ok_or(ParseError::MissingSlot(keyword))?;
    raw.parse()
        .map_err(|_| ParseError::InvalidSlot(raw.to_string()))
}

/// Parses one prompt line. Keywords are case-insensitive.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or("").to_ascii_lowercase();
    let rest = parts.next().map(str::trim).filter(|rest| !rest.is_empty());

    match keyword.as_str() {
        "" => Err(ParseError::Empty),
        "item" | "i" => Ok(Command::Item),
        "press" | "p" => Ok(Command::Press(parse_slot("press", rest)?)),
        "all" | "a" => Ok(Command::SelectAll),
        "clear" | "c" => Ok(Command::Clear),
        "ok" | "confirm" => Ok(Command::Confirm),
        "undo" | "u" => Ok(Command::Undo),
        "edit" | "e" => Ok(Command::Edit),
        "rename" | "r" => {
            let rest = rest.ok_or(ParseError::MissingSlot("rename"))?;
            let mut args = rest.splitn(2, char::is_whitespace);
            let index = parse_slot("rename", args.next())?;
            let name = args
                .next()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(ParseError::MissingName)?;
            Ok(Command::Rename {
                index,
                name: name.to_string(),
            })
        }
        "summary" | "s" => Ok(Command::Summary),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

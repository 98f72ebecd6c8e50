use crate::model::{Cuisine, Dietary};
use crate::FinderError;

pub const HELP: &str = "\
Commands:
  name <term>            search by recipe name (empty clears)
  diet <name> [off]      check or uncheck a dietary restriction
  cuisine <name>         select a cuisine category
  ingredient <text>      ingredient every recipe must include (empty clears)
  search                 run the query
  reset                  clear every input and the results
  show                   print the finder page
  go <path>              open a page (/, /about, /code-requirements, /questions, /contact)
  help                   print this help
  quit                   leave";

/// One line of input in interactive mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Name(String),
    Diet { dietary: Dietary, checked: bool },
    Cuisine(Cuisine),
    Ingredient(String),
    Search,
    Reset,
    Show,
    Go(String),
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, FinderError> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => Ok(ShellCommand::Nothing),
            "name" => Ok(ShellCommand::Name(rest.to_string())),
            "ingredient" => Ok(ShellCommand::Ingredient(rest.to_string())),
            "diet" => {
                let (name, checked) = match rest.rsplit_once(char::is_whitespace) {
                    Some((name, flag)) if flag.eq_ignore_ascii_case("off") => (name, false),
                    _ => (rest, true),
                };
                Ok(ShellCommand::Diet {
                    dietary: name.parse()?,
                    checked,
                })
            }
            "cuisine" => Ok(ShellCommand::Cuisine(rest.parse()?)),
            "search" => Ok(ShellCommand::Search),
            "reset" => Ok(ShellCommand::Reset),
            "show" => Ok(ShellCommand::Show),
            "go" if !rest.is_empty() => Ok(ShellCommand::Go(rest.to_string())),
            "go" => Err(FinderError::InvalidCommand("go needs a path".to_string())),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(FinderError::InvalidCommand(other.to_string())),
        }
    }
}

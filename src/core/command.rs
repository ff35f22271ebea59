//! # Command Parsing
//!
//! Turns one line of user text into an [`Action`]. Both the TUI input box
//! and the script runner go through here.
//!
//! Names are matched case-insensitively, ignoring `_` and `-`, so
//! `pushCup 3`, `push_cup 3` and `push cup 3` all mean the same thing.
//! Ids are parsed as signed integers: whether `-1` is a valid id is the
//! tower's call, not the parser's.

use std::fmt;

use crate::core::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    MissingArgument { command: &'static str },
    InvalidArgument { command: &'static str, value: String },
    UnexpectedArgument { command: &'static str, value: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownCommand(name) => write!(f, "unknown command: {name}"),
            CommandError::MissingArgument { command } => write!(f, "{command} needs an id"),
            CommandError::InvalidArgument { command, value } => {
                write!(f, "{command}: {value:?} is not an integer id")
            }
            CommandError::UnexpectedArgument { command, value } => {
                write!(f, "{command} takes no argument (got {value:?})")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Help text listing every command, one per line.
pub const HELP: &str = "\
pushCup N | pushLid N | popCup | popLid | removeCup N | removeLid N
orderTower | reverseTower | height | lidedCups | stackingItems | ok
makeVisible | makeInvisible | exit";

pub fn parse(line: &str) -> Result<Action, CommandError> {
    let mut tokens = line.split_whitespace().map(normalize).peekable();
    let mut name = tokens.next().ok_or(CommandError::Empty)?;

    // "push cup 3" → "pushcup 3"
    if matches!(name.as_str(), "push" | "pop" | "remove")
        && let Some(kind) = tokens.next_if(|t| t == "cup" || t == "lid")
    {
        name.push_str(&kind);
    }

    let args: Vec<String> = tokens.collect();
    let action = match name.as_str() {
        "pushcup" => Action::PushCup(id_arg("pushCup", &args)?),
        "pushlid" => Action::PushLid(id_arg("pushLid", &args)?),
        "removecup" => Action::RemoveCup(id_arg("removeCup", &args)?),
        "removelid" => Action::RemoveLid(id_arg("removeLid", &args)?),
        "popcup" => no_arg("popCup", &args, Action::PopCup)?,
        "poplid" => no_arg("popLid", &args, Action::PopLid)?,
        "ordertower" | "order" => no_arg("orderTower", &args, Action::OrderTower)?,
        "reversetower" | "reverse" => no_arg("reverseTower", &args, Action::ReverseTower)?,
        "height" => no_arg("height", &args, Action::Height)?,
        "lidedcups" | "lided" => no_arg("lidedCups", &args, Action::LidedCups)?,
        "stackingitems" | "items" => no_arg("stackingItems", &args, Action::StackingItems)?,
        "ok" => no_arg("ok", &args, Action::LastOk)?,
        "makevisible" | "show" => no_arg("makeVisible", &args, Action::MakeVisible)?,
        "makeinvisible" | "hide" => no_arg("makeInvisible", &args, Action::MakeInvisible)?,
        "exit" | "quit" => no_arg("exit", &args, Action::Exit)?,
        _ => return Err(CommandError::UnknownCommand(name)),
    };
    Ok(action)
}

fn normalize(token: &str) -> String {
    if token.parse::<i64>().is_ok() {
        return token.to_string();
    }
    token
        .chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn id_arg(command: &'static str, args: &[String]) -> Result<i64, CommandError> {
    match args {
        [] => Err(CommandError::MissingArgument { command }),
        [value] => value.parse().map_err(|_| CommandError::InvalidArgument {
            command,
            value: value.clone(),
        }),
        [_, extra, ..] => Err(CommandError::UnexpectedArgument {
            command,
            value: extra.clone(),
        }),
    }
}

fn no_arg(command: &'static str, args: &[String], action: Action) -> Result<Action, CommandError> {
    match args.first() {
        None => Ok(action),
        Some(value) => Err(CommandError::UnexpectedArgument {
            command,
            value: value.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_style_names() {
        assert_eq!(parse("pushCup 3"), Ok(Action::PushCup(3)));
        assert_eq!(parse("pushLid 1"), Ok(Action::PushLid(1)));
        assert_eq!(parse("removeCup 2"), Ok(Action::RemoveCup(2)));
        assert_eq!(parse("removeLid 2"), Ok(Action::RemoveLid(2)));
        assert_eq!(parse("popCup"), Ok(Action::PopCup));
        assert_eq!(parse("orderTower"), Ok(Action::OrderTower));
        assert_eq!(parse("reverseTower"), Ok(Action::ReverseTower));
        assert_eq!(parse("lidedCups"), Ok(Action::LidedCups));
        assert_eq!(parse("stackingItems"), Ok(Action::StackingItems));
        assert_eq!(parse("makeVisible"), Ok(Action::MakeVisible));
        assert_eq!(parse("makeInvisible"), Ok(Action::MakeInvisible));
    }

    #[test]
    fn test_parse_spaced_and_snake_forms() {
        assert_eq!(parse("push cup 3"), Ok(Action::PushCup(3)));
        assert_eq!(parse("  POP   lid "), Ok(Action::PopLid));
        assert_eq!(parse("remove_lid 4"), Ok(Action::RemoveLid(4)));
        assert_eq!(parse("order"), Ok(Action::OrderTower));
        assert_eq!(parse("show"), Ok(Action::MakeVisible));
        assert_eq!(parse("quit"), Ok(Action::Exit));
        assert_eq!(parse("ok"), Ok(Action::LastOk));
    }

    #[test]
    fn test_parse_keeps_negative_ids() {
        assert_eq!(parse("pushCup -2"), Ok(Action::PushCup(-2)));
        assert_eq!(parse("push lid 0"), Ok(Action::PushLid(0)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(
            parse("stack 3"),
            Err(CommandError::UnknownCommand("stack".to_string()))
        );
        assert_eq!(
            parse("pushCup"),
            Err(CommandError::MissingArgument { command: "pushCup" })
        );
        assert_eq!(
            parse("pushCup three"),
            Err(CommandError::InvalidArgument {
                command: "pushCup",
                value: "three".to_string()
            })
        );
        assert_eq!(
            parse("pushCup 1 2"),
            Err(CommandError::UnexpectedArgument {
                command: "pushCup",
                value: "2".to_string()
            })
        );
        assert_eq!(
            parse("height 4"),
            Err(CommandError::UnexpectedArgument {
                command: "height",
                value: "4".to_string()
            })
        );
    }

    #[test]
    fn test_bare_push_is_unknown() {
        assert_eq!(
            parse("push 3"),
            Err(CommandError::UnknownCommand("push".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let err = parse("removeLid").unwrap_err();
        assert_eq!(err.to_string(), "removeLid needs an id");
    }
}

//! Line-oriented command language of the interactive shell.
//!
//! Each line is split like a shell would (`shlex`) and parsed with the same
//! clap derive machinery as the binary's own arguments, so usage errors and
//! `help` output come from clap.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::num::NonZeroUsize;

use crate::app::Command;
use crate::ingredients::leading_quantity;
use crate::model::{ItemId, ServingsDirection};

#[derive(Parser, Debug)]
#[command(name = "shell", no_binary_name = true, disable_version_flag = true)]
#[command(help_template = "commands:\n{subcommands}")]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Search recipes
    #[command(visible_alias = "s")]
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show result page n (1-based)
    #[command(visible_alias = "p")]
    Page { page: NonZeroUsize },

    /// Show a recipe
    #[command(visible_aliases = ["o", "recipe"])]
    Open { id: String },

    /// One serving more (also `+`)
    Inc,

    /// One serving less (also `-`)
    Dec,

    /// Add the recipe's ingredients to the shopping list
    Add,

    /// Show the shopping list
    List,

    /// Remove a shopping list item
    #[command(visible_alias = "delete")]
    Rm { item: u64 },

    /// Change an item's count (accepts 2, 0.5, 1 1/2)
    Count {
        item: u64,
        #[arg(required = true)]
        amount: Vec<String>,
    },

    /// Like or unlike the shown recipe
    Like,

    /// Show favorites
    Likes,

    /// Leave
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellInput {
    Command(Command),
    ShowList,
    ShowLikes,
    /// Rendered help text
    Help(String),
    Quit,
    Empty,
}

/// Parse a shell line; the error is a message for the user
pub fn parse_line(line: &str) -> Result<ShellInput, String> {
    let mut words = shlex::split(line).ok_or("unbalanced quotes")?;
    let Some(first) = words.first_mut() else {
        return Ok(ShellInput::Empty);
    };
    // Shorthands that are not valid subcommand names
    match first.as_str() {
        "+" => *first = "inc".to_string(),
        "-" => *first = "dec".to_string(),
        "?" => *first = "help".to_string(),
        _ => {}
    }

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            return Ok(ShellInput::Help(e.render().to_string().trim_end().to_string()))
        }
        Err(e) => return Err(e.render().to_string().trim_end().to_string()),
    };

    let command = match parsed.command {
        ShellCommand::Search { query } => Command::SearchSubmitted(query.join(" ")),
        ShellCommand::Page { page } => Command::PageRequested(page.get() - 1),
        ShellCommand::Open { id } => Command::RecipeSelected(id),
        ShellCommand::Inc => Command::ServingsChanged(ServingsDirection::Increase),
        ShellCommand::Dec => Command::ServingsChanged(ServingsDirection::Decrease),
        ShellCommand::Add => Command::AddRecipeToList,
        ShellCommand::Rm { item } => Command::ListItemDeleted(ItemId(item)),
        ShellCommand::Count { item, amount } => {
            Command::ListItemCountChanged(ItemId(item), Some(parse_amount(&amount)?))
        }
        ShellCommand::Like => Command::LikeToggled,
        ShellCommand::List => return Ok(ShellInput::ShowList),
        ShellCommand::Likes => return Ok(ShellInput::ShowLikes),
        ShellCommand::Quit => return Ok(ShellInput::Quit),
    };
    Ok(ShellInput::Command(command))
}

/// The whole of `amount` must read as one quantity
fn parse_amount(amount: &[String]) -> Result<f64, String> {
    let tokens: Vec<&str> = amount.iter().map(String::as_str).collect();
    leading_quantity(&tokens)
        .filter(|quantity| quantity.consumed == tokens.len())
        .map(|quantity| quantity.value)
        .ok_or_else(|| {
            ShellLine::command()
                .error(
                    ErrorKind::ValueValidation,
                    format!("`{}` is not an amount such as 2, 0.5 or 1 1/2", tokens.join(" ")),
                )
                .render()
                .to_string()
                .trim_end()
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> Command {
        match parse_line(line) {
            Ok(ShellInput::Command(command)) => command,
            other => panic!("expected a command for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_shell_line_definition() {
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_search_joins_words() {
        assert_eq!(
            command("search  tomato soup"),
            Command::SearchSubmitted("tomato soup".to_string())
        );
        assert_eq!(
            command(r#"s "mac and cheese""#),
            Command::SearchSubmitted("mac and cheese".to_string())
        );
        assert!(parse_line("search").is_err());
    }

    #[test]
    fn test_page_is_one_based() {
        assert_eq!(command("page 2"), Command::PageRequested(1));
        assert!(parse_line("page 0").is_err());
        assert!(parse_line("page x").is_err());
        assert!(parse_line("page").is_err());
    }

    #[test]
    fn test_servings_and_list() {
        assert_eq!(command("+"), Command::ServingsChanged(ServingsDirection::Increase));
        assert_eq!(command("-"), Command::ServingsChanged(ServingsDirection::Decrease));
        assert_eq!(command("dec"), Command::ServingsChanged(ServingsDirection::Decrease));
        assert_eq!(command("add"), Command::AddRecipeToList);
        assert_eq!(command("rm 4"), Command::ListItemDeleted(ItemId(4)));
        assert_eq!(command("delete 4"), Command::ListItemDeleted(ItemId(4)));
        assert!(parse_line("rm four").is_err());
    }

    #[test]
    fn test_count_accepts_fractions() {
        assert_eq!(
            command("count 2 1 1/2"),
            Command::ListItemCountChanged(ItemId(2), Some(1.5))
        );
        assert_eq!(
            command("count 0 0.25"),
            Command::ListItemCountChanged(ItemId(0), Some(0.25))
        );
        assert!(parse_line("count 1 lots").is_err());
        assert!(parse_line("count 1 2 eggs").is_err());
        assert!(parse_line("count").is_err());
    }

    #[test]
    fn test_help_comes_from_clap() {
        for line in ["help", "?"] {
            match parse_line(line) {
                Ok(ShellInput::Help(text)) => {
                    assert!(text.contains("search"));
                    assert!(text.contains("count"));
                }
                other => panic!("expected help for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_usage_errors_name_the_problem() {
        let message = parse_line("dance").unwrap_err();
        assert!(message.contains("dance"));

        let message = parse_line("count 1 lots").unwrap_err();
        assert!(message.contains("lots"));

        assert!(parse_line("open \"unbalanced").is_err());
    }

    #[test]
    fn test_other_inputs() {
        assert_eq!(parse_line("").unwrap(), ShellInput::Empty);
        assert_eq!(parse_line("   ").unwrap(), ShellInput::Empty);
        assert_eq!(parse_line("list").unwrap(), ShellInput::ShowList);
        assert_eq!(parse_line("likes").unwrap(), ShellInput::ShowLikes);
        assert_eq!(parse_line("quit").unwrap(), ShellInput::Quit);
        assert_eq!(parse_line("q").unwrap(), ShellInput::Quit);
        assert_eq!(command("open 47746"), Command::RecipeSelected("47746".to_string()));
        assert_eq!(command("o 47746"), Command::RecipeSelected("47746".to_string()));
    }
}

//! Interactive menu mode
//!
//! Text-based menu loop over the query engine. The full command surface is
//! the `MENU` table; each entry maps a key to exactly one engine operation.

use super::input::{InputError, parse_length, parse_letters, parse_pattern};
use super::search::run_search;
use crate::output::{status, write_statistics};
use crate::query::{Query, QueryEngine};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Commands available from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    FindPattern,
    FindLength,
    FindContaining,
    Statistics,
    Exit,
}

/// One line of the menu
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub key: &'static str,
    pub command: MenuCommand,
    pub label: &'static str,
}

/// Menu lookup table, in display order
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        key: "1",
        command: MenuCommand::FindPattern,
        label: "Find words matching pattern (with *)",
    },
    MenuEntry {
        key: "2",
        command: MenuCommand::FindLength,
        label: "Find words by length",
    },
    MenuEntry {
        key: "3",
        command: MenuCommand::FindContaining,
        label: "Find words containing specific letters",
    },
    MenuEntry {
        key: "4",
        command: MenuCommand::Statistics,
        label: "View wordlist statistics",
    },
    MenuEntry {
        key: "5",
        command: MenuCommand::Exit,
        label: "Exit",
    },
];

/// Validator turning a raw argument into a query
type ArgumentParser = fn(&str) -> Result<Query, InputError>;

impl MenuCommand {
    /// Resolve a menu key (surrounding whitespace ignored)
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        MENU.iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.command)
    }

    /// Prompt and validator for query commands, `None` for the others
    #[must_use]
    pub fn argument(self) -> Option<(&'static str, ArgumentParser)> {
        match self {
            Self::FindPattern => Some((
                "Enter pattern (use * for unknown letters)",
                parse_pattern as ArgumentParser,
            )),
            Self::FindLength => Some(("Enter word length", parse_length as ArgumentParser)),
            Self::FindContaining => Some((
                "Enter letters that must be in the word",
                parse_letters as ArgumentParser,
            )),
            Self::Statistics | Self::Exit => None,
        }
    }
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    Interrupted,
}

pub const INTERRUPTED: &str = "Program interrupted. Goodbye!";
pub const GOODBYE: &str = "Thanks for using Crossword Cheater! Goodbye!";

/// Run the interactive menu until the user exits or input ends
///
/// Read failures and errors from a single command are reported and the loop
/// continues.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_menu<R: BufRead, W: Write>(
    engine: &QueryEngine<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        write_menu(out)?;

        let prompt = format!("\nEnter your choice (1-{})", MENU.len());
        let choice = match read_line(input, out, &prompt) {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                writeln!(out, "\n\n{}", status::farewell(INTERRUPTED))?;
                return Ok(());
            }
            Err(e) => {
                writeln!(out, "{}", status::error(format!("An error occurred: {e}")))?;
                continue;
            }
        };

        let Some(command) = MenuCommand::from_key(&choice) else {
            writeln!(
                out,
                "{}",
                status::error(format!("Invalid choice! Please select 1-{}.", MENU.len()))
            )?;
            continue;
        };

        match execute(command, engine, input, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                writeln!(out, "\n{}", status::farewell(GOODBYE))?;
                return Ok(());
            }
            Ok(Flow::Interrupted) => {
                writeln!(out, "\n\n{}", status::farewell(INTERRUPTED))?;
                return Ok(());
            }
            Err(e) => writeln!(out, "{}", status::error(format!("An error occurred: {e}")))?,
        }
    }
}

fn execute<R: BufRead, W: Write>(
    command: MenuCommand,
    engine: &QueryEngine<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    let (prompt, parse) = match (command, command.argument()) {
        (MenuCommand::Exit, _) => return Ok(Flow::Exit),
        (_, None) => {
            write_statistics(out, engine.statistics().as_ref())?;
            return Ok(Flow::Continue);
        }
        (_, Some(argument)) => argument,
    };

    let Some(raw) = read_line(input, out, &format!("\n{prompt}"))? else {
        return Ok(Flow::Interrupted);
    };

    match parse(&raw) {
        Ok(query) => {
            writeln!(out, "\n{}", status::info(format!("Searching: {query}...")))?;
            run_search(engine, &query, None, out)?;
        }
        Err(e) => writeln!(out, "{}", status::error(e))?,
    }
    Ok(Flow::Continue)
}

fn write_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(50))?;
    writeln!(out, "🎯 {}", "CROSSWORD CHEATER".bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(50))?;
    for entry in MENU {
        writeln!(out, "{}. {}", entry.key, entry.label)?;
    }
    writeln!(out, "{}", "=".repeat(50))
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordStore;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        session_bytes(script.as_bytes())
    }

    fn session_bytes(script: &[u8]) -> String {
        let store = WordStore::from_words(words_from_slice(&["thickly", "thirdly", "quickly"]));
        let engine = QueryEngine::new(&store);
        let mut input = Cursor::new(script.to_vec());
        let mut out = Vec::new();

        run_menu(&engine, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_table_keys_are_unique_and_ordered() {
        let keys: Vec<&str> = MENU.iter().map(|e| e.key).collect();
        assert_eq!(keys, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn from_key_resolves_table_entries() {
        assert_eq!(MenuCommand::from_key("1"), Some(MenuCommand::FindPattern));
        assert_eq!(MenuCommand::from_key(" 4 "), Some(MenuCommand::Statistics));
        assert_eq!(MenuCommand::from_key("5"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_key("6"), None);
        assert_eq!(MenuCommand::from_key(""), None);
    }

    #[test]
    fn only_queries_take_arguments() {
        assert!(MenuCommand::FindPattern.argument().is_some());
        assert!(MenuCommand::FindLength.argument().is_some());
        assert!(MenuCommand::FindContaining.argument().is_some());
        assert!(MenuCommand::Statistics.argument().is_none());
        assert!(MenuCommand::Exit.argument().is_none());
    }

    #[test]
    fn pattern_query_then_exit() {
        let text = session("1\nth***ly\n5\n");
        assert!(text.contains("Found 2 matches for pattern 'th***ly':"));
        assert!(text.contains("thickly"));
        assert!(text.contains(GOODBYE));
    }

    #[test]
    fn length_query() {
        let text = session("2\n7\n5\n");
        assert!(text.contains("Found 3 matches for 7 letters:"));
    }

    #[test]
    fn containing_query() {
        let text = session("3\nqk\n5\n");
        assert!(text.contains("Found 1 match for containing 'kq':"));
        assert!(text.contains("quickly"));
    }

    #[test]
    fn statistics_command() {
        let text = session("4\n5\n");
        assert!(text.contains("Total words: 3"));
        assert!(text.contains("Average length: 7.00 letters"));
    }

    #[test]
    fn validation_errors_keep_the_loop_running() {
        let text = session("1\n\n2\nabc\n2\n0\n3\n \n5\n");
        assert!(text.contains("Please enter a valid pattern!"));
        assert!(text.contains("Please enter a valid number!"));
        assert!(text.contains("Please enter a positive number!"));
        assert!(text.contains("Please enter some letters!"));
        assert!(text.contains(GOODBYE));
    }

    #[test]
    fn invalid_choice() {
        let text = session("9\n5\n");
        assert!(text.contains("Invalid choice! Please select 1-5."));
    }

    #[test]
    fn unreadable_choice_is_reported_and_loop_continues() {
        let text = session_bytes(b"\xff\xfe\n4\n5\n");
        assert!(text.contains("An error occurred:"));
        assert!(text.contains("Total words: 3"));
        assert!(text.contains(GOODBYE));
    }

    #[test]
    fn end_of_input_is_an_interruption() {
        let text = session("");
        assert!(text.contains(INTERRUPTED));
        assert!(!text.contains(GOODBYE));
    }

    #[test]
    fn end_of_input_at_argument_prompt() {
        let text = session("1\n");
        assert!(text.contains(INTERRUPTED));
    }

    #[test]
    fn no_matches() {
        let text = session("1\nzz\n5\n");
        assert!(text.contains("No matches found!"));
    }
}

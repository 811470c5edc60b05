//! Shell command parsing and dispatch.
//!
//! Each command lives in its own submodule, takes the raw argument string,
//! and returns the reply to print. Errors bubble up as [`crate::errors::Error`]
//! and are rendered by the loop with a `❌` prefix.

mod catalog;
mod review;

use crate::errors::{Error, Result};
use crate::store::BlobStore;

/// Parses one non-empty input line and runs the matching command.
///
/// # Errors
/// Returns an error for unknown commands, malformed arguments, or any
/// failure reported by the command itself.
pub fn dispatch(store: &mut BlobStore, user_id: i64, line: &str) -> Result<String> {
    let (command, args) = split_token(line);

    match command {
        "help" => Ok(help_text()),
        "list" => catalog::cmd_list(store, args),
        "show" => review::cmd_show(store, args),
        "review" => review::cmd_review(store, user_id, args),
        other => Err(Error::Config {
            message: format!("Unknown command '{other}'; type 'help'"),
        }),
    }
}

/// Splits the first whitespace-delimited token off `input`, returning the
/// token and the trimmed remainder.
pub(crate) fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(i) => (&input[..i], input[i..].trim_start()),
        None => (input, ""),
    }
}

fn help_text() -> String {
    "Available commands:\n\
     \x20 list [search=TERM] [category=NAME] [sort=name|price-low|price-high|rating]\n\
     \x20 show <product-id>\n\
     \x20 review <product-id> <stars 1-5> [photo=PATH] <review text...>\n\
     \x20 help\n\
     \x20 quit\n\
     Categories: electronics, clothing, home, books, sports"
        .to_string()
}

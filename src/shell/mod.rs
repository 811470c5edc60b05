//! Interactive storefront shell.
//!
//! The frontend glue layer: a stdin command loop standing in for the
//! original's listing and detail pages. Commands parse their arguments, call
//! into [`crate::core`], and return a reply string the loop prints; every
//! operation runs synchronously on this one thread.

pub mod commands;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::store::BlobStore;
use std::io::{BufRead, BufReader, Write};
use tracing::debug;

const PROMPT: &str = "shopshelf> ";

/// Runs the shell until `quit` or end of input.
///
/// # Errors
/// Returns an error only when stdin or stdout fail; command failures are
/// reported to the user and the loop keeps going.
pub fn run_shell(store: &mut BlobStore, config: &AppConfig) -> Result<()> {
    println!("ShopShelf - type 'help' for commands, 'quit' to leave.");

    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            // End of input
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        debug!(command = line, "Dispatching shell command");
        match commands::dispatch(store, config.user_id, line) {
            Ok(reply) => println!("{reply}"),
            Err(e) => println!("❌ {e}"),
        }
    }

    println!("Bye!");
    Ok(())
}

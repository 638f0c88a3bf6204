//! Minimal REPL host for the voice engine.
//!
//! Reads messages from stdin, routes them as a single local user, and prints
//! the voiced replies. `--list` prints the selector menu, `--list-json`
//! dumps the catalog as JSON for host GUIs.

use anyhow::Result;
use dotenvy::dotenv;
use log::info;
use std::io::{self, BufRead, Write};

use voicebox::commands::Router;

const LOCAL_USER: &str = "local";

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let router = Router::from_env();

    match std::env::args().nth(1).as_deref() {
        Some("--list") => {
            println!("{}", router.context().formatter.selector_message());
            return Ok(());
        }
        Some("--list-json") => {
            let listing = router.context().catalog.list();
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(());
        }
        Some(other) => {
            eprintln!("unknown option `{other}` (expected --list or --list-json)");
            std::process::exit(2);
        }
        None => {}
    }

    info!("starting voice chat shell");
    let active = router.context().session.active_for(LOCAL_USER);
    println!("{}", router.context().formatter.greeting(&active));
    println!("Type a message, /voices for the menu, Ctrl-D to leave.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        println!("{}", router.respond(LOCAL_USER, line));
    }

    let active = router.context().session.active_for(LOCAL_USER);
    println!("{}", router.context().formatter.farewell(&active));
    Ok(())
}

//! # Regbook CLI
//!
//! A terminal front end for the `regbookapp` library. The binary is
//! intentionally thin: everything lives in `src/cli/`, and this file only
//! invokes [`cli::run`] and turns errors into an exit status.
//!
//! The CLI plays the presentation role: it forwards field changes, submits,
//! edits and deletes to the form controller and renders the resulting
//! snapshot. It holds no record logic of its own.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

//! # CLI Behavior
//!
//! This is **one possible presentation** for regbook. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Sessions
//!
//! Records live in a session directory, so separate terminals (or scripts)
//! can keep separate lists with `--session NAME`. `regbook end-session` drops
//! the current session's records, the way closing a browser tab would.
//!
//! ## One Invocation, One Form Interaction
//!
//! - `regbook add name=A email=a@b.com ...` fills a fresh draft and submits it.
//! - `regbook edit 2 city=Mumbai` loads record 2, applies the changes, submits.
//! - `regbook delete 2` removes record 2.
//! - `regbook` / `regbook list` shows the table.
//!
//! Indexes shown and accepted here are 1-based; the library uses 0-based
//! positions.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, logging and context initialization
//! - `handlers`: Per-command handlers that drive the form controller
//! - `render`: Output formatting (table, field errors, messages)

mod handlers;
mod render;
pub mod setup;

use clap::Parser;
use setup::{Cli, Commands};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbose);
    let mut ctx = setup::init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { values }) => handlers::add(&mut ctx, values),
        Some(Commands::Edit { index, values }) => handlers::edit(&mut ctx, index, values),
        Some(Commands::Delete { index }) => handlers::delete(&mut ctx, index),
        Some(Commands::EndSession) => handlers::end_session(&ctx),
        Some(Commands::List) | None => handlers::list(&ctx),
    }
}

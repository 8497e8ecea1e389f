//! buildprep CLI
//!
//! Usage: buildprep [COMMAND]
//!
//! Commands:
//!   run   Install dependencies, then collect static files (default)
//!   plan  Show the commands a build would run
//!   init  Write a buildprep.toml template

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::GlobalArgs;

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    let global = GlobalArgs::from_cli(&cli);
    let command = cli.command.take().unwrap_or_else(Commands::default_run);

    let result = match command {
        Commands::Run { clear, no_clear } => commands::run::cmd_run(&global, clear, no_clear),
        Commands::Plan => commands::plan::cmd_plan(&global),
        Commands::Init { force } => commands::init::cmd_init(&global, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, &global.error_ui());
            ExitCode::from(exit_status_byte(ui::error::exit_code(&err)))
        }
    }
}

/// Exit statuses are a single byte on every platform we run on.
fn exit_status_byte(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(0) | Err(_) => 1,
        Ok(code) => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_byte_never_reports_success_for_errors() {
        assert_eq!(exit_status_byte(0), 1);
        assert_eq!(exit_status_byte(-1), 1);
        assert_eq!(exit_status_byte(300), 1);
        assert_eq!(exit_status_byte(127), 127);
    }
}

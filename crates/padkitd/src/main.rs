mod cli;
mod logging;
mod runner;
mod script;

use std::fs;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::unbounded;

use crate::cli::{Cli, Command};
use crate::script::{parse_script, Script};

const DEFAULT_SCRIPT: &str = "script.yaml";

fn load_script(path: Option<&str>) -> Option<Script> {
    let path = path.unwrap_or(DEFAULT_SCRIPT);
    let input = match fs::read_to_string(path) {
        Ok(input) => input,
        Err(e) => {
            print_error!("failed to read {path}: {e}");
            return None;
        }
    };
    match parse_script(&input) {
        Ok(script) => Some(script),
        Err(e) => {
            print_error!("invalid script {path}: {e}");
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    match cli.command {
        Command::Run { script } => {
            let Some(script) = load_script(script.as_deref()) else {
                return;
            };

            // Handle Ctrl+C to exit cleanly
            let (stop_tx, stop_rx) = unbounded::<()>();
            if let Err(e) = ctrlc::set_handler(move || {
                let _ = stop_tx.send(());
            }) {
                print_error!("failed to set Ctrl+C handler: {e}");
                return;
            }

            print_info!("padkitd started");
            runner::run(script, &stop_rx);
        }
        Command::Check { script } => {
            let Some(script) = load_script(script.as_deref()) else {
                return;
            };
            print_info!(
                "script ok: {} pad(s), {} event(s), {:.2}s timeline",
                script.pads,
                script.events.len(),
                script.end()
            );
        }
    }
}

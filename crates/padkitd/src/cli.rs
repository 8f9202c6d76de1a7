use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Replay an input script against the hub in the foreground.
    Run {
        /// The script to replay
        #[clap(short, long)]
        script: Option<String>,
    },
    /// Parse a script and report problems without running it.
    Check {
        /// The script to validate
        #[clap(short, long)]
        script: Option<String>,
    },
}

/// Replay and diagnostics host for the padkit input pipeline.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

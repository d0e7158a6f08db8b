pub mod edit;

use clap::Parser;

/// ppmedit - Apply pixel edits to plain-text PPM (P3) images
#[derive(Parser, Debug)]
#[command(name = "ppmedit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub edit: edit::EditArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default `env_logger` filter for the requested verbosity.
    ///
    /// `RUST_LOG` still takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

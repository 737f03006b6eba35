use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Command line interface for the Bita shop API
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, global = true, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file under ./logs
    #[arg(long, global = true)]
    pub log_to_file: bool,

    /// Server options, accepted with or without the `serve` subcommand
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the HTTP API server (default)
    Serve,
    /// Print the client route table
    Routes {
        /// Resolve a single client path instead of listing the table
        #[arg(long)]
        resolve: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct ServeArgs {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Interface to bind to, overrides the configuration file
    #[arg(long, global = true, env = "BITA_HOST")]
    pub host: Option<IpAddr>,

    /// Port to listen on, overrides the configuration file
    #[arg(short, long, global = true, env = "BITA_PORT")]
    pub port: Option<u16>,
}

impl Cli {
    /// The subcommand to run; `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

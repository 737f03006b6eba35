//! Main entry point for the Bita shop API.
//!
//! Loads environment variables, parses the command line, initializes logging
//! and configuration, then either serves the HTTP API or prints the client
//! route table.

mod api;
mod cli;
mod client;
mod config;
mod constants;
mod errors;
mod utils;

use clap::Parser;
use cli::{Cli, Command, ServeArgs};
use config::{AppConfig, ServerConfig};
use errors::Error;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Builds the listening address from defaults, the optional config file and
/// CLI/env overrides, in increasing order of precedence.
fn server_config(args: &ServeArgs) -> Result<ServerConfig, Error> {
    let mut server = match &args.config {
        Some(path) => config::load_app_config(path)?.server,
        None => AppConfig::default().server,
    };
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    Ok(server)
}

async fn serve(args: &ServeArgs) -> Result<(), Error> {
    let server = server_config(args)?;
    api::server::launch_server(&server).await
}

fn print_routes(resolve: Option<&str>) -> Result<(), client::NavigationError> {
    let routes = client::client_routes();
    match resolve {
        Some(path) => {
            let component = routes.navigate(path)?;
            println!("{path} -> {component}");
        }
        None => {
            for entry in routes.entries() {
                println!("{} -> {}", entry.path, entry.render());
            }
        }
    }
    Ok(())
}

/// Loads `.env` (or `env_file` when given) into the process environment, then
/// parses `args`.
///
/// The environment is populated first so env-backed flags such as
/// `BITA_PORT` pick up values from the file. The load result is returned for
/// logging once the subscriber is installed.
fn load_cli<I, T>(env_file: Option<&Path>, args: I) -> (Cli, Result<(), dotenvy::Error>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let dotenv = match env_file {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    (Cli::parse_from(args), dotenv)
}

/// Maps a command outcome to the process exit code, logging the failure.
fn exit_code<E: fmt::Display>(context: &str, result: Result<(), E>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}: {}", context, e);
            ExitCode::FAILURE
        }
    }
}

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Load environment variables
/// 2. Parse CLI arguments
/// 3. Initialize logging system
/// 4. Run the selected command
///
/// Startup failures (unreadable config, port already in use) are logged and
/// end the process with a non-zero exit code.
#[tokio::main]
async fn main() -> ExitCode {
    let (cli, dotenv) = load_cli(None, std::env::args_os());
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    match cli.command() {
        Command::Serve => {
            info!("Starting Bita shop API");
            exit_code("Server failed", serve(&cli.serve).await)
        }
        Command::Routes { resolve } => {
            exit_code("Route lookup failed", print_routes(resolve.as_deref()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn server_config_defaults_to_port_5000() {
        let server = server_config(&ServeArgs::default()).unwrap();
        assert_eq!(server, ServerConfig::default());
        assert_eq!(server.port, 5000);
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let args = ServeArgs {
            config: None,
            host: Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: Some(9000),
        };
        let server = server_config(&args).unwrap();
        assert_eq!(server.socket_addr(), "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn missing_config_file_is_fatal() {
        let args = ServeArgs {
            config: Some("/nonexistent/bita-shop.yaml".into()),
            ..ServeArgs::default()
        };
        assert!(matches!(server_config(&args), Err(Error::Io(_))));
    }

    #[test]
    fn routes_command_resolves_orders() {
        assert!(print_routes(None).is_ok());
        assert!(print_routes(Some("/orders")).is_ok());
        assert!(print_routes(Some("/checkout")).is_err());
    }

    #[test]
    fn env_file_values_reach_cli_flags() {
        let env_file = std::env::temp_dir().join(format!("bita-shop-{}.env", std::process::id()));
        std::fs::write(&env_file, "BITA_HOST=10.1.2.3\n").unwrap();

        let (cli, dotenv) = load_cli(Some(&env_file), ["bita-shop"]);
        std::env::remove_var("BITA_HOST");
        std::fs::remove_file(&env_file).unwrap();

        assert!(dotenv.is_ok());
        assert_eq!(cli.serve.host, Some(IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3))));
    }

    #[test]
    fn missing_env_file_is_reported_not_fatal() {
        let (cli, dotenv) = load_cli(Some(Path::new("/nonexistent/.env")), ["bita-shop", "routes"]);
        assert!(dotenv.is_err());
        assert_eq!(cli.command(), Command::Routes { resolve: None });
    }

    #[tokio::test]
    async fn port_in_use_exits_with_failure() {
        let listener = api::server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let args = ServeArgs {
            config: None,
            host: Some(addr.ip()),
            port: Some(addr.port()),
        };

        assert_eq!(exit_code("Server failed", serve(&args).await), ExitCode::FAILURE);
    }

    #[test]
    fn successful_command_exits_cleanly() {
        assert_eq!(exit_code("Route lookup failed", print_routes(None)), ExitCode::SUCCESS);
        assert_eq!(
            exit_code("Route lookup failed", print_routes(Some("/checkout"))),
            ExitCode::FAILURE
        );
    }
}

mod roles;
mod routes;
mod serve;

use std::str::FromStr;

use clap::{Arg, Command};
use jornal::{config, tracing::Level, Config};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cmd().get_matches();

    // Without an explicit path we fall back on the default config file, and
    // if that's missing on the environment alone.
    let mut config: Config = match matches.get_one::<String>("config") {
        Some(path) => config::load_from(path)?,
        None => config::load_or_env()?,
    };

    if let Some(verbosity) = matches.get_one::<String>("verbosity") {
        config.tracing.level = Level::from_str(verbosity)?;
    }

    match matches.subcommand() {
        Some(("routes", m)) => routes::list(m, &config)?,
        Some(("resolve", m)) => routes::resolve(m, &config)?,
        Some(("roles", m)) => roles::run(m)?,
        Some(("serve", m)) => serve::run(m, config).await?,
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

pub fn cmd() -> Command {
    Command::new("jornal")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .infer_subcommands(true)
        .version(VERSION)
        .about("Inspect and serve the Jornal front-end navigation.")
        .subcommand(routes::list_cmd())
        .subcommand(routes::resolve_cmd())
        .subcommand(roles::cmd())
        .subcommand(serve::cmd())
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .global(true)
                .help("Path to the config file"),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .short('v')
                .display_order(100)
                .value_name("level")
                .value_parser(["trace", "debug", "info", "warn", "error", "none"])
                .global(true)
                .help("Set the verbosity of the log output"),
        )
}

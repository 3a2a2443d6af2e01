use anyhow::Result;
use clap::{Arg, ArgMatches, Command};

use jornal::Config;

pub fn cmd() -> Command {
    Command::new("serve")
        .about("Serve the navigation shell")
        .display_order(30)
        .arg(
            Arg::new("address")
                .long("address")
                .short('a')
                .value_name("ADDR")
                .help("Address to listen on, overrides the config"),
        )
        .arg(
            Arg::new("base")
                .long("base")
                .short('b')
                .value_name("PATH")
                .help("Base path to serve under, overrides the config"),
        )
}

pub async fn run(matches: &ArgMatches, mut config: Config) -> Result<()> {
    if let Some(address) = matches.get_one::<String>("address") {
        config.address = address.parse()?;
    }
    if let Some(base) = matches.get_one::<String>("base") {
        config.base_url = base.to_string();
    }

    jornal::axum::start(config).await?;

    Ok(())
}

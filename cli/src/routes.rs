use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};

use jornal::navigation::Navigator;
use jornal::{Config, RouteTarget, ROUTES};

pub fn list_cmd() -> Command {
    Command::new("routes")
        .about("Print the route table")
        .display_order(10)
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print as json"),
        )
}

pub fn resolve_cmd() -> Command {
    Command::new("resolve")
        .about("Resolve a location against the route table")
        .long_about(
            "Resolve a location against the route table.\n\n\
            The location is expected to include the configured base path,\n\
            same as the browser would see it. Redirects are followed.",
        )
        .display_order(11)
        .arg(Arg::new("path").value_name("PATH").required(true))
}

pub fn list(matches: &ArgMatches, config: &Config) -> Result<()> {
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(ROUTES)?);
        return Ok(());
    }

    let history = config.history();
    for route in ROUTES {
        let target = match route.target {
            RouteTarget::Redirect(path) => format!("-> {}", history.href(path)),
            RouteTarget::Render(view) => format!("[{view}]"),
        };
        println!(
            "{:<24} {:<18} {}",
            history.href(route.path),
            route.name.unwrap_or("-"),
            target
        );
    }
    Ok(())
}

pub fn resolve(matches: &ArgMatches, config: &Config) -> Result<()> {
    let location = matches
        .get_one::<String>("path")
        .ok_or_else(|| anyhow::Error::msg("missing path"))?;
    let navigator = Navigator::new(config.history(), ROUTES)?;
    let resolution = navigator.resolve(location)?;

    for from in &resolution.redirected_from {
        println!("{} (redirect)", navigator.history().href(from));
    }
    println!(
        "{} [{}]",
        navigator.history().href(&resolution.path),
        resolution.view
    );
    Ok(())
}

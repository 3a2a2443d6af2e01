use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};

use jornal::{Role, ROLE_OPTIONS};

pub fn cmd() -> Command {
    Command::new("roles")
        .about("Print user roles and the options offered for selection")
        .display_order(20)
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print selectable options as json"),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&ROLE_OPTIONS)?);
        return Ok(());
    }

    for role in Role::all() {
        match role.option() {
            Some(option) => println!("{:<10} {}", role, option.label),
            None => println!("{:<10} (not selectable)", role),
        }
    }
    Ok(())
}

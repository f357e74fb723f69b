use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use contactbook_cli::{console, logging, AppConfig, Session};
use contactbook_core::ContactBook;
use std::path::PathBuf;

fn command() -> Command {
    Command::new("contactbook")
        .version(contactbook_cli::VERSION)
        .about("Personal contact book")
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Contact store file (default: contacts.json)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("init")
                .long("init")
                .action(ArgAction::SetTrue)
                .help("Create an empty store if none exists"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Write the store as a single line of JSON"),
        )
}

fn resolve_config(args: &ArgMatches) -> anyhow::Result<AppConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(path) = args.get_one::<PathBuf>("store") {
        config = config.with_store_path(path.clone());
    }
    if args.get_flag("init") {
        config = config.with_create_if_missing(true);
    }
    if args.get_flag("compact") {
        config = config.with_pretty(false);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = command().get_matches();
    let config = resolve_config(&args)?;
    logging::init(&config.log);

    let store = config.open_store().context("opening contact store")?;
    tracing::debug!(path = %store.path().display(), "contact store ready");

    let mut session = Session::new(ContactBook::new(store));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(&mut session, stdin.lock(), stdout.lock()).context("contact book session failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let args = command().get_matches_from(["contactbook", "--store", "x.json", "--init", "--compact"]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.store.path, PathBuf::from("x.json"));
        assert!(config.store.create_if_missing);
        assert!(!config.store.pretty);
    }

    #[test]
    fn no_flags_gives_defaults() {
        let args = command().get_matches_from(["contactbook"]);
        assert_eq!(resolve_config(&args).unwrap(), AppConfig::default());
    }
}

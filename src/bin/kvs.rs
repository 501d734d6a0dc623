use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use kvs::config::{ENGINE_SHARED, MAX_VERBOSITY};
use kvs::{Config, KvStore, KvsEngine, Request, Response, Result, Session, SharedStore};
use log::{debug, error};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;
use stderrlog::Timestamp;

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Raise log verbosity, may be repeated"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("JSON config file"),
        )
        .subcommand(
            Command::new("set")
                .about("Set the value of a key, both types are string")
                .arg(Arg::new("KEY").help("A key").required(true))
                .arg(Arg::new("VALUE").help("A value").required(true)),
        )
        .subcommand(
            Command::new("get")
                .about("Get the value of a specified key")
                .arg(Arg::new("KEY").help("A key").required(true)),
        )
        .subcommand(
            Command::new("rm")
                .about("Remove the key-value pair")
                .arg(
                    Arg::new("KEY")
                        .help("The key of the key-value pair to be removed")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("batch").about(
                "Read JSON requests from stdin, one per line, against a single store \
                 and write one JSON response per line",
            ),
        )
}

fn request(name: &str, matches: &ArgMatches) -> Option<Request> {
    let arg = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
    match name {
        "get" => Some(Request::Get { key: arg("KEY") }),
        "set" => Some(Request::Set {
            key: arg("KEY"),
            value: arg("VALUE"),
        }),
        "rm" => Some(Request::Rm { key: arg("KEY") }),
        _ => None,
    }
}

fn dispatch<E: KvsEngine>(engine: E, matches: &ArgMatches) -> Result<()> {
    let mut session = Session::new(engine);
    let stdout = io::stdout();

    let Some((name, sub_matches)) = matches.subcommand() else {
        unreachable!()
    };
    if name == "batch" {
        session.run(io::stdin().lock(), stdout.lock())?;
        return Ok(());
    }

    let Some(request) = request(name, sub_matches) else {
        unreachable!()
    };
    let mut out = stdout.lock();
    match session.execute(request)? {
        Response::Found { value } => writeln!(out, "{value}")?,
        Response::NotFound => writeln!(out, "Key not found")?,
        Response::Ok => writeln!(out, "OK")?,
        Response::Error { message } => writeln!(out, "ERROR: {message}")?,
    }
    Ok(())
}

fn run(config: Config, matches: &ArgMatches) -> Result<()> {
    debug!("{:?}", config);
    let store = KvStore::with_capacity(config.initial_capacity);
    if config.engine == ENGINE_SHARED {
        dispatch(SharedStore::new(store), matches)
    } else {
        dispatch(store, matches)
    }
}

fn main() {
    let matches = cli().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };
    let base = config.as_ref().map_or(Config::default().verbosity, |c| c.verbosity);
    let verbose = matches.get_count("verbose") as usize;
    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .timestamp(Timestamp::Second)
        .verbosity(base.saturating_add(verbose).min(MAX_VERBOSITY))
        .init()
    {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = config.and_then(|config| run(config, &matches)) {
        error!("{e}");
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn parses_set() {
        let matches = cli().get_matches_from(["kvs", "-v", "set", "key1", "value1"]);
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(
            request(name, sub),
            Some(Request::Set {
                key: "key1".to_owned(),
                value: "value1".to_owned()
            })
        );
        assert_eq!(matches.get_count("verbose"), 1);
    }
}

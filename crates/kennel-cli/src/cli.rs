//! Command line definition and argument parsing.

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// What the user asked the binary to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Walk through the Rex and Fido example
    Demo {
        /// Print a JSON snapshot instead of text
        json: bool,
    },
    /// Load a roster and report on every dog
    Run {
        /// Roster file
        config: PathBuf,
        /// Print a JSON snapshot instead of text
        json: bool,
    },
    /// Describe a single dog
    Info {
        /// Dog name
        name: String,
        /// Age at construction
        age: u32,
        /// Birthdays to celebrate before describing
        birthdays: u32,
    },
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tracing filter given with `--log`
    pub log: Option<String>,
    /// Selected subcommand
    pub invocation: Invocation,
}

/// Build the `kennel` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("kennel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dogs that bark, have birthdays and make buddies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log")
                .long("log")
                .global(true)
                .help("Tracing filter, overrides RUST_LOG and the roster"),
        )
        .subcommand(
            Command::new("demo")
                .about("Walk through Rex and Fido: bark, info, birthday, buddies")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("run")
                .about("Load a roster file and report on every dog")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to roster TOML"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("info")
                .about("Describe a single dog")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .required(true)
                        .help("Dog name"),
                )
                .arg(
                    Arg::new("age")
                        .long("age")
                        .required(true)
                        .value_parser(value_parser!(u32))
                        .help("Age in years"),
                )
                .arg(
                    Arg::new("birthdays")
                        .long("birthdays")
                        .default_value("0")
                        .value_parser(value_parser!(u32))
                        .help("Birthdays to celebrate first"),
                ),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn required<T: Clone + Send + Sync + 'static>(
    args: &ArgMatches,
    id: &str,
) -> Result<T, clap::Error> {
    args.get_one::<T>(id).cloned().ok_or_else(|| {
        clap::Error::raw(
            ErrorKind::MissingRequiredArgument,
            format!("missing --{id}\n"),
        )
    })
}

/// Parse arguments, first item being the program name
///
/// # Errors
/// Any clap error, including `--help` and `--version` requests.
pub fn parse_from<I, T>(args: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    let log = matches.get_one::<String>("log").cloned();

    let invocation = match matches.subcommand() {
        Some(("demo", args)) => Invocation::Demo {
            json: args.get_flag("json"),
        },
        Some(("run", args)) => Invocation::Run {
            config: required(args, "config")?,
            json: args.get_flag("json"),
        },
        Some(("info", args)) => Invocation::Info {
            name: required(args, "name")?,
            age: required(args, "age")?,
            birthdays: required(args, "birthdays")?,
        },
        _ => {
            return Err(clap::Error::raw(
                ErrorKind::MissingSubcommand,
                "a subcommand is required\n",
            ))
        }
    };

    Ok(Options { log, invocation })
}

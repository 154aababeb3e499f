use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error};
use name_splitter::{Assignment, Config};
use thiserror::Error;

const DEMO_NAMES: [&str; 17] = [
    "Von Fabella",
    "E. Pitney Bowes",
    "Dan Rather",
    "Dr. Jones",
    "Marcus Welby MD",
    "Ken Griffey Jr.",
    "Jack Jones M.D.",
    "E. Pluribus Unum",
    "Don R. Draper",
    "William S. Gates SR",
    "William S. Gates III",
    "Anthony de la Alpaca",
    "F. Murray Abraham",
    "Mr. Ted Knight Esquire",
    "Mrs. June Cleaver",
    "Mr. Robert Jones",
    "Ms. Cynthia Adams",
];

#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}

type Result<T> = std::result::Result<T, CliError>;

/// Split full names into honorific, given name, initials, surname and suffix.
#[derive(Parser, Debug)]
#[command(name = "name_splitter")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Keep only the last word found for each field, as older splitters do.
    #[arg(long, global = true)]
    overwrite: bool,

    /// Match particles such as "de la" one word at a time.
    #[arg(long, global = true)]
    single_word_particles: bool,

    /// JSON file with parser settings; flags override it.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each parsed name as JSON. With `-`, read newline-separated
    /// names from stdin.
    Parse {
        #[arg(required = true, value_name = "NAME")]
        name: Vec<String>,
    },
    /// Print each name in fixed-width columns.
    Demo {
        #[arg(value_name = "NAME")]
        names: Vec<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .format_target(false)
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Using {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Command::Parse { name } if name.len() == 1 && name[0] == "-" => {
            for line in io::stdin().lock().lines() {
                writeln!(out, "{}", config.parse(&line?).to_json())?;
            }
        }
        Command::Parse { name } => {
            writeln!(out, "{}", config.parse(&name.join(" ")).to_json())?;
        }
        Command::Demo { names } if names.is_empty() => {
            for name in DEMO_NAMES {
                writeln!(out, "{}", config.parse(name))?;
            }
        }
        Command::Demo { names } => {
            for name in names {
                writeln!(out, "{}", config.parse(name))?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            serde_json::from_str(&json).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => Config::default(),
    };

    if cli.overwrite {
        config.assignment = Assignment::Overwrite;
    }
    if cli.single_word_particles {
        config.multi_word_particles = false;
    }

    Ok(config)
}

mod config;
mod output;
mod pipe;

use config::Config;

use std::io::{self, IsTerminal};

use clap::{CommandFactory, Parser};
use colored::{control::set_override, Colorize};
use dateguess_core::{Guesser, Notation, ResolveConfig};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::output::OutputConfig;

const LONG_ABOUT: &str = r##"
dguess infers the format string that produced a date or time.

Give it a date as written and it prints the template that would render it.
When an input fits more than one template (01/02/2020), every candidate is
printed, one per line, in sorted order.

EXAMPLES:
  dguess 2020-01-01                   yyyy-MM-DD
  dguess -s 2020-01-01                %Y-%m-%d
  dguess 01/02/2020                   DD/MM/yyyy and MM/DD/yyyy
  dguess "13-Jan-20, 10:00 am IST"    DD-MMM-yy, hh:mm a z
  dguess 2013-W06-5                   yyyy-[W]WW-E
  dguess --json 2020-02-08T09:30Z     Machine-readable output

NOTATIONS:
  default     Moment-style tokens (yyyy, MM, DD, HH, mm, ss, SSS, Z)
  strftime    C strftime directives (%Y, %m, %d, %H, %M, %S, %L, %:z)

  Some fields have no strftime directive (unpadded months and days,
  ordinal days). Guessing such an input with -s fails.

PIPED INPUT:
  Each line of stdin is guessed on its own:
    cat dates.txt | dguess             Annotate every line
    cat dates.txt | dguess --json      One JSON record per line

CONFIGURATION:
  Settings can be configured via CLI flags, environment variables, or config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting      | CLI flag           | Env var              | Default
  -------------|--------------------|----------------------|---------
  notation     | -n, --notation     | DGUESS_NOTATION      | default
  lenient_days | -L, --lenient-days | DGUESS_LENIENT_DAYS  | false
  no_color     | -C, --no-color     | DGUESS_NO_COLOR      | false

  Config file location: dguess --config-path
  Generate default config: dguess --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "dguess")]
#[command(version)]
#[command(about = "Infer the format string of a date or time")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// The date or time to inspect
    ///
    /// Reads lines from stdin when omitted and stdin is not a terminal.
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Print strftime directives (shorthand for --notation strftime)
    #[arg(long, short = 's', conflicts_with = "notation")]
    strftime: bool,

    /// Notation for the printed formats: default or strftime
    #[arg(long, short = 'n', value_name = "NOTATION")]
    notation: Option<Notation>,

    /// Output results as JSON (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Accept any day from 1 to 31 regardless of month
    #[arg(long, short = 'L')]
    lenient_days: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show config file path
    #[arg(long)]
    config_path: bool,

    /// Generate default config file (see --config-path for location)
    #[arg(long)]
    config_init: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!(
                    "{}: Cannot determine config directory",
                    "error".red().bold()
                );
                std::process::exit(1);
            }
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load config file and merge with CLI args
    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();

    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    let notation = if cli.strftime {
        tracing::debug!("notation = strftime (from CLI)");
        Notation::Strftime
    } else if let Some(n) = cli.notation {
        tracing::debug!("notation = {} (from CLI)", n);
        n
    } else {
        let n = file_config.notation();
        let source = if std::env::var("DGUESS_NOTATION").is_ok() {
            "env DGUESS_NOTATION"
        } else if file_config.notation.is_some() {
            "config file"
        } else {
            "default"
        };
        tracing::debug!("notation = {} (from {})", n, source);
        n
    };

    let lenient_days = if cli.lenient_days {
        tracing::debug!("lenient_days = true (from CLI)");
        true
    } else {
        let l = file_config.lenient_days();
        let source = if std::env::var("DGUESS_LENIENT_DAYS").is_ok() {
            "env DGUESS_LENIENT_DAYS"
        } else if file_config.lenient_days.is_some() {
            "config file"
        } else {
            "default"
        };
        tracing::debug!("lenient_days = {} (from {})", l, source);
        l
    };

    let no_color = if cli.no_color {
        tracing::debug!("no_color = true (from CLI)");
        true
    } else {
        let nc = file_config.no_color();
        if nc {
            let source = if std::env::var("NO_COLOR").is_ok() {
                "env NO_COLOR"
            } else if std::env::var("DGUESS_NO_COLOR").is_ok() {
                "env DGUESS_NO_COLOR"
            } else {
                "config file"
            };
            tracing::debug!("no_color = true (from {})", source);
        }
        nc
    };

    if no_color {
        set_override(false);
    }

    let resolve_config = if lenient_days {
        ResolveConfig::lenient()
    } else {
        ResolveConfig::default()
    };
    let guesser = Guesser::with_config(resolve_config);
    let output_config = OutputConfig {
        notation,
        json: cli.json,
    };

    let ok = match cli.input {
        Some(input) => {
            let result = guesser.guess(&input, notation);
            let ok = result.is_ok();
            let stdout = io::stdout();
            let stderr = io::stderr();
            if let Err(e) = output::print_result(
                &mut stdout.lock(),
                &mut stderr.lock(),
                &input,
                &result,
                &output_config,
            ) {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
            ok
        }
        None if !io::stdin().is_terminal() => {
            match pipe::run_pipe_mode(&guesser, &output_config) {
                Ok(ok) => ok,
                Err(e) => {
                    eprintln!("{}: Failed to read stdin: {}", "error".red().bold(), e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            // Print help; exit code signals the missing input
            let _ = Cli::command().print_help();
            println!();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

mod commands;
mod config;
mod generator;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use kata_common::{ProcessEntry, SuiteKind};
use std::path::PathBuf;

use config::SuiteConfig;

#[derive(Parser)]
#[command(name = "kata-cli")]
#[command(about = "Kata CLI - Run kata test suites and scaffold new katas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SuiteSelection {
    Public,
    Hidden,
    All,
}

impl SuiteSelection {
    fn kinds(self) -> &'static [SuiteKind] {
        match self {
            SuiteSelection::Public => &[SuiteKind::Public],
            SuiteSelection::Hidden => &[SuiteKind::Hidden],
            SuiteSelection::All => &SuiteKind::ALL,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run test suites against an entry program
    Run {
        /// Program implementing the entry function (reads input on stdin, prints output)
        #[arg(short, long, env = "KATA_ENTRY")]
        entry: String,

        /// Argument passed to the entry program (repeatable)
        #[arg(short = 'a', long = "arg", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Suite to run
        #[arg(short, long, value_enum, default_value_t = SuiteSelection::All)]
        suite: SuiteSelection,

        /// JSON case file (defaults to the built-in placeholder cases)
        #[arg(short, long, env = "KATA_CASES")]
        cases: Option<PathBuf>,
    },

    /// List configured test cases
    List {
        /// Suite to list
        #[arg(short, long, value_enum, default_value_t = SuiteSelection::All)]
        suite: SuiteSelection,

        /// JSON case file (defaults to the built-in placeholder cases)
        #[arg(short, long, env = "KATA_CASES")]
        cases: Option<PathBuf>,
    },

    /// Generate a new kata crate with public and hidden test files
    Init {
        /// Kata directory
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Kata (crate) name, defaults to the directory name
        #[arg(short, long)]
        name: Option<String>,

        /// JSON case file (defaults to the built-in placeholder cases)
        #[arg(short, long, env = "KATA_CASES")]
        cases: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            entry,
            args,
            suite,
            cases,
        } => {
            let config = SuiteConfig::resolve(cases.as_deref())?;
            let mut entry = ProcessEntry::new(entry).with_args(args);
            commands::run_suites(&mut entry, &config, suite.kinds())?;
        }
        Commands::List { suite, cases } => {
            let config = SuiteConfig::resolve(cases.as_deref())?;
            commands::list_cases(&config, suite.kinds());
        }
        Commands::Init { path, name, cases } => {
            let config = SuiteConfig::resolve(cases.as_deref())?;
            commands::init_kata(&path, name.as_deref(), &config)?;
        }
    }

    Ok(())
}

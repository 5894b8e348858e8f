//! CLI for skidmarks: look for skid marks in a binary sequence.

mod commands;

use clap::{Parser, Subcommand};

use commands::TestKind;

#[derive(Parser)]
#[command(name = "skidmarks")]
#[command(about = "skidmarks: check a two-valued sequence for runs, drift and periodicity")]
#[command(version = skidmarks_core::VERSION)]
struct Cli {
    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Significance level used for the random / non-random verdict
    #[arg(long, global = true, default_value = "0.05")]
    alpha: f64,

    /// Log intermediate quantities (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wald-Wolfowitz runs test
    Runs {
        /// Sequence such as 1001101 (read from stdin when omitted)
        sequence: Option<String>,
    },

    /// Lag-1 autocorrelation (symbols must be 0 or 1)
    Autocorr {
        /// Sequence such as 1001101 (read from stdin when omitted)
        sequence: Option<String>,
    },

    /// Serial test on adjacent symbol pairs
    Serial {
        /// Sequence such as 1001101 (read from stdin when omitted)
        sequence: Option<String>,
    },

    /// Gap test between occurrences of one symbol
    Gap {
        /// Sequence such as 1001101 (read from stdin when omitted)
        sequence: Option<String>,

        /// Symbol whose gaps are measured (default: first symbol)
        #[arg(long)]
        item: Option<char>,
    },

    /// Run all four tests; a failing test does not stop the others
    All {
        /// Sequence such as 1001101 (read from stdin when omitted)
        sequence: Option<String>,

        /// Symbol used by the gap test (default: first symbol)
        #[arg(long)]
        item: Option<char>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if !(cli.alpha > 0.0 && cli.alpha < 1.0) {
        eprintln!("--alpha must be in (0, 1), got {}", cli.alpha);
        std::process::exit(2);
    }

    let (kinds, sequence, item) = match cli.command {
        Commands::Runs { sequence } => (vec![TestKind::Runs], sequence, None),
        Commands::Autocorr { sequence } => (vec![TestKind::Autocorr], sequence, None),
        Commands::Serial { sequence } => (vec![TestKind::Serial], sequence, None),
        Commands::Gap { sequence, item } => (vec![TestKind::Gap], sequence, item),
        Commands::All { sequence, item } => (TestKind::ALL.to_vec(), sequence, item),
    };

    let ok = commands::run::run(commands::run::RunCommandConfig {
        kinds: &kinds,
        sequence: sequence.as_deref(),
        item,
        json: cli.json,
        alpha: cli.alpha,
    });
    if !ok {
        std::process::exit(1);
    }
}

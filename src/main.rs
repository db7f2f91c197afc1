use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lexichain::config::Calibration;
use lexichain::BenchmarkCalculator;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Calibration JSON. Flags given on the command line override its values.
    #[arg(global = true, long = "calibration")]
    calibration_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Benchmarks for a single board
    Compute(cmd::compute::ComputeArgs),
    /// Benchmarks for every board in a CSV file
    Batch(cmd::batch::BatchArgs),
    /// Basic-path curve across a range of word counts
    Sweep(cmd::sweep::SweepArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_tuning, sub_name) = match &cli.command {
        Commands::Compute(args) => (&args.tuning, "compute"),
        Commands::Batch(args) => (&args.tuning, "batch"),
        Commands::Sweep(args) => (&args.tuning, "sweep"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        error!("❌ Missing matches for subcommand '{}'", sub_name);
        process::exit(1);
    };

    let calibration = match &cli.calibration_file {
        Some(path) => {
            info!("⚖️  Loading Calibration from: {}", path);
            let mut file_calibration = Calibration::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            file_calibration.merge_from_cli(cli_tuning, sub_matches);
            file_calibration
        }
        None => cli_tuning.clone(),
    };

    if let Err(e) = calibration.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let calculator = BenchmarkCalculator::new(calibration);

    let result = match cli.command {
        Commands::Compute(args) => cmd::compute::run(args, &calculator),
        Commands::Batch(args) => cmd::batch::run(args, &calculator),
        Commands::Sweep(args) => cmd::sweep::run(args, &calculator),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

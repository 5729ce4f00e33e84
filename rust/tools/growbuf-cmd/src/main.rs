use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "growbuf-cmd")]
#[command(about = "Runs the string concatenation and slice append workloads")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare string concatenation and periodic-reset strategies
    Strings {
        /// Iterations per strategy
        #[arg(short, long, default_value_t = 100_000)]
        iterations: usize,

        /// Seed for the random segments
        #[arg(long, default_value_t = 0x5eed)]
        seed: u64,

        /// Number of segments (runs the default case matrix if omitted)
        #[arg(long, requires = "segment_length")]
        segments: Option<usize>,

        /// Length of every segment
        #[arg(long, requires = "segments")]
        segment_length: Option<usize>,

        /// Clear the reset buffers after the first segment and then every N segments
        #[arg(long, default_value_t = 2)]
        clear_frequency: usize,
    },

    /// Compare the built-in append with capacity-aware append policies
    Append {
        /// Iterations per strategy
        #[arg(short, long, default_value_t = 100_000)]
        iterations: usize,

        /// Seed for the random elements
        #[arg(long, default_value_t = 0xa99e)]
        seed: u64,

        /// Base length (runs the default case matrix if omitted)
        #[arg(long, requires = "tail_len")]
        base_len: Option<usize>,

        /// Tail length appended every round
        #[arg(long, requires = "base_len")]
        tail_len: Option<usize>,

        /// Capacity of the base storage (at least the base length)
        #[arg(long, default_value_t = 0)]
        base_capacity: usize,

        /// Number of times the tail is appended
        #[arg(long, default_value_t = 1)]
        rounds: usize,
    },

    /// Measure the overhead of pausing the timer inside the loop
    Timer {
        /// Loop iterations per workload
        #[arg(short, long, default_value_t = 1_000_000)]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let report = match cli.command {
        Commands::Strings {
            iterations,
            seed,
            segments,
            segment_length,
            clear_frequency,
        } => commands::strings::run(
            iterations,
            seed,
            segments.zip(segment_length),
            clear_frequency,
        )?,
        Commands::Append {
            iterations,
            seed,
            base_len,
            tail_len,
            base_capacity,
            rounds,
        } => commands::append::run(
            iterations,
            seed,
            base_len.zip(tail_len),
            base_capacity,
            rounds,
        )?,
        Commands::Timer { iterations } => commands::timer::run(iterations)?,
    };

    utils::print_report(&report, cli.json)
}

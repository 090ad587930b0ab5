use std::path::PathBuf;

use clap::{Parser, Subcommand};
use distrib_core::config::OutputFormat;

mod commands;

#[derive(Parser)]
#[command(
    name = "distrib",
    about = "distrib — spread files across capacity-limited nodes",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place files onto nodes and print where each file went.
    ///
    /// Files are placed largest first, each on the least-used node that can
    /// still hold it. Files that fit nowhere are listed with node NULL.
    /// Paths and output options may also come from distrib.toml.
    Distribute {
        /// Node list: one `NAME CAPACITY` per line
        #[arg(short, long)]
        nodes: Option<PathBuf>,
        /// File list: one `NAME SIZE` per line
        #[arg(short, long)]
        files: Option<PathBuf>,
        /// Write the summary here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the stacked-bar chart series as JSON
        #[arg(long)]
        chart: Option<PathBuf>,
        /// Summary format: text or json
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Print the capacity report to stderr
        #[arg(short, long)]
        report: bool,
        /// Abort the allocation after this many seconds
        #[arg(long)]
        time_limit: Option<u64>,
        /// Config file (default: ./distrib.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a synthetic node or file list for testing
    Generate {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
        /// Number of correctly formatted entries
        #[arg(short, long, default_value_t = 10)]
        num_entries: usize,
        /// Number of comment lines
        #[arg(short = 'i', long, default_value_t = 0)]
        comments: usize,
        /// Number of malformed lines
        #[arg(short, long, default_value_t = 0)]
        errors: usize,
        /// Lower bound of values
        #[arg(short, long, default_value_t = 10)]
        lower: u64,
        /// Upper bound of values
        #[arg(short, long, default_value_t = 10_000)]
        upper: u64,
        /// Name prefix
        #[arg(short, long, default_value = "node")]
        prefix: String,
        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("distrib=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Distribute {
            nodes,
            files,
            output,
            chart,
            format,
            report,
            time_limit,
            config,
        } => commands::distribute::distribute(&commands::distribute::DistributeArgs {
            nodes,
            files,
            output,
            chart,
            format,
            report,
            time_limit,
            config,
        }),
        Commands::Generate {
            output,
            num_entries,
            comments,
            errors,
            lower,
            upper,
            prefix,
            seed,
        } => commands::generate::generate(
            &output,
            distrib_core::GeneratorOptions {
                prefix,
                num_entries,
                comments,
                errors,
                lower,
                upper,
                seed,
            },
        ),
    }
}

//! `distrib distribute` — parse node and file lists, allocate, report.
//!
//! Flags take precedence over `distrib.toml`. Relative paths resolve
//! against the working directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use distrib_core::config::OutputFormat;
use distrib_core::{DistribConfig, Node, parse_records};
use distrib_placement::{
    Allocation, Deadline, Interrupt, Never, allocate_with, records_to_items, records_to_nodes,
};
use distrib_report::{ChartSeries, Summary, format_report};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct DistributeArgs {
    pub nodes: Option<PathBuf>,
    pub files: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub chart: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub report: bool,
    pub time_limit: Option<u64>,
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    nodes: PathBuf,
    files: PathBuf,
    output: Option<PathBuf>,
    chart: Option<PathBuf>,
    format: OutputFormat,
    time_limit: Option<Duration>,
}

impl Settings {
    fn resolve(args: &DistributeArgs, config: DistribConfig, dir: &Path) -> Result<Self> {
        let config_limit = config.time_limit();
        let nodes = args.nodes.clone().or(config.input.nodes);
        let files = args.files.clone().or(config.input.files);
        let (Some(nodes), Some(files)) = (nodes, files) else {
            bail!("both a node list and a file list are required (use --nodes/--files or [input] in distrib.toml)");
        };

        let time_limit = match args.time_limit {
            Some(0) => bail!("--time-limit must be greater than zero"),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => config_limit,
        };

        Ok(Self {
            nodes: dir.join(nodes),
            files: dir.join(files),
            output: args.output.clone().or(config.output.summary).map(|p| dir.join(p)),
            chart: args.chart.clone().or(config.output.chart).map(|p| dir.join(p)),
            format: args.format.or(config.output.format).unwrap_or_default(),
            time_limit,
        })
    }
}

/// Everything one run produces, before it is written anywhere.
#[derive(Debug)]
pub struct Outcome {
    pub nodes: Vec<Node>,
    pub allocation: Allocation,
    pub summary: Summary,
    pub chart: ChartSeries,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: &'a Summary,
    allocation: &'a Allocation,
}

/// Run the `distrib distribute` command from the current directory.
pub fn distribute(args: &DistributeArgs) -> Result<()> {
    let dir = std::env::current_dir().context("failed to resolve working directory")?;
    distribute_in(args, &dir)
}

pub fn distribute_in(args: &DistributeArgs, dir: &Path) -> Result<()> {
    let config = DistribConfig::discover(args.config.as_deref(), dir)?;
    let settings = Settings::resolve(args, config, dir)?;

    let nodes_text = read_input(&settings.nodes)?;
    let files_text = read_input(&settings.files)?;

    let outcome = run(&nodes_text, &files_text, settings.time_limit).with_context(|| {
        format!(
            "distributing {} onto {}",
            settings.files.display(),
            settings.nodes.display()
        )
    })?;

    let rendered = match settings.format {
        OutputFormat::Text => outcome.summary.render(),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonOutput {
            summary: &outcome.summary,
            allocation: &outcome.allocation,
        })?,
    };
    match &settings.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote placement summary");
        }
        None => println!("{rendered}"),
    }

    if let Some(path) = &settings.chart {
        std::fs::write(path, outcome.chart.to_json()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote chart series");
    }

    if args.report {
        eprint!("{}", format_report(&outcome.nodes, &outcome.allocation)?);
    }

    info!(
        placed = outcome.allocation.placed_count(),
        unplaced = outcome.allocation.unplaced_count(),
        "Distribution complete"
    );
    Ok(())
}

/// Parse both lists, allocate, and build the reports.
pub fn run(nodes_text: &str, files_text: &str, time_limit: Option<Duration>) -> Result<Outcome> {
    let nodes = records_to_nodes(&parse_records(nodes_text).context("invalid node list")?)?;
    let items = records_to_items(&parse_records(files_text).context("invalid file list")?)?;

    let interrupt: Box<dyn Interrupt> = match time_limit {
        Some(limit) => Box::new(Deadline::after(limit)),
        None => Box::new(Never),
    };
    let allocation = allocate_with(&nodes, &items, interrupt.as_ref())?;

    let summary = Summary::build(&nodes, &allocation)?;
    let chart = ChartSeries::build(&nodes, &allocation)?;

    Ok(Outcome {
        nodes,
        allocation,
        summary,
        chart,
    })
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

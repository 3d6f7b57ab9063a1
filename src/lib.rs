// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod duration;
pub mod errors;
pub mod logging;
pub mod parse;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::resolve;
use crate::config::model::ConfigFile;
use crate::dag::{sequence, simulate, DepGraph};
use crate::duration::StepDurations;
use crate::parse::parse_instructions;

/// Effective simulation options after merging config file and CLI overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimOptions {
    pub workers: usize,
    pub base_duration: u64,
}

/// CLI flags win over the config file, which wins over built-in defaults.
pub fn effective_options(cfg: &ConfigFile, args: &CliArgs) -> SimOptions {
    SimOptions {
        workers: args.workers.unwrap_or(cfg.simulation.workers),
        base_duration: args.base_duration.unwrap_or(cfg.simulation.base_duration),
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (file + CLI overrides)
/// - instruction parsing and graph construction
/// - the order report and (unless `--order-only`) the timing report
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve(args.config.as_deref().map(Path::new))?;
    let options = effective_options(&cfg, &args);

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read instruction file '{}'", args.input))?;
    let edges = parse_instructions(&input)?;
    let graph = DepGraph::from_edges(edges);

    info!(
        tasks = graph.task_count(),
        workers = options.workers,
        base_duration = options.base_duration,
        "graph built"
    );

    if args.dry_run {
        print_dry_run(&graph, options);
        return Ok(());
    }

    let order = sequence(&graph)?;
    println!("order: {}", order.concat());

    if args.order_only {
        debug!("skipping simulation (--order-only)");
        return Ok(());
    }

    let durations = StepDurations::new(options.base_duration);
    let ticks = simulate(&graph, options.workers, |task| durations.of(task))?;
    println!("ticks: {ticks}");

    Ok(())
}

/// Simple dry-run output: print tasks, indegrees, dependents and the
/// effective options, then stop.
fn print_dry_run(graph: &DepGraph, options: SimOptions) {
    println!("plandag dry-run");
    println!("  simulation.workers = {}", options.workers);
    println!("  simulation.base_duration = {}", options.base_duration);
    println!();

    println!("tasks ({}):", graph.task_count());
    for task in graph.tasks() {
        println!("  - {task}");
        if let Some(deg) = graph.indegree_of(task) {
            println!("      indegree: {deg}");
        }
        let dependents = graph.dependents_of(task);
        if !dependents.is_empty() {
            println!("      dependents: {dependents:?}");
        }
    }

    debug!("dry-run complete (nothing computed)");
}

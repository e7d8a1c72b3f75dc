use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use average::{Estimate, Mean};
use clap::Parser;
use cpu_sched_model::{
    DEFAULT_QUANTUM, Palette, Policy, Process, ProcessSet, SimulationResult, Ticks,
    sim::{WorkloadParams, random_processes},
};
use rand::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Simulate classical CPU scheduling policies over a fixed process set.
///
/// Without --policy every policy is run and compared. Logging goes to stderr
/// and is controlled with RUST_LOG.
#[derive(Debug, Parser)]
#[clap(version)]
struct Opts {
    /// Policy to run: fcfs, sjf, srtf, rr, priority-np or priority-p.
    /// May be repeated.
    #[clap(short = 'p', long = "policy")]
    policies: Vec<Policy>,

    /// Round Robin time quantum in ticks.
    #[clap(short = 'q', long, default_value_t = DEFAULT_QUANTUM, env = "SCHED_QUANTUM")]
    quantum: Ticks,

    /// JSON file holding an array of processes
    /// ({id, name, arrivalTime, burstTime, priority, color?}).
    #[clap(short = 'i', long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate this many random processes instead of reading input.
    #[clap(short = 'r', long)]
    random: Option<usize>,

    /// Seed for --random and --trials.
    #[clap(short = 's', long, default_value_t = 0, env = "SCHED_SEED")]
    seed: u64,

    /// Run this many seeded random workloads and report mean averages per policy.
    #[clap(short = 't', long, conflicts_with = "input")]
    trials: Option<usize>,

    /// Print a snapshot for every tick.
    #[clap(long)]
    steps: bool,

    /// Print the scheduling event log.
    #[clap(long)]
    events: bool,

    /// Print results as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let policies = if opts.policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        opts.policies.clone()
    };

    if let Some(trials) = opts.trials {
        return run_trials(&opts, &policies, trials);
    }

    let set = load_process_set(&opts)?;
    info!(processes = set.len(), "loaded process set");

    let results = policies
        .iter()
        .map(|policy| policy.run(&set, Some(opts.quantum)))
        .collect::<Result<Vec<_>, _>>()?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        print_result(result, &opts);
    }
    if results.len() > 1 {
        print_comparison(&results);
    }

    Ok(())
}

fn load_process_set(opts: &Opts) -> Result<ProcessSet> {
    let palette = Palette::default();

    if let Some(path) = &opts.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let set: ProcessSet = serde_json::from_str(&text)
            .with_context(|| format!("Invalid process set in {}", path.display()))?;
        return Ok(set.paint(&palette));
    }

    if let Some(count) = opts.random {
        let mut rng = StdRng::seed_from_u64(opts.seed);
        return Ok(random_processes(&mut rng, count, WorkloadParams::default(), &palette)?);
    }

    Ok(reference_set()?.paint(&palette))
}

fn reference_set() -> Result<ProcessSet> {
    Ok(ProcessSet::new(vec![
        Process::new("P1", 0, 5, 2),
        Process::new("P2", 1, 3, 1),
        Process::new("P3", 2, 8, 4),
        Process::new("P4", 3, 2, 3),
    ])?)
}

fn print_result(result: &SimulationResult, opts: &Opts) {
    let info = result.policy.info();
    match result.quantum {
        Some(q) => println!("== {} (quantum {q})", info.name),
        None => println!("== {}", info.name),
    }

    let chart: Vec<String> = result
        .timeline
        .iter()
        .map(|b| format!("[{}:{}-{}]", b.name, b.start_time, b.end_time))
        .collect();
    println!("{}", chart.join(""));

    println!(
        "{:<8} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7} {:>8}",
        "process", "arrival", "burst", "priority", "completion", "turnaround", "waiting", "response"
    );
    for m in &result.metrics {
        println!(
            "{:<8} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7} {:>8}",
            m.process.name,
            m.process.arrival_time,
            m.process.burst_time,
            m.process.priority,
            m.completion_time,
            m.turnaround_time,
            m.waiting_time,
            m.response_time
        );
    }
    println!("Average waiting time: {:.2} ticks", result.avg_waiting_time);
    println!("Average turnaround time: {:.2} ticks", result.avg_turnaround_time);
    println!("Average response time: {:.2} ticks", result.avg_response_time);

    if opts.events {
        for event in &result.events {
            println!("t={} {:?}", event.at(), event);
        }
    }

    if opts.steps {
        for step in result.steps() {
            println!(
                "t={:<3} running={:<6} ready=[{}]",
                step.current_time,
                step.running.as_deref().unwrap_or("-"),
                step.ready_queue.join(", ")
            );
        }
    }
    println!();
}

fn print_comparison(results: &[SimulationResult]) {
    println!("{:<24} {:>8} {:>8} {:>10}", "policy", "avg WT", "avg TAT", "dispatches");
    for result in results {
        println!(
            "{:<24} {:>8.2} {:>8.2} {:>10}",
            result.policy.short_name(),
            result.avg_waiting_time,
            result.avg_turnaround_time,
            result.dispatches()
        );
    }
}

fn run_trials(opts: &Opts, policies: &[Policy], trials: usize) -> Result<()> {
    let palette = Palette::default();
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut waiting = vec![Mean::new(); policies.len()];
    let mut turnaround = vec![Mean::new(); policies.len()];

    for _ in 0..trials {
        let count = opts.random.unwrap_or_else(|| rng.random_range(3..=6));
        let set = random_processes(&mut rng, count, WorkloadParams::default(), &palette)?;
        for (i, policy) in policies.iter().enumerate() {
            let result = policy.run(&set, Some(opts.quantum))?;
            waiting[i].add(result.avg_waiting_time);
            turnaround[i].add(result.avg_turnaround_time);
        }
    }

    println!("{trials} random workloads, seed {}", opts.seed);
    println!("{:<24} {:>12} {:>12}", "policy", "mean avg WT", "mean avg TAT");
    for (i, policy) in policies.iter().enumerate() {
        println!(
            "{:<24} {:>12.2} {:>12.2}",
            policy.short_name(),
            waiting[i].estimate(),
            turnaround[i].estimate()
        );
    }

    Ok(())
}

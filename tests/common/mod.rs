#![allow(dead_code)]

use std::collections::HashMap;

use cpu_sched_model::{Policy, Process, ProcessSet, SimulationResult, Ticks};

/// Initialize tracing from `RUST_LOG`.
///
/// `try_init()` is idempotent: the first call in the process wins and later
/// calls are ignored.
pub fn setup_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// P1(0,5,2) P2(1,3,1) P3(2,8,4) P4(3,2,3) as (arrival, burst, priority).
pub fn reference_set() -> ProcessSet {
    ProcessSet::new(vec![
        Process::new("P1", 0, 5, 2),
        Process::new("P2", 1, 3, 1),
        Process::new("P3", 2, 8, 4),
        Process::new("P4", 3, 2, 3),
    ])
    .unwrap()
}

/// Timeline rendered as `(name, start, end)` triples.
pub fn blocks(result: &SimulationResult) -> Vec<(String, Ticks, Ticks)> {
    result
        .timeline
        .iter()
        .map(|b| (b.name.clone(), b.start_time, b.end_time))
        .collect()
}

pub fn block(name: &str, start: Ticks, end: Ticks) -> (String, Ticks, Ticks) {
    (name.to_owned(), start, end)
}

/// Names of the non-idle blocks, in timeline order.
pub fn dispatch_order(result: &SimulationResult) -> Vec<String> {
    result
        .timeline
        .iter()
        .filter(|b| !b.is_idle())
        .map(|b| b.name.clone())
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Check every property a finished run must satisfy regardless of policy.
pub fn check_invariants(set: &ProcessSet, result: &SimulationResult) {
    let policy = result.policy;
    let blocks = result.timeline.blocks();

    // Contiguous from 0, ordered, non-empty blocks, idle coalesced
    let mut clock = 0;
    for (i, b) in blocks.iter().enumerate() {
        assert_eq!(b.start_time, clock, "{policy}: gap or overlap at block {i}");
        assert!(b.start_time < b.end_time, "{policy}: empty block {i}");
        if i > 0 {
            assert!(
                !(b.is_idle() && blocks[i - 1].is_idle()),
                "{policy}: adjacent idle blocks at {}",
                b.start_time
            );
        }
        clock = b.end_time;
    }

    // CPU time per process equals its burst
    let mut busy: HashMap<&str, Ticks> = HashMap::new();
    for b in blocks.iter().filter(|b| !b.is_idle()) {
        let id = b.process_id.as_deref().unwrap();
        let process = set.by_id(id).unwrap();
        assert!(
            b.start_time >= process.arrival_time,
            "{policy}: {id} ran before it arrived"
        );
        *busy.entry(id).or_default() += b.duration();
    }

    assert_eq!(result.metrics.len(), set.len());
    for (m, p) in result.metrics.iter().zip(set.iter()) {
        assert_eq!(&m.process, p, "{policy}: metrics out of set order");
        assert_eq!(busy.get(p.id.as_str()).copied(), Some(p.burst_time), "{policy}: {}", p.id);
        assert_eq!(m.remaining_time, 0);
        assert_eq!(m.turnaround_time, m.completion_time - p.arrival_time);
        assert_eq!(m.waiting_time, m.turnaround_time - p.burst_time);
        assert!(m.turnaround_time >= p.burst_time);
        assert!(m.completion_time <= result.end_time());

        // Completion is the end of the process's last block
        let last = blocks.iter().rev().find(|b| b.is_process(&p.id)).unwrap();
        assert_eq!(last.end_time, m.completion_time, "{policy}: {}", p.id);
    }

    if !set.is_empty() {
        let waiting: Ticks = result.metrics.iter().map(|m| m.waiting_time).sum();
        let turnaround: Ticks = result.metrics.iter().map(|m| m.turnaround_time).sum();
        assert_close(result.avg_waiting_time, waiting as f64 / set.len() as f64);
        assert_close(result.avg_turnaround_time, turnaround as f64 / set.len() as f64);
    }

    match policy {
        Policy::Fcfs | Policy::Sjf | Policy::PriorityNonPreemptive => {
            for b in blocks.iter().filter(|b| !b.is_idle()) {
                let process = set.by_id(b.process_id.as_deref().unwrap()).unwrap();
                assert_eq!(
                    b.duration(),
                    process.burst_time,
                    "{policy}: {} was preempted",
                    process.id
                );
            }
        }
        Policy::RoundRobin => {
            let quantum = result.quantum.unwrap();
            for b in blocks.iter().filter(|b| !b.is_idle()) {
                let m = result.metrics_for(b.process_id.as_deref().unwrap()).unwrap();
                assert!(b.duration() <= quantum, "rr: block longer than the quantum");
                if b.duration() < quantum {
                    assert_eq!(
                        b.end_time, m.completion_time,
                        "rr: short slice before the final burst"
                    );
                }
            }
        }
        Policy::Srtf | Policy::PriorityPreemptive => {}
    }
}

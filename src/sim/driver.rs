use serde::Serialize;
use tracing::{debug, info};

use super::{
    process::ProcessSet,
    steps::{SimulationStep, Steps},
};
use crate::{
    core::{ProcessMetrics, RunCtx, SchedEvent, Ticks, Timeline},
    error::SimError,
    scheduler::{Policy, Scheduler},
};

pub struct Sim<'a, S: Scheduler> {
    pub set: &'a ProcessSet,
    pub scheduler: S,
}

impl<'a, S: Scheduler> Sim<'a, S> {
    pub fn new(set: &'a ProcessSet, scheduler: S) -> Self {
        Self { set, scheduler }
    }

    pub fn run(&mut self) -> Result<SimulationResult, SimError> {
        debug!(policy = %S::POLICY, processes = self.set.len(), "run start");

        let mut ctx = RunCtx::new(self.set);
        self.scheduler.schedule(&mut ctx)?;
        let (timeline, metrics, events) = ctx.finish();

        let result = SimulationResult::new(
            S::POLICY,
            self.scheduler.quantum(),
            timeline,
            metrics,
            events,
        );
        info!(
            policy = %S::POLICY,
            end = result.end_time(),
            avg_waiting = result.avg_waiting_time,
            avg_turnaround = result.avg_turnaround_time,
            "run complete"
        );
        Ok(result)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub policy: Policy,
    // Only set for Round Robin
    pub quantum: Option<Ticks>,
    pub timeline: Timeline,
    // In process set order
    pub metrics: Vec<ProcessMetrics>,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    pub events: Vec<SchedEvent>,
}

impl SimulationResult {
    fn new(
        policy: Policy,
        quantum: Option<Ticks>,
        timeline: Timeline,
        metrics: Vec<ProcessMetrics>,
        events: Vec<SchedEvent>,
    ) -> Self {
        Self {
            avg_waiting_time: mean(metrics.iter().map(|m| m.waiting_time)),
            avg_turnaround_time: mean(metrics.iter().map(|m| m.turnaround_time)),
            avg_response_time: mean(metrics.iter().map(|m| m.response_time)),
            policy,
            quantum,
            timeline,
            metrics,
            events,
        }
    }

    pub fn end_time(&self) -> Ticks {
        self.timeline.end_time()
    }

    pub fn metrics_for(&self, id: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.id() == id)
    }

    pub fn total_waiting_time(&self) -> Ticks {
        self.metrics.iter().map(|m| m.waiting_time).sum()
    }

    pub fn dispatches(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SchedEvent::Dispatch { .. }))
            .count()
    }

    // Ticks 0..=end_time()
    pub fn steps(&self) -> Steps<'_> {
        Steps::new(self)
    }
}

// Integer sum over count, 0 when empty
fn mean(values: impl ExactSizeIterator<Item = Ticks>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<Ticks>() as f64 / count as f64
}

pub fn run(
    set: &ProcessSet,
    policy: Policy,
    quantum: Option<Ticks>,
) -> Result<SimulationResult, SimError> {
    policy.run(set, quantum)
}

pub fn project_steps(
    set: &ProcessSet,
    policy: Policy,
    quantum: Option<Ticks>,
) -> Result<Vec<SimulationStep>, SimError> {
    let result = policy.run(set, quantum)?;
    Ok(result.steps().collect())
}

pub fn compare(
    set: &ProcessSet,
    quantum: Option<Ticks>,
) -> Result<Vec<SimulationResult>, SimError> {
    Policy::ALL
        .into_iter()
        .map(|policy| policy.run(set, quantum))
        .collect()
}

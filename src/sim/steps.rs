use std::ops::Range;

use serde::Serialize;

use super::driver::SimulationResult;
use crate::core::{ExecutionBlock, ProcessMetrics, Ticks};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    pub current_time: Ticks,
    // Name of the process on the CPU at `current_time`
    pub running: Option<String>,
    // Arrived, unfinished, not running; process set order
    pub ready_queue: Vec<String>,
    // Blocks started by `current_time`
    pub timeline: Vec<ExecutionBlock>,
    // Final metrics of the whole run, identical in every step
    pub metrics: Vec<ProcessMetrics>,
}

impl SimulationResult {
    pub fn step_at(&self, t: Ticks) -> SimulationStep {
        let current = self.timeline.block_at(t).filter(|b| !b.is_idle());

        let ready_queue = self
            .metrics
            .iter()
            .filter(|m| {
                m.process.arrival_time <= t
                    && m.completion_time > t
                    && !current.is_some_and(|b| b.is_process(m.id()))
            })
            .map(|m| m.process.name.clone())
            .collect();

        SimulationStep {
            current_time: t,
            running: current.map(|b| b.name.clone()),
            ready_queue,
            timeline: self.timeline.started_by(t).to_vec(),
            metrics: self.metrics.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Steps<'a> {
    result: &'a SimulationResult,
    ticks: Range<Ticks>,
}

impl<'a> Steps<'a> {
    pub(crate) fn new(result: &'a SimulationResult) -> Self {
        let ticks = if result.timeline.is_empty() {
            0..0
        } else {
            0..result.end_time() + 1
        };
        Self { result, ticks }
    }
}

impl Iterator for Steps<'_> {
    type Item = SimulationStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.ticks.next().map(|t| self.result.step_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.ticks.end - self.ticks.start) as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Steps<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ticks.next_back().map(|t| self.result.step_at(t))
    }
}

impl ExactSizeIterator for Steps<'_> {}

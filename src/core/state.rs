use serde::Serialize;
use tracing::{debug, trace};

use super::{event::SchedEvent, observer::Observer, timeline::Timeline};
use crate::sim::process::{Process, ProcessSet};

// Index into the ProcessSet (and the per-run metrics Vec)
pub type ProcIdx = usize;
pub type Ticks = u64;

// remaining_time counts down from burst_time; the rest is filled in on completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    #[serde(flatten)]
    pub process: Process,
    pub remaining_time: Ticks,
    pub start_time: Option<Ticks>,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    pub response_time: Ticks,
}

impl ProcessMetrics {
    fn new(process: &Process) -> Self {
        Self {
            process: process.clone(),
            remaining_time: process.burst_time,
            start_time: None,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.process.id
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    idx: ProcIdx,
    start: Ticks,
}

#[derive(Debug)]
pub struct RunCtx<'a> {
    pub now: Ticks,
    pub set: &'a ProcessSet,
    pub metrics: Vec<ProcessMetrics>,
    pub timeline: Timeline,
    pub events: Vec<SchedEvent>,

    // Process indices ordered by (arrival_time, original index)
    arrival_order: Vec<ProcIdx>,
    arrival_cursor: usize,
    completed: usize,
    // Block being extended tick by tick by the preemptive policies
    open: Option<OpenBlock>,
    observer: Observer,
}

impl<'a> RunCtx<'a> {
    pub fn new(set: &'a ProcessSet) -> Self {
        let mut arrival_order: Vec<ProcIdx> = (0..set.len()).collect();
        // sort_by_key is stable, so equal arrivals keep their original order
        arrival_order.sort_by_key(|&idx| set.get(idx).arrival_time);

        Self {
            now: 0,
            set,
            metrics: set.iter().map(ProcessMetrics::new).collect(),
            timeline: Timeline::default(),
            events: Vec::new(),
            arrival_order,
            arrival_cursor: 0,
            completed: 0,
            open: None,
            observer: Observer::new(),
        }
    }

    pub fn process(&self, idx: ProcIdx) -> &'a Process {
        self.set.get(idx)
    }

    pub fn arrival_order(&self) -> &[ProcIdx] {
        &self.arrival_order
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.metrics.len()
    }

    pub fn unfinished(&self) -> usize {
        self.metrics.len() - self.completed
    }

    /// Hand every not-yet-admitted process with `arrival_time <= upto` to
    /// `admit`, in arrival order. Each process is admitted exactly once per run.
    pub fn admit_arrivals(
        &mut self,
        upto: Ticks,
        mut admit: impl FnMut(ProcIdx, &ProcessMetrics),
    ) {
        while let Some(&idx) = self.arrival_order.get(self.arrival_cursor) {
            let metrics = &self.metrics[idx];
            if metrics.process.arrival_time > upto {
                break; // Contiguous, since arrival_order is sorted
            }
            admit(idx, metrics);
            self.arrival_cursor += 1;
        }
    }

    pub fn next_arrival(&self) -> Option<Ticks> {
        self.arrival_order
            .get(self.arrival_cursor)
            .map(|&idx| self.metrics[idx].process.arrival_time)
    }

    /// Run `idx` for `ticks` units as a single block starting at `now`.
    /// Returns true if the process completed.
    pub fn run_block(&mut self, idx: ProcIdx, ticks: Ticks) -> bool {
        debug_assert!(self.open.is_none(), "run_block() while a tick block is open");
        debug_assert!(
            ticks > 0 && ticks <= self.metrics[idx].remaining_time,
            "Process {} asked to run {ticks} ticks with {} remaining",
            self.metrics[idx].id(),
            self.metrics[idx].remaining_time
        );

        let start = self.now;
        let end = start + ticks;
        self.dispatch(idx, start);
        self.metrics[idx].remaining_time -= ticks;
        self.timeline.push_run(self.set.get(idx), start, end);
        self.now = end;

        let completed = self.metrics[idx].is_completed();
        if completed {
            self.complete(idx);
        }
        self.observer.observe(self.now, &self.timeline, Some(&self.metrics[idx]));
        completed
    }

    /// Run `idx` for one tick, extending its open block or preempting
    /// whichever process held the CPU on the previous tick.
    /// Returns true if the process completed.
    pub fn run_tick(&mut self, idx: ProcIdx) -> bool {
        match self.open {
            Some(open) if open.idx == idx => {}
            Some(open) => {
                self.close_open_block();
                self.preempt(open.idx);
                self.open_block(idx);
            }
            None => self.open_block(idx),
        }

        trace!(at = self.now, process = self.metrics[idx].id(), "tick");
        self.metrics[idx].remaining_time -= 1;
        self.now += 1;

        let completed = self.metrics[idx].is_completed();
        if completed {
            self.close_open_block();
            self.complete(idx);
        }
        self.observer.observe(self.now, &self.timeline, Some(&self.metrics[idx]));
        completed
    }

    /// Leave the CPU idle until `end`, merging with an idle block that ends at `now`.
    pub fn idle_until(&mut self, end: Ticks) {
        debug_assert!(self.open.is_none(), "Idle while process block is still open");
        if end <= self.now {
            return;
        }

        let start = self.now;
        self.timeline.push_idle(start, end);
        match self.events.last_mut() {
            Some(SchedEvent::Idle { to, .. }) if *to == start => *to = end,
            _ => {
                debug!(at = start, "idle");
                self.events.push(SchedEvent::Idle { from: start, to: end });
            }
        }
        self.now = end;
        self.observer.observe(self.now, &self.timeline, None);
    }

    /// Record that `idx` left the CPU at `now` with work remaining.
    pub fn preempt(&mut self, idx: ProcIdx) {
        let metrics = &self.metrics[idx];
        debug_assert!(
            !metrics.is_completed(),
            "Preempting completed process {}",
            metrics.id()
        );
        debug!(
            at = self.now,
            process = metrics.id(),
            remaining = metrics.remaining_time,
            "preempt"
        );
        self.events.push(SchedEvent::Preempt {
            at: self.now,
            process: metrics.process.id.clone(),
        });
    }

    pub fn idle_tick(&mut self) {
        self.idle_until(self.now + 1);
    }

    pub fn finish(self) -> (Timeline, Vec<ProcessMetrics>, Vec<SchedEvent>) {
        debug_assert!(self.open.is_none(), "Run finished with an open block");
        self.observer.observe_finished(&self.timeline, &self.metrics);
        (self.timeline, self.metrics, self.events)
    }

    fn open_block(&mut self, idx: ProcIdx) {
        self.dispatch(idx, self.now);
        self.open = Some(OpenBlock {
            idx,
            start: self.now,
        });
    }

    fn close_open_block(&mut self) {
        if let Some(open) = self.open.take() {
            self.timeline.push_run(self.set.get(open.idx), open.start, self.now);
        }
    }

    fn dispatch(&mut self, idx: ProcIdx, at: Ticks) {
        let metrics = &mut self.metrics[idx];
        if metrics.start_time.is_none() {
            metrics.start_time = Some(at);
        }
        debug!(at, process = metrics.id(), remaining = metrics.remaining_time, "dispatch");
        self.events.push(SchedEvent::Dispatch {
            at,
            process: metrics.process.id.clone(),
        });
    }

    fn complete(&mut self, idx: ProcIdx) {
        let now = self.now;
        let metrics = &mut self.metrics[idx];
        let arrival = metrics.process.arrival_time;
        let burst = metrics.process.burst_time;
        debug_assert!(
            now >= arrival + burst,
            "Process {} completed at {now} before arrival + burst",
            metrics.id()
        );

        metrics.completion_time = now;
        metrics.turnaround_time = now - arrival;
        metrics.waiting_time = metrics.turnaround_time - burst;
        metrics.response_time = metrics.start_time.unwrap_or(now) - arrival;
        self.completed += 1;

        debug!(
            at = now,
            process = metrics.id(),
            turnaround = metrics.turnaround_time,
            waiting = metrics.waiting_time,
            "complete"
        );
        self.events.push(SchedEvent::Complete {
            at: now,
            process: metrics.process.id.clone(),
        });
    }
}

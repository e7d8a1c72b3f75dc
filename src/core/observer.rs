use super::{
    state::{ProcessMetrics, Ticks},
    timeline::Timeline,
};

/// Debug-build checker for the invariants every policy must uphold.
#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    // Only the newest block and the process just run are checked each step
    pub fn observe(
        &mut self,
        now: Ticks,
        timeline: &Timeline,
        touched: Option<&ProcessMetrics>,
    ) {
        self.step += 1;

        // Closed blocks never run ahead of the clock
        debug_assert!(
            timeline.end_time() <= now,
            "Timeline ends at {} past the clock {now} (step {})",
            timeline.end_time(),
            self.step
        );

        if let [.., prev, last] = timeline.blocks() {
            debug_assert_eq!(
                prev.end_time, last.start_time,
                "Timeline blocks must be contiguous"
            );
            debug_assert!(
                !(prev.is_idle() && last.is_idle()),
                "Adjacent idle blocks at {} were not coalesced",
                last.start_time
            );
        }

        if let Some(m) = touched {
            debug_assert!(
                m.remaining_time <= m.process.burst_time,
                "Process {} has more remaining time than its burst",
                m.id()
            );
            debug_assert!(
                m.start_time >= Some(m.process.arrival_time),
                "Process {} dispatched before it arrived",
                m.id()
            );
        }
    }

    pub fn observe_finished(&self, timeline: &Timeline, metrics: &[ProcessMetrics]) {
        if let Some(first) = timeline.blocks().first() {
            debug_assert_eq!(first.start_time, 0, "Timeline must start at tick 0");
        }

        for m in metrics {
            debug_assert!(m.is_completed(), "Process {} never completed", m.id());
            debug_assert_eq!(
                timeline.busy_time(m.id()),
                m.process.burst_time,
                "Process {} received CPU time different from its burst",
                m.id()
            );
            debug_assert_eq!(m.turnaround_time, m.completion_time - m.process.arrival_time);
            debug_assert_eq!(m.waiting_time, m.turnaround_time - m.process.burst_time);
        }
    }
}

use std::collections::VecDeque;

use super::{Policy, RunCtx, Scheduler, SimError, Ticks};

/// Round Robin over a FIFO ready queue with a fixed time slice.
///
/// After each slice the processes that arrived while it ran are queued
/// first, then the preempted process goes to the tail.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Ticks) -> Result<Self, SimError> {
        if quantum == 0 {
            return Err(SimError::ZeroQuantum);
        }
        Ok(Self { quantum })
    }
}

impl Scheduler for RoundRobinScheduler {
    const POLICY: Policy = Policy::RoundRobin;

    fn schedule(&mut self, ctx: &mut RunCtx<'_>) -> Result<(), SimError> {
        let mut queue = VecDeque::new();
        ctx.admit_arrivals(0, |idx, _| queue.push_back(idx));

        while !ctx.all_completed() {
            let Some(idx) = queue.pop_front() else {
                // Nothing runnable: jump to the next arrival
                let Some(next) = ctx.next_arrival() else {
                    break;
                };
                ctx.idle_until(next);
                ctx.admit_arrivals(ctx.now, |idx, _| queue.push_back(idx));
                continue;
            };

            let slice = self.quantum.min(ctx.metrics[idx].remaining_time);
            let completed = ctx.run_block(idx, slice);

            ctx.admit_arrivals(ctx.now, |idx, _| queue.push_back(idx));
            if !completed {
                // Alone in the queue, it is redispatched without losing the CPU
                if !queue.is_empty() {
                    ctx.preempt(idx);
                }
                queue.push_back(idx);
            }
        }

        Ok(())
    }

    fn quantum(&self) -> Option<Ticks> {
        Some(self.quantum)
    }
}

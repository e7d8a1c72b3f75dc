use std::collections::VecDeque;

use super::{Policy, RunCtx, Scheduler, SimError};

/// First-come, first-served: arrival order, each process run to completion.
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    const POLICY: Policy = Policy::Fcfs;

    fn schedule(&mut self, ctx: &mut RunCtx<'_>) -> Result<(), SimError> {
        let mut queue = VecDeque::new();

        while !ctx.all_completed() {
            ctx.admit_arrivals(ctx.now, |idx, _| queue.push_back(idx));

            match queue.pop_front() {
                Some(idx) => {
                    let remaining = ctx.metrics[idx].remaining_time;
                    ctx.run_block(idx, remaining);
                }
                None => match ctx.next_arrival() {
                    Some(next) => ctx.idle_until(next),
                    None => break,
                },
            }
        }

        Ok(())
    }
}

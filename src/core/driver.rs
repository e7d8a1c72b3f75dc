use tracing::trace;

use super::{
    ready::ReadyPool,
    state::{ProcessMetrics, RunCtx},
};
use crate::{error::SimError, scheduler::Policy};

pub fn run_to_completion<K, F>(ctx: &mut RunCtx<'_>, key: F)
where
    K: Ord + Copy,
    F: Fn(&ProcessMetrics) -> K,
{
    let mut pool = ReadyPool::new();

    while !ctx.all_completed() {
        ctx.admit_arrivals(ctx.now, |idx, m| pool.push(idx, key(m)));

        match pool.pop() {
            Some(idx) => {
                let remaining = ctx.metrics[idx].remaining_time;
                ctx.run_block(idx, remaining);
            }
            None => idle_to_next_arrival(ctx),
        }
    }
}

pub fn run_preemptive<K, F>(
    ctx: &mut RunCtx<'_>,
    policy: Policy,
    key: F,
) -> Result<(), SimError>
where
    K: Ord + Copy,
    F: Fn(&ProcessMetrics) -> K,
{
    let ceiling = ctx.set.tick_ceiling();
    let mut pool = ReadyPool::new();

    while !ctx.all_completed() {
        if ctx.now > ceiling {
            return Err(SimError::TickCeilingExceeded {
                policy,
                ceiling,
                unfinished: ctx.unfinished(),
            });
        }

        ctx.admit_arrivals(ctx.now, |idx, m| pool.push(idx, key(m)));

        match pool.peek() {
            Some(idx) => {
                if ctx.run_tick(idx) {
                    pool.remove(idx);
                } else {
                    pool.update(idx, key(&ctx.metrics[idx]));
                }
            }
            None => {
                trace!(at = ctx.now, "nothing ready");
                idle_to_next_arrival(ctx);
            }
        }
    }

    Ok(())
}

// Pool is empty, so everything already admitted has completed
fn idle_to_next_arrival(ctx: &mut RunCtx<'_>) {
    match ctx.next_arrival() {
        Some(next) => ctx.idle_until(next),
        None => ctx.idle_tick(),
    }
}

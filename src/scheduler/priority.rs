use super::{Policy, RunCtx, Scheduler, SimError};
use crate::core::driver;

/// Static priority, lower value first. Once dispatched a process keeps the
/// CPU until it completes.
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    const POLICY: Policy = Policy::PriorityNonPreemptive;

    fn schedule(&mut self, ctx: &mut RunCtx<'_>) -> Result<(), SimError> {
        driver::run_to_completion(ctx, |m| m.process.priority);
        Ok(())
    }
}

/// Static priority, lower value first, re-evaluated every tick: a more
/// urgent arrival takes the CPU on the next tick.
pub struct PreemptivePriorityScheduler;

impl Scheduler for PreemptivePriorityScheduler {
    const POLICY: Policy = Policy::PriorityPreemptive;

    fn schedule(&mut self, ctx: &mut RunCtx<'_>) -> Result<(), SimError> {
        driver::run_preemptive(ctx, Self::POLICY, |m| m.process.priority)
    }
}

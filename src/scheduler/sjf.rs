use super::{Policy, RunCtx, Scheduler, SimError};
use crate::core::driver;

/// Shortest job first, non-preemptive. Among ready processes the smallest
/// burst wins; ties go to the process listed first in the set.
pub struct SjfScheduler;

impl Scheduler for SjfScheduler {
    const POLICY: Policy = Policy::Sjf;

    fn schedule(&mut self, ctx: &mut RunCtx<'_>) -> Result<(), SimError> {
        driver::run_to_completion(ctx, |m| m.process.burst_time);
        Ok(())
    }
}

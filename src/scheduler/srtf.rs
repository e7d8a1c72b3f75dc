use super::{Policy, RunCtx, Scheduler, SimError};
use crate::core::driver;

/// Shortest remaining time first. Re-evaluated every tick, so a newly
/// arrived shorter process preempts the one on the CPU.
pub struct SrtfScheduler;

impl Scheduler for SrtfScheduler {
    const POLICY: Policy = Policy::Srtf;

    fn schedule(&mut self, ctx: &mut RunCtx<'_>) -> Result<(), SimError> {
        driver::run_preemptive(ctx, Self::POLICY, |m| m.remaining_time)
    }
}

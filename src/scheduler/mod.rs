pub mod fcfs;
pub mod info;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    core::{RunCtx, Ticks},
    error::SimError,
    sim::{Sim, SimulationResult, process::ProcessSet},
};
pub use fcfs::FcfsScheduler;
pub use info::PolicyInfo;
pub use priority::{PreemptivePriorityScheduler, PriorityScheduler};
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use srtf::SrtfScheduler;

/// Quantum used by Round Robin when the caller does not pick one.
pub const DEFAULT_QUANTUM: Ticks = 2;

/// One scheduling policy driving a run from an empty timeline to the
/// completion of every process.
pub trait Scheduler {
    const POLICY: Policy;

    fn schedule(&mut self, ctx: &mut RunCtx<'_>) -> Result<(), SimError>;

    fn quantum(&self) -> Option<Ticks> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    #[serde(rename = "fcfs")]
    Fcfs,
    #[serde(rename = "sjf")]
    Sjf,
    #[serde(rename = "srtf")]
    Srtf,
    #[serde(rename = "rr")]
    RoundRobin,
    #[serde(rename = "priority-np")]
    PriorityNonPreemptive,
    #[serde(rename = "priority-p")]
    PriorityPreemptive,
}

impl Policy {
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::RoundRobin,
        Policy::PriorityNonPreemptive,
        Policy::PriorityPreemptive,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Srtf => "srtf",
            Policy::RoundRobin => "rr",
            Policy::PriorityNonPreemptive => "priority-np",
            Policy::PriorityPreemptive => "priority-p",
        }
    }

    pub fn is_preemptive(self) -> bool {
        match self {
            Policy::Fcfs | Policy::Sjf | Policy::PriorityNonPreemptive => false,
            Policy::Srtf | Policy::RoundRobin | Policy::PriorityPreemptive => true,
        }
    }

    /// Run this policy over `set`. `quantum` only matters for Round Robin,
    /// which falls back to `DEFAULT_QUANTUM`.
    pub fn run(
        self,
        set: &ProcessSet,
        quantum: Option<Ticks>,
    ) -> Result<SimulationResult, SimError> {
        match self {
            Policy::Fcfs => Sim::new(set, FcfsScheduler).run(),
            Policy::Sjf => Sim::new(set, SjfScheduler).run(),
            Policy::Srtf => Sim::new(set, SrtfScheduler).run(),
            Policy::RoundRobin => {
                let scheduler = RoundRobinScheduler::new(quantum.unwrap_or(DEFAULT_QUANTUM))?;
                Sim::new(set, scheduler).run()
            }
            Policy::PriorityNonPreemptive => Sim::new(set, PriorityScheduler).run(),
            Policy::PriorityPreemptive => Sim::new(set, PreemptivePriorityScheduler).run(),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|policy| policy.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownPolicy(s.to_owned()))
    }
}

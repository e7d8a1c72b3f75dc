use std::fmt;

use crate::{core::Ticks, scheduler::Policy};

/// Errors surfaced by the simulator.
///
/// Everything except `TickCeilingExceeded` is a caller contract violation and
/// is reported before any scheduling happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A process asked for no CPU time at all.
    ZeroBurst { id: String },
    /// Two processes share an identifier.
    DuplicateId { id: String },
    /// Round Robin was configured with a zero-length slice.
    ZeroQuantum,
    /// `max(arrival) + sum(burst)` does not fit in a tick count.
    TickOverflow,
    /// A policy tag that names none of the six policies.
    UnknownPolicy(String),
    /// A preemptive loop ran past `max(arrival) + sum(burst)` with work left.
    TickCeilingExceeded {
        policy: Policy,
        ceiling: Ticks,
        unfinished: usize,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBurst { id } => write!(f, "process {id} has a burst time of 0"),
            Self::DuplicateId { id } => write!(f, "process id {id} appears more than once"),
            Self::ZeroQuantum => f.write_str("round robin quantum must be at least 1 tick"),
            Self::TickOverflow => {
                f.write_str("latest arrival plus total burst time overflows the tick clock")
            }
            Self::UnknownPolicy(tag) => write!(
                f,
                "unknown policy {tag:?} (expected fcfs, sjf, srtf, rr, priority-np or priority-p)"
            ),
            Self::TickCeilingExceeded {
                policy,
                ceiling,
                unfinished,
            } => write!(
                f,
                "{policy} passed tick {ceiling} with {unfinished} process(es) unfinished"
            ),
        }
    }
}

impl std::error::Error for SimError {}

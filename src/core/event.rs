use serde::Serialize;

use crate::core::Ticks;

/// Scheduling decisions recorded during a run, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SchedEvent {
    Dispatch {
        at: Ticks,
        process: String,
    },
    // Process lost the CPU with work left
    Preempt {
        at: Ticks,
        process: String,
    },
    Complete {
        at: Ticks,
        process: String,
    },
    // CPU idle over [from, to)
    Idle {
        from: Ticks,
        to: Ticks,
    },
}

impl SchedEvent {
    pub fn at(&self) -> Ticks {
        match self {
            Self::Dispatch { at, .. } | Self::Preempt { at, .. } | Self::Complete { at, .. } => *at,
            Self::Idle { from, .. } => *from,
        }
    }
}

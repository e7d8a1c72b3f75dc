//! Deterministic, tick-level model of six classical CPU scheduling policies.
//!
//! Given a fixed [`ProcessSet`], a run produces the exact execution
//! [`Timeline`] (idle gaps included), per-process metrics and their averages,
//! and can be expanded into one [`SimulationStep`] per tick for playback.
//!
//! ```
//! use cpu_sched_model::{Policy, Process, ProcessSet};
//!
//! let set = ProcessSet::new(vec![
//!     Process::new("P1", 0, 5, 2),
//!     Process::new("P2", 1, 3, 1),
//! ])
//! .unwrap();
//!
//! let result = Policy::Fcfs.run(&set, None).unwrap();
//! assert_eq!(result.end_time(), 8);
//! assert_eq!(result.avg_waiting_time, 2.0);
//! ```

pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use crate::core::{ExecutionBlock, ProcessMetrics, SchedEvent, Ticks, Timeline};
pub use error::SimError;
pub use scheduler::{DEFAULT_QUANTUM, Policy, PolicyInfo, Scheduler};
pub use sim::{
    Palette, Process, ProcessSet, Sim, SimulationResult, SimulationStep, Steps, compare,
    project_steps, run,
};

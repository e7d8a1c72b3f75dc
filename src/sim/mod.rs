pub mod driver;
pub mod process;
pub mod steps;
pub mod workload;

pub use driver::{Sim, SimulationResult, compare, project_steps, run};
pub use process::{Palette, Process, ProcessSet};
pub use steps::{SimulationStep, Steps};
pub use workload::{WorkloadParams, random_processes};

pub mod driver;
pub mod event;
pub mod observer;
pub mod ready;
pub mod state;
pub mod timeline;

pub use event::SchedEvent;
pub use ready::{Rank, ReadyPool};
pub use state::{ProcIdx, ProcessMetrics, RunCtx, Ticks};
pub use timeline::{ExecutionBlock, Timeline};

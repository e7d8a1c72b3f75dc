use serde::Serialize;

use super::state::Ticks;
use crate::sim::process::Process;

/// A half-open interval `[start_time, end_time)` of CPU ownership.
///
/// `process_id == None` marks an idle interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionBlock {
    pub process_id: Option<String>,
    pub name: String,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub color: Option<String>,
}

impl ExecutionBlock {
    pub const IDLE_NAME: &'static str = "Idle";

    fn run(process: &Process, start_time: Ticks, end_time: Ticks) -> Self {
        Self {
            process_id: Some(process.id.clone()),
            name: process.name.clone(),
            start_time,
            end_time,
            color: Some(process.color.clone()),
        }
    }

    fn idle(start_time: Ticks, end_time: Ticks) -> Self {
        Self {
            process_id: None,
            name: Self::IDLE_NAME.to_owned(),
            start_time,
            end_time,
            color: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }

    pub fn is_process(&self, id: &str) -> bool {
        self.process_id.as_deref() == Some(id)
    }

    pub fn duration(&self) -> Ticks {
        self.end_time - self.start_time
    }

    pub fn covers(&self, t: Ticks) -> bool {
        self.start_time <= t && t < self.end_time
    }
}

/// Contiguous, ordered sequence of execution blocks starting at tick 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    blocks: Vec<ExecutionBlock>,
}

impl Timeline {
    pub fn blocks(&self) -> &[ExecutionBlock] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// End of the last block, or 0 for an empty timeline.
    pub fn end_time(&self) -> Ticks {
        self.blocks.last().map_or(0, |b| b.end_time)
    }

    /// The block covering tick `t`, if any.
    pub fn block_at(&self, t: Ticks) -> Option<&ExecutionBlock> {
        let idx = self.blocks.partition_point(|b| b.end_time <= t);
        self.blocks.get(idx).filter(|b| b.covers(t))
    }

    /// Prefix of blocks that have started by tick `t`.
    pub fn started_by(&self, t: Ticks) -> &[ExecutionBlock] {
        let len = self.blocks.partition_point(|b| b.start_time <= t);
        &self.blocks[..len]
    }

    /// Total non-idle ticks attributed to process `id`.
    pub fn busy_time(&self, id: &str) -> Ticks {
        self.blocks
            .iter()
            .filter(|b| b.is_process(id))
            .map(ExecutionBlock::duration)
            .sum()
    }

    pub fn idle_time(&self) -> Ticks {
        self.blocks
            .iter()
            .filter(|b| b.is_idle())
            .map(ExecutionBlock::duration)
            .sum()
    }

    pub(crate) fn push_run(&mut self, process: &Process, start: Ticks, end: Ticks) {
        debug_assert!(start < end, "Empty block for {}", process.id);
        debug_assert_eq!(start, self.end_time(), "Timeline gap before {}", process.id);
        self.blocks.push(ExecutionBlock::run(process, start, end));
    }

    // Consecutive idle time lands in one block
    pub(crate) fn push_idle(&mut self, start: Ticks, end: Ticks) {
        debug_assert!(start < end, "Empty idle block at {start}");
        debug_assert_eq!(start, self.end_time(), "Timeline gap before idle at {start}");
        match self.blocks.last_mut() {
            Some(last) if last.is_idle() && last.end_time == start => last.end_time = end,
            _ => self.blocks.push(ExecutionBlock::idle(start, end)),
        }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionBlock;
    type IntoIter = std::slice::Iter<'a, ExecutionBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

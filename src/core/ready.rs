use keyed_priority_queue::KeyedPriorityQueue;

use super::state::ProcIdx;

/// Ordering key of a process in the ready pool: the policy key first,
/// then position in the original process set.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Rank<K> {
    pub key: K,
    pub idx: ProcIdx,
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop Rank's Ord
impl<K: Ord> PartialOrd for Rank<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for Rank<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

/// Arrived, unfinished processes keyed by a policy-specific value.
/// The head is always the smallest key, earliest in the process set on ties.
#[derive(Debug)]
pub struct ReadyPool<K: Ord> {
    tasks: KeyedPriorityQueue<ProcIdx, Rank<K>>,
}

impl<K: Ord + Copy> ReadyPool<K> {
    pub fn new() -> Self {
        Self {
            tasks: KeyedPriorityQueue::new(),
        }
    }

    pub fn push(&mut self, idx: ProcIdx, key: K) {
        let prev = self.tasks.push(idx, Rank { key, idx });
        debug_assert!(prev.is_none(), "Process {idx} already in the ready pool");
    }

    pub fn peek(&self) -> Option<ProcIdx> {
        self.tasks.peek().map(|t| *t.0)
    }

    pub fn pop(&mut self) -> Option<ProcIdx> {
        self.tasks.pop().map(|t| t.0)
    }

    /// Re-key a process already in the pool.
    pub fn update(&mut self, idx: ProcIdx, key: K) {
        let updated = self.tasks.set_priority(&idx, Rank { key, idx });
        debug_assert!(updated.is_ok(), "Process {idx} missing from the ready pool");
    }

    pub fn remove(&mut self, idx: ProcIdx) -> bool {
        self.tasks.remove(&idx).is_some()
    }

}

impl<K: Ord + Copy> Default for ReadyPool<K> {
    fn default() -> Self {
        Self::new()
    }
}

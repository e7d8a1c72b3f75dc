use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::{
    core::state::{ProcIdx, Ticks},
    error::SimError,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub name: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    // Lower is more urgent
    pub priority: i64,
    // Opaque display tag, passed through to the timeline
    #[serde(default)]
    pub color: String,
}

impl Process {
    pub fn new(
        id: impl Into<String>,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: i64,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            arrival_time,
            burst_time,
            priority,
            color: String::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

// Supply order is the tie-break order for every policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Process>")]
pub struct ProcessSet {
    processes: Vec<Process>,
    index: FxHashMap<String, ProcIdx>,
}

impl ProcessSet {
    pub fn new(processes: Vec<Process>) -> Result<Self, SimError> {
        let mut index = FxHashMap::default();
        index.reserve(processes.len());
        let mut last_arrival: Ticks = 0;
        let mut total_burst: Ticks = 0;

        for (idx, process) in processes.iter().enumerate() {
            if process.burst_time == 0 {
                return Err(SimError::ZeroBurst {
                    id: process.id.clone(),
                });
            }
            if index.insert(process.id.clone(), idx).is_some() {
                return Err(SimError::DuplicateId {
                    id: process.id.clone(),
                });
            }
            last_arrival = last_arrival.max(process.arrival_time);
            total_burst = total_burst
                .checked_add(process.burst_time)
                .ok_or(SimError::TickOverflow)?;
        }

        // Step playback walks 0..=end, so the ceiling itself needs one tick of headroom
        last_arrival
            .checked_add(total_burst)
            .filter(|&ceiling| ceiling < Ticks::MAX)
            .ok_or(SimError::TickOverflow)?;

        Ok(Self { processes, index })
    }

    pub fn get(&self, idx: ProcIdx) -> &Process {
        &self.processes[idx]
    }

    pub fn index_of(&self, id: &str) -> Option<ProcIdx> {
        self.index.get(id).copied()
    }

    pub fn by_id(&self, id: &str) -> Option<&Process> {
        self.index_of(id).map(|idx| &self.processes[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn total_burst(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    // max(arrival) + sum(burst); cannot overflow once new() has accepted the set
    pub fn tick_ceiling(&self) -> Ticks {
        let last_arrival = self
            .processes
            .iter()
            .map(|p| p.arrival_time)
            .max()
            .unwrap_or(0);
        last_arrival + self.total_burst()
    }

    pub fn paint(mut self, palette: &Palette) -> Self {
        for (i, process) in self.processes.iter_mut().enumerate() {
            if process.color.is_empty() {
                if let Some(color) = palette.color_for(i) {
                    process.color = color.to_owned();
                }
            }
        }
        self
    }

    pub fn into_vec(self) -> Vec<Process> {
        self.processes
    }
}

impl TryFrom<Vec<Process>> for ProcessSet {
    type Error = SimError;

    fn try_from(processes: Vec<Process>) -> Result<Self, Self::Error> {
        Self::new(processes)
    }
}

impl Serialize for ProcessSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.processes)
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn color_for(&self, i: usize) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        Some(&self.colors[i % self.colors.len()])
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            "hsl(180, 100%, 50%)",
            "hsl(320, 100%, 60%)",
            "hsl(45, 100%, 50%)",
            "hsl(120, 100%, 45%)",
            "hsl(30, 100%, 55%)",
            "hsl(200, 100%, 60%)",
            "hsl(280, 100%, 65%)",
            "hsl(0, 100%, 60%)",
        ])
    }
}

use rand::Rng;

use super::process::{Palette, Process, ProcessSet};
use crate::{core::Ticks, error::SimError};

#[derive(Debug, Clone, Copy)]
pub struct WorkloadParams {
    // arrival in 0..max_arrival
    pub max_arrival: Ticks,
    // burst in 1..=max_burst
    pub max_burst: Ticks,
    // priority in 1..=max_priority
    pub max_priority: i64,
}

impl Default for WorkloadParams {
    fn default() -> Self {
        Self {
            max_arrival: 8,
            max_burst: 8,
            max_priority: 5,
        }
    }
}

pub fn random_processes<R: Rng>(
    rng: &mut R,
    count: usize,
    params: WorkloadParams,
    palette: &Palette,
) -> Result<ProcessSet, SimError> {
    let processes = (1..=count)
        .map(|i| {
            Process::new(
                format!("P{i}"),
                rng.random_range(0..params.max_arrival.max(1)),
                rng.random_range(1..=params.max_burst.max(1)),
                rng.random_range(1..=params.max_priority.max(1)),
            )
        })
        .collect();

    Ok(ProcessSet::new(processes)?.paint(palette))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn generation_is_seeded_and_in_range() {
        let params = WorkloadParams::default();
        let palette = Palette::default();
        let a = random_processes(&mut StdRng::seed_from_u64(7), 6, params, &palette).unwrap();
        let b = random_processes(&mut StdRng::seed_from_u64(7), 6, params, &palette).unwrap();
        assert_eq!(a, b);

        for (i, p) in a.iter().enumerate() {
            assert_eq!(p.id, format!("P{}", i + 1));
            assert!(p.arrival_time < 8);
            assert!((1..=8).contains(&p.burst_time));
            assert!((1..=5).contains(&p.priority));
            assert_eq!(Some(p.color.as_str()), palette.color_for(i));
        }
    }
}

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_WEEK: usize = HOURS_PER_DAY * DAYS_PER_WEEK;

/// running mean of an intensity for each hour of the week. slots are indexed
/// `weekday * 24 + hour` with Monday = 0.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeeklyProfile {
    sums: Vec<f64>,
    counts: Vec<u64>,
}

impl Default for WeeklyProfile {
    fn default() -> Self {
        Self {
            sums: vec![0.0; HOURS_PER_WEEK],
            counts: vec![0; HOURS_PER_WEEK],
        }
    }
}

impl WeeklyProfile {
    pub fn add(&mut self, weekday: u32, hour: u32, value: f64) {
        if let Some(slot) = slot_index(weekday, hour) {
            self.sums[slot] += value;
            self.counts[slot] += 1;
        }
    }

    /// mean intensity for the hour of the week, if any observations fell into it
    pub fn mean(&self, weekday: u32, hour: u32) -> Option<f64> {
        let slot = slot_index(weekday, hour)?;
        match self.counts.get(slot) {
            Some(&n) if n > 0 => Some(self.sums[slot] / n as f64),
            _ => None,
        }
    }

    /// mean intensity over every observation in the profile
    pub fn overall_mean(&self) -> Option<f64> {
        let n: u64 = self.counts.iter().sum();
        if n == 0 {
            return None;
        }
        Some(self.sums.iter().sum::<f64>() / n as f64)
    }

    pub fn observation_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// true if the slot vectors have the expected shape, used when loading stored models
    pub fn is_well_formed(&self) -> bool {
        self.sums.len() == HOURS_PER_WEEK
            && self.counts.len() == HOURS_PER_WEEK
            && self.sums.iter().all(|s| s.is_finite())
    }
}

fn slot_index(weekday: u32, hour: u32) -> Option<usize> {
    let (weekday, hour) = (weekday as usize, hour as usize);
    if weekday < DAYS_PER_WEEK && hour < HOURS_PER_DAY {
        Some(weekday * HOURS_PER_DAY + hour)
    } else {
        None
    }
}

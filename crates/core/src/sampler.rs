use crate::RandomSource;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("weight table is empty")]
    EmptyWeights,
    #[error("symbol {0} has a zero weight")]
    ZeroWeight(String),
    #[error("total weight overflows")]
    WeightOverflow,
}

/// Running totals over a weight table; the last entry holds the total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeTable {
    entries: Vec<(String, u32)>,
}

impl CumulativeTable {
    pub fn build<'a, I>(weights: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = (&'a String, &'a u32)>,
    {
        let mut entries = Vec::new();
        let mut running: u32 = 0;
        for (symbol, weight) in weights {
            if *weight == 0 {
                return Err(SampleError::ZeroWeight(symbol.clone()));
            }
            running = running
                .checked_add(*weight)
                .ok_or(SampleError::WeightOverflow)?;
            entries.push((symbol.clone(), running));
        }
        if entries.is_empty() {
            return Err(SampleError::EmptyWeights);
        }
        Ok(Self { entries })
    }

    pub fn total_weight(&self) -> u32 {
        self.entries.last().map(|(_, total)| *total).unwrap_or(0)
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        let roll = rng.next_below(self.total_weight());
        self.pick(roll)
    }

    /// Symbol of the first entry whose running total exceeds `roll`.
    pub fn pick(&self, roll: u32) -> &str {
        let idx = self
            .entries
            .iter()
            .position(|(_, cumulative)| roll < *cumulative)
            .unwrap_or(self.entries.len() - 1);
        &self.entries[idx].0
    }
}

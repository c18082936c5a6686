use rand::{Rng, distr::Distribution};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// How individual holder gains are produced for a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GainProfile {
    /// Every holder realizes the same gain
    Fixed { gain: f64 },
    /// Holders take gains from an observed pool, cycling in order
    Empirical { gains: Vec<f64> },
    Normal { mean: f64, std_dev: f64 },
    LogNormal { mean: f64, std_dev: f64 },
}

impl GainProfile {
    /// Sample a single holder gain from this profile
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ProfileError> {
        match self {
            GainProfile::Fixed { gain } => Ok(*gain),
            GainProfile::Empirical { gains } => {
                if gains.is_empty() {
                    return Err(ProfileError::EmptyGainPool);
                }
                let idx = rng.random_range(0..gains.len());
                Ok(gains[idx])
            }
            GainProfile::Normal { mean, std_dev } => rand_distr::Normal::new(*mean, *std_dev)
                .map(|d| d.sample(rng))
                .map_err(|_| ProfileError::InvalidDistributionParameters {
                    profile_type: "Normal gain",
                    mean: *mean,
                    std_dev: *std_dev,
                    reason: "std_dev must be non-negative and finite",
                }),
            GainProfile::LogNormal { mean, std_dev } => {
                rand_distr::LogNormal::new(*mean, *std_dev)
                    .map(|d| d.sample(rng))
                    .map_err(|_| ProfileError::InvalidDistributionParameters {
                        profile_type: "LogNormal gain",
                        mean: *mean,
                        std_dev: *std_dev,
                        reason: "std_dev must be positive and finite",
                    })
            }
        }
    }

    /// Materialize the full holder gain population
    ///
    /// Fixed and Empirical populations are deterministic regardless of the
    /// generator; Empirical cycles through its pool in order rather than
    /// resampling. Distribution profiles draw one gain per holder.
    pub fn population<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        holders: usize,
    ) -> Result<Vec<f64>, ProfileError> {
        match self {
            GainProfile::Fixed { gain } => Ok(vec![*gain; holders]),
            GainProfile::Empirical { gains } => {
                if gains.is_empty() {
                    return Err(ProfileError::EmptyGainPool);
                }
                Ok((0..holders).map(|i| gains[i % gains.len()]).collect())
            }
            _ => {
                let mut population = Vec::with_capacity(holders);
                for _ in 0..holders {
                    population.push(self.sample(rng)?);
                }
                Ok(population)
            }
        }
    }
}

/// A hypothetical holder population to sweep over realisation rates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Holders eligible to sell in the period
    pub holders: usize,
    pub profile: GainProfile,
}

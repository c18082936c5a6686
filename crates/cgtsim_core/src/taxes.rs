//! Tiered capital gains tax calculation
//!
//! A `TaxSchedule` is an ordered set of marginal-rate brackets covering
//! [0, infinity). Validation happens once at construction so the per-gain
//! `tax_due` path can walk the brackets without re-checking them.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// One marginal-rate bracket. `rate` applies to the slice of a gain that
/// falls in `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: f64,
    /// Exclusive upper bound. `None` marks the unbounded top bracket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    pub rate: f64,
}

/// Validated progressive bracket schedule
///
/// Invariants held after construction: non-empty, first bracket starts at 0,
/// brackets are contiguous (each upper bound equals the next lower bound),
/// and exactly the last bracket is unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Validate and build a schedule
    ///
    /// A malformed schedule is a configuration error, never a silent
    /// miscalculation, so every structural problem is rejected here.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }

        for (i, bracket) in brackets.iter().enumerate() {
            if !bracket.lower.is_finite() || bracket.upper.is_some_and(|u| !u.is_finite()) {
                return Err(ScheduleError::NonFiniteBound { index: i });
            }
            if !bracket.rate.is_finite() || bracket.rate < 0.0 {
                return Err(ScheduleError::InvalidRate {
                    index: i,
                    rate: bracket.rate,
                });
            }
            if let Some(upper) = bracket.upper {
                if upper <= bracket.lower {
                    return Err(ScheduleError::InvertedBracket {
                        index: i,
                        lower: bracket.lower,
                        upper,
                    });
                }
            }
        }

        if brackets[0].lower != 0.0 {
            return Err(ScheduleError::NonZeroFloor {
                lower: brackets[0].lower,
            });
        }

        for i in 0..brackets.len() - 1 {
            match brackets[i].upper {
                None => return Err(ScheduleError::UnboundedBelowTop { index: i }),
                Some(upper) => {
                    if upper != brackets[i + 1].lower {
                        return Err(ScheduleError::Discontinuity {
                            index: i,
                            upper,
                            next_lower: brackets[i + 1].lower,
                        });
                    }
                }
            }
        }

        if let Some(upper) = brackets[brackets.len() - 1].upper {
            return Err(ScheduleError::BoundedTop { upper });
        }

        Ok(Self { brackets })
    }

    #[must_use]
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Total tax owed on a single realized gain
    ///
    /// Progressive: each bracket taxes only the slice of the gain inside its
    /// bounds. A gain sitting exactly on a bracket boundary is taxed entirely
    /// under the lower bracket. Non-positive gains owe nothing.
    #[must_use]
    pub fn tax_due(&self, gain: f64) -> f64 {
        if gain <= 0.0 {
            return 0.0;
        }

        let mut tax = 0.0;
        for bracket in &self.brackets {
            if gain <= bracket.lower {
                break;
            }
            let ceiling = match bracket.upper {
                Some(upper) => gain.min(upper),
                None => gain,
            };
            tax += (ceiling - bracket.lower) * bracket.rate;
        }

        tax
    }

    /// Rate applied to the last unit of the given gain
    #[must_use]
    pub fn marginal_rate(&self, gain: f64) -> f64 {
        if gain <= 0.0 {
            return 0.0;
        }

        let mut rate = 0.0;
        for bracket in &self.brackets {
            if gain <= bracket.lower {
                break;
            }
            rate = bracket.rate;
        }

        rate
    }

    /// Average rate over the whole gain (tax / gain); 0 for non-positive gains
    #[must_use]
    pub fn effective_rate(&self, gain: f64) -> f64 {
        if gain <= 0.0 {
            return 0.0;
        }
        self.tax_due(gain) / gain
    }
}

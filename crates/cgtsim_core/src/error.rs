use std::fmt;

/// Errors from bracket schedule validation
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Schedule contains no brackets
    Empty,
    /// First bracket must start at exactly 0
    NonZeroFloor { lower: f64 },
    /// A lower or bounded upper bound is NaN or infinite
    NonFiniteBound { index: usize },
    /// Rate is negative, NaN, or infinite
    InvalidRate { index: usize, rate: f64 },
    /// Upper bound does not exceed lower bound
    InvertedBracket {
        index: usize,
        lower: f64,
        upper: f64,
    },
    /// Adjacent brackets overlap or leave a gap
    Discontinuity {
        index: usize,
        upper: f64,
        next_lower: f64,
    },
    /// Only the top bracket may be unbounded
    UnboundedBelowTop { index: usize },
    /// The top bracket must be unbounded
    BoundedTop { upper: f64 },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::Empty => write!(f, "bracket schedule is empty"),
            ScheduleError::NonZeroFloor { lower } => {
                write!(f, "first bracket must start at 0, starts at {lower}")
            }
            ScheduleError::NonFiniteBound { index } => {
                write!(f, "bracket {index} has a non-finite bound")
            }
            ScheduleError::InvalidRate { index, rate } => {
                write!(f, "bracket {index} has invalid rate {rate}")
            }
            ScheduleError::InvertedBracket {
                index,
                lower,
                upper,
            } => {
                write!(
                    f,
                    "bracket {index} upper bound {upper} does not exceed lower bound {lower}"
                )
            }
            ScheduleError::Discontinuity {
                index,
                upper,
                next_lower,
            } => {
                write!(
                    f,
                    "bracket {index} ends at {upper} but the next bracket starts at {next_lower}"
                )
            }
            ScheduleError::UnboundedBelowTop { index } => {
                write!(f, "bracket {index} is unbounded but is not the top bracket")
            }
            ScheduleError::BoundedTop { upper } => {
                write!(f, "top bracket must be unbounded, has upper bound {upper}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Errors from gain profile sampling
#[derive(Debug, Clone)]
pub enum ProfileError {
    InvalidDistributionParameters {
        profile_type: &'static str,
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    /// Empirical gain pool is empty and cannot be sampled
    EmptyGainPool,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::InvalidDistributionParameters {
                profile_type,
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid {profile_type} parameters (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
            ProfileError::EmptyGainPool => write!(f, "empirical gain pool is empty"),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Errors from sweep configuration and evaluation
#[derive(Debug, Clone)]
pub enum SweepError {
    /// No scenarios were supplied
    NoScenarios,
    /// No realisation rates were supplied
    NoRealisationRates,
    /// A realisation rate falls outside [0, 1]
    RealisationRateOutOfRange { rate: f64 },
    Profile(ProfileError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::NoScenarios => write!(f, "no scenarios configured"),
            SweepError::NoRealisationRates => write!(f, "no realisation rates configured"),
            SweepError::RealisationRateOutOfRange { rate } => {
                write!(f, "realisation rate {rate} is outside [0, 1]")
            }
            SweepError::Profile(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Profile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProfileError> for SweepError {
    fn from(e: ProfileError) -> Self {
        SweepError::Profile(e)
    }
}

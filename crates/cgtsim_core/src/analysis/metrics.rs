//! Summary statistics and histogram binning over gain and tax samples.

use serde::Serialize;

/// Mean and spread over the finite values of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Finite values that entered the summary
    pub count: usize,
}

impl SummaryStatistics {
    /// Compute over the finite values of `values`; `None` when there are none
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let n = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean,
            std_dev,
            min,
            max,
            count: finite.len(),
        })
    }
}

/// Fixed-width binning of a sample, for rendering
///
/// Bins span [min, max] of the finite values; the top bin is closed so the
/// maximum lands in it rather than past it.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin the finite values of `values`; `None` when there are none or
    /// `bins` is zero
    #[must_use]
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;
        // Degenerate sample: every value identical, all in the first bin
        let bin_width = if span > 0.0 { span / bins as f64 } else { 1.0 };

        let mut counts = vec![0usize; bins];
        for value in finite {
            let idx = (((value - min) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self {
            min,
            bin_width,
            counts,
        })
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Inclusive-exclusive bounds of one bin (the top bin is closed)
    #[must_use]
    pub fn bin_range(&self, idx: usize) -> (f64, f64) {
        let lower = self.min + self.bin_width * idx as f64;
        (lower, lower + self.bin_width)
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }
}

//! Histogram builder.
//!
//! Bins the finite values of a numeric column into equal-width bins.

use super::error::ChartResult;
use super::spec::{AxisSpec, Bin, ChartSpec, HistogramSpec};
use crate::dataset::Dataset;

/// Binning strategy for histograms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinStrategy {
    /// Sturges' rule: ceil(log2(n)) + 1
    #[default]
    Sturges,
    /// Fixed number of bins
    Fixed(usize),
}

impl BinStrategy {
    /// Number of bins for `n` values.
    pub fn bin_count(self, n: usize) -> usize {
        if n == 0 {
            return 1;
        }
        match self {
            BinStrategy::Sturges => ((n as f64).log2().ceil() + 1.0) as usize,
            BinStrategy::Fixed(bins) => bins,
        }
        .max(1)
    }
}

/// Build the histogram of `column` with the default binning.
pub fn build_histogram(dataset: &Dataset, column: &str) -> ChartResult<ChartSpec> {
    build_histogram_with(dataset, column, BinStrategy::default())
}

/// Build the histogram of `column` with an explicit binning strategy.
pub fn build_histogram_with(
    dataset: &Dataset,
    column: &str,
    strategy: BinStrategy,
) -> ChartResult<ChartSpec> {
    let values = dataset.numeric(column)?;
    let bins = compute_bins(values, strategy);
    let total: usize = bins.iter().map(|b| b.count).sum();

    tracing::debug!(column, bins = bins.len(), total, "Built histogram");

    Ok(ChartSpec::Histogram(HistogramSpec {
        column: column.to_string(),
        x_axis: AxisSpec::new(column),
        y_axis: AxisSpec::new("count"),
        bins,
        total,
    }))
}

/// Bin the finite values of `values`.
///
/// Non-finite values are ignored. When every value is identical a single
/// degenerate bin `[v, v]` holds them all.
pub fn compute_bins(values: &[f64], strategy: BinStrategy) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![Bin {
            start: min,
            end: max,
            count: finite.len(),
        }];
    }

    let bin_count = strategy.bin_count(finite.len());
    let mut counts = vec![0usize; bin_count];

    for &v in &finite {
        let idx = ((fraction(v, min, max) * bin_count as f64) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: lerp(min, max, i as f64 / bin_count as f64),
            end: if i + 1 == bin_count {
                max
            } else {
                lerp(min, max, (i + 1) as f64 / bin_count as f64)
            },
            count,
        })
        .collect()
}

/// Position of `v` within `[min, max]`, in `[0, 1]`.
///
/// `max - min` overflows for ranges wider than `f64::MAX`; halving both ends
/// keeps the span finite.
fn fraction(v: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_finite() {
        (v - min) / span
    } else {
        (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

/// Point at `t` between `min` and `max`, finite for any finite pair.
fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min * (1.0 - t) + max * t
}

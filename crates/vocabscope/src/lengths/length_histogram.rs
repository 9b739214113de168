//! # Shared-Bin Length Histogram

use core::ops::RangeInclusive;

/// Percent-normalized histograms over a shared set of unit-width bins.
///
/// Bins cover every integer length from the smallest to the largest value
/// seen in any series; each series' percentages sum to 100 (or are all 0 for
/// an empty series).
#[derive(Debug, Clone, PartialEq)]
pub struct LengthHistogram {
    min_length: usize,
    max_length: usize,
    percentages: Vec<Vec<f64>>,
}

impl LengthHistogram {
    /// Bin each sample series over the shared bin range.
    pub fn new(series: &[&[usize]]) -> Self {
        let mut all = series.iter().flat_map(|sample| sample.iter().copied());
        let (min_length, max_length) = match all.next() {
            Some(first) => all.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))),
            None => (0, 0),
        };
        let bin_count = max_length - min_length + 1;

        let percentages = series
            .iter()
            .map(|sample| {
                let mut counts = vec![0usize; bin_count];
                for &length in sample.iter() {
                    counts[length - min_length] += 1;
                }
                let total = sample.len();
                counts
                    .into_iter()
                    .map(|count| {
                        if total == 0 {
                            0.0
                        } else {
                            100.0 * count as f64 / total as f64
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            min_length,
            max_length,
            percentages,
        }
    }

    /// The shared bin lengths.
    pub fn bins(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    /// The number of shared bins.
    pub fn bin_count(&self) -> usize {
        self.max_length - self.min_length + 1
    }

    /// The number of series.
    pub fn series_count(&self) -> usize {
        self.percentages.len()
    }

    /// The per-bin percentages of series `index`.
    pub fn percentages(
        &self,
        index: usize,
    ) -> &[f64] {
        &self.percentages[index]
    }

    /// The tallest bar over all series.
    pub fn max_percentage(&self) -> f64 {
        self.percentages
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }
}

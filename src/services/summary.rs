//! Summary statistics, histograms, and kernel-density estimation.

use crate::api::types::{DensityEstimate, HistogramSummary, SummaryStats};
use crate::error::{VitalsError, VitalsResult};

/// Number of evaluation points on the density grid.
const DENSITY_GRID_POINTS: usize = 200;

/// Compute summary statistics for a set of values.
pub fn compute_stats(values: &[f64]) -> VitalsResult<SummaryStats> {
    if values.is_empty() {
        return Err(VitalsError::EmptyInput(
            "no values for summary statistics".to_string(),
        ));
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;
    let std_dev = variance.sqrt();

    let min = sorted[0];
    let max = sorted[count - 1];

    Ok(SummaryStats {
        count,
        mean,
        median,
        std_dev,
        min,
        max,
        sum,
    })
}

/// Bin values into consecutive bins of `bin_width` over
/// `[domain_min, domain_max]`.
///
/// Values outside the domain are dropped (clip-to-domain policy), as are
/// non-finite values. The last bin is truncated at `domain_max` when the
/// domain is not a whole number of widths, and `domain_max` itself counts
/// into it.
pub fn histogram(
    values: &[f64],
    bin_width: f64,
    domain_min: f64,
    domain_max: f64,
) -> VitalsResult<HistogramSummary> {
    if values.is_empty() {
        return Err(VitalsError::EmptyInput(
            "no values for histogram".to_string(),
        ));
    }
    if !(bin_width > 0.0) {
        return Err(VitalsError::Validation(format!(
            "bin width must be positive, got {}",
            bin_width
        )));
    }
    if domain_min >= domain_max {
        return Err(VitalsError::Validation(format!(
            "invalid histogram domain [{}, {}]",
            domain_min, domain_max
        )));
    }

    let span = domain_max - domain_min;
    let n_bins = (span / bin_width).ceil() as usize;

    let mut bin_edges = Vec::with_capacity(n_bins + 1);
    for i in 0..n_bins {
        bin_edges.push(domain_min + i as f64 * bin_width);
    }
    bin_edges.push(domain_max);

    let mut counts = vec![0usize; n_bins];
    let mut dropped = 0usize;

    for &v in values {
        // NaN compares false against both bounds, so test finiteness first
        if !v.is_finite() || v < domain_min || v > domain_max {
            dropped += 1;
            continue;
        }
        let mut idx = ((v - domain_min) / bin_width).floor() as usize;
        if idx >= n_bins {
            // domain_max closes the final bin
            idx = n_bins - 1;
        }
        counts[idx] += 1;
    }

    Ok(HistogramSummary {
        bin_edges,
        counts,
        bin_width,
        total_counted: values.len() - dropped,
        dropped,
    })
}

/// Gaussian kernel-density estimate over the value range.
///
/// Bandwidth follows Silverman's rule of thumb,
/// `0.9 * min(sd, iqr/1.34) * n^(-1/5)`, scaled by `bandwidth_adjust`.
/// Constant data fall back to a unit bandwidth. The curve is sampled on an
/// even grid spanning the data range extended by three bandwidths.
/// Non-finite values are dropped before estimation; `n_samples` counts
/// only the values that contributed.
pub fn kernel_density(values: &[f64], bandwidth_adjust: f64) -> VitalsResult<DensityEstimate> {
    if values.is_empty() {
        return Err(VitalsError::EmptyInput(
            "no values for density estimate".to_string(),
        ));
    }
    if !(bandwidth_adjust > 0.0) {
        return Err(VitalsError::Validation(format!(
            "bandwidth adjust must be positive, got {}",
            bandwidth_adjust
        )));
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(VitalsError::EmptyInput(
            "no finite values for density estimate".to_string(),
        ));
    }

    let n = finite.len();
    let mut sorted = finite.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = finite.iter().sum::<f64>() / n as f64;
    let variance = finite
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / n as f64;
    let sd = variance.sqrt();

    let mut bandwidth = silverman_bandwidth(&sorted, sd) * bandwidth_adjust;
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        bandwidth = 1.0;
    }

    let x_min = sorted[0] - 3.0 * bandwidth;
    let x_max = sorted[n - 1] + 3.0 * bandwidth;
    let step = (x_max - x_min) / (DENSITY_GRID_POINTS - 1) as f64;
    let norm = n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt();

    let mut x = Vec::with_capacity(DENSITY_GRID_POINTS);
    let mut density = Vec::with_capacity(DENSITY_GRID_POINTS);

    for i in 0..DENSITY_GRID_POINTS {
        let x_point = x_min + i as f64 * step;

        let mut acc = 0.0;
        for &v in &finite {
            let z = (x_point - v) / bandwidth;
            acc += (-0.5 * z * z).exp();
        }

        x.push(x_point);
        density.push(acc / norm);
    }

    Ok(DensityEstimate {
        x,
        density,
        bandwidth,
        n_samples: n,
    })
}

fn silverman_bandwidth(sorted: &[f64], sd: f64) -> f64 {
    let n = sorted.len() as f64;
    let iqr = percentile(sorted, 0.75) - percentile(sorted, 0.25);
    let spread = if iqr > 0.0 { sd.min(iqr / 1.34) } else { sd };
    0.9 * spread * n.powf(-0.2)
}

/// Linear-interpolated percentile of pre-sorted values.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_stats() {
        let stats = compute_stats(&[151.0, 153.0, 150.0, 148.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, 148.0);
        assert_eq!(stats.max, 153.0);
        assert!((stats.mean - 150.5).abs() < 1e-9);
        assert!((stats.median - 150.5).abs() < 1e-9);
        assert!((stats.sum - 602.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_stats_empty() {
        let err = compute_stats(&[]).unwrap_err();
        assert!(matches!(err, VitalsError::EmptyInput(_)));
    }

    #[test]
    fn test_histogram_clips_to_domain() {
        // Values below the domain are dropped, 95 and 99 land in the
        // truncated final bin [95, 100].
        let summary = histogram(&[10.0, 20.0, 30.0, 95.0, 99.0], 10.0, 25.0, 100.0).unwrap();

        assert_eq!(summary.total_counted, 3);
        assert_eq!(summary.dropped, 2);
        assert_eq!(summary.counts.len(), 8);
        assert_eq!(summary.bin_edges.len(), 9);
        assert_eq!(summary.bin_edges[0], 25.0);
        assert_eq!(*summary.bin_edges.last().unwrap(), 100.0);

        assert_eq!(summary.counts[0], 1); // 30 in [25, 35)
        assert_eq!(summary.counts[7], 2); // 95, 99 in [95, 100]
        assert_eq!(summary.counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_histogram_drops_non_finite() {
        let summary = histogram(
            &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 30.0],
            10.0,
            25.0,
            100.0,
        )
        .unwrap();

        assert_eq!(summary.dropped, 3);
        assert_eq!(summary.total_counted, 1);
        assert_eq!(summary.counts[0], 1);
        assert_eq!(summary.counts.iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_histogram_domain_max_counts() {
        let summary = histogram(&[100.0], 10.0, 25.0, 100.0).unwrap();
        assert_eq!(summary.total_counted, 1);
        assert_eq!(*summary.counts.last().unwrap(), 1);
    }

    #[test]
    fn test_histogram_invalid_inputs() {
        let err = histogram(&[], 10.0, 0.0, 100.0).unwrap_err();
        assert!(matches!(err, VitalsError::EmptyInput(_)));

        let err = histogram(&[1.0], 0.0, 0.0, 100.0).unwrap_err();
        assert!(matches!(err, VitalsError::Validation(_)));

        let err = histogram(&[1.0], 10.0, 100.0, 0.0).unwrap_err();
        assert!(matches!(err, VitalsError::Validation(_)));
    }

    #[test]
    fn test_kernel_density_integrates_to_one() {
        let values = [
            148.0, 150.0, 150.0, 151.0, 152.0, 153.0, 155.0, 158.0, 160.0, 162.0,
        ];
        let estimate = kernel_density(&values, 1.0).unwrap();

        assert_eq!(estimate.x.len(), 200);
        assert!(estimate.bandwidth > 0.0);
        assert!(estimate.density.iter().all(|d| *d >= 0.0));

        // Trapezoidal mass over the grid should be close to 1
        let mut integral = 0.0;
        for i in 1..estimate.x.len() {
            let dx = estimate.x[i] - estimate.x[i - 1];
            integral += 0.5 * (estimate.density[i] + estimate.density[i - 1]) * dx;
        }
        assert!((integral - 1.0).abs() < 0.05, "integral was {}", integral);
    }

    #[test]
    fn test_kernel_density_adjust_widens_bandwidth() {
        let values = [148.0, 150.0, 151.0, 153.0, 155.0, 158.0];
        let narrow = kernel_density(&values, 0.5).unwrap();
        let wide = kernel_density(&values, 2.0).unwrap();
        assert!(wide.bandwidth > narrow.bandwidth);
    }

    #[test]
    fn test_kernel_density_constant_data() {
        let estimate = kernel_density(&[96.0, 96.0, 96.0], 1.0).unwrap();
        assert_eq!(estimate.bandwidth, 1.0);
        assert!(estimate.density.iter().all(|d| d.is_finite()));
    }

    #[test]
    fn test_kernel_density_invalid_inputs() {
        let err = kernel_density(&[], 1.0).unwrap_err();
        assert!(matches!(err, VitalsError::EmptyInput(_)));

        let err = kernel_density(&[1.0], 0.0).unwrap_err();
        assert!(matches!(err, VitalsError::Validation(_)));
    }

    #[test]
    fn test_kernel_density_drops_non_finite() {
        let clean = kernel_density(&[148.0, 150.0, 152.0], 1.0).unwrap();
        let noisy = kernel_density(&[148.0, f64::NAN, 150.0, 152.0], 1.0).unwrap();

        // A NaN sample must not shift the estimate
        assert_eq!(noisy.n_samples, 3);
        assert_eq!(noisy.bandwidth, clean.bandwidth);
        assert_eq!(noisy.x, clean.x);
        assert!(noisy.density.iter().all(|d| d.is_finite()));

        // Nothing finite left to estimate from
        let err = kernel_density(&[f64::NAN, f64::INFINITY], 1.0).unwrap_err();
        assert!(matches!(err, VitalsError::EmptyInput(_)));
    }
}

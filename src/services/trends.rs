//! Kernel-smoothed trend curves.

use crate::api::types::SmoothedPoint;
use crate::error::{VitalsError, VitalsResult};

/// Compute a smoothed trend using a Gaussian kernel weighted average.
///
/// `bandwidth_frac` is the kernel bandwidth as a fraction of the x range;
/// the curve is evaluated at `n_points` even steps across the range. The
/// renderer draws this as the trend overlay on a time-series panel.
pub fn smoothed_trend(
    x_values: &[f64],
    y_values: &[f64],
    bandwidth_frac: f64,
    n_points: usize,
) -> VitalsResult<Vec<SmoothedPoint>> {
    if x_values.is_empty() {
        return Err(VitalsError::EmptyInput(
            "no values for smoothed trend".to_string(),
        ));
    }
    if x_values.len() != y_values.len() {
        return Err(VitalsError::Validation(format!(
            "x/y length mismatch: {} vs {}",
            x_values.len(),
            y_values.len()
        )));
    }
    if !(bandwidth_frac > 0.0) {
        return Err(VitalsError::Validation(format!(
            "bandwidth fraction must be positive, got {}",
            bandwidth_frac
        )));
    }
    if n_points < 2 {
        return Err(VitalsError::Validation(format!(
            "need at least 2 grid points, got {}",
            n_points
        )));
    }

    let x_min = x_values.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = x_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if x_min == x_max {
        // All x values are the same
        let mean_y = y_values.iter().sum::<f64>() / y_values.len() as f64;
        return Ok(vec![SmoothedPoint {
            x: x_min,
            y_smoothed: mean_y,
            n_samples: y_values.len(),
        }]);
    }

    let x_range = x_max - x_min;
    let bw = bandwidth_frac * x_range;

    let mut smoothed = Vec::with_capacity(n_points);

    for i in 0..n_points {
        let x_point = x_min + (i as f64 / (n_points - 1) as f64) * x_range;

        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        let mut n_significant = 0;

        for (j, &x_val) in x_values.iter().enumerate() {
            let distance = (x_val - x_point).abs();
            let weight = (-0.5 * (distance / bw).powi(2)).exp();

            weighted_sum += weight * y_values[j];
            weight_sum += weight;

            if weight > 0.01 {
                n_significant += 1;
            }
        }

        let y_smoothed = if weight_sum > 0.0 {
            weighted_sum / weight_sum
        } else {
            0.0
        };

        smoothed.push(SmoothedPoint {
            x: x_point,
            y_smoothed,
            n_samples: n_significant,
        });
    }

    Ok(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothed_trend_spans_range() {
        let x: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 140.0 + v / 10.0).collect();

        let trend = smoothed_trend(&x, &y, 0.1, 25).unwrap();
        assert_eq!(trend.len(), 25);
        assert_eq!(trend[0].x, 0.0);
        assert_eq!(trend[24].x, 49.0);

        // Monotone input stays monotone under kernel averaging
        for pair in trend.windows(2) {
            assert!(pair[1].y_smoothed >= pair[0].y_smoothed);
        }
    }

    #[test]
    fn test_smoothed_trend_constant_x() {
        let trend = smoothed_trend(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0], 0.1, 10).unwrap();
        assert_eq!(trend.len(), 1);
        assert!((trend[0].y_smoothed - 2.0).abs() < 1e-9);
        assert_eq!(trend[0].n_samples, 3);
    }

    #[test]
    fn test_smoothed_trend_invalid_inputs() {
        let err = smoothed_trend(&[], &[], 0.1, 10).unwrap_err();
        assert!(matches!(err, VitalsError::EmptyInput(_)));

        let err = smoothed_trend(&[1.0, 2.0], &[1.0], 0.1, 10).unwrap_err();
        assert!(matches!(err, VitalsError::Validation(_)));

        let err = smoothed_trend(&[1.0, 2.0], &[1.0, 2.0], 0.0, 10).unwrap_err();
        assert!(matches!(err, VitalsError::Validation(_)));

        let err = smoothed_trend(&[1.0, 2.0], &[1.0, 2.0], 0.1, 1).unwrap_err();
        assert!(matches!(err, VitalsError::Validation(_)));
    }
}

//! Gaussian kernel density estimation

use serde::Serialize;

/// Gaussian kernel normalization constant: 1/sqrt(2*pi)
const GAUSSIAN_NORM: f64 = 0.3989422804014327;

/// A density estimate evaluated on an evenly spaced grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub grid: Vec<f64>,
    pub density: Vec<f64>,
    pub bandwidth: f64,
}

/// Linearly interpolated sample quantile of sorted data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Silverman's rule of thumb, `0.9 * min(sd, iqr / 1.34) * n^-0.2`.
///
/// Falls back to the standard deviation when the IQR is zero. `None` when
/// there are fewer than two values or no spread at all.
pub fn silverman_bandwidth(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1) as f64;
    let sd = var.sqrt();

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let iqr = quantile(&sorted, 0.75) - quantile(&sorted, 0.25);

    let mut spread = sd.min(iqr / 1.34);
    if spread <= 0.0 {
        spread = sd;
    }
    if !spread.is_finite() || spread <= 0.0 {
        return None;
    }
    Some(0.9 * spread * (n as f64).powf(-0.2))
}

/// Estimate the density of `values` on `points` grid positions spanning the
/// data range widened by `expand` (a fraction of the span, split evenly on
/// both sides).
pub fn gaussian_kde(values: &[f64], points: usize, expand: f64) -> Option<DensityCurve> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if points < 2 {
        return None;
    }
    let bandwidth = silverman_bandwidth(&finite)?;

    let (min, max) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;
    let lo = min - expand * span * 0.5;
    let hi = max + expand * span * 0.5;
    let step = (hi - lo) / (points - 1) as f64;

    let n = finite.len() as f64;
    let grid: Vec<f64> = (0..points).map(|i| lo + step * i as f64).collect();
    let density = grid
        .iter()
        .map(|&x| {
            finite
                .iter()
                .map(|&v| {
                    let u = (x - v) / bandwidth;
                    GAUSSIAN_NORM * (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                / (n * bandwidth)
        })
        .collect();

    Some(DensityCurve {
        grid,
        density,
        bandwidth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bandwidth_needs_spread() {
        assert!(silverman_bandwidth(&[]).is_none());
        assert!(silverman_bandwidth(&[3.0]).is_none());
        assert!(silverman_bandwidth(&[3.0, 3.0, 3.0]).is_none());
    }

    #[test]
    fn test_bandwidth_known_value() {
        // sd = sqrt(2.5), iqr = 2 -> iqr/1.34 is smaller
        let bw = silverman_bandwidth(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let expected = 0.9 * (2.0 / 1.34) * 5f64.powf(-0.2);
        assert!((bw - expected).abs() < 1e-12);
    }

    #[test]
    fn test_bandwidth_falls_back_to_sd_for_zero_iqr() {
        let bw = silverman_bandwidth(&[1.0, 1.0, 1.0, 1.0, 1.0, 9.0]).unwrap();
        assert!(bw > 0.0);
    }

    #[test]
    fn test_kde_grid_shape() {
        let curve = gaussian_kde(&[1.0, 2.0, 2.5, 4.0], 512, 0.1).unwrap();
        assert_eq!(curve.grid.len(), 512);
        assert_eq!(curve.density.len(), 512);
        assert!((curve.grid[0] - 0.85).abs() < 1e-9);
        assert!((curve.grid[511] - 4.15).abs() < 1e-9);
        assert!(curve.density.iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn test_kde_integrates_close_to_one() {
        let values: Vec<f64> = (0..200).map(|i| (i % 17) as f64 + (i % 5) as f64 * 0.3).collect();
        let curve = gaussian_kde(&values, 2000, 2.0).unwrap();
        let step = curve.grid[1] - curve.grid[0];
        let area: f64 = curve.density.iter().sum::<f64>() * step;
        assert!((area - 1.0).abs() < 0.02, "area was {area}");
    }

    #[test]
    fn test_kde_degenerate() {
        assert!(gaussian_kde(&[], 512, 0.1).is_none());
        assert!(gaussian_kde(&[2.0], 512, 0.1).is_none());
        assert!(gaussian_kde(&[1.0, 2.0], 1, 0.1).is_none());
    }
}

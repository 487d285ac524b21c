//! Pearson correlation

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from the mean
fn sum_sq_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum()
}

/// Pearson correlation coefficient of two equally long series.
///
/// Returns `NaN` for fewer than two pairs, mismatched lengths or a series
/// without variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let mx = mean(x);
    let my = mean(y);
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }

    if vx == 0.0 || vy == 0.0 {
        return f64::NAN;
    }
    (cov / (vx.sqrt() * vy.sqrt())).clamp(-1.0, 1.0)
}

/// Square, symmetric correlation matrix of the given columns.
///
/// The diagonal is exactly 1 for every column with variance, `NaN` otherwise.
pub fn correlation_matrix(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = columns.len();
    let mut matrix = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        let has_variance = columns[i].len() >= 2 && sum_sq_dev(&columns[i]) > 0.0;
        matrix[i][i] = if has_variance { 1.0 } else { f64::NAN };

        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive_and_negative() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &up) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert!((pearson(&x, &y) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[], &[]).is_nan());
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_nan());
    }

    #[test]
    fn test_matrix_shape_symmetry_and_diagonal() {
        let columns = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 1.0, 3.0, 2.0],
            vec![0.5, 0.1, 0.9, 0.3],
        ];
        let matrix = correlation_matrix(&columns);
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix[i].len(), 3);
            assert_eq!(matrix[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }
    }

    #[test]
    fn test_matrix_with_constant_column() {
        let columns = vec![vec![1.0, 2.0, 3.0], vec![7.0, 7.0, 7.0]];
        let matrix = correlation_matrix(&columns);
        assert_eq!(matrix[0][0], 1.0);
        assert!(matrix[1][1].is_nan());
        assert!(matrix[0][1].is_nan());
    }

    #[test]
    fn test_matrix_of_empty_columns() {
        let matrix = correlation_matrix(&[vec![], vec![]]);
        assert_eq!(matrix.len(), 2);
        assert!(matrix.iter().flatten().all(|v| v.is_nan()));
    }
}

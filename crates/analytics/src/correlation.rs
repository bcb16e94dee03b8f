//! Pairwise Pearson correlation over the sampled scatter cloud.

use ocean_common::round_to;

use crate::scatter::ScatterPoint;

/// Variable order of the correlation matrix.
pub const VARIABLES: [&str; 4] = ["sst", "chlorophyll", "front", "shark_activity"];

/// One matrix cell addressed by variable names.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationCell {
    pub x: &'static str,
    pub y: &'static str,
    pub value: f64,
}

/// Dense row-major correlation matrix including the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub variables: [&'static str; 4],
    pub cells: Vec<CorrelationCell>,
}

/// Population Pearson correlation of the sampled point values, rounded to 2.
///
/// Works over the rounded values the scatter cloud carries. A variable with
/// zero variance correlates 0 with everything, itself included, and an empty
/// cloud yields an all-zero matrix.
pub fn correlation_matrix(points: &[ScatterPoint]) -> CorrelationMatrix {
    let series: [Vec<f64>; 4] = [
        points.iter().map(|p| p.sst).collect(),
        points.iter().map(|p| p.chl).collect(),
        points.iter().map(|p| p.front).collect(),
        points.iter().map(|p| p.activity).collect(),
    ];
    let means: Vec<f64> = series.iter().map(|values| mean(values)).collect();

    let covariance = |a: usize, b: usize| {
        let products: Vec<f64> = series[a]
            .iter()
            .zip(&series[b])
            .map(|(x, y)| (x - means[a]) * (y - means[b]))
            .collect();
        mean(&products)
    };
    let variances: Vec<f64> = (0..VARIABLES.len()).map(|i| covariance(i, i)).collect();

    let mut cells = Vec::with_capacity(VARIABLES.len() * VARIABLES.len());
    for row in 0..VARIABLES.len() {
        for col in 0..VARIABLES.len() {
            let denom = (variances[row] * variances[col]).sqrt();
            let value = if denom == 0.0 {
                0.0
            } else {
                covariance(row, col) / denom
            };
            cells.push(CorrelationCell {
                x: VARIABLES[col],
                y: VARIABLES[row],
                value: round_to(value, 2),
            });
        }
    }

    CorrelationMatrix {
        variables: VARIABLES,
        cells,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(sst: f64, chl: f64, front: f64, activity: f64) -> ScatterPoint {
        ScatterPoint {
            lat: 40.0,
            lon: -70.0,
            sst,
            chl,
            front,
            activity,
            tagged: false,
        }
    }

    /// SST rises, front falls, chlorophyll stays flat, activity tracks SST.
    fn cloud() -> Vec<ScatterPoint> {
        vec![
            point(1.0, 5.0, 2.0, 0.1),
            point(2.0, 5.0, 1.0, 0.2),
            point(3.0, 5.0, 0.0, 0.3),
        ]
    }

    fn value_at(matrix: &CorrelationMatrix, x: &str, y: &str) -> f64 {
        matrix
            .cells
            .iter()
            .find(|cell| cell.x == x && cell.y == y)
            .unwrap()
            .value
    }

    #[test]
    fn test_matrix_shape_and_order() {
        let matrix = correlation_matrix(&cloud());
        assert_eq!(matrix.variables, VARIABLES);
        assert_eq!(matrix.cells.len(), 16);

        // Row-major: the first row is y = "sst" across all x.
        assert_eq!(matrix.cells[0].y, "sst");
        assert_eq!(matrix.cells[0].x, "sst");
        assert_eq!(matrix.cells[1].x, "chlorophyll");
        assert_eq!(matrix.cells[4].y, "chlorophyll");
        assert_eq!(matrix.cells[4].x, "sst");
    }

    #[test]
    fn test_diagonal_of_varying_series_is_one() {
        let matrix = correlation_matrix(&cloud());
        assert_eq!(value_at(&matrix, "sst", "sst"), 1.0);
        assert_eq!(value_at(&matrix, "front", "front"), 1.0);
        assert_eq!(value_at(&matrix, "shark_activity", "shark_activity"), 1.0);
    }

    #[test]
    fn test_zero_variance_correlates_zero_even_with_itself() {
        let matrix = correlation_matrix(&cloud());
        assert_eq!(value_at(&matrix, "chlorophyll", "chlorophyll"), 0.0);
        assert_eq!(value_at(&matrix, "chlorophyll", "sst"), 0.0);
        assert_eq!(value_at(&matrix, "shark_activity", "chlorophyll"), 0.0);
    }

    #[test]
    fn test_perfect_linear_relationships() {
        let matrix = correlation_matrix(&cloud());
        assert_eq!(value_at(&matrix, "sst", "shark_activity"), 1.0);
        assert_eq!(value_at(&matrix, "front", "sst"), -1.0);
        assert_eq!(value_at(&matrix, "front", "shark_activity"), -1.0);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let matrix = correlation_matrix(&cloud());
        for x in VARIABLES {
            for y in VARIABLES {
                assert_eq!(value_at(&matrix, x, y), value_at(&matrix, y, x));
            }
        }
    }

    #[test]
    fn test_empty_cloud_is_all_zero() {
        let matrix = correlation_matrix(&[]);
        assert_eq!(matrix.cells.len(), 16);
        assert!(matrix.cells.iter().all(|cell| cell.value == 0.0));
    }
}

use crate::prelude::*;
use crate::rand_array;

/// Fully connected weight matrix plus the delta computed for it in the last
/// backpropagation step. Row `rows - 1` holds the bias weights.
#[derive(Debug, Clone)]
pub struct Dense {
    pub(crate) w: Array2<f64>,
    pub(crate) delta: Array2<f64>,
}

impl Dense {
    /// `rows` counts the bias row.
    pub fn new<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        if rows < 2 || cols == 0 {
            return Err(NNError::InvalidConfiguration(
                "Layer dimensions must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            w: rand_array!(rng, rows, cols),
            delta: Array2::zeros((rows, cols)),
        })
    }

    pub fn from_weights(w: Array2<f64>, rows: usize, cols: usize, name: &str) -> Result<Self> {
        if w.dim() != (rows, cols) {
            return Err(NNError::InvalidWeightShape(format!(
                "{} expected {:?}, got {:?}",
                name,
                (rows, cols),
                w.dim()
            )));
        }
        Ok(Self {
            w,
            delta: Array2::zeros((rows, cols)),
        })
    }

    pub fn typ(&self) -> String {
        "Dense".into()
    }

    pub fn param_count(&self) -> usize {
        self.w.len()
    }

    /// `net[j] = Σ_i input[i] * w[i][j]`, summed in row order.
    pub fn weighted_sums(&self, input: &Array1<f64>, net: &mut Array1<f64>) {
        let (rows, cols) = self.w.dim();
        for j in 0..cols {
            let mut sum = 0.0;
            for i in 0..rows {
                sum += input[i] * self.w[[i, j]];
            }
            net[j] = sum;
        }
    }

    pub fn apply_delta(&mut self) {
        self.w += &self.delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_weighted_sums_include_bias_row() {
        let layer = Dense::from_weights(array![[1.0, 2.0], [3.0, 4.0], [0.5, -0.5]], 3, 2, "w").unwrap();
        let input = array![1.0, -1.0, 1.0];
        let mut net = Array1::zeros(2);
        layer.weighted_sums(&input, &mut net);
        assert_eq!(net, array![-1.5, -2.5]);
    }

    #[test]
    fn test_apply_delta() {
        let mut layer = Dense::from_weights(array![[1.0], [2.0]], 2, 1, "w").unwrap();
        layer.delta = array![[0.25], [-1.0]];
        layer.apply_delta();
        assert_eq!(layer.w, array![[1.25], [1.0]]);
    }

    #[test]
    fn test_from_weights_rejects_wrong_shape() {
        let err = Dense::from_weights(Array2::zeros((2, 2)), 3, 2, "w1").unwrap_err();
        assert!(matches!(err, NNError::InvalidWeightShape(_)));
    }

    #[test]
    fn test_new_rejects_empty_layer() {
        let mut rng = seeded_rng(Some(1));
        assert!(Dense::new(1, 3, &mut rng).is_err());
        assert!(Dense::new(3, 0, &mut rng).is_err());
        let layer = Dense::new(3, 2, &mut rng).unwrap();
        assert_eq!(layer.param_count(), 6);
        assert!(layer.delta.iter().all(|&d| d == 0.0));
    }
}

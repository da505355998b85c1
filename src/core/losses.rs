use crate::prelude::*;

/// Squared error of one pattern averaged over the output units:
/// `Σ_k (expected[k] - actual[k])² / n`.
pub fn squared_error(expected: ArrayView1<f64>, actual: ArrayView1<f64>) -> Result<f64> {
    if expected.len() != actual.len() {
        return Err(NNError::InvalidOutputShape {
            expected: actual.len(),
            actual: expected.len(),
        });
    }
    let mut err = 0.0;
    for (e, a) in expected.iter().zip(actual.iter()) {
        err += (e - a).powi(2);
    }
    Ok(err / actual.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_squared_error_averages_over_outputs() {
        let expected = array![1.0, 0.0];
        let actual = array![0.5, 0.5];
        assert_eq!(squared_error(expected.view(), actual.view()).unwrap(), 0.25);
    }

    #[test]
    fn test_squared_error_zero_on_match() {
        let v = array![0.3, -0.7, 0.1];
        assert_eq!(squared_error(v.view(), v.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_squared_error_shape_mismatch() {
        let err = squared_error(array![1.0].view(), array![1.0, 2.0].view()).unwrap_err();
        assert!(matches!(err, NNError::InvalidOutputShape { expected: 2, actual: 1 }));
    }
}

use crate::prelude::*;

/// Paired input and expected-output patterns, one row per pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub(crate) inputs: Array2<f64>,
    pub(crate) expected: Array2<f64>,
}

impl TrainingSet {
    pub fn new(inputs: Array2<f64>, expected: Array2<f64>) -> Result<Self> {
        if inputs.nrows() != expected.nrows() {
            return Err(NNError::PatternCountMismatch {
                inputs: inputs.nrows(),
                expected: expected.nrows(),
            });
        }
        if inputs.nrows() == 0 {
            return Err(NNError::EmptyTrainingSet);
        }
        Ok(Self { inputs, expected })
    }

    /// Builds the set from row vectors; every row of a side must have the same length.
    pub fn from_rows(inputs: &[Vec<f64>], expected: &[Vec<f64>]) -> Result<Self> {
        Self::new(rows_to_array(inputs)?, rows_to_array(expected)?)
    }

    pub fn len(&self) -> usize {
        self.inputs.nrows()
    }

    /// Always false: construction rejects sets without patterns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn input_width(&self) -> usize {
        self.inputs.ncols()
    }

    pub fn output_width(&self) -> usize {
        self.expected.ncols()
    }

    pub fn inputs(&self) -> ArrayView2<'_, f64> {
        self.inputs.view()
    }

    pub fn expected(&self) -> ArrayView2<'_, f64> {
        self.expected.view()
    }

    /// `(input, expected)` rows in set order.
    pub fn patterns(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, ArrayView1<'_, f64>)> {
        self.inputs.outer_iter().zip(self.expected.outer_iter())
    }
}

fn rows_to_array(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let width = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != width) {
        return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape).into());
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(Array2::from_shape_vec((rows.len(), width), flat)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_rows() {
        let set = TrainingSet::from_rows(
            &[vec![0.0, 1.0], vec![1.0, 1.0]],
            &[vec![1.0], vec![0.0]],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.input_width(), 2);
        assert_eq!(set.output_width(), 1);
        assert_eq!(set.inputs(), array![[0.0, 1.0], [1.0, 1.0]]);
    }

    #[test]
    fn test_patterns_keep_order() {
        let set = TrainingSet::new(array![[1.0], [2.0], [3.0]], array![[10.0], [20.0], [30.0]]).unwrap();
        let pairs: Vec<(f64, f64)> = set.patterns().map(|(x, y)| (x[0], y[0])).collect();
        assert_eq!(pairs, vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
    }

    #[test]
    fn test_rejects_count_mismatch() {
        let err = TrainingSet::new(array![[1.0], [2.0]], array![[1.0]]).unwrap_err();
        assert!(matches!(err, NNError::PatternCountMismatch { inputs: 2, expected: 1 }));
    }

    #[test]
    fn test_rejects_empty() {
        let err = TrainingSet::from_rows(&[], &[]).unwrap_err();
        assert!(matches!(err, NNError::EmptyTrainingSet));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = TrainingSet::from_rows(&[vec![1.0, 2.0], vec![1.0]], &[vec![1.0], vec![0.0]]).unwrap_err();
        assert!(matches!(err, NNError::ShapeError(_)));
        let err = TrainingSet::from_rows(&[vec![1.0], vec![2.0, 3.0], vec![]], &vec![vec![1.0]; 3]).unwrap_err();
        assert!(matches!(err, NNError::ShapeError(_)));
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NNError {
    // Construction errors
    #[error("Invalid network configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid weight shape: {0}")]
    InvalidWeightShape(String),

    // Training data errors
    #[error("No training data set. Call set_training_data() before training")]
    MissingTrainingData,
    #[error("Training set has no patterns")]
    EmptyTrainingSet,
    #[error("Training set has {inputs} input patterns but {expected} expected outputs")]
    PatternCountMismatch { inputs: usize, expected: usize },

    // Shape errors
    #[error("Invalid input shape: expected {expected} values, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
    #[error("Invalid output shape: expected {expected} values, got {actual}")]
    InvalidOutputShape { expected: usize, actual: usize },
    #[error("Shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),

    // Training outcome
    #[error("Training did not reach the minimum error after {epochs} epochs (error {error})")]
    NotConverged {
        epochs: usize,
        error: f64,
        /// Mean squared error after each epoch run.
        error_history: Vec<f64>,
    },

    // File operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Plot error: {0}")]
    PlotError(String),
}

pub type Result<T> = std::result::Result<T, NNError>;

// src/core.rs
pub mod activations;
pub mod layers;
pub mod losses;
pub mod momentum;

// Re-export commonly used items
pub use activations::{Activation, ActivationFns};
pub use layers::Dense;
pub use losses::squared_error;
pub use momentum::MomentumWindow;

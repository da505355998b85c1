extern crate plotters;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod network;
pub mod output;
pub mod prelude;
pub mod utils;


// Re-export types
pub use config::NetworkConfig;
pub use crate::core::{Activation, MomentumWindow};
pub use data::TrainingSet;
pub use error::{NNError, Result};
pub use network::{Network, TrainingReport};

pub mod benchmark {
    pub mod functions;
}

pub mod plot {
    pub mod plot_errors_over_epochs;
}

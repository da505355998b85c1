pub use serde::{Serialize, Deserialize};
pub use log::{debug, info, warn};

pub use ndarray::*;
pub use ndarray_rand::RandomExt;
pub use ndarray_rand::rand_distr::Uniform;
pub use rand::rngs::StdRng;
pub use rand::{Rng, SeedableRng};

pub use crate::config::NetworkConfig;
pub use crate::data::TrainingSet;
pub use crate::error::*;
pub use crate::network::{Network, TrainingReport};
pub use crate::utils::seeded_rng;

// Internal re-exports
pub use crate::core::{
    Activation,
    ActivationFns,
    Dense,
    MomentumWindow,
    squared_error,
};

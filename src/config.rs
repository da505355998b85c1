use crate::prelude::*;

/// Topology and hyperparameters of a [`Network`].
///
/// Only the unit counts are required when deserializing; the rest fall back
/// to the defaults below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_min_error")]
    pub min_error: f64,
    #[serde(default = "default_activation")]
    pub activation: Activation,
    /// Number of past epoch deltas kept for the momentum gate, 0 disables it.
    #[serde(default)]
    pub window_size: usize,
    /// Fixed rng seed for weight initialization, fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_learning_rate() -> f64 {
    0.5
}

fn default_min_error() -> f64 {
    0.01
}

fn default_activation() -> Activation {
    Activation::Sigmoid
}

impl NetworkConfig {
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Self {
        Self {
            inputs,
            hidden,
            outputs,
            learning_rate: default_learning_rate(),
            min_error: default_min_error(),
            activation: default_activation(),
            window_size: 0,
            seed: None,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn min_error(mut self, min_error: f64) -> Self {
        self.min_error = min_error;
        self
    }

    pub fn activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 || self.hidden == 0 || self.outputs == 0 {
            return Err(NNError::InvalidConfiguration(format!(
                "unit counts must be greater than 0, got {}-{}-{}",
                self.inputs, self.hidden, self.outputs
            )));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(NNError::InvalidConfiguration(format!(
                "learning rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(self.min_error.is_finite() && self.min_error > 0.0) {
            return Err(NNError::InvalidConfiguration(format!(
                "minimum error must be positive, got {}",
                self.min_error
            )));
        }
        Ok(())
    }

    pub fn build<'a>(self) -> Result<Network<'a>> {
        Network::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_chain() {
        let config = NetworkConfig::new(2, 3, 1)
            .learning_rate(0.2)
            .min_error(1e-3)
            .activation(Activation::Tanh)
            .window_size(4)
            .seed(9);
        assert_eq!(config.learning_rate, 0.2);
        assert_eq!(config.min_error, 1e-3);
        assert_eq!(config.activation, Activation::Tanh);
        assert_eq!(config.window_size, 4);
        assert_eq!(config.seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_units() {
        for config in [
            NetworkConfig::new(0, 2, 1),
            NetworkConfig::new(2, 0, 1),
            NetworkConfig::new(2, 2, 0),
        ] {
            assert!(matches!(config.validate(), Err(NNError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn test_validate_rejects_learning_rate_out_of_range() {
        for lr in [0.0, -0.1, 1.5, f64::NAN] {
            let config = NetworkConfig::new(2, 2, 1).learning_rate(lr);
            assert!(config.validate().is_err(), "lr {} accepted", lr);
        }
        assert!(NetworkConfig::new(2, 2, 1).learning_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_min_error() {
        for min_error in [0.0, -1.0, f64::INFINITY] {
            let config = NetworkConfig::new(2, 2, 1).min_error(min_error);
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: NetworkConfig = toml::from_str(
            r#"
            inputs = 2
            hidden = 4
            outputs = 1
            activation = "BipolarSigmoid"
            window_size = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.min_error, 0.01);
        assert_eq!(config.activation, Activation::BipolarSigmoid);
        assert_eq!(config.window_size, 3);
        assert_eq!(config.seed, None);
    }
}

use crate::prelude::*;

/// Outcome of [`Network::train`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Epochs run by this call.
    pub epochs: usize,
    pub final_error: f64,
    /// Mean squared error after each epoch of this call.
    pub error_history: Vec<f64>,
}

/// Single hidden layer network trained with per-pattern backpropagation.
///
/// Activation buffers are owned scratch space reused by every forward pass.
/// The last slot of the input and hidden buffers is the bias unit and always
/// holds `1.0`. Callers only ever see read-only views of them.
#[derive(Debug, Clone)]
pub struct Network<'a> {
    config: NetworkConfig,
    activation: ActivationFns,

    x: Array1<f64>,
    net_y: Array1<f64>,
    y: Array1<f64>,
    net_z: Array1<f64>,
    z: Array1<f64>,

    // input -> hidden, (inputs + 1) x hidden
    hidden: Dense,
    // hidden -> output, (hidden + 1) x outputs
    output: Dense,

    hidden_history: MomentumWindow,
    output_history: MomentumWindow,

    epoch: usize,
    training: Option<&'a TrainingSet>,
}

impl<'a> Network<'a> {
    /// Creates a network with uniform `[-1, 1)` weights drawn from the configured seed.
    pub fn new(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let hidden = Dense::new(config.inputs + 1, config.hidden, &mut rng)?;
        let output = Dense::new(config.hidden + 1, config.outputs, &mut rng)?;
        Ok(Self::assemble(config, hidden, output))
    }

    /// Creates a network with the given weights. The bias weights are the last row of each matrix.
    pub fn with_weights(config: NetworkConfig, w1: Array2<f64>, w2: Array2<f64>) -> Result<Self> {
        config.validate()?;
        let hidden = Dense::from_weights(w1, config.inputs + 1, config.hidden, "input->hidden")?;
        let output = Dense::from_weights(w2, config.hidden + 1, config.outputs, "hidden->output")?;
        Ok(Self::assemble(config, hidden, output))
    }

    fn assemble(config: NetworkConfig, hidden: Dense, output: Dense) -> Self {
        let mut x = Array1::zeros(config.inputs + 1);
        x[config.inputs] = 1.0;
        let mut y = Array1::zeros(config.hidden + 1);
        y[config.hidden] = 1.0;

        Self {
            activation: config.activation.functions(),
            x,
            net_y: Array1::zeros(config.hidden),
            y,
            net_z: Array1::zeros(config.outputs),
            z: Array1::zeros(config.outputs),
            hidden,
            output,
            hidden_history: MomentumWindow::new(config.window_size),
            output_history: MomentumWindow::new(config.window_size),
            epoch: 0,
            training: None,
            config,
        }
    }

    pub fn summary(&self) -> String {
        let mut res = "\nNetwork (single hidden layer)\n".to_string();
        res.push_str("-------------------------------------------------------------\n");
        res.push_str("Layer (Type)\t\t Weights\t\t No.of params\n");
        for (name, layer) in [("hidden", &self.hidden), ("output", &self.output)] {
            let (rows, cols) = layer.w.dim();
            res.push_str(&format!(
                "{} ({})\t\t ({}, {})\t\t  {}\n",
                name,
                layer.typ(),
                rows,
                cols,
                layer.param_count()
            ));
        }
        res.push_str("-------------------------------------------------------------\n");
        res.push_str(&format!(
            "Total params: {}\n",
            self.hidden.param_count() + self.output.param_count()
        ));
        res.push_str(&format!(
            "Activation: {:?}, learning rate: {}, min error: {}, window: {}\n",
            self.config.activation,
            self.config.learning_rate,
            self.config.min_error,
            self.config.window_size
        ));
        res
    }

    /// Keeps a borrow of `data` for training. Its widths must match the topology.
    pub fn set_training_data(&mut self, data: &'a TrainingSet) -> Result<()> {
        if data.input_width() != self.config.inputs {
            return Err(NNError::InvalidInputShape {
                expected: self.config.inputs,
                actual: data.input_width(),
            });
        }
        if data.output_width() != self.config.outputs {
            return Err(NNError::InvalidOutputShape {
                expected: self.config.outputs,
                actual: data.output_width(),
            });
        }
        self.training = Some(data);
        Ok(())
    }

    /// Runs a forward pass; the result is available through [`Network::output`].
    pub fn forward(&mut self, input: &[f64]) -> Result<()> {
        self.load_input(ArrayView1::from(input))?;
        self.propagate();
        Ok(())
    }

    /// Forward pass returning the output activations.
    pub fn infer(&mut self, input: &[f64]) -> Result<ArrayView1<'_, f64>> {
        self.forward(input)?;
        Ok(self.z.view())
    }

    /// Computes the weight deltas for `expected` and applies them.
    /// Must follow a [`Network::forward`] call with the matching input.
    pub fn backpropagate(&mut self, expected: &[f64]) -> Result<()> {
        self.backpropagate_view(ArrayView1::from(expected))
    }

    /// One pass over the training set, updating the weights after every pattern.
    pub fn train_epoch(&mut self) -> Result<()> {
        let data = self.training.ok_or(NNError::MissingTrainingData)?;
        for (input, expected) in data.patterns() {
            self.load_input(input)?;
            self.propagate();
            self.backpropagate_view(expected)?;
        }
        self.epoch += 1;

        if self.config.window_size > 0 {
            self.output_history.push(self.output.delta.clone());
            self.hidden_history.push(self.hidden.delta.clone());
        }
        Ok(())
    }

    /// Mean over all patterns of the per-pattern squared error averaged over outputs.
    pub fn mean_squared_error(&mut self) -> Result<f64> {
        let data = self.training.ok_or(NNError::MissingTrainingData)?;
        let mut total = 0.0;
        for (input, expected) in data.patterns() {
            self.load_input(input)?;
            self.propagate();
            total += squared_error(expected, self.z.view())?;
        }
        Ok(total / data.len() as f64)
    }

    /// Trains until the error drops to `min_error`. At least one epoch runs.
    ///
    /// Without `max_epochs` this never returns on data the network cannot fit.
    pub fn train(&mut self, max_epochs: Option<usize>) -> Result<TrainingReport> {
        let data = self.training.ok_or(NNError::MissingTrainingData)?;
        info!(
            "Learning process started: {}-{}-{} network, {} patterns",
            self.config.inputs,
            self.config.hidden,
            self.config.outputs,
            data.len()
        );

        let mut error_history = Vec::new();
        loop {
            self.train_epoch()?;
            let error = self.mean_squared_error()?;
            error_history.push(error);
            debug!("Epoch: {} error: {}", self.epoch, error);

            let epochs = error_history.len();
            if error <= self.config.min_error {
                info!("Converged after {} epochs, error {}", epochs, error);
                return Ok(TrainingReport {
                    epochs,
                    final_error: error,
                    error_history,
                });
            }
            if max_epochs.is_some_and(|max| epochs >= max) {
                warn!("Stopped after {} epochs without converging, error {}", epochs, error);
                return Err(NNError::NotConverged {
                    epochs,
                    error,
                    error_history,
                });
            }
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn output(&self) -> ArrayView1<'_, f64> {
        self.z.view()
    }

    /// Input buffer including the trailing bias slot.
    pub fn input_activations(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    /// Hidden outputs including the trailing bias slot.
    pub fn hidden_activations(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    pub fn input_hidden_weights(&self) -> ArrayView2<'_, f64> {
        self.hidden.w.view()
    }

    pub fn hidden_output_weights(&self) -> ArrayView2<'_, f64> {
        self.output.w.view()
    }

    pub fn input_hidden_deltas(&self) -> ArrayView2<'_, f64> {
        self.hidden.delta.view()
    }

    pub fn hidden_output_deltas(&self) -> ArrayView2<'_, f64> {
        self.output.delta.view()
    }

    pub fn input_hidden_history(&self) -> &MomentumWindow {
        &self.hidden_history
    }

    pub fn hidden_output_history(&self) -> &MomentumWindow {
        &self.output_history
    }

    fn load_input(&mut self, input: ArrayView1<f64>) -> Result<()> {
        let n = self.config.inputs;
        if input.len() != n {
            return Err(NNError::InvalidInputShape {
                expected: n,
                actual: input.len(),
            });
        }
        self.x.slice_mut(s![..n]).assign(&input);
        Ok(())
    }

    fn propagate(&mut self) {
        let forward = self.activation.forward;

        self.hidden.weighted_sums(&self.x, &mut self.net_y);
        for j in 0..self.config.hidden {
            self.y[j] = forward(self.net_y[j]);
        }

        self.output.weighted_sums(&self.y, &mut self.net_z);
        for k in 0..self.config.outputs {
            self.z[k] = forward(self.net_z[k]);
        }
    }

    fn backpropagate_view(&mut self, expected: ArrayView1<f64>) -> Result<()> {
        let n_in = self.config.inputs;
        let n_hid = self.config.hidden;
        let n_out = self.config.outputs;
        if expected.len() != n_out {
            return Err(NNError::InvalidOutputShape {
                expected: n_out,
                actual: expected.len(),
            });
        }
        let derivative = self.activation.derivative;
        let lr = self.config.learning_rate;

        let f_o: Array1<f64> = (0..n_out)
            .map(|k| (expected[k] - self.z[k]) * derivative(self.net_z[k]))
            .collect();

        for j in 0..=n_hid {
            for k in 0..n_out {
                self.output.delta[[j, k]] = self.output_history.gate(lr * f_o[k] * self.y[j], j, k);
            }
        }

        // Uses the weights from before this update; the bias row has no upstream unit.
        let f_h: Array1<f64> = (0..n_hid)
            .map(|j| {
                let mut net = 0.0;
                for k in 0..n_out {
                    net += f_o[k] * self.output.w[[j, k]];
                }
                net * derivative(self.net_y[j])
            })
            .collect();

        for i in 0..=n_in {
            for j in 0..n_hid {
                self.hidden.delta[[i, j]] = self.hidden_history.gate(lr * f_h[j] * self.x[i], i, j);
            }
        }

        self.output.apply_delta();
        self.hidden.apply_delta();
        Ok(())
    }
}

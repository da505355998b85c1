use anyhow::{bail, Context, Result};
use bpnn::benchmark::functions::LogicGate;
use bpnn::output::write_error_history_to_csv;
use bpnn::plot::plot_errors_over_epochs::plot_errors_over_epochs;
use bpnn::prelude::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum GateChoice {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl GateChoice {
    fn to_gate(self) -> LogicGate {
        match self {
            GateChoice::And => LogicGate::And,
            GateChoice::Or => LogicGate::Or,
            GateChoice::Nand => LogicGate::Nand,
            GateChoice::Nor => LogicGate::Nor,
            GateChoice::Xor => LogicGate::Xor,
            GateChoice::Xnor => LogicGate::Xnor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum ActivationChoice {
    Sigmoid,
    BipolarSigmoid,
    Tanh,
}

impl ActivationChoice {
    fn to_activation(self) -> Activation {
        match self {
            ActivationChoice::Sigmoid => Activation::Sigmoid,
            ActivationChoice::BipolarSigmoid => Activation::BipolarSigmoid,
            ActivationChoice::Tanh => Activation::Tanh,
        }
    }
}

/// Train a single hidden layer network on a two-input logic function.
#[derive(Parser, Debug)]
#[command(name = "train_logic")]
struct Cli {
    /// Logic function to learn
    #[arg(long, value_enum, default_value_t = GateChoice::Xor)]
    gate: GateChoice,

    /// Hidden units
    #[arg(long, default_value_t = 3)]
    hidden: usize,

    #[arg(long, value_enum, default_value_t = ActivationChoice::Sigmoid)]
    activation: ActivationChoice,

    /// Learning rate in (0, 1]
    #[arg(long, default_value_t = 0.5)]
    learning_rate: f64,

    /// Stop once the mean squared error is at or below this value
    #[arg(long, default_value_t = 0.01)]
    min_error: f64,

    /// Momentum window size, 0 disables the gate
    #[arg(long, default_value_t = 0)]
    window: usize,

    /// Seed for weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many epochs
    #[arg(long, default_value_t = 50_000)]
    max_epochs: usize,

    /// TOML network config; overrides the topology and hyperparameter flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the per-epoch error history as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Render the per-epoch error history as PNG
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<NetworkConfig> {
    let config: NetworkConfig = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => {
            let mut config = NetworkConfig::new(2, cli.hidden, 1)
                .learning_rate(cli.learning_rate)
                .min_error(cli.min_error)
                .activation(cli.activation.to_activation())
                .window_size(cli.window);
            config.seed = cli.seed;
            config
        }
    };
    if config.inputs != 2 || config.outputs != 1 {
        bail!("logic functions need a 2-input, 1-output network");
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.max_epochs == 0 {
        bail!("--max-epochs must be >= 1");
    }

    let config = load_config(&cli)?;
    let gate = cli.gate.to_gate();
    let data = gate.truth_table(config.activation);

    let mut network = config.build()?;
    println!("{}", network.summary());
    network.set_training_data(&data)?;

    let (error_history, converged) = match network.train(Some(cli.max_epochs)) {
        Ok(report) => {
            println!(
                "{:?} learned in {} epochs, error {}",
                gate, report.epochs, report.final_error
            );
            (report.error_history, true)
        }
        Err(NNError::NotConverged {
            epochs,
            error,
            error_history,
        }) => {
            println!("{:?} not learned after {} epochs, error {}", gate, epochs, error);
            (error_history, false)
        }
        Err(err) => return Err(err.into()),
    };

    for (input, expected) in data.patterns() {
        let input = input.to_vec();
        let output = network.infer(&input)?;
        println!("{:?} -> {:.4} (expected {})", input, output[0], expected[0]);
    }

    if let Some(path) = &cli.csv {
        write_error_history_to_csv(&error_history, path)?;
        info!("Error history has been saved as '{}'", path.display());
    }
    if let Some(path) = &cli.plot {
        plot_errors_over_epochs(&error_history, network.config().min_error, &path.to_string_lossy())?;
    }

    if !converged {
        bail!("training did not converge");
    }
    Ok(())
}

#[allow(unused)]
use crate::prelude::*;

/// Activation applied uniformly to the hidden and output layers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Sigmoid,
    BipolarSigmoid,
    Tanh,
}

/// Forward function and its analytic derivative, both taking the raw weighted sum.
#[derive(Debug, Clone, Copy)]
pub struct ActivationFns {
    pub forward: fn(f64) -> f64,
    pub derivative: fn(f64) -> f64,
}

// Indexed by `Activation as usize`.
const TABLE: [ActivationFns; 3] = [
    ActivationFns {
        forward: sigmoid_forward,
        derivative: sigmoid_backward,
    },
    ActivationFns {
        forward: bipolar_sigmoid_forward,
        derivative: bipolar_sigmoid_backward,
    },
    ActivationFns {
        forward: tanh_forward,
        derivative: tanh_backward,
    },
];

impl Activation {
    pub fn functions(self) -> ActivationFns {
        TABLE[self as usize]
    }

    pub fn forward(self, x: f64) -> f64 {
        (self.functions().forward)(x)
    }

    pub fn derivative(self, x: f64) -> f64 {
        (self.functions().derivative)(x)
    }

    /// Output range `(low, high)` of the function.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Sigmoid => (0.0, 1.0),
            Self::BipolarSigmoid | Self::Tanh => (-1.0, 1.0),
        }
    }
}

fn sigmoid_forward(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn sigmoid_backward(x: f64) -> f64 {
    let s = sigmoid_forward(x);
    s * (1.0 - s)
}

fn bipolar_sigmoid_forward(x: f64) -> f64 {
    2.0 / (1.0 + (-x).exp()) - 1.0
}

fn bipolar_sigmoid_backward(x: f64) -> f64 {
    let s = bipolar_sigmoid_forward(x);
    0.5 * (1.0 + s) * (1.0 - s)
}

fn tanh_forward(x: f64) -> f64 {
    x.tanh()
}

fn tanh_backward(x: f64) -> f64 {
    let t = tanh_forward(x);
    1.0 - t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Activation; 3] = [Activation::Sigmoid, Activation::BipolarSigmoid, Activation::Tanh];

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-5;
        for activation in ALL {
            for step in 0..=400 {
                let x = -10.0 + step as f64 * 0.05;
                let numeric = (activation.forward(x + h) - activation.forward(x - h)) / (2.0 * h);
                let analytic = activation.derivative(x);
                assert!(
                    (numeric - analytic).abs() < 1e-6,
                    "{:?} at x={}: numeric {} vs analytic {}",
                    activation, x, numeric, analytic
                );
            }
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(Activation::Sigmoid.forward(0.0), 0.5);
        assert_eq!(Activation::BipolarSigmoid.forward(0.0), 0.0);
        assert_eq!(Activation::Tanh.forward(0.0), 0.0);
        assert_eq!(Activation::Sigmoid.derivative(0.0), 0.25);
        assert_eq!(Activation::BipolarSigmoid.derivative(0.0), 0.5);
        assert_eq!(Activation::Tanh.derivative(0.0), 1.0);
    }

    #[test]
    fn test_outputs_stay_within_bounds() {
        for activation in ALL {
            let (low, high) = activation.bounds();
            for x in [-50.0, -3.0, -0.1, 0.0, 0.1, 3.0, 50.0] {
                let y = activation.forward(x);
                assert!(y >= low && y <= high, "{:?}({}) = {}", activation, x, y);
            }
        }
    }

    #[test]
    fn test_table_order_matches_variants() {
        let x = 0.7;
        assert_eq!((Activation::Sigmoid.functions().forward)(x), sigmoid_forward(x));
        assert_eq!((Activation::BipolarSigmoid.functions().forward)(x), bipolar_sigmoid_forward(x));
        assert_eq!((Activation::Tanh.functions().forward)(x), tanh_forward(x));
    }
}

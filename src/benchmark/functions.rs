use crate::prelude::*;

/// Two-input boolean functions used as small benchmark problems.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicGate {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl LogicGate {
    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a && b,
            Self::Or => a || b,
            Self::Nand => !(a && b),
            Self::Nor => !(a || b),
            Self::Xor => a != b,
            Self::Xnor => a == b,
        }
    }

    /// The four-row truth table, with false/true mapped to the bounds of `activation`.
    pub fn truth_table(self, activation: Activation) -> TrainingSet {
        let (low, high) = activation.bounds();
        let level = |bit: bool| if bit { high } else { low };

        let mut inputs = Array2::zeros((4, 2));
        let mut expected = Array2::zeros((4, 1));
        for (row, (a, b)) in [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .enumerate()
        {
            inputs[[row, 0]] = level(a);
            inputs[[row, 1]] = level(b);
            expected[[row, 0]] = level(self.eval(a, b));
        }
        TrainingSet { inputs, expected }
    }
}

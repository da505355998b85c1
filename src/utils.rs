#[allow(unused)]
use crate::prelude::*;

/// Uniform `[-1, 1)` matrix drawn from the given rng.
#[macro_export]
macro_rules! rand_array {
    ($rng:expr, $($x:expr),*) => {
        {
            Array2::random_using(($($x,)*), Uniform::new(-1.0, 1.0), $rng)
        }
    };
}

/// `StdRng` from a fixed seed, or from OS entropy when none is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_array_range_and_shape() {
        let mut rng = seeded_rng(Some(7));
        let w: Array2<f64> = rand_array!(&mut rng, 5, 4);
        assert_eq!(w.dim(), (5, 4));
        assert!(w.iter().all(|&v| (-1.0..1.0).contains(&v)));
    }

    #[test]
    fn test_same_seed_same_draws() {
        let a: Array2<f64> = rand_array!(&mut seeded_rng(Some(42)), 3, 3);
        let b: Array2<f64> = rand_array!(&mut seeded_rng(Some(42)), 3, 3);
        assert_eq!(a, b);
    }
}

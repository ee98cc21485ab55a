use rand::prelude::*;

/// Sum of element-wise products of two equal-length slices.
///
/// Callers are expected to have validated the lengths already; the debug
/// assertion only guards internal misuse.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Allocates `n` weights, each an independent uniform draw from [-1, 1).
pub fn random_weights<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}

use rand::prelude::*;

use crate::activation::sign;
use crate::error::{PerceptronError, PerceptronResult};
use crate::math::vector::{dot, random_weights};
use crate::perceptron::state::PerceptronState;

/// A single-neuron binary linear classifier.
///
/// Holds a weight vector and bias, predicts a label in {-1, +1} from the sign
/// of `dot(inputs, weights) + bias`, and learns via the classical perceptron
/// update rule one example at a time.
///
/// The instance performs no internal synchronization; it is not safe for
/// concurrent mutation without external serialization (give each worker its
/// own instance, or wrap a shared one in a lock).
#[derive(Debug, Clone)]
pub struct Perceptron {
    dimension: usize,
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    iterations: u64,
    error_sum: f64,
    iteration_error: f64,
    last_output: f64,
}

impl Perceptron {
    pub const DEFAULT_BIAS: f64 = 1.0;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

    /// Builds a perceptron with `dimension` weights drawn uniformly from
    /// [-1, 1) using the process-level RNG.
    ///
    /// # Arguments
    /// - `dimension`     — input vector length; must be >= 1
    /// - `bias`          — initial bias offset ([`Self::DEFAULT_BIAS`] is the
    ///                     conventional starting value)
    /// - `learning_rate` — update step scale; must be in (0, 1]
    pub fn new(dimension: usize, bias: f64, learning_rate: f64) -> PerceptronResult<Perceptron> {
        Perceptron::with_rng(dimension, bias, learning_rate, &mut rand::thread_rng())
    }

    /// Same contract as [`Perceptron::new`] with an injected random source,
    /// so callers can seed weight initialization for reproducibility.
    pub fn with_rng<R: Rng + ?Sized>(
        dimension: usize,
        bias: f64,
        learning_rate: f64,
        rng: &mut R,
    ) -> PerceptronResult<Perceptron> {
        check_dimension(dimension)?;
        check_learning_rate(learning_rate)?;

        Ok(Perceptron {
            dimension,
            weights: random_weights(dimension, rng),
            bias,
            learning_rate,
            iterations: 0,
            error_sum: 0.0,
            iteration_error: 0.0,
            last_output: 0.0,
        })
    }

    /// Classifies `inputs`, returning exactly +1.0 or -1.0.
    ///
    /// Computes `dot(inputs, weights) + bias` and applies the sign
    /// activation; a score of exactly zero classifies as +1. The result is
    /// also stored as [`Self::last_output`]. Weights and bias are not
    /// touched.
    pub fn predict(&mut self, inputs: &[f64]) -> PerceptronResult<f64> {
        self.check_input_length(inputs)?;

        let score = dot(inputs, &self.weights) + self.bias;
        let output = sign(score);
        self.last_output = output;
        Ok(output)
    }

    /// Applies one perceptron learning step for a labeled example.
    ///
    /// `label` must be exactly -1.0 or +1.0. After predicting with the
    /// current weights, each weight moves by
    /// `learning_rate * (label - output) * inputs[i]` and the bias by the
    /// unscaled `label - output`. The iteration counter and running error
    /// update on every call, so a correctly classified example still advances
    /// `iterations` and lets `iteration_error` decay toward zero.
    pub fn train(&mut self, inputs: &[f64], label: f64) -> PerceptronResult<()> {
        if label != 1.0 && label != -1.0 {
            return Err(PerceptronError::invalid_argument(
                "label",
                label,
                "label in {-1, +1}",
            ));
        }
        // Validate length up front so a bad call leaves no state behind,
        // not even the iteration counter.
        self.check_input_length(inputs)?;

        self.iterations += 1;
        let output = self.predict(inputs)?;
        let delta = label - output;

        for (weight, input) in self.weights.iter_mut().zip(inputs.iter()) {
            *weight += self.learning_rate * delta * input;
        }
        // The bias step is deliberately not scaled by the learning rate.
        self.bias += delta;

        self.error_sum += delta;
        self.iteration_error = self.error_sum / self.iterations as f64;
        Ok(())
    }

    /// Snapshots bias, learning rate, dimension, and weights as a model
    /// checkpoint.
    ///
    /// The training counters (`iterations`, `error_sum`, `iteration_error`)
    /// are excluded: a restored model resumes with a fresh error history.
    pub fn save_state(&self) -> PerceptronState {
        PerceptronState {
            bias: self.bias,
            learning_rate: self.learning_rate,
            dimension: self.dimension,
            weights: self.weights.clone(),
        }
    }

    /// Restores a checkpoint previously produced by [`Self::save_state`],
    /// overwriting bias, learning rate, dimension, and weights wholesale.
    ///
    /// Fails without mutating anything if the record violates
    /// `dimension >= 1`, `learning_rate` in (0, 1], or
    /// `weights.len() == dimension`. Training counters are left untouched.
    pub fn load_state(&mut self, state: &PerceptronState) -> PerceptronResult<()> {
        check_dimension(state.dimension)?;
        check_learning_rate(state.learning_rate)?;
        if state.weights.len() != state.dimension {
            return Err(PerceptronError::invalid_argument(
                "weights",
                format!("{} elements", state.weights.len()),
                format!("weights.len() == dimension ({})", state.dimension),
            ));
        }

        self.bias = state.bias;
        self.learning_rate = state.learning_rate;
        self.dimension = state.dimension;
        self.weights = state.weights.clone();
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Replaces the whole weight vector. The replacement must match the
    /// fixed `dimension` and contain only finite values.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> PerceptronResult<()> {
        if weights.len() != self.dimension {
            return Err(PerceptronError::invalid_argument(
                "weights",
                format!("{} elements", weights.len()),
                format!("weights.len() == dimension ({})", self.dimension),
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite()) {
            return Err(PerceptronError::invalid_argument(
                "weights",
                bad,
                "all weights finite",
            ));
        }
        self.weights = weights;
        Ok(())
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) -> PerceptronResult<()> {
        if !bias.is_finite() {
            return Err(PerceptronError::invalid_argument("bias", bias, "bias finite"));
        }
        self.bias = bias;
        Ok(())
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) -> PerceptronResult<()> {
        check_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }

    /// Number of completed training calls.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Running sum of `label - output` across all training calls.
    pub fn error_sum(&self) -> f64 {
        self.error_sum
    }

    /// `error_sum / iterations` after the most recent training call; 0.0
    /// before any training.
    pub fn iteration_error(&self) -> f64 {
        self.iteration_error
    }

    /// Most recent prediction; 0.0 before the first `predict` call.
    pub fn last_output(&self) -> f64 {
        self.last_output
    }

    fn check_input_length(&self, inputs: &[f64]) -> PerceptronResult<()> {
        if inputs.len() != self.dimension {
            return Err(PerceptronError::invalid_argument(
                "inputs",
                format!("{} elements", inputs.len()),
                format!("inputs.len() == dimension ({})", self.dimension),
            ));
        }
        Ok(())
    }
}

fn check_dimension(dimension: usize) -> PerceptronResult<()> {
    if dimension < 1 {
        return Err(PerceptronError::invalid_argument(
            "dimension",
            dimension,
            "dimension >= 1",
        ));
    }
    Ok(())
}

fn check_learning_rate(learning_rate: f64) -> PerceptronResult<()> {
    // A NaN learning rate fails the range comparison and is rejected here too.
    if !(learning_rate > 0.0 && learning_rate <= 1.0) {
        return Err(PerceptronError::invalid_argument(
            "learning_rate",
            learning_rate,
            "0 < learning_rate <= 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn seeded(dimension: usize, bias: f64, learning_rate: f64) -> Perceptron {
        let mut rng = StdRng::seed_from_u64(42);
        Perceptron::with_rng(dimension, bias, learning_rate, &mut rng).unwrap()
    }

    #[test]
    fn test_new_allocates_weights_in_range() {
        let p = seeded(16, Perceptron::DEFAULT_BIAS, Perceptron::DEFAULT_LEARNING_RATE);
        assert_eq!(p.dimension(), 16);
        assert_eq!(p.weights().len(), 16);
        assert!(p.weights().iter().all(|&w| (-1.0..1.0).contains(&w)));
        assert_eq!(p.iterations(), 0);
        assert_eq!(p.iteration_error(), 0.0);
    }

    #[test]
    fn test_new_accepts_learning_rate_bounds() {
        assert!(Perceptron::new(1, 0.0, 1.0).is_ok());
        assert!(Perceptron::new(1, 0.0, 0.001).is_ok());
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(Perceptron::new(0, 1.0, 0.5).is_err());
    }

    #[test]
    fn test_new_rejects_learning_rate_out_of_range() {
        assert!(Perceptron::new(2, 1.0, 0.0).is_err());
        assert!(Perceptron::new(2, 1.0, 1.5).is_err());
        assert!(Perceptron::new(2, 1.0, -0.1).is_err());
        assert!(Perceptron::new(2, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_predict_rejects_length_mismatch() {
        let mut p = seeded(2, 1.0, 0.5);
        assert!(p.predict(&[1.0]).is_err());
        assert!(p.predict(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_predict_zero_score_is_positive() {
        let mut p = seeded(1, 0.0, 0.5);
        p.set_weights(vec![0.0]).unwrap();
        // score = 0.0 * 5.0 + 0.0 = 0.0, which classifies as +1
        assert_eq!(p.predict(&[5.0]).unwrap(), 1.0);
        assert_eq!(p.last_output(), 1.0);
    }

    #[test]
    fn test_predict_negative_score() {
        let mut p = seeded(2, -1.0, 0.5);
        p.set_weights(vec![0.25, 0.25]).unwrap();
        // score = 0.25 + 0.25 - 1.0 = -0.5
        assert_eq!(p.predict(&[1.0, 1.0]).unwrap(), -1.0);
    }

    #[test]
    fn test_train_counts_iterations() {
        let mut p = seeded(1, 0.0, 0.5);
        for _ in 0..5 {
            p.train(&[1.0], 1.0).unwrap();
        }
        assert_eq!(p.iterations(), 5);
    }

    #[test]
    fn test_train_matched_example_is_numeric_noop() {
        let mut p = seeded(1, 0.0, 0.5);
        p.set_weights(vec![0.0]).unwrap();
        // predict([2.0]) = +1 (score 0.0), so delta = 0 and nothing moves,
        // but the counters still advance.
        p.train(&[2.0], 1.0).unwrap();
        assert_eq!(p.weights(), &[0.0]);
        assert_eq!(p.bias(), 0.0);
        assert_eq!(p.iterations(), 1);
        assert_eq!(p.error_sum(), 0.0);
        assert_eq!(p.iteration_error(), 0.0);
    }

    #[test]
    fn test_train_misclassified_example_updates() {
        let mut p = seeded(1, 0.0, 0.5);
        p.set_weights(vec![0.0]).unwrap();
        p.set_bias(-5.0).unwrap();
        // score = 0.0 * 2.0 - 5.0 = -5.0, output = -1, delta = 2:
        // weight += 0.5 * 2 * 2.0 = 2.0, bias += 2 (unscaled).
        p.train(&[2.0], 1.0).unwrap();
        assert_eq!(p.weights(), &[2.0]);
        assert_eq!(p.bias(), -3.0);
        assert_eq!(p.error_sum(), 2.0);
        assert_eq!(p.iteration_error(), 2.0);
    }

    #[test]
    fn test_iteration_error_is_mean_over_calls() {
        let mut p = seeded(1, 0.0, 0.5);
        p.set_weights(vec![0.0]).unwrap();
        p.set_bias(-5.0).unwrap();
        p.train(&[2.0], 1.0).unwrap(); // misclassified, delta = 2
        p.train(&[2.0], 1.0).unwrap(); // now classified correctly, delta = 0
        assert_eq!(p.iterations(), 2);
        assert_eq!(p.error_sum(), 2.0);
        assert_eq!(p.iteration_error(), 1.0);
    }

    #[test]
    fn test_train_rejects_invalid_labels() {
        let mut p = seeded(1, 0.0, 0.5);
        assert!(p.train(&[1.0], 0.0).is_err());
        assert!(p.train(&[1.0], 2.0).is_err());
        assert!(p.train(&[1.0], 0.5).is_err());
        // A rejected call must not advance any state.
        assert_eq!(p.iterations(), 0);
        assert_eq!(p.error_sum(), 0.0);
    }

    #[test]
    fn test_train_rejects_length_mismatch_without_mutation() {
        let mut p = seeded(2, 1.0, 0.5);
        let weights_before = p.weights().to_vec();
        assert!(p.train(&[1.0], 1.0).is_err());
        assert_eq!(p.iterations(), 0);
        assert_eq!(p.weights(), weights_before.as_slice());
    }

    #[test]
    fn test_set_learning_rate_validates_range() {
        let mut p = seeded(1, 0.0, 0.5);
        assert!(p.set_learning_rate(1.0).is_ok());
        assert!(p.set_learning_rate(0.0).is_err());
        assert!(p.set_learning_rate(1.5).is_err());
        assert!(p.set_learning_rate(f64::NAN).is_err());
        assert_eq!(p.learning_rate(), 1.0);
    }

    #[test]
    fn test_set_weights_validates_length_and_values() {
        let mut p = seeded(2, 0.0, 0.5);
        assert!(p.set_weights(vec![1.0]).is_err());
        assert!(p.set_weights(vec![1.0, f64::NAN]).is_err());
        assert!(p.set_weights(vec![1.0, -1.0]).is_ok());
        assert_eq!(p.weights(), &[1.0, -1.0]);
    }

    #[test]
    fn test_set_bias_rejects_non_finite() {
        let mut p = seeded(1, 0.0, 0.5);
        assert!(p.set_bias(f64::INFINITY).is_err());
        assert!(p.set_bias(-2.5).is_ok());
        assert_eq!(p.bias(), -2.5);
    }
}

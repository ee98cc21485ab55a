use serde::{Serialize, Deserialize};

/// A model checkpoint: the four fields that define the classifier.
///
/// Serializes with camelCase keys so the JSON shape is exactly the published
/// record format:
///
/// ```json
/// { "bias": 1.0, "learningRate": 0.5, "dimension": 2, "weights": [0.1, -0.2] }
/// ```
///
/// Training counters are deliberately absent; a checkpoint captures the
/// model, not the training session. `PerceptronState` can be stored or
/// transmitted independently of any live instance, making it possible to
/// hand weights between hosts without sharing the instance itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerceptronState {
    pub bias: f64,
    pub learning_rate: f64,
    pub dimension: usize,
    pub weights: Vec<f64>,
}

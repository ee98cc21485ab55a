pub mod math;
pub mod activation;
pub mod error;
pub mod perceptron;

// Convenience re-exports
pub use math::vector::dot;
pub use activation::sign;
pub use error::{PerceptronError, PerceptronResult};
pub use perceptron::perceptron::Perceptron;
pub use perceptron::state::PerceptronState;

pub mod perceptron;
pub mod state;

pub use perceptron::Perceptron;
pub use state::PerceptronState;

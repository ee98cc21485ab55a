pub mod vector;

pub use vector::{dot, random_weights};

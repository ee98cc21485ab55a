use std::fmt;

/// Result type alias for perceptron operations.
pub type PerceptronResult<T> = Result<T, PerceptronError>;

/// Error type for perceptron operations.
///
/// Every fallible operation (construction, predict, train, state loading,
/// setters) validates its arguments before touching any state and reports
/// violations through this single kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PerceptronError {
    /// An argument failed a range, length, or label-set check.
    InvalidArgument {
        parameter: String,
        value: String,
        constraint: String,
    },
}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronError::InvalidArgument {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid argument '{}' = '{}': must satisfy {}",
                    parameter, value, constraint
                )
            }
        }
    }
}

impl std::error::Error for PerceptronError {}

impl PerceptronError {
    /// Create an invalid argument error.
    pub fn invalid_argument(
        parameter: impl Into<String>,
        value: impl ToString,
        constraint: impl Into<String>,
    ) -> Self {
        PerceptronError::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }
}

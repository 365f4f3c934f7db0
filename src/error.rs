use thiserror::Error;

/// Error types for the func1-rs library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Func1Error {
    /// A type or rule name outside the known catalog.
    #[error("Unknown {category}: '{name}'")]
    UnknownType {
        /// What was being looked up, e.g. "function type" or "quadrature rule".
        category: &'static str,
        /// The name that was not recognized.
        name: String,
    },

    /// Wrong parameter count, or wrong mix of operands and scalars, for a known type.
    #[error("Invalid parameter shape for '{type_name}': {message}")]
    InvalidParameterShape { type_name: String, message: String },

    /// The operation is not defined for this function type.
    #[error("Unsupported operation '{operation}' for function type '{type_name}'")]
    UnsupportedOperation {
        operation: &'static str,
        type_name: String,
    },

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Linear algebra error.
    #[error("Linear algebra error: {0}")]
    LinearAlgebraError(String),
}

impl Func1Error {
    /// Error for a parameter vector whose length does not match what the type expects.
    pub fn parameter_count(type_name: &str, expected: &str, got: usize) -> Self {
        Func1Error::InvalidParameterShape {
            type_name: type_name.to_string(),
            message: format!("invalid parameter count: expected {}, got {}", expected, got),
        }
    }

    /// Error for operand/scalar combinations a type does not accept.
    pub fn operand_configuration(type_name: &str, message: &str) -> Self {
        Func1Error::InvalidParameterShape {
            type_name: type_name.to_string(),
            message: format!("invalid operand configuration: {}", message),
        }
    }

    pub(crate) fn unsupported_derivative(type_name: &str) -> Self {
        Func1Error::UnsupportedOperation {
            operation: "derivative",
            type_name: type_name.to_string(),
        }
    }
}

/// Result type alias for func1-rs operations.
pub type Result<T> = std::result::Result<T, Func1Error>;

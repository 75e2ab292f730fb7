use thiserror::Error;

/// Simplified `Result` using [`ProxGradError`](crate::ProxGradError) as error type
pub type Result<T> = std::result::Result<T, ProxGradError>;

/// Error variants from parameter validation, gradient estimation or solving
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProxGradError {
    #[error("cannot differentiate at an empty point")]
    EmptyPoint,
    #[error("non-finite coordinate {value} at index {index}")]
    InvalidPoint { index: usize, value: f64 },
    #[error("invalid perturbation {0}, must be finite and positive")]
    InvalidEpsilon(f64),
    #[error("unknown differentiation mode {0:?}")]
    UnknownDiffMode(String),
    /// The objective has no complex evaluation, complex-step is unavailable
    #[error("objective cannot be evaluated at complex points")]
    NotComplexSafe,
    #[error("invalid step size {0}")]
    InvalidStepSize(f64),
    #[error("invalid number of iterations {0}")]
    InvalidIterations(usize),
    #[error("invalid proximal parameter {0}")]
    InvalidProxParam(f64),
    #[error("shape mismatch: expected length {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("singular linear system")]
    SingularSystem,
}

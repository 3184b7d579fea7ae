use thiserror::Error;

/// Contract violations raised by genome operations.
///
/// Only argument problems are errors. Copying or disabling a TE that is not
/// active is a defined no-op outcome and never produces a `GenomeError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenomeError {
    /// A position was outside `[0, len)` at call time.
    #[error("Position {pos} out of range (len = {len})")]
    OutOfRange {
        /// The position that was requested
        pos: usize,
        /// The current genome length (upper bound)
        len: usize,
    },

    /// A size or length was zero, or otherwise unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while validating or loading simulation parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// A mean length/offset was below one slot.
    #[error("Invalid mean for {name}: {value} (must be >= 1.0)")]
    InvalidMean { name: &'static str, value: f64 },

    /// An operation weight was negative or not finite.
    #[error("Invalid weight for {name}: {value} (must be finite and >= 0.0)")]
    InvalidWeight { name: &'static str, value: f64 },

    /// Insertion is the only operation available while no TE is active, so
    /// its weight must be positive.
    #[error("Insert weight must be positive (got {0})")]
    InsertWeightNotPositive(f64),

    /// Reading or writing a parameter file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file was not valid JSON for `SimulationParams`.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while driving a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    #[error("Parameter error: {0}")]
    Params(#[from] ParamsError),

    /// A sampling distribution could not be built from the parameters.
    #[error("Sampling error: {0}")]
    Sampling(String),
}

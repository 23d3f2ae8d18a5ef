use thiserror::Error;

/// Errors related to polynomial operations.
///
/// The `PolynomialError` enum encapsulates all possible errors that can occur
/// during operations on the coefficient and evaluation form polynomials, such
/// as FFT transformations and coefficient algebra.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolynomialError {
    /// A sequence whose length must be a power of two was not.
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// A polynomial operation would exceed the extended blob capacity.
    #[error("polynomial of length {len} exceeds the extended blob capacity")]
    DegreeOverflow { len: usize },

    /// Division by a zero divisor, a zero leading coefficient, or a zero
    /// shift factor.
    #[error("division by zero")]
    DivisionByZero,

    /// Interpolation was given a repeated evaluation point.
    #[error("duplicate evaluation point")]
    DuplicateEvaluationPoint,

    /// Interpolation was given mismatched point and value counts.
    #[error("evaluation point and value counts differ: {xs} vs {ys}")]
    PointCountMismatch { xs: usize, ys: usize },

    /// A polynomial with no coefficients was constructed or requested.
    #[error("empty polynomial")]
    EmptyPolynomial,

    /// Error related to Fast Fourier Transform (FFT) operations with a
    /// descriptive message.
    #[error("FFT error: {0}")]
    FFTError(String),
}

/// Errors related to KZG cell operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// proving, verification and recovery, including those from
/// `PolynomialError`. Verification *failure* is never an error: the verify
/// entry points return `Ok(false)` for a proof that does not check out and
/// reserve `Err` for malformed inputs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from polynomial operations.
    #[error("polynomial error: {0}")]
    PolynomialError(#[from] PolynomialError),

    /// Bytes that do not encode a canonical field element.
    #[error("invalid field element: {0}")]
    InvalidFieldElement(String),

    /// A point encoding that is off-curve, in the wrong subgroup, or whose
    /// flag bits are inconsistent.
    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    /// Error related to point serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("MSM error: {0}")]
    MsmError(String),

    /// An input byte string of the wrong length.
    #[error("invalid input length")]
    InvalidInputLength,

    /// Parallel input arrays whose lengths disagree.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),

    /// An index past the end of the structure it indexes.
    #[error("index {index} out of range, bound is {bound}")]
    IndexOutOfRange { index: u64, bound: u64 },

    /// A multi-point operation was given no points at all.
    #[error("empty evaluation point set")]
    EmptyPointSet,

    /// Fewer cells than recovery needs.
    #[error("insufficient cells for recovery: got {given}, need at least {required}")]
    InsufficientData { given: usize, required: usize },

    /// A repeated cell index in recovery input.
    #[error("duplicate cell index {0}")]
    DuplicateCellId(u64),

    /// A recovered cell disagrees with the cell it was recovered from,
    /// indicating corrupted input cells.
    #[error("recovered cells do not match the supplied cells")]
    ReconstructionMismatch,

    /// An internally constructed value failed a sanity assertion. Not
    /// recoverable; indicates an implementation bug.
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),
}

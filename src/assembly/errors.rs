use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Cannot assemble an empty set of fragments")]
    EmptyInput,

    #[error(
        "Fragment of length {fragment_len} is longer than the current sequence of length {sequence_len}"
    )]
    InvariantViolation {
        fragment_len: usize,
        sequence_len: usize,
    },

    #[error("The minimum overlap must be at least 1")]
    InvalidMinOverlap,
}

pub type AssemblyResult<T> = std::result::Result<T, AssemblyError>;

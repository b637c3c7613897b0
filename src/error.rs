use thiserror::Error;

/// Failures that can occur while preparing a Chip-8 to run.
///
/// Executing instructions never fails; these all surface before the first step.
#[derive(Debug, Error)]
pub enum Error {
    #[error("program image is empty")]
    EmptyProgram,

    #[error("program image is {size} bytes but at most {max} fit in memory")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("unable to read program image: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Client-caused rejection of a submission, raised before anything is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("data is not valid JSON: {0}")]
    Malformed(String),

    #[error("exactly 1 file must be provided, got {0}")]
    Multiplicity(usize),

    #[error("upload size exceeds maximum allowed: {size} > {max}")]
    TooLarge { size: usize, max: usize },
}

/// A string that is not the textual form of a replay identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid ID: {0}")]
pub struct InvalidReplayId(pub String);

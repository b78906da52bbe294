use crate::{PlanType, RangeError};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl From<ReadError> for CreateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound => CreateError::Other("not found".into()),
            ReadError::Storage(storage) => CreateError::Storage(storage),
            ReadError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] BoxError),
}

/// A user snapshot that cannot be turned into a training profile.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("invalid {0}")]
    Invalid(&'static str),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanRequestError {
    #[error("invalid duration: {0}")]
    DurationWeeks(RangeError),
    #[error("invalid sessions per week: {0}")]
    SessionsPerWeek(RangeError),
    #[error("invalid session length: {0}")]
    SessionMinutes(RangeError),
}

/// Caller-supplied data that cannot be turned into a plan.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InputError {
    #[error("invalid user profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("invalid plan request: {0}")]
    Request(#[from] PlanRequestError),
}

#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),
    #[error("no strategy registered for {0} plans")]
    NoApplicableStrategy(PlanType),
    #[error("failed to resolve exercise \"{name}\": {source}")]
    Catalog {
        name: String,
        #[source]
        source: CreateError,
    },
    #[error("failed to save plan: {0}")]
    Persistence(#[source] CreateError),
}

impl GenerationError {
    /// Whether the caller supplied bad input, as opposed to an internal failure.
    #[must_use]
    pub fn is_bad_input(&self) -> bool {
        matches!(self, GenerationError::InvalidInput(_))
    }
}

impl From<ProfileError> for GenerationError {
    fn from(value: ProfileError) -> Self {
        GenerationError::InvalidInput(value.into())
    }
}

impl From<PlanRequestError> for GenerationError {
    fn from(value: PlanRequestError) -> Self {
        GenerationError::InvalidInput(value.into())
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    DuplicateSignup { activity: String, email: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

use crate::model::InvalidState;

/// Faults raised by decoding, validation and the repository.
///
/// Each variant maps to exactly one HTTP status at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The body could not be parsed, was not an object, or a field had the wrong type.
    #[error("{message}")]
    MalformedRequest {
        field: Option<String>,
        message: String,
    },

    /// One or more required fields were omitted.
    #[error("The validation of the request has failed.")]
    ValidationFailed(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    /// Duplicate name, delete blocked by dependents, or an unresolved foreign key on write.
    #[error("{0}")]
    Conflict(String),

    /// Stored data violates the repository's own invariants.
    #[error("{0}")]
    InternalInconsistency(String),

    #[error("Invalid route.")]
    InvalidRoute,

    #[error("The value '{0}' doesn't represent a valid ID (number).")]
    InvalidId(String),

    #[error(transparent)]
    InvalidState(#[from] InvalidState),
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    pub fn department_not_found(id: crate::model::Id) -> Self {
        RosterError::NotFound(format!(
            "No department with the specified ID ({}) could be found.",
            id
        ))
    }

    pub fn employee_not_found(id: crate::model::Id) -> Self {
        RosterError::NotFound(format!(
            "No employee with the specified ID ({}) could be found.",
            id
        ))
    }
}

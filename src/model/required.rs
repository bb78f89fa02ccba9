use std::fmt;

/// Error raised when the value of an absent [`Required`] field is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Required object must have a value.")]
pub struct InvalidState;

/// A request field that records whether its key was supplied at all.
///
/// `Absent` means the key was omitted from the payload. `Present` holds whatever the
/// payload carried, which may itself be an empty string or (for `T = Option<_>`) an
/// explicit null. Presence is what validators check; value legality is decided later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Required<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> Required<T> {
    pub fn absent() -> Self {
        Required::Absent
    }

    pub fn of(value: T) -> Self {
        Required::Present(value)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Required::Present(_))
    }

    /// Borrow the supplied value. Fails with [`InvalidState`] when the field was omitted.
    pub fn value(&self) -> Result<&T, InvalidState> {
        match self {
            Required::Present(value) => Ok(value),
            Required::Absent => Err(InvalidState),
        }
    }

    pub fn into_value(self) -> Result<T, InvalidState> {
        match self {
            Required::Present(value) => Ok(value),
            Required::Absent => Err(InvalidState),
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Required::Present(value) => Some(value),
            Required::Absent => None,
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Required::Present(value) => value,
            Required::Absent => default,
        }
    }
}

impl<T> From<T> for Required<T> {
    fn from(value: T) -> Self {
        Required::Present(value)
    }
}

impl<T: fmt::Display> fmt::Display for Required<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Required::Present(value) => value.fmt(f),
            Required::Absent => Ok(()),
        }
    }
}

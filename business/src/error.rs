use std::fmt;

use thiserror::Error;

/// Operation-level failure shown to the operator.
///
/// The underlying cause (transport error, status code, decode error) is logged
/// where it happens; only this message reaches the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserListError {
    #[error("Please enter both a name and an email.")]
    MissingFields,
    #[error("That email address is already registered.")]
    DuplicateEmail,
    #[error("Failed to load the user list.")]
    ListFailed,
    #[error("Failed to add the user.")]
    CreateFailed,
    #[error("Failed to delete the user.")]
    DeleteFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    TransportOrServer,
}

impl UserListError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFields => ErrorKind::Validation,
            Self::DuplicateEmail => ErrorKind::Conflict,
            Self::ListFailed | Self::CreateFailed | Self::DeleteFailed => {
                ErrorKind::TransportOrServer
            }
        }
    }
}

/// Confirmation shown after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessNotice {
    UserCreated,
    UserDeleted,
}

impl fmt::Display for SuccessNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserCreated => f.write_str("User added successfully!"),
            Self::UserDeleted => f.write_str("User deleted successfully."),
        }
    }
}

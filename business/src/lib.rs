//! Business layer of the user manager: wire types, the users backend client,
//! the user-list reducer and the controller that drives it.

mod api;
mod api_status;
mod commands;
mod config;
mod controller;
mod error;
mod models;
mod state;

pub use api::{ApiError, ApiResult, UsersApi};
pub use api_status::{APIAvailability, ApiStatus, ApiStatusEvent, CheckHealthCommand};
pub use commands::{CreateUserCommand, DeleteUserCommand, RefreshUsersCommand};
pub use config::{
    BusinessConfig, DEFAULT_API_BASE_URL, DEFAULT_NOTICE_TTL, DEFAULT_REQUEST_TIMEOUT,
};
pub use controller::UserListController;
pub use error::{ErrorKind, SuccessNotice, UserListError};
pub use models::{CreateUserRequest, CreatedAt, HealthResponse, NewUserDraft, User, UserId};
pub use state::{UserListEvent, UserListState};

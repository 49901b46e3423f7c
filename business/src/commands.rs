//! The three user-list side effects.
//!
//! Each command performs exactly one HTTP call and reports exactly one outcome
//! event, unless its token was cancelled while the request was in flight.

use log::{debug, error, info, warn};
use ministack_states::{Command, CommandFuture, Updater};
use tokio_util::sync::CancellationToken;

use crate::api::UsersApi;
use crate::error::UserListError;
use crate::models::UserId;
use crate::state::{UserListEvent, UserListState};

fn report(
    name: &str,
    cancel: &CancellationToken,
    updater: &Updater<UserListEvent>,
    event: UserListEvent,
) {
    if cancel.is_cancelled() {
        debug!("{name}: cancelled, discarding {event:?}");
        return;
    }
    updater.set(event);
}

/// GET `/users` and replace the cached list.
#[derive(Debug, Clone)]
pub struct RefreshUsersCommand {
    pub api: UsersApi,
}

impl Command<UserListState> for RefreshUsersCommand {
    fn run(
        &self,
        _snap: UserListState,
        updater: Updater<UserListEvent>,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let api = self.api.clone();

        Box::pin(async move {
            info!("RefreshUsersCommand: Fetching users from {}", api.base_url());

            let event = match api.list_users().await {
                Ok(users) => {
                    info!("RefreshUsersCommand: Fetched {} users", users.len());
                    UserListEvent::RefreshSucceeded(users)
                }
                Err(err) => {
                    error!("RefreshUsersCommand: Failed to fetch users: {err}");
                    UserListEvent::RefreshFailed
                }
            };

            report("RefreshUsersCommand", &cancel, &updater, event);
        })
    }
}

/// POST the draft found in the dispatch snapshot.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub api: UsersApi,
}

impl Command<UserListState> for CreateUserCommand {
    fn run(
        &self,
        snap: UserListState,
        updater: Updater<UserListEvent>,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let api = self.api.clone();

        Box::pin(async move {
            let request = match snap.draft.validate() {
                Ok(request) => request,
                Err(err) => {
                    warn!("CreateUserCommand: Draft became invalid before dispatch");
                    report(
                        "CreateUserCommand",
                        &cancel,
                        &updater,
                        UserListEvent::CreateFailed(err),
                    );
                    return;
                }
            };

            info!("CreateUserCommand: Creating user '{}'", request.name);

            let event = match api.create_user(&request).await {
                Ok(created) => {
                    match created {
                        Some(user) => info!("CreateUserCommand: Created user id={}", user.id),
                        None => info!("CreateUserCommand: Created user '{}'", request.name),
                    }
                    UserListEvent::CreateSucceeded
                }
                Err(err) if err.is_conflict() => {
                    warn!("CreateUserCommand: Email already registered: {err}");
                    UserListEvent::CreateFailed(UserListError::DuplicateEmail)
                }
                Err(err) => {
                    error!("CreateUserCommand: Failed to create user: {err}");
                    UserListEvent::CreateFailed(UserListError::CreateFailed)
                }
            };

            report("CreateUserCommand", &cancel, &updater, event);
        })
    }
}

/// DELETE `/users/{id}`. No confirmation.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub api: UsersApi,
    pub id: UserId,
}

impl Command<UserListState> for DeleteUserCommand {
    fn run(
        &self,
        _snap: UserListState,
        updater: Updater<UserListEvent>,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let api = self.api.clone();
        let id = self.id;

        Box::pin(async move {
            info!("DeleteUserCommand: Deleting user id={id}");

            let event = match api.delete_user(id).await {
                Ok(()) => {
                    info!("DeleteUserCommand: Deleted user id={id}");
                    UserListEvent::DeleteSucceeded(id)
                }
                Err(err) => {
                    error!("DeleteUserCommand: Failed to delete user id={id}: {err}");
                    UserListEvent::DeleteFailed
                }
            };

            report("DeleteUserCommand", &cancel, &updater, event);
        })
    }
}

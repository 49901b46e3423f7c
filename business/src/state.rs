//! User-list snapshot and its reducer.

use ministack_states::State;

use crate::error::{SuccessNotice, UserListError};
use crate::models::{NewUserDraft, User, UserId};

/// Everything the user-management view renders.
///
/// Snapshots are immutable: every transition goes through [`State::apply`]
/// and produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListState {
    users: Vec<User>,
    /// Bound directly to the form inputs.
    pub draft: NewUserDraft,
    busy: bool,
    error: Option<UserListError>,
    success: Option<SuccessNotice>,
    /// Bumped whenever the (error, success) pair changes value.
    notice_generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListEvent {
    RefreshStarted,
    RefreshSucceeded(Vec<User>),
    RefreshFailed,
    CreateRejected(UserListError),
    CreateStarted,
    CreateSucceeded,
    CreateFailed(UserListError),
    DeleteSucceeded(UserId),
    DeleteFailed,
    NoticeExpired { generation: u64 },
}

impl UserListState {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<UserListError> {
        self.error
    }

    pub fn success(&self) -> Option<SuccessNotice> {
        self.success
    }

    pub fn notice_generation(&self) -> u64 {
        self.notice_generation
    }

    pub fn has_notice(&self) -> bool {
        self.error.is_some() || self.success.is_some()
    }
}

impl State for UserListState {
    type Event = UserListEvent;

    fn apply(&self, event: &UserListEvent) -> Self {
        let mut next = self.clone();

        match event {
            UserListEvent::RefreshStarted | UserListEvent::CreateStarted => {
                next.busy = true;
            }
            UserListEvent::RefreshSucceeded(users) => {
                next.users = users.clone();
                next.error = None;
                next.busy = false;
            }
            UserListEvent::RefreshFailed => {
                next.error = Some(UserListError::ListFailed);
                next.busy = false;
            }
            UserListEvent::CreateRejected(err) => {
                next.error = Some(*err);
            }
            UserListEvent::CreateSucceeded => {
                next.draft = NewUserDraft::default();
                next.success = Some(SuccessNotice::UserCreated);
                next.error = None;
                next.busy = false;
            }
            UserListEvent::CreateFailed(err) => {
                next.error = Some(*err);
                next.success = None;
                next.busy = false;
            }
            UserListEvent::DeleteSucceeded(_) => {
                next.success = Some(SuccessNotice::UserDeleted);
                next.error = None;
            }
            UserListEvent::DeleteFailed => {
                next.error = Some(UserListError::DeleteFailed);
                next.success = None;
            }
            UserListEvent::NoticeExpired { generation } => {
                if *generation == self.notice_generation {
                    next.error = None;
                    next.success = None;
                }
            }
        }

        if (next.error, next.success) != (self.error, self.success) {
            next.notice_generation = self.notice_generation.wrapping_add(1);
        }
        next
    }
}

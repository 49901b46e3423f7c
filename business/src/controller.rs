//! The stateful half of the user-management screen.

use std::time::Duration;

use log::{debug, error, info};
use ministack_states::{StateCtx, Timer, Updater};

use crate::api::{ApiResult, UsersApi};
use crate::commands::{CreateUserCommand, DeleteUserCommand, RefreshUsersCommand};
use crate::config::BusinessConfig;
use crate::error::UserListError;
use crate::models::{NewUserDraft, UserId};
use crate::state::{UserListEvent, UserListState};

/// Holds the user list, the new-user draft and the transient UI flags, issues
/// the backend operations and folds their outcomes back into state.
///
/// Outcomes are applied on the caller's thread in [`UserListController::sync`],
/// which the UI calls once per frame.
pub struct UserListController {
    ctx: StateCtx<UserListState>,
    api: UsersApi,
    notice_ttl: Duration,
    notice_timer: Option<Timer>,
    activated: bool,
}

impl std::fmt::Debug for UserListController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListController")
            .field("ctx", &self.ctx)
            .field("notice_timer", &self.notice_timer)
            .field("activated", &self.activated)
            .finish()
    }
}

impl UserListController {
    pub fn new(config: &BusinessConfig) -> ApiResult<Self> {
        Ok(Self::with_api(UsersApi::new(config)?, config.notice_ttl))
    }

    pub fn with_api(api: UsersApi, notice_ttl: Duration) -> Self {
        Self {
            ctx: StateCtx::new(UserListState::default()),
            api,
            notice_ttl,
            notice_timer: None,
            activated: false,
        }
    }

    pub fn state(&self) -> &UserListState {
        self.ctx.state()
    }

    pub fn draft_mut(&mut self) -> &mut NewUserDraft {
        &mut self.ctx.state_mut().draft
    }

    /// Report an event as if a command had produced it. Applied on the next
    /// [`UserListController::sync`].
    pub fn updater(&self) -> Updater<UserListEvent> {
        self.ctx.updater()
    }

    /// Initial load when the view is first shown. Only the first call fetches.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        info!("UserListController: activated, loading users");
        self.refresh();
    }

    /// Reload the list. Overlapping calls are not sequenced; whichever response
    /// settles last wins.
    pub fn refresh(&mut self) {
        if self.ctx.is_shut_down() {
            return;
        }
        self.apply(UserListEvent::RefreshStarted);
        self.ctx.dispatch(&RefreshUsersCommand {
            api: self.api.clone(),
        });
    }

    /// Submit the current draft. An incomplete draft is rejected locally and
    /// nothing is sent.
    pub fn create_user(&mut self) -> Result<(), UserListError> {
        if let Err(err) = self.ctx.state().draft.validate() {
            self.apply(UserListEvent::CreateRejected(err));
            return Err(err);
        }
        if self.ctx.is_shut_down() {
            return Ok(());
        }
        self.apply(UserListEvent::CreateStarted);
        self.ctx.dispatch(&CreateUserCommand {
            api: self.api.clone(),
        });
        Ok(())
    }

    pub fn delete_user(&mut self, id: UserId) {
        if self.ctx.is_shut_down() {
            return;
        }
        self.ctx.dispatch(&DeleteUserCommand {
            api: self.api.clone(),
            id,
        });
    }

    /// Apply every outcome reported since the last call.
    pub fn sync(&mut self) {
        self.ctx.reap();
        for event in self.ctx.drain() {
            self.apply(event);
        }
    }

    /// Wait until no command is in flight and every outcome, including
    /// follow-up refreshes, has been applied.
    pub async fn settle(&mut self) {
        loop {
            self.sync();
            match self.ctx.join_next().await {
                Some(Ok(())) => {}
                Some(Err(err)) => error!("UserListController: command task failed: {err}"),
                None => break,
            }
        }
    }

    /// True while a request is in flight or a message is waiting to clear.
    pub fn has_pending_work(&self) -> bool {
        self.ctx.task_count() > 0
            || self
                .notice_timer
                .as_ref()
                .is_some_and(|timer| !timer.is_cancelled())
    }

    /// Stop the auto-clear timer and discard the results of in-flight
    /// requests. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.notice_timer.take() {
            timer.cancel();
        }
        if !self.ctx.is_shut_down() {
            info!("UserListController: shutting down");
        }
        self.ctx.shutdown();
    }

    fn apply(&mut self, event: UserListEvent) {
        let generation = self.ctx.state().notice_generation();
        let follow_up = matches!(
            event,
            UserListEvent::CreateSucceeded | UserListEvent::DeleteSucceeded(_)
        );

        self.ctx.apply(&event);

        if self.ctx.state().notice_generation() != generation {
            self.rearm_notice_timer();
        }
        if follow_up {
            self.refresh();
        }
    }

    fn rearm_notice_timer(&mut self) {
        if let Some(timer) = self.notice_timer.take() {
            timer.cancel();
        }

        let state = self.ctx.state();
        if !state.has_notice() || self.ctx.is_shut_down() {
            return;
        }

        let generation = state.notice_generation();
        debug!(
            "UserListController: clearing notice {generation} in {:?}",
            self.notice_ttl
        );
        self.notice_timer = Some(Timer::deliver_after(
            self.notice_ttl,
            self.ctx.updater(),
            UserListEvent::NoticeExpired { generation },
        ));
    }
}

impl Drop for UserListController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

use log::info;
use ministack_business::{
    ApiStatus, ApiStatusEvent, BusinessConfig, CheckHealthCommand, UserListController, UsersApi,
};
use ministack_states::StateCtx;

/// The main application state.
///
/// Must be created inside a Tokio runtime; commands are spawned on it.
pub struct State {
    /// Users list, draft and transient messages.
    pub users: UserListController,
    /// Result of the last `/health` check.
    pub api_status: StateCtx<ApiStatus>,
    api: UsersApi,
}

impl State {
    pub fn new(config: &BusinessConfig) -> anyhow::Result<Self> {
        let api = UsersApi::new(config)?;
        Ok(Self {
            users: UserListController::with_api(api.clone(), config.notice_ttl),
            api_status: StateCtx::new(ApiStatus::default()),
            api,
        })
    }

    pub fn test(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Self::new(&BusinessConfig::new(base_url))
    }

    /// Fold every finished request into state. Call once per frame.
    pub fn sync(&mut self) {
        self.users.sync();

        self.api_status.reap();
        for event in self.api_status.drain() {
            self.api_status.apply(&event);
        }
    }

    /// Check `/health` unless a check is already running.
    pub fn check_api_status(&mut self) {
        if self.api_status.state().is_checking() || self.api_status.is_shut_down() {
            return;
        }
        self.api_status.apply(&ApiStatusEvent::CheckStarted);
        self.api_status.dispatch(&CheckHealthCommand {
            api: self.api.clone(),
        });
    }

    pub fn has_pending_work(&self) -> bool {
        self.users.has_pending_work() || self.api_status.task_count() > 0
    }

    pub fn shutdown(&mut self) {
        if !self.api_status.is_shut_down() {
            info!("State: shutting down, in-flight results will be discarded");
        }
        self.users.shutdown();
        self.api_status.shutdown();
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.shutdown();
    }
}

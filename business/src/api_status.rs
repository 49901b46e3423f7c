use chrono::{DateTime, Utc};
use log::{error, info, warn};
use ministack_states::{Command, CommandFuture, State, Updater};
use tokio_util::sync::CancellationToken;

use crate::api::UsersApi;

/// Result of the most recent `GET /health` check.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ApiStatus {
    last_update_time: Option<DateTime<Utc>>,
    // set means the backend did not answer with a 2xx health payload
    last_error: Option<String>,
    database: Option<String>,
    checking: bool,
}

pub enum APIAvailability<'a> {
    Available(DateTime<Utc>),
    Unavailable((DateTime<Utc>, &'a str)),
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiStatusEvent {
    CheckStarted,
    Healthy {
        at: DateTime<Utc>,
        database: String,
    },
    Unhealthy {
        at: DateTime<Utc>,
        error: String,
    },
}

impl ApiStatus {
    pub fn api_availability(&self) -> APIAvailability<'_> {
        match (self.last_update_time, &self.last_error) {
            (None, _) => APIAvailability::Unknown,
            (Some(time), None) => APIAvailability::Available(time),
            (Some(time), Some(err)) => APIAvailability::Unavailable((time, err.as_str())),
        }
    }

    /// Database state as last reported by a reachable backend.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn database_healthy(&self) -> bool {
        self.database() == Some("healthy")
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }
}

impl State for ApiStatus {
    type Event = ApiStatusEvent;

    fn apply(&self, event: &ApiStatusEvent) -> Self {
        let mut next = self.clone();
        match event {
            ApiStatusEvent::CheckStarted => next.checking = true,
            ApiStatusEvent::Healthy { at, database } => {
                next.last_update_time = Some(*at);
                next.last_error = None;
                next.database = Some(database.clone());
                next.checking = false;
            }
            ApiStatusEvent::Unhealthy { at, error } => {
                next.last_update_time = Some(*at);
                next.last_error = Some(error.clone());
                next.checking = false;
            }
        }
        next
    }
}

/// Check `GET /health` once. Any 2xx answer means the API is up; the
/// reported database state is kept separately.
#[derive(Debug, Clone)]
pub struct CheckHealthCommand {
    pub api: UsersApi,
}

impl Command<ApiStatus> for CheckHealthCommand {
    fn run(
        &self,
        _snap: ApiStatus,
        updater: Updater<ApiStatusEvent>,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let api = self.api.clone();

        Box::pin(async move {
            info!("Get API Status from {}", api.base_url());
            let result = api.health().await;
            let at = Utc::now();

            let event = match result {
                Ok(health) => {
                    info!("BackEnd Available, checked at {at:?}");
                    if !health.database_healthy() {
                        warn!("BackEnd reports database {:?}", health.database);
                    }
                    ApiStatusEvent::Healthy {
                        at,
                        database: health.database,
                    }
                }
                Err(err) => {
                    error!("API status check failed: {err}");
                    ApiStatusEvent::Unhealthy {
                        at,
                        error: err.to_string(),
                    }
                }
            };

            if !cancel.is_cancelled() {
                updater.set(event);
            }
        })
    }
}

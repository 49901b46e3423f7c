//! Wire types for the users backend.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UserListError;

/// Backend-assigned user identifier.
pub type UserId = i64;

/// A user as returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: CreatedAt,
}

/// Creation timestamp of a [`User`].
///
/// Accepts RFC 3339, ISO-8601 without offset (read as UTC) and integer epoch
/// seconds. Serializes back as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CreatedAt(DateTime<Utc>);

impl CreatedAt {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Calendar date in the local time zone, e.g. `2024-03-09`.
    pub fn local_date(&self) -> String {
        self.date_in(&Local)
    }

    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.0.with_timezone(tz).format("%Y-%m-%d").to_string()
    }

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(at.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| Self(naive.and_utc()))
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for CreatedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for CreatedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Epoch(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self::parse(&text).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid created_at timestamp: {text:?}"))
            }),
            Raw::Epoch(secs) => DateTime::from_timestamp(secs, 0)
                .map(Self)
                .ok_or_else(|| serde::de::Error::custom(format!("epoch out of range: {secs}"))),
        }
    }
}

/// The pending new-user form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserDraft {
    pub name: String,
    pub email: String,
}

impl NewUserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }

    /// Presence check only. Both fields must contain something other than
    /// whitespace; the request carries the trimmed values.
    pub fn validate(&self) -> Result<CreateUserRequest, UserListError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(UserListError::MissingFields);
        }
        Ok(CreateUserRequest {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthResponse {
    pub fn database_healthy(&self) -> bool {
        self.database == "healthy"
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::utils::time;

/// Identifier shared by every backend entity.
///
/// Serialized as a JSON number and rendered into URL paths with `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(u64);

impl Id {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Id {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Identity of the logged-in user, exactly as returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: Id,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub admin: bool,
}

/// A scheduled class with its teacher and participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaSession {
    pub id: Id,
    pub name: String,
    #[serde(deserialize_with = "time::deserialize_date")]
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "teacher_id", default)]
    pub teacher_id: Option<Id>,
    /// Participant user ids, de-duplicated in first-seen order.
    #[serde(default, deserialize_with = "deserialize_participants")]
    pub users: Vec<Id>,
    #[serde(default, deserialize_with = "time::deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "time::deserialize_optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

impl YogaSession {
    pub fn participant_count(&self) -> usize {
        self.users.len()
    }

    pub fn has_participant(&self, user_id: Id) -> bool {
        self.users.contains(&user_id)
    }
}

fn deserialize_participants<'de, D>(deserializer: D) -> Result<Vec<Id>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Option::<Vec<Id>>::deserialize(deserializer)?.unwrap_or_default();
    let mut seen = HashSet::new();
    Ok(ids.into_iter().filter(|id| seen.insert(*id)).collect())
}

/// Body of `POST /session` and `PUT /session/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub name: String,
    pub date: NaiveDate,
    pub teacher_id: Id,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "time::deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "time::deserialize_optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Teacher {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.to_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub admin: bool,
    /// Write-only: never read back from the backend.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "time::deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "time::deserialize_optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_parses_route_params_and_renders_plainly() {
        assert_eq!("42".parse::<Id>().unwrap(), Id::new(42));
        assert_eq!(" 7 ".parse::<Id>().unwrap(), Id::new(7));
        assert!("abc".parse::<Id>().is_err());
        assert!("-1".parse::<Id>().is_err());
        assert_eq!(Id::new(3).to_string(), "3");
    }

    #[test]
    fn session_identity_reads_login_response() {
        let identity: SessionIdentity = serde_json::from_value(json!({
            "token": "eyJhbGciOiJIUzUxMiJ9",
            "type": "Bearer",
            "id": 1,
            "username": "yoga@studio.com",
            "firstName": "Admin",
            "lastName": "Admin",
            "admin": true
        }))
        .unwrap();
        assert_eq!(identity.token_type, "Bearer");
        assert_eq!(identity.id, Id::new(1));
        assert!(identity.admin);
    }

    #[test]
    fn session_accepts_datetime_dates_and_drops_duplicate_participants() {
        let session: YogaSession = serde_json::from_value(json!({
            "id": 1,
            "name": "Yoga",
            "date": "2025-07-27T00:00:00.000+00:00",
            "teacher_id": 1,
            "description": "Yoga",
            "users": [2, 3, 2],
            "createdAt": "2025-07-26T15:39:03",
            "updatedAt": null
        }))
        .unwrap();
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 7, 27).unwrap());
        assert_eq!(session.users, vec![Id::new(2), Id::new(3)]);
        assert_eq!(session.participant_count(), 2);
        assert!(session.has_participant(Id::new(3)));
        assert!(!session.has_participant(Id::new(1)));
        assert!(session.created_at.is_some());
        assert!(session.updated_at.is_none());
    }

    #[test]
    fn session_without_teacher_or_users_still_parses() {
        let session: YogaSession = serde_json::from_value(json!({
            "id": 5,
            "name": "Morning flow",
            "date": "2025-08-06",
            "description": "Stretch"
        }))
        .unwrap();
        assert!(session.teacher_id.is_none());
        assert!(session.users.is_empty());
    }

    #[test]
    fn session_payload_uses_backend_field_names() {
        let payload = SessionPayload {
            name: "New Session".into(),
            date: NaiveDate::from_ymd_opt(2025, 8, 6).unwrap(),
            teacher_id: Id::new(1),
            description: "A new session of Yoga".into(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "New Session",
                "date": "2025-08-06",
                "teacher_id": 1,
                "description": "A new session of Yoga"
            })
        );
    }

    #[test]
    fn register_request_uses_camel_case() {
        let request = RegisterRequest {
            email: "yoga@studio.com".into(),
            first_name: "Kim".into(),
            last_name: "Gordon".into(),
            password: "test!1234".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["firstName"], "Kim");
        assert_eq!(value["lastName"], "Gordon");
    }

    #[test]
    fn user_never_reads_password_back() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "email": "yoga@studio.com",
            "firstName": "Kim",
            "lastName": "Gordon",
            "admin": false,
            "password": "hash",
            "createdAt": 1753544343000i64
        }))
        .unwrap();
        assert!(user.password.is_none());
        assert!(user.created_at.is_some());
    }

    #[test]
    fn teacher_display_name_uppercases_last_name() {
        let teacher: Teacher = serde_json::from_value(json!({
            "id": 1,
            "firstName": "John",
            "lastName": "Doe"
        }))
        .unwrap();
        assert_eq!(teacher.display_name(), "John DOE");
    }
}

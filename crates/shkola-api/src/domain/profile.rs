//! Session Models
//!
//! Login credentials, the login reply and the "who am I" profile.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{full_name, EntityId};

/// Role string reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Teacher,
    Principal,
    Student,
    Admin,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "teacher" => Role::Teacher,
            "principal" => Role::Principal,
            "student" => Role::Student,
            "admin" => Role::Admin,
            _ => Role::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Teacher => "Teacher",
            Role::Principal => "Principal",
            Role::Student => "Student",
            Role::Admin => "admin",
            Role::Other(raw) => raw,
        }
    }

    /// Russian label for the profile page
    pub fn label(&self) -> &str {
        match self {
            Role::Teacher => "Учитель",
            Role::Principal => "Директор",
            Role::Student => "Ученик",
            Role::Admin => "Администратор",
            Role::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub phone: String,
    pub password: String,
}

impl Credentials {
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
        }
    }
}

/// Body some servers send back from `auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: String,
    pub success: bool,
}

/// Result of `auth/me`: the signed-in employee (or student)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub employed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subject_id: Option<EntityId>,
    #[serde(default)]
    pub room_id: Option<EntityId>,
}

impl Profile {
    /// "Иван Петров." as the header shows it
    pub fn short_name(&self) -> String {
        format!("{}.", full_name(&[Some(self.first_name.as_str()), Some(self.last_name.as_str())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("teacher"), Role::Teacher);
        assert_eq!(Role::parse("Principal"), Role::Principal);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse(" janitor "), Role::Other("janitor".to_string()));
    }

    #[test]
    fn test_role_serde_round_trip() {
        let role: Role = serde_json::from_str("\"principal\"").unwrap();
        assert_eq!(role, Role::Principal);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Principal\"");
    }

    #[test]
    fn test_profile_decodes_teacher_me() {
        let profile: Profile = serde_json::from_str(
            r#"{"id":4,"first_name":"Ольга","last_name":"Иванова","employed_at":"2020-09-01T00:00:00Z",
                "phone":"+79001234567","mfa":false,"role":"Teacher","room_id":12,"subject_id":3}"#,
        )
        .unwrap();
        assert_eq!(profile.role, Role::Teacher);
        assert_eq!(profile.id, Some(4));
        assert_eq!(profile.short_name(), "Ольга Иванова.");
    }

    #[test]
    fn test_login_response_defaults() {
        let reply: LoginResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(reply.success);
        assert!(reply.message.is_empty());
    }
}

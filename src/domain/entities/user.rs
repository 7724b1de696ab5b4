use serde::{Deserialize, Serialize};

use crate::domain::entities::resource::{RequiredFields, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Client,
    Admin,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::User => "일반회원",
            UserRole::Client => "광고주",
            UserRole::Admin => "관리자",
            UserRole::Unknown => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Suspended,
    Deleted,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub const SELECTABLE: [UserStatus; 3] =
        [UserStatus::Active, UserStatus::Suspended, UserStatus::Deleted];

    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "활성",
            UserStatus::Suspended => "정지",
            UserStatus::Deleted => "탈퇴",
            UserStatus::Unknown => "-",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::Deleted => "DELETED",
            UserStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "ACTIVE" => UserStatus::Active,
            "SUSPENDED" => UserStatus::Suspended,
            "DELETED" => UserStatus::Deleted,
            _ => UserStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nickname: String,
    pub phone: Option<String>,
    #[serde(default = "default_role")]
    pub role: UserRole,
    #[serde(default = "default_status")]
    pub status: UserStatus,
    pub memo: Option<String>,
    pub created_at: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::Unknown
}

fn default_status() -> UserStatus {
    UserStatus::Unknown
}

impl Resource for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Partial update sent with `PATCH /users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub status: UserStatus,
    pub memo: String,
}

impl RequiredFields for UserPatch {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }
}

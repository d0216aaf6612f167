/// User domain types
use crate::error::LuminaError;
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Branch assigned when registration leaves it out
pub const DEFAULT_BRANCH: &str = "General Studies";

/// Class assigned when registration leaves it out
pub const DEFAULT_CLASS_NAME: &str = "Year 1";

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Learner account (default)
    #[default]
    Student,
    /// Teaching account
    Instructor,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = LuminaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            other => Err(LuminaError::invalid_input(format!("unknown role: {other}"))),
        }
    }
}

/// Persisted user account
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique user identifier
    pub id: UserId,

    /// Display name, may be empty
    #[serde(default)]
    pub name: String,

    /// Login email, unique across the store
    pub email: String,

    /// Salted one-way password hash (bcrypt)
    pub password_hash: String,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Study branch
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Class or year group
    #[serde(default = "default_class_name")]
    pub class_name: String,
}

/// Input for creating a user record
///
/// Optional fields left as `None` receive their defaults.
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: Option<Role>,
    pub branch: Option<String>,
    pub class_name: Option<String>,
}

impl UserRecord {
    /// Build a record from creation input, applying defaults
    pub fn create(id: UserId, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name.unwrap_or_default(),
            email: input.email,
            password_hash: input.password_hash,
            role: input.role.unwrap_or_default(),
            branch: input.branch.unwrap_or_else(default_branch),
            class_name: input.class_name.unwrap_or_else(default_class_name),
        }
    }

    /// Public view of this record (no password hash)
    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

/// User account as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub branch: String,
    pub class_name: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role,
            branch: record.branch.clone(),
            class_name: record.class_name.clone(),
        }
    }
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_class_name() -> String {
    DEFAULT_CLASS_NAME.to_string()
}

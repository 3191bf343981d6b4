use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::enums::UserRole;

/// A platform user as returned by the user list route
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    /// Kept as text so roles the console does not know about still list
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl UserDto {
    /// Calendar day the account was created, if the timestamp parses
    pub fn created_on(&self) -> Option<NaiveDate> {
        crate::format::parse_wire_date(&self.created_at)
    }
}

/// Body of `POST /api/auth/login`
#[derive(Clone, Debug, Serialize)]
#[non_exhaustive]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`
///
/// Self sign-up omits the role and lets the backend apply its default.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

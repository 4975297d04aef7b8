//! Profile model and request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::validation;

/// A user's profile, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub profile_pic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body of `POST /user/profile`
///
/// Every field is optional. On update, empty fields leave the stored value
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub profile_pic: String,
}

impl ProfileRequest {
    pub fn validate(&self) -> Result<(), BackendError> {
        validation::max_length("first_name", &self.first_name, 100)?;
        validation::max_length("last_name", &self.last_name, 100)?;
        validation::max_length("bio", &self.bio, 400)?;
        Ok(())
    }
}

/// Response for `GET /user/profile/{user_name}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}

/// Response for `POST /user/profile`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileSavedResponse {
    pub message: String,
    pub profile: UserProfile,
}

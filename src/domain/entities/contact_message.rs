use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessageForm {
    #[validate(custom(function = "validate_not_blank", message = "Name cannot be empty"))]
    pub name: String,

    #[validate(custom(function = "validate_not_blank", message = "Email cannot be empty"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank", message = "Subject cannot be empty"))]
    pub subject: String,

    #[validate(custom(function = "validate_not_blank", message = "Message cannot be empty"))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

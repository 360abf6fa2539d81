use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::validate_not_blank;

/// Category value that disables filtering when listing.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Row as the store hands it back; `technologies` is a nullable array column.
#[derive(Debug, Deserialize, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for both creating and fully replacing a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[validate(custom(function = "validate_not_blank", message = "Title cannot be empty"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "Description cannot be empty"))]
    pub description: String,

    #[validate(custom(function = "validate_not_blank", message = "Category cannot be empty"))]
    pub category: String,

    pub technologies: Vec<String>,

    #[serde(default)]
    pub github_url: Option<String>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

impl ProjectQuery {
    /// The category to filter on, or `None` when every project should be listed.
    pub fn category_filter(&self) -> Option<String> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .map(str::to_string)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectDeletedResponse {
    pub message: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            technologies: row.technologies.unwrap_or_default(),
            github_url: row.github_url,
            live_url: row.live_url,
            image_url: row.image_url,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}

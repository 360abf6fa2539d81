use std::fmt;

use tracing::{error, info};
use validator::Validate;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::project::ProjectRepository,
    seed_data::initial_projects,
};

#[derive(Debug, PartialEq)]
pub enum SeedOutcome {
    AlreadyPopulated { existing: i64 },
    Inserted(Vec<Project>),
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::AlreadyPopulated { existing } => write!(
                f,
                "Projects table already has {} projects. Skipping population.",
                existing
            ),
            SeedOutcome::Inserted(projects) => {
                write!(f, "Successfully inserted {} projects:", projects.len())?;
                for project in projects {
                    write!(f, "\n   - {} ({})", project.title, project.category)?;
                }
                Ok(())
            }
        }
    }
}

/// Populates an empty project table.
///
/// The emptiness check and the batch insert are separate store calls with
/// nothing held between them, so two concurrent runs can both insert.
pub struct SeedHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> SeedHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        SeedHandler { project_repo }
    }

    pub async fn seed_initial_projects(&self) -> Result<SeedOutcome, AppError> {
        self.seed_projects(initial_projects()).await
    }

    /// Inserts `projects` in one batch if, and only if, the table is empty
    pub async fn seed_projects(&self, projects: Vec<NewProject>) -> Result<SeedOutcome, AppError> {
        for project in &projects {
            project.validate()?;
        }

        let existing = self.project_repo
            .count_projects()
            .await
            .inspect_err(|e| error!(error = %e, "Error counting projects"))?;

        if existing > 0 {
            info!(existing, "Projects table already populated, skipping seed");
            return Ok(SeedOutcome::AlreadyPopulated { existing });
        }

        info!(count = projects.len(), "Populating projects table with initial data");

        let inserted = self.project_repo
            .create_projects(projects)
            .await
            .inspect_err(|e| error!(error = %e, "Error populating projects"))?;

        if inserted.is_empty() {
            return Err(AppError::CreateFailed("Failed to insert projects".to_string()));
        }

        Ok(SeedOutcome::Inserted(inserted))
    }
}

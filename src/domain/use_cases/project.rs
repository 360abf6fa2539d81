use tracing::{error, warn};
use validator::Validate;

use crate::{
    entities::project::{NewProject, Project, ProjectQuery},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects newest first, narrowed to one category unless the query asks for "All"
    pub async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, AppError> {
        self.project_repo
            .list_projects(query.category_filter())
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching projects"))
    }

    /// Persists a new project and returns the stored row
    pub async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        project.validate()?;

        self.project_repo
            .create_project(&project)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating project"))?
            .ok_or_else(|| {
                warn!(title = %project.title, "Store wrote no row for new project");
                AppError::CreateFailed("Failed to create project".to_string())
            })
    }

    /// Replaces every mutable field of an existing project
    pub async fn update_project(&self, id: &str, project: NewProject) -> Result<Project, AppError> {
        project.validate()?;

        let valid_id = valid_uuid(id).map_err(|_| project_not_found(id))?;

        self.project_repo
            .update_project(valid_id, &project)
            .await
            .inspect_err(|e| error!(error = %e, project_id = %valid_id, "Error updating project"))?
            .ok_or_else(|| project_not_found(id))
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id).map_err(|_| project_not_found(id))?;

        let deleted = self.project_repo
            .delete_project(valid_id)
            .await
            .inspect_err(|e| error!(error = %e, project_id = %valid_id, "Error deleting project"))?;

        if !deleted {
            return Err(project_not_found(id));
        }

        Ok(())
    }

    pub async fn check_store(&self) -> Result<(), AppError> {
        self.project_repo.check_connection().await
    }
}

fn project_not_found(id: &str) -> AppError {
    warn!(project_id = %id, "Project not found");
    AppError::NotFound("Project not found".to_string())
}

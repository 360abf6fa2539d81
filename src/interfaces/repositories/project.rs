use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::warn;
use uuid::Uuid;

use crate::{
    db::{postgres::is_integrity_violation, rest::RestClient},
    entities::project::{NewProject, Project, ProjectRow},
    errors::AppError,
    repositories::{
        rest_repo::{RowId, SupabaseProjectRepo},
        sqlx_repo::SqlxProjectRepo,
        PROJECTS_TABLE,
    },
};

const PROJECT_COLUMNS: &str =
    "id, title, description, category, technologies, github_url, live_url, image_url, featured, created_at";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects newest first, restricted to `category` when given.
    async fn list_projects(&self, category: Option<String>) -> Result<Vec<Project>, AppError>;
    /// `Ok(None)` means the store wrote no row.
    async fn create_project(&self, project: &NewProject) -> Result<Option<Project>, AppError>;
    async fn create_projects(&self, projects: Vec<NewProject>) -> Result<Vec<Project>, AppError>;
    /// `Ok(None)` means no row has this id.
    async fn update_project(&self, id: Uuid, project: &NewProject) -> Result<Option<Project>, AppError>;
    /// Returns whether a row was removed.
    async fn delete_project(&self, id: Uuid) -> Result<bool, AppError>;
    async fn count_projects(&self) -> Result<i64, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

pub type DynProjectRepository = Arc<dyn ProjectRepository>;

#[async_trait]
impl<T> ProjectRepository for Arc<T>
where
    T: ProjectRepository + ?Sized,
{
    async fn list_projects(&self, category: Option<String>) -> Result<Vec<Project>, AppError> {
        (**self).list_projects(category).await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Option<Project>, AppError> {
        (**self).create_project(project).await
    }

    async fn create_projects(&self, projects: Vec<NewProject>) -> Result<Vec<Project>, AppError> {
        (**self).create_projects(projects).await
    }

    async fn update_project(&self, id: Uuid, project: &NewProject) -> Result<Option<Project>, AppError> {
        (**self).update_project(id, project).await
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, AppError> {
        (**self).delete_project(id).await
    }

    async fn count_projects(&self) -> Result<i64, AppError> {
        (**self).count_projects().await
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, category: Option<String>) -> Result<Vec<Project>, AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM projects", PROJECT_COLUMNS));

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category);
        }

        builder.push(" ORDER BY created_at DESC");

        let rows: Vec<ProjectRow> = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn create_project(&self, project: &NewProject) -> Result<Option<Project>, AppError> {
        let result = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            INSERT INTO projects (
                title, description, category, technologies,
                github_url, live_url, image_url, featured
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(&project.technologies)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(&project.image_url)
        .bind(project.featured)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.map(Project::from)),
            Err(e) if is_integrity_violation(&e) => {
                warn!(error = %e, "Project insert rejected by constraint");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_projects(&self, projects: Vec<NewProject>) -> Result<Vec<Project>, AppError> {
        if projects.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO projects (title, description, category, technologies, github_url, live_url, image_url, featured) "
        );

        builder.push_values(projects, |mut row, project| {
            row.push_bind(project.title)
                .push_bind(project.description)
                .push_bind(project.category)
                .push_bind(project.technologies)
                .push_bind(project.github_url)
                .push_bind(project.live_url)
                .push_bind(project.image_url)
                .push_bind(project.featured);
        });

        builder.push(" RETURNING ").push(PROJECT_COLUMNS);

        let rows: Vec<ProjectRow> = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn update_project(&self, id: Uuid, project: &NewProject) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            UPDATE projects SET
                title = $1,
                description = $2,
                category = $3,
                technologies = $4,
                github_url = $5,
                live_url = $6,
                image_url = $7,
                featured = $8
            WHERE id = $9
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(&project.technologies)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(&project.image_url)
        .bind(project.featured)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Project::from))
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_projects(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

impl SupabaseProjectRepo {
    pub fn new(client: RestClient) -> Self {
        SupabaseProjectRepo { client }
    }
}

#[async_trait]
impl ProjectRepository for SupabaseProjectRepo {
    async fn list_projects(&self, category: Option<String>) -> Result<Vec<Project>, AppError> {
        let mut query = self.client
            .table(PROJECTS_TABLE)
            .select("*")
            .order("created_at", true);

        if let Some(category) = category {
            query = query.eq("category", category);
        }

        let rows: Vec<ProjectRow> = query.fetch().await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn create_project(&self, project: &NewProject) -> Result<Option<Project>, AppError> {
        let result = self.client
            .table(PROJECTS_TABLE)
            .insert::<_, ProjectRow>(project)
            .await;

        match result {
            Ok(rows) => Ok(rows.into_iter().next().map(Project::from)),
            Err(e) if e.is_integrity_violation() => {
                warn!(error = %e, "Project insert rejected by constraint");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_projects(&self, projects: Vec<NewProject>) -> Result<Vec<Project>, AppError> {
        if projects.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<ProjectRow> = self.client
            .table(PROJECTS_TABLE)
            .insert(&projects)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn update_project(&self, id: Uuid, project: &NewProject) -> Result<Option<Project>, AppError> {
        let rows: Vec<ProjectRow> = self.client
            .table(PROJECTS_TABLE)
            .eq("id", id)
            .update(project)
            .await?;

        Ok(rows.into_iter().next().map(Project::from))
    }

    async fn delete_project(&self, id: Uuid) -> Result<bool, AppError> {
        let rows: Vec<RowId> = self.client
            .table(PROJECTS_TABLE)
            .select("id")
            .eq("id", id)
            .delete()
            .await?;

        Ok(!rows.is_empty())
    }

    async fn count_projects(&self) -> Result<i64, AppError> {
        let count = self.client
            .table(PROJECTS_TABLE)
            .select("id")
            .count()
            .await?;

        Ok(count)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        let _: Vec<RowId> = self.client
            .table(PROJECTS_TABLE)
            .select("id")
            .limit(1)
            .fetch()
            .await?;

        Ok(())
    }
}

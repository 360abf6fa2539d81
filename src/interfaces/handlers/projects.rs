use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProject, ProjectDeletedResponse, ProjectQuery},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, query), fields(category = ?query.category))]
pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler
        .list_projects(&query)
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(project_id, state, data), fields(project_id = %project_id))]
pub async fn update_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler
        .update_project(&project_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(project_id, state), fields(project_id = %project_id))]
pub async fn delete_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;

    Ok(HttpResponse::Ok().json(ProjectDeletedResponse {
        message: "Project deleted successfully".to_string(),
    }))
}

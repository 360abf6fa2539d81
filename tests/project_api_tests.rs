
use std::sync::Arc;

use portfolio_api::{entities::project::Project, shared_repos::SharedRepositories};
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;
use uuid::Uuid;

#[actix_rt::test]
async fn api_root_reports_running() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/api/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Portfolio API is running");
}

#[actix_rt::test]
async fn health_reports_store_status() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/api/health")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "OK");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
async fn empty_store_lists_no_projects() {
    let app = TestApp::spawn().await;

    let projects = app.list_projects(None).await;

    assert!(projects.is_empty());
}

#[actix_rt::test]
async fn projects_are_listed_newest_first() {
    let app = TestApp::spawn().await;
    for title in ["First", "Second", "Third"] {
        let response = app.create_project(&new_project(title, "Web")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let projects = app.list_projects(None).await;

    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
    assert!(projects.windows(2).all(|w| w[0].created_at > w[1].created_at));
}

#[actix_rt::test]
async fn category_filter_matches_exactly_and_all_disables_it() {
    let app = TestApp::spawn().await;
    app.create_project(&new_project("Tutor", "AI")).await;
    app.create_project(&new_project("Blood Bank", "Web")).await;
    app.create_project(&new_project("Sketch", "AI")).await;
    app.create_project(&new_project("Lowercase", "ai")).await;

    let ai = app.list_projects(Some("AI")).await;
    let all = app.list_projects(Some("All")).await;

    assert_eq!(ai.len(), 2);
    assert!(ai.iter().all(|p| p.category == "AI"));
    assert_eq!(all.len(), 4);
}

#[actix_rt::test]
async fn padded_category_is_not_trimmed() {
    let app = TestApp::spawn().await;
    app.create_project(&new_project("Tutor", "AI")).await;

    assert!(app.list_projects(Some(" AI ")).await.is_empty());
    assert!(app.list_projects(Some("   ")).await.is_empty());
}

#[actix_rt::test]
async fn create_fills_defaults_for_omitted_optionals() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/projects"))
        .json(&json!({
            "title": "Adaptive AI Tutor",
            "description": "Learning paths",
            "category": "AI",
            "technologies": ["React", "Python"]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["featured"], false);
    assert!(body["github_url"].is_null());
    assert!(body["live_url"].is_null());
    assert!(body["image_url"].is_null());
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert!(body["created_at"].is_string());
}

#[actix_rt::test]
async fn created_project_round_trips_through_listing() {
    let app = TestApp::spawn().await;
    let mut input = new_project("Sketch to Image", "AI");
    input.technologies = vec!["PyTorch".into(), "OpenCV".into(), "Flask".into()];
    input.github_url = Some("https://github.com/example/sketch".into());
    input.image_url = Some("https://images.example.com/sketch.png".into());
    input.featured = true;

    let created: Project = app.create_project(&input).await.json().await.unwrap();
    let listed = app.list_projects(None).await;

    assert_eq!(listed.len(), 1);
    let row = &listed[0];
    assert_eq!(row.id, created.id);
    assert_eq!(row.created_at, created.created_at);
    assert_eq!(row.title, input.title);
    assert_eq!(row.description, input.description);
    assert_eq!(row.category, input.category);
    assert_eq!(row.technologies, input.technologies);
    assert_eq!(row.github_url, input.github_url);
    assert_eq!(row.live_url, input.live_url);
    assert_eq!(row.image_url, input.image_url);
    assert_eq!(row.featured, input.featured);
}

#[actix_rt::test]
async fn create_with_missing_field_is_unprocessable() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/projects"))
        .json(&json!({
            "title": "No technologies",
            "description": "d",
            "category": "Web"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(app.projects.len(), 0);
}

#[actix_rt::test]
async fn create_with_blank_title_is_unprocessable() {
    let app = TestApp::spawn().await;

    let response = app.create_project(&new_project("   ", "Web")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "title");
    assert_eq!(app.projects.len(), 0);
}

#[actix_rt::test]
async fn update_replaces_every_mutable_field() {
    let app = TestApp::spawn().await;
    let mut original = new_project("Portfolio", "Web");
    original.live_url = Some("https://portfolio.example.com".into());
    original.featured = true;
    let created: Project = app.create_project(&original).await.json().await.unwrap();

    let replacement = new_project("Portfolio v2", "AI");
    let response = app.client
        .put(app.url(&format!("/api/projects/{}", created.id)))
        .json(&replacement)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Project = response.json().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "Portfolio v2");
    assert_eq!(updated.category, "AI");
    assert_eq!(updated.live_url, None);
    assert!(!updated.featured);
}

#[actix_rt::test]
async fn update_of_unknown_project_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.client
        .put(app.url(&format!("/api/projects/{}", Uuid::new_v4())))
        .json(&new_project("Ghost", "Web"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Project not found");
}

#[actix_rt::test]
async fn malformed_project_id_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.client
        .delete(app.url("/api/projects/not-a-uuid"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn deleted_project_disappears_and_second_delete_is_not_found() {
    let app = TestApp::spawn().await;
    let keep: Project = app.create_project(&new_project("Keep", "Web")).await.json().await.unwrap();
    let doomed: Project = app.create_project(&new_project("Doomed", "Web")).await.json().await.unwrap();
    let url = app.url(&format!("/api/projects/{}", doomed.id));

    let first = app.client.delete(&url).send().await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body: Value = first.json().await.unwrap();
    assert_eq!(body["message"], "Project deleted successfully");

    let listed = app.list_projects(None).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);

    let second = app.client.delete(&url).send().await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn().await;
    app.create_project(&new_project("Slash", "Web")).await;

    let response = app.client.get(app.url("/api/projects/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let projects: Vec<Project> = response.json().await.unwrap();
    assert_eq!(projects.len(), 1);
}

#[actix_rt::test]
async fn store_failures_return_generic_500() {
    let address = serve(SharedRepositories::new(
        Arc::new(UnavailableStore),
        Arc::new(UnavailableStore),
    ))
    .await;
    let client = reqwest::Client::new();

    let list = client.get(format!("{}/api/projects", address)).send().await.unwrap();
    assert_eq!(list.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = list.text().await.unwrap();
    assert!(text.contains("Internal server error"));
    assert!(!text.contains("db.internal"));

    let create = client
        .post(format!("{}/api/projects", address))
        .json(&new_project("Offline", "Web"))
        .send()
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let health: Value = client
        .get(format!("{}/api/health", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["store"], "Unavailable");
}

#[actix_rt::test]
async fn zero_rows_written_is_bad_request() {
    let address = serve(SharedRepositories::new(
        Arc::new(RejectingStore),
        Arc::new(RejectingStore),
    ))
    .await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/projects", address))
        .json(&new_project("Rejected", "Web"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to create project");
}

#[actix_rt::test]
async fn cors_preflight_allows_any_origin() {
    let app = TestApp::spawn().await;

    let response = app.client
        .request(reqwest::Method::OPTIONS, app.url("/api/projects"))
        .header("Origin", "https://someone-else.example")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("access-control-allow-origin"));
}


use chrono::Utc;
use mockall::predicate::*;
use portfolio_api::{
    entities::{
        contact_message::{ContactMessage, ContactMessageForm},
        project::ProjectQuery,
    },
    errors::AppError,
    use_cases::{contact::ContactHandler, project::ProjectHandler},
};
use test_utils::{new_project, stored_project, MockContactRepo, MockProjectRepo};
use uuid::Uuid;

fn query(category: Option<&str>) -> ProjectQuery {
    ProjectQuery {
        category: category.map(str::to_string),
    }
}

fn contact_form(name: &str) -> ContactMessageForm {
    ContactMessageForm {
        name: name.to_string(),
        email: "visitor@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Nice work".to_string(),
    }
}

#[tokio::test]
async fn list_with_all_category_passes_no_filter() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .with(eq(None::<String>))
        .times(3)
        .returning(|_| Ok(Vec::new()));
    let handler = ProjectHandler::new(repo);

    handler.list_projects(&query(None)).await.unwrap();
    handler.list_projects(&query(Some("All"))).await.unwrap();
    handler.list_projects(&query(Some(""))).await.unwrap();
}

#[tokio::test]
async fn list_with_category_passes_exact_filter() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .with(eq(Some("AI".to_string())))
        .times(1)
        .returning(|_| Ok(vec![stored_project(&new_project("Tutor", "AI"), Utc::now())]));
    let handler = ProjectHandler::new(repo);

    let projects = handler.list_projects(&query(Some("AI"))).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].category, "AI");
}

#[tokio::test]
async fn create_returns_stored_row() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .withf(|p| p.title == "Portfolio")
        .times(1)
        .returning(|p| Ok(Some(stored_project(p, Utc::now()))));
    let handler = ProjectHandler::new(repo);

    let project = handler.create_project(new_project("Portfolio", "Web")).await.unwrap();

    assert_eq!(project.title, "Portfolio");
}

#[tokio::test]
async fn create_with_no_row_written_fails() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().times(1).returning(|_| Ok(None));
    let handler = ProjectHandler::new(repo);

    let err = handler.create_project(new_project("Portfolio", "Web")).await.unwrap_err();

    assert!(matches!(err, AppError::CreateFailed(msg) if msg == "Failed to create project"));
}

#[tokio::test]
async fn invalid_project_never_reaches_the_store() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();
    repo.expect_update_project().never();
    let handler = ProjectHandler::new(repo);

    let create = handler.create_project(new_project("", "Web")).await.unwrap_err();
    let update = handler
        .update_project(&Uuid::new_v4().to_string(), new_project("Title", " "))
        .await
        .unwrap_err();

    assert!(matches!(create, AppError::ValidationError(ref fields) if fields[0].field == "title"));
    assert!(matches!(update, AppError::ValidationError(ref fields) if fields[0].field == "category"));
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let id = Uuid::new_v4();
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .withf(move |got, _| *got == id)
        .times(1)
        .returning(|_, _| Ok(None));
    let handler = ProjectHandler::new(repo);

    let err = handler.update_project(&id.to_string(), new_project("Ghost", "Web")).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "Project not found"));
}

#[tokio::test]
async fn delete_reports_not_found_when_nothing_removed() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project().times(1).returning(|_| Ok(false));
    let handler = ProjectHandler::new(repo);

    let err = handler.delete_project(&Uuid::new_v4().to_string()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_succeeds_when_row_removed() {
    let id = Uuid::new_v4();
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .with(eq(id))
        .times(1)
        .returning(|_| Ok(true));
    let handler = ProjectHandler::new(repo);

    assert!(handler.delete_project(&id.to_string()).await.is_ok());
}

#[tokio::test]
async fn malformed_id_never_reaches_the_store() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project().never();
    repo.expect_update_project().never();
    let handler = ProjectHandler::new(repo);

    let delete = handler.delete_project("42").await.unwrap_err();
    let update = handler.update_project("not-a-uuid", new_project("T", "Web")).await.unwrap_err();

    assert!(matches!(delete, AppError::NotFound(_)));
    assert!(matches!(update, AppError::NotFound(_)));
}

#[tokio::test]
async fn store_errors_propagate_unchanged() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .returning(|_| Err(AppError::StoreUnavailable("timeout".into())));
    repo.expect_delete_project()
        .returning(|_| Err(AppError::StoreUnavailable("timeout".into())));
    let handler = ProjectHandler::new(repo);

    let list = handler.list_projects(&query(None)).await.unwrap_err();
    let delete = handler.delete_project(&Uuid::new_v4().to_string()).await.unwrap_err();

    assert!(matches!(list, AppError::StoreUnavailable(_)));
    assert!(matches!(delete, AppError::StoreUnavailable(_)));
}

#[tokio::test]
async fn contact_submission_validates_before_writing() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message().never();
    let handler = ContactHandler::new(repo);

    let err = handler.submit_contact_message(contact_form("  ")).await.unwrap_err();

    assert!(matches!(err, AppError::ValidationError(ref fields) if fields[0].field == "name"));
}

#[tokio::test]
async fn contact_submission_with_no_row_written_fails() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message().times(1).returning(|_| Ok(None));
    let handler = ContactHandler::new(repo);

    let err = handler.submit_contact_message(contact_form("Ada")).await.unwrap_err();

    assert!(matches!(err, AppError::CreateFailed(msg) if msg == "Failed to submit message"));
}

#[tokio::test]
async fn contact_submission_returns_stored_message() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .withf(|form| form.name == "Ada")
        .times(1)
        .returning(|form| {
            Ok(Some(ContactMessage {
                id: Uuid::new_v4(),
                name: form.name.clone(),
                email: form.email.clone(),
                subject: form.subject.clone(),
                message: form.message.clone(),
                created_at: Utc::now(),
            }))
        });
    let handler = ContactHandler::new(repo);

    let stored = handler.submit_contact_message(contact_form("Ada")).await.unwrap();

    assert_eq!(stored.name, "Ada");
    assert_eq!(stored.message, "Nice work");
}

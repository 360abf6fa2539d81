use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use crate::{
    db::{postgres::is_integrity_violation, rest::RestClient},
    entities::contact_message::{ContactMessage, ContactMessageForm},
    errors::AppError,
    repositories::{
        rest_repo::SupabaseContactMessageRepo,
        sqlx_repo::SqlxContactMessageRepo,
        CONTACT_MESSAGES_TABLE,
    },
};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// `Ok(None)` means the store wrote no row.
    async fn create_contact_message(&self, msg: &ContactMessageForm) -> Result<Option<ContactMessage>, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
}

pub type DynContactMessageRepository = Arc<dyn ContactMessageRepository>;

#[async_trait]
impl<T> ContactMessageRepository for Arc<T>
where
    T: ContactMessageRepository + ?Sized,
{
    async fn create_contact_message(&self, msg: &ContactMessageForm) -> Result<Option<ContactMessage>, AppError> {
        (**self).create_contact_message(msg).await
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        (**self).list_contact_messages().await
    }
}

impl SqlxContactMessageRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, msg: &ContactMessageForm) -> Result<Option<ContactMessage>, AppError> {
        let result = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row),
            Err(e) if is_integrity_violation(&e) => {
                warn!(error = %e, "Contact message insert rejected by constraint");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}

impl SupabaseContactMessageRepo {
    pub fn new(client: RestClient) -> Self {
        SupabaseContactMessageRepo { client }
    }
}

#[async_trait]
impl ContactMessageRepository for SupabaseContactMessageRepo {
    async fn create_contact_message(&self, msg: &ContactMessageForm) -> Result<Option<ContactMessage>, AppError> {
        let result = self.client
            .table(CONTACT_MESSAGES_TABLE)
            .insert::<_, ContactMessage>(msg)
            .await;

        match result {
            Ok(rows) => Ok(rows.into_iter().next()),
            Err(e) if e.is_integrity_violation() => {
                warn!(error = %e, "Contact message insert rejected by constraint");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = self.client
            .table(CONTACT_MESSAGES_TABLE)
            .select("*")
            .order("created_at", true)
            .fetch()
            .await?;

        Ok(messages)
    }
}

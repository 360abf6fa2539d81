use std::sync::Arc;

use tracing::info;

use crate::{
    db::{postgres::create_pool, rest::RestClient},
    errors::AppError,
    repositories::{
        contact_message::DynContactMessageRepository,
        project::DynProjectRepository,
        rest_repo::{SupabaseContactMessageRepo, SupabaseProjectRepo},
        sqlx_repo::{SqlxContactMessageRepo, SqlxProjectRepo},
    },
    settings::{AppConfig, StoreBackend},
};

#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: DynProjectRepository,
    pub contact_repo: DynContactMessageRepository,
}

impl SharedRepositories {
    pub fn new(project_repo: DynProjectRepository, contact_repo: DynContactMessageRepository) -> Self {
        SharedRepositories {
            project_repo,
            contact_repo,
        }
    }

    /// Builds the repositories for the configured store backend.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        info!(backend = %config.store_backend, "Connecting to store");

        match config.store_backend {
            StoreBackend::Supabase => {
                let client = RestClient::new(&config.supabase_url, &config.supabase_key)?;

                Ok(SharedRepositories::new(
                    Arc::new(SupabaseProjectRepo::new(client.clone())),
                    Arc::new(SupabaseContactMessageRepo::new(client)),
                ))
            }
            StoreBackend::Postgres => {
                let pool = create_pool(&config.database_url).await?;

                Ok(SharedRepositories::new(
                    Arc::new(SqlxProjectRepo::new(pool.clone())),
                    Arc::new(SqlxContactMessageRepo::new(pool)),
                ))
            }
        }
    }
}

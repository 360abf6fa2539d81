mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, seed_data, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{db, utils};

use repositories::{contact_message::DynContactMessageRepository, project::DynProjectRepository};
use shared_repos::SharedRepositories;
use use_cases::{contact::ContactHandler, project::ProjectHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
}

pub type AppProjectHandler = ProjectHandler<DynProjectRepository>;
pub type AppContactHandler = ContactHandler<DynContactMessageRepository>;

impl AppState {
    pub fn new(repos: SharedRepositories) -> Self {
        AppState {
            project_handler: ProjectHandler::new(repos.project_repo),
            contact_handler: ContactHandler::new(repos.contact_repo),
        }
    }
}

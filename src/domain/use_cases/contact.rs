use tracing::{error, warn};
use validator::Validate;

use crate::{
    entities::contact_message::{ContactMessage, ContactMessageForm},
    errors::AppError,
    repositories::contact_message::ContactMessageRepository,
};

pub struct ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Stores a message submitted through the contact form
    pub async fn submit_contact_message(
        &self,
        request: ContactMessageForm,
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        self.contact_repo
            .create_contact_message(&request)
            .await
            .inspect_err(|e| error!(error = %e, "Error submitting contact message"))?
            .ok_or_else(|| {
                warn!("Store wrote no row for contact message");
                AppError::CreateFailed("Failed to submit message".to_string())
            })
    }

    /// Lists all contact messages, newest first
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo
            .list_contact_messages()
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching contact messages"))
    }
}

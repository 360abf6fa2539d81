use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact_message::ContactMessageForm, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn submit_contact_message(
    state: web::Data<AppState>,
    form: web::Json<ContactMessageForm>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler
        .submit_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(state))]
pub async fn get_contact_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler
        .list_contact_messages()
        .await?;

    Ok(HttpResponse::Ok().json(messages))
}

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_email_contracts::EmailId;
use folio_models::contact::ContactMessage;
use serde::Serialize;

use super::{error, internal_server_error};
use crate::models::contact::ApiContactMessage;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(
            "/contact",
            routing::post(send_message).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn send_message(service: State<Arc<impl ContactService>>, body: Bytes) -> Response {
    // A malformed body surfaces as the generic 500, not as an extractor 4xx.
    let message = match serde_json::from_slice::<ApiContactMessage>(&body) {
        Ok(message) => message,
        Err(err) => return internal_server_error(err),
    };

    let message: ContactMessage = match message.try_into() {
        Ok(message) => message,
        Err(rejection) => return error(StatusCode::BAD_REQUEST, rejection.message()),
    };

    match service.send_message(message).await {
        Ok(email_id) => Json(SendMessageResponse {
            success: true,
            message: "Message sent successfully",
            email_id,
        })
        .into_response(),
        Err(ContactSendMessageError::NotConfigured) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email service is not configured",
        ),
        Err(ContactSendMessageError::Send) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send email. Please try again later.",
        ),
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}

async fn method_not_allowed() -> Response {
    error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[derive(Serialize)]
struct SendMessageResponse {
    success: bool,
    message: &'static str,
    #[serde(rename = "emailId")]
    email_id: EmailId,
}

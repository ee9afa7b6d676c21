use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use folio_api_rest::RestServer;
use folio_core_contact_contracts::{ContactSendMessageError, MockContactService};
use folio_core_pages_contracts::MockPageService;
use folio_email_contracts::EmailId;
use folio_models::contact::{ContactMessage, ContactMessageAuthor};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn send_message_ok() {
    // Arrange
    let contact = MockContactService::new().with_send_message(
        message(),
        Ok(EmailId("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".into())),
    );

    // Act
    let (status, body) = send(contact, post(valid_payload())).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Message sent successfully",
            "emailId": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794",
        })
    );
}

#[tokio::test]
async fn send_message_ok_at_thresholds() {
    // Arrange
    let contact = MockContactService::new().with_send_message(
        ContactMessage {
            author: ContactMessageAuthor {
                name: "Al".try_into().unwrap(),
                email: "a@b.com".try_into().unwrap(),
            },
            company: None,
            content: "1234567890".try_into().unwrap(),
        },
        Ok(EmailId("min".into())),
    );

    // Act
    let (status, body) = send(
        contact,
        post(json!({"name": "Al", "email": "a@b.com", "message": "1234567890"})),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    // Act
    let (status, body) = send(
        MockContactService::new(),
        Request::get("/contact").body(Body::empty()).unwrap(),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn missing_fields() {
    // Act
    let (status, body) = send(
        MockContactService::new(),
        post(json!({"name": "", "email": "", "message": ""})),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required fields"}));
}

#[tokio::test]
async fn name_too_short_wins_over_later_rules() {
    // name, email and message are all invalid, the name error is reported
    let (status, body) = send(
        MockContactService::new(),
        post(json!({"name": "A", "email": "a@b.com", "message": "123456789"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Name must be at least 2 characters"}));
}

#[tokio::test]
async fn invalid_email() {
    let (status, body) = send(
        MockContactService::new(),
        post(json!({"name": "Max Mustermann", "email": "a@b", "message": "Hello World! This is a test."})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid email address"}));
}

#[tokio::test]
async fn message_too_short() {
    let (status, body) = send(
        MockContactService::new(),
        post(json!({"name": "Max Mustermann", "email": "max.mustermann@example.de", "message": "123456789"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Message must be at least 10 characters"})
    );
}

#[tokio::test]
async fn malformed_body() {
    // Act
    let (status, body) = send(
        MockContactService::new(),
        Request::post("/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "An unexpected error occurred. Please try again later."})
    );
}

#[tokio::test]
async fn email_service_not_configured() {
    // Arrange
    let contact = MockContactService::new()
        .with_send_message(message(), Err(ContactSendMessageError::NotConfigured));

    // Act
    let (status, body) = send(contact, post(valid_payload())).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Email service is not configured"}));
}

#[tokio::test]
async fn provider_error() {
    // Arrange
    let contact =
        MockContactService::new().with_send_message(message(), Err(ContactSendMessageError::Send));

    // Act
    let (status, body) = send(contact, post(valid_payload())).await;

    // Assert
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to send email. Please try again later."})
    );
}

fn valid_payload() -> Value {
    json!({
        "name": "Max Mustermann",
        "email": "max.mustermann@example.de",
        "company": "Musterfirma",
        "message": "Hello World! This is a test.",
    })
}

fn message() -> ContactMessage {
    ContactMessage {
        author: ContactMessageAuthor {
            name: "Max Mustermann".try_into().unwrap(),
            email: "max.mustermann@example.de".try_into().unwrap(),
        },
        company: Some("Musterfirma".to_owned().into()),
        content: "Hello World! This is a test.".try_into().unwrap(),
    }
}

fn post(body: Value) -> Request<Body> {
    Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(contact: MockContactService, request: Request<Body>) -> (StatusCode, Value) {
    let router = RestServer::new(contact, MockPageService::new()).router();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

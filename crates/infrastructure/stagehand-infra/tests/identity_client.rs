use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use stagehand_config::Endpoints;
use stagehand_core::{Credentials, SignupRequest};
use stagehand_infra::{default_http_client, IdentityClient, IdentityError};

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "hunter2" {
        (
            StatusCode::OK,
            Json(json!({
                "token": "tok-123",
                "user": { "_id": "u1", "name": "Ada", "email": body["email"] }
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
    }
}

async fn signup(Json(_body): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "User already exists" })),
    )
}

async fn spawn_identity_service() -> SocketAddr {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> IdentityClient {
    IdentityClient::new(
        default_http_client().unwrap(),
        &Endpoints::single_host(&format!("http://{addr}")),
    )
}

#[tokio::test]
async fn login_success_returns_token_and_user() {
    let addr = spawn_identity_service().await;
    let resp = client(addr)
        .login(&Credentials {
            email: "ada@example.com".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();

    assert_eq!(resp.token, "tok-123");
    assert_eq!(resp.user.id.as_deref(), Some("u1"));
    assert_eq!(resp.user.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn login_rejection_carries_error_body() {
    let addr = spawn_identity_service().await;
    let err = client(addr)
        .login(&Credentials {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    let IdentityError::Rejected { status, body } = &err else {
        panic!("expected rejection, got {err:?}");
    };
    assert_eq!(*status, 401);
    assert_eq!(body.login_message(), "Invalid credentials");
}

#[tokio::test]
async fn signup_rejection_falls_back_to_message_field() {
    let addr = spawn_identity_service().await;
    let err = client(addr)
        .signup(&SignupRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.rejection().map(|b| b.signup_message()),
        Some("User already exists".to_string())
    );
}

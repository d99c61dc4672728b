use std::net::SocketAddr;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use stagehand_config::Endpoints;
use stagehand_core::{
    AnalysisWorkflow, BinaryBlob, ClipWindow, Genre, InputBundle, SubmissionError,
    TransformWorkflow, Workflow,
};
use stagehand_infra::{default_http_client, HttpGateway, TransportError};

async fn echo_script(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "final_script": format!(
            "{} / {}",
            body["genre"].as_str().unwrap_or_default(),
            body["original_script"].as_str().unwrap_or_default()
        ),
    }))
}

async fn inspect_multipart(mut multipart: Multipart) -> Json<Value> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.unwrap();
        parts.push(json!({
            "name": name,
            "file_name": file_name,
            "content_type": content_type,
            "len": data.len(),
            "text": String::from_utf8_lossy(&data),
        }));
    }
    Json(json!({ "parts": parts }))
}

async fn exploding() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>upstream crashed</html>")
}

fn script_service() -> Router {
    Router::new()
        .route("/generate-script/", post(echo_script))
        .route("/generate-script-from-pdf/", post(inspect_multipart))
}

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn gateway() -> HttpGateway {
    HttpGateway::new(default_http_client().unwrap())
}

fn part<'a>(body: &'a Value, name: &str) -> &'a Value {
    body["parts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("missing part {name}"))
}

#[tokio::test]
async fn text_bundle_posts_json_and_parses_result() {
    let addr = spawn_server(script_service()).await;
    let wf = TransformWorkflow::new(&Endpoints::single_host(&format!("http://{addr}")));

    let req = wf
        .build_request(&InputBundle::transformation_text("INT. ROOM", Genre::Comedy))
        .unwrap();
    let resp = gateway().execute(&req).await.unwrap();
    assert!(resp.is_success());

    let result = wf.parse_output(&resp.body).unwrap();
    assert_eq!(result.script_text(), "Comedy / INT. ROOM");
    assert_eq!(result.status.as_deref(), Some("success"));
}

#[tokio::test]
async fn file_bundle_posts_multipart_with_file_and_genre() {
    let addr = spawn_server(script_service()).await;
    let wf = TransformWorkflow::new(&Endpoints::single_host(&format!("http://{addr}")));
    let blob = BinaryBlob::new("act1.pdf", "application/pdf", b"%PDF-1.4".to_vec());

    let req = wf
        .build_request(&InputBundle::transformation_file(blob, Genre::Romance))
        .unwrap();
    let resp = gateway().execute(&req).await.unwrap();
    let body: Value = serde_json::from_slice(&resp.body).unwrap();

    let file = part(&body, "file");
    assert_eq!(file["file_name"], "act1.pdf");
    assert_eq!(file["content_type"], "application/pdf");
    assert_eq!(file["len"], 8);
    assert_eq!(part(&body, "genre")["text"], "Romance");
    assert_eq!(body["parts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn analysis_form_sends_video_emotion_and_clip() {
    let addr = spawn_server(Router::new().route("/predict", post(inspect_multipart))).await;
    let wf = AnalysisWorkflow::new(&Endpoints::single_host(&format!("http://{addr}")));

    let blob = BinaryBlob::new("take.mp4", "video/mp4", vec![0u8; 32]);
    let bundle = InputBundle::analysis(blob, "  joy ").with_clip(ClipWindow {
        start: Some(2.0),
        end: Some(12.5),
    });
    let req = wf.build_request(&bundle).unwrap();
    let resp = gateway().execute(&req).await.unwrap();
    let body: Value = serde_json::from_slice(&resp.body).unwrap();

    assert_eq!(part(&body, "video")["file_name"], "take.mp4");
    assert_eq!(part(&body, "video")["len"], 32);
    assert_eq!(part(&body, "user_emotion")["text"], "joy");
    assert_eq!(part(&body, "start_time")["text"], "2");
    assert_eq!(part(&body, "end_time")["text"], "12.5");
}

#[tokio::test]
async fn server_error_is_returned_as_response_not_transport_failure() {
    let addr = spawn_server(Router::new().route("/predict", post(exploding))).await;
    let wf = AnalysisWorkflow::new(&Endpoints::single_host(&format!("http://{addr}")));
    let blob = BinaryBlob::new("take.mp4", "video/mp4", vec![1, 2, 3]);

    let req = wf.build_request(&InputBundle::analysis(blob, "joy")).unwrap();
    let resp = gateway().execute(&req).await.unwrap();

    assert_eq!(resp.status, 500);
    assert_eq!(resp.reason.as_deref(), Some("Internal Server Error"));
    let err = SubmissionError::from_response(&resp);
    assert_eq!(
        err.to_string(),
        "Server error: 500 <html>upstream crashed</html>"
    );
}

#[tokio::test]
async fn closed_port_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let wf = TransformWorkflow::new(&Endpoints::single_host(&format!("http://{addr}")));
    let req = wf
        .build_request(&InputBundle::transformation_text("x", Genre::Drama))
        .unwrap();
    let err = gateway().execute(&req).await.unwrap_err();
    assert!(matches!(err, TransportError::Send { .. }));
}

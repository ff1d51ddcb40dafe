use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use services::{RelayError, RelayReply, RelayService, ServerConfig, spawn_relay};

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn pdf_server() -> Router {
    Router::new()
        .route("/doc.pdf", get(|| async { b"%PDF-1.4 contenu".to_vec() }))
        .route(
            "/process_pdf",
            post(|mut multipart: Multipart| async move {
                let field = multipart.next_field().await.unwrap().unwrap();
                assert_eq!(field.name(), Some("pdf"));
                assert_eq!(field.file_name(), Some("online.pdf"));
                let bytes = field.bytes().await.unwrap();
                Json(json!({"message": "PDF traité", "text_length": bytes.len()}))
            }),
        )
}

#[tokio::test]
async fn missing_remote_pdf_reports_http_404() {
    // No routes at all: any GET comes back 404.
    let base = serve(Router::new()).await;

    let service = RelayService::new(ServerConfig::default());
    let err = service
        .download_pdf_from_url(&format!("{base}/doc.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::Http(StatusCode::NOT_FOUND)));
    assert_eq!(err.to_string(), "Erreur HTTP: 404");
}

#[tokio::test]
async fn non_pdf_url_is_rejected_before_any_fetch() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let app = Router::new().route(
        "/page.html",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                "not a pdf"
            }
        }),
    );
    let base = serve(app).await;

    let service = RelayService::new(ServerConfig::default());
    let err = service
        .download_pdf_from_url(&format!("{base}/page.html"))
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::NotPdf));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_http_scheme_is_rejected() {
    let service = RelayService::new(ServerConfig::default());
    let err = service
        .download_pdf_from_url("ftp://x.com/doc.pdf")
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::InvalidUrl));
}

#[tokio::test]
async fn downloaded_pdf_is_forwarded_to_process_pdf() {
    let base = serve(pdf_server()).await;

    let service = RelayService::new(ServerConfig::new(base.clone()));
    let data = service
        .download_pdf_from_url(&format!("{base}/doc.pdf"))
        .await
        .unwrap();
    assert_eq!(data["message"], "PDF traité");
    assert_eq!(
        data["text_length"].as_u64().unwrap(),
        b"%PDF-1.4 contenu".len() as u64
    );
}

#[tokio::test]
async fn server_error_field_wins_over_payload() {
    let app = Router::new()
        .route("/doc.pdf", get(|| async { b"%PDF-1.4".to_vec() }))
        .route(
            "/process_pdf",
            post(|| async { Json(json!({"error": "Aucun PDF valide reçu"})) }),
        );
    let base = serve(app).await;

    let service = RelayService::new(ServerConfig::new(base.clone()));
    let err = service
        .download_pdf_from_url(&format!("{base}/doc.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, RelayError::Server(_)));
    assert_eq!(err.to_string(), "Aucun PDF valide reçu");
}

#[tokio::test]
async fn relay_channel_answers_each_request_once() {
    let base = serve(pdf_server()).await;

    let handle = spawn_relay(RelayService::new(ServerConfig::new(base.clone())));

    let ok = handle.download_pdf(format!("{base}/doc.pdf")).await;
    assert!(ok.success);
    assert_eq!(ok.data.unwrap()["message"], "PDF traité");
    assert!(ok.error.is_none());

    let missing = serve(Router::new()).await;
    let failed = handle.download_pdf(format!("{missing}/doc.pdf")).await;
    assert_eq!(failed, RelayReply::err("Erreur HTTP: 404"));
}

#[tokio::test]
async fn concurrent_relay_requests_all_complete() {
    let base = serve(pdf_server()).await;
    let handle = spawn_relay(RelayService::new(ServerConfig::new(base.clone())));

    let first = handle.download_pdf(format!("{base}/doc.pdf"));
    let second = handle.download_pdf(format!("{base}/doc.pdf"));
    let (first, second) = tokio::join!(first, second);
    assert!(first.success);
    assert!(second.success);
}

//! HTTP adaptor for Gambit
//!
//! Exposes the evaluation endpoint over axum:
//!
//! - `POST /analyze_conversation` - evaluate a transcript, returns
//!   `{ success, analysis, score?, eval_metric }`
//! - `GET /health` - health check
//!
//! Upstream completion failures map to a 500 `{ success: false, error }`
//! body; reply-parsing shortfalls never fail a request.

#![warn(missing_docs)]
#![warn(clippy::all)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use gambit_core::{ConversationEvaluator, EvaluationRequest, GambitError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Web adaptor configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Enable CORS for all routes
    pub enable_cors: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// Shared per-server state
#[derive(Clone)]
struct ServerState {
    evaluator: Arc<ConversationEvaluator>,
    start_time: Instant,
}

/// Successful evaluation response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Always true on the 200 path
    pub success: bool,

    /// Extracted analysis text
    pub analysis: String,

    /// Extracted score; present only in score-requesting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,

    /// Evaluation metric echoed from the request
    pub eval_metric: String,
}

/// Health check response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Seconds since the server started
    pub uptime: u64,

    /// Current time, RFC 3339
    pub timestamp: String,
}

/// API error mapped to the failure response shape
#[derive(Debug)]
pub enum ApiError {
    /// Upstream or internal failure
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

impl From<GambitError> for ApiError {
    fn from(err: GambitError) -> Self {
        error!("GambitError: {}", err);
        ApiError::Internal(err.to_string())
    }
}

/// Evaluation API server
pub struct EvalApiServer {
    config: Arc<WebConfig>,
    evaluator: Arc<ConversationEvaluator>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    running: bool,
}

impl EvalApiServer {
    /// Create a new server over the given evaluator
    pub fn new(config: WebConfig, evaluator: Arc<ConversationEvaluator>) -> Self {
        Self {
            config: Arc::new(config),
            evaluator,
            shutdown_tx: None,
            running: false,
        }
    }

    /// Build the axum router
    pub fn build_router(evaluator: Arc<ConversationEvaluator>, enable_cors: bool) -> Router {
        let state = ServerState {
            evaluator,
            start_time: Instant::now(),
        };

        let mut router = Router::new()
            .route("/health", get(health_check))
            .route("/analyze_conversation", post(analyze_conversation))
            .with_state(state);

        if enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router
    }

    /// Start the server
    pub async fn start(&mut self) -> Result<()> {
        if self.running {
            return Err(GambitError::server("Server already running"));
        }

        let router = Self::build_router(self.evaluator.clone(), self.config.enable_cors);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!("Starting evaluation API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| GambitError::server(format!("Failed to bind to {}: {}", addr, e)))?;

        let (tx, rx) = tokio::sync::oneshot::channel();
        self.shutdown_tx = Some(tx);

        tokio::spawn(async move {
            let server = axum::serve(listener, router).with_graceful_shutdown(async {
                let _ = rx.await;
            });
            if let Err(e) = server.await {
                error!("Server error: {}", e);
            }
        });

        self.running = true;
        Ok(())
    }

    /// Stop the server
    pub async fn stop(&mut self) -> Result<()> {
        if !self.running {
            return Ok(());
        }

        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        self.running = false;
        info!("Evaluation API server stopped");
        Ok(())
    }

    /// Check if server is running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Evaluate a conversation transcript
async fn analyze_conversation(
    State(state): State<ServerState>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    info!(
        turns = request.transcriptions.len(),
        eval_metric = %request.eval_metric,
        "received /analyze_conversation request"
    );

    match state.evaluator.evaluate(request).await {
        Ok(result) => Json(AnalyzeResponse {
            success: true,
            analysis: result.analysis,
            score: result.score,
            eval_metric: result.eval_metric,
        })
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Health check handler
async fn health_check(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use gambit_core::{CompletionProvider, CompletionRequest, EvaluatorOpts};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct StubProvider {
        reply: String,
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            Ok(self.reply.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            Err(GambitError::provider("auth failure"))
        }
    }

    fn router_with_reply(reply: &str, opts: EvaluatorOpts) -> Router {
        let evaluator = Arc::new(ConversationEvaluator::new(
            Arc::new(StubProvider {
                reply: reply.to_string(),
            }),
            opts,
        ));
        EvalApiServer::build_router(evaluator, true)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_conversation_success() {
        let router = router_with_reply(
            "ANALYSIS: Good opening question\nSCORE: 72",
            EvaluatorOpts::default(),
        );
        let request = post_json(
            "/analyze_conversation",
            json!({
                "emotions": ["curious"],
                "transcriptions": [
                    {"speaker": 0, "text": "How was your week?"},
                    {"speaker": 1, "text": "Great, thanks!"}
                ],
                "eval_metric": "first date"
            }),
        );

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["analysis"], json!("Good opening question"));
        assert_eq!(body["score"], json!(72));
        assert_eq!(body["eval_metric"], json!("first date"));
    }

    #[tokio::test]
    async fn test_analyze_conversation_defaults() {
        let router = router_with_reply("ANALYSIS: quiet\nSCORE: 50", EvaluatorOpts::default());
        let response = router
            .oneshot(post_json("/analyze_conversation", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["eval_metric"], json!("general conversation"));
        assert_eq!(body["score"], json!(50));
    }

    #[tokio::test]
    async fn test_analyze_conversation_no_score_mode() {
        let router = router_with_reply(
            "ANALYSIS: classification only",
            EvaluatorOpts {
                request_score: false,
                multiline_analysis: false,
            },
        );
        let response = router
            .oneshot(post_json("/analyze_conversation", json!({})))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert!(body.get("score").is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_500() {
        let evaluator = Arc::new(ConversationEvaluator::new(
            Arc::new(FailingProvider),
            EvaluatorOpts::default(),
        ));
        let router = EvalApiServer::build_router(evaluator, true);
        let response = router
            .oneshot(post_json("/analyze_conversation", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("auth failure"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = router_with_reply("ANALYSIS: ok\nSCORE: 50", EvaluatorOpts::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], json!("ok"));
    }

    #[tokio::test]
    async fn test_unparsable_reply_degrades_to_defaults() {
        let router = router_with_reply(
            "The model ignored the requested format entirely.",
            EvaluatorOpts::default(),
        );
        let response = router
            .oneshot(post_json("/analyze_conversation", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["analysis"],
            json!("The model ignored the requested format entirely.")
        );
        assert_eq!(body["score"], json!(50));
    }
}

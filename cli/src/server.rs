#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use galaxy::{Engine, EngineConfig, GalaxyError, Response};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;
    use tracing::{error, info};

    type SharedConfig = Arc<EngineConfig>;

    #[derive(Debug, Deserialize)]
    struct AnswerRequest {
        lines: Vec<String>,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
    }

    pub async fn start_server(config: EngineConfig, host: &str, port: u16) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Galaxy server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router(config)).await?;

        Ok(())
    }

    pub fn router(config: EngineConfig) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/answer", post(answer_post))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(Arc::new(config))
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "galaxy",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    /// Every request gets its own engine, so no lexicon is shared between
    /// batches.
    async fn answer_post(
        State(config): State<SharedConfig>,
        Json(payload): Json<AnswerRequest>,
    ) -> Result<Json<Response>, (StatusCode, Json<ErrorResponse>)> {
        let lines: Vec<String> = payload
            .lines
            .iter()
            .map(|line| line.trim().to_string())
            .collect();

        let mut engine = Engine::with_config(config.as_ref().clone());
        let response = engine.run(&lines).map_err(|e| {
            error!("Batch failed: {}", e);
            let line = match &e {
                GalaxyError::Statement { line, .. } => Some(*line),
                _ => None,
            };
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                    line,
                }),
            )
        })?;

        info!(
            "Answered {} question(s) from {} line(s)",
            response.answers.len(),
            lines.len()
        );

        Ok(Json(response))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use axum::body::{to_bytes, Body};
        use axum::http::Request;
        use tower::ServiceExt;

        async fn post_lines(lines: serde_json::Value) -> (StatusCode, serde_json::Value) {
            let request = Request::builder()
                .method("POST")
                .uri("/answer")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::json!({ "lines": lines }).to_string()))
                .unwrap();

            let response = router(EngineConfig::default())
                .oneshot(request)
                .await
                .unwrap();
            let status = response.status();
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, serde_json::from_slice(&body).unwrap())
        }

        #[tokio::test]
        async fn test_answer_endpoint() {
            let (status, body) = post_lines(serde_json::json!([
                "glob is I",
                "prok is V",
                "how much is prok glob ?",
                "how much is zorp ?"
            ]))
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["answers"][0]["answer"], "prok glob is 6");
            assert_eq!(
                body["answers"][1]["answer"],
                "I have no idea what you are talking about"
            );
            assert_eq!(body["lexicon"]["symbols"]["prok"], "V");
        }

        #[tokio::test]
        async fn test_answer_endpoint_rejects_bad_declaration() {
            let (status, body) =
                post_lines(serde_json::json!(["glob Gold is many Credits"])).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body["line"], 1);
        }

        #[tokio::test]
        async fn test_health() {
            let response = router(EngineConfig::default())
                .oneshot(
                    Request::builder()
                        .uri("/health")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _config: galaxy::EngineConfig,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}

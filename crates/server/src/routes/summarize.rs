use actix_web::{http::StatusCode, post, web, HttpResponse};
use chrono::Utc;
use reviewdigest_llm::format_reviews;
use std::sync::Arc;
use tracing::error;

use crate::state::AppState;
use crate::types::{ErrorResponse, SummarizeRequest, SummarizeResponse, SummaryMetadata};

/// Summarize a batch of user reviews
///
/// The request shape (including the language code) is validated by
/// deserialization before this handler runs; the downstream call is async,
/// so the event loop stays free while the model generates.
#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let reviews: Vec<String> = req.reviews.iter().map(|r| r.review.clone()).collect();
    let reviews_md = format_reviews(&reviews);

    match state
        .summarizer
        .summarize(&reviews_md, req.output_language)
        .await
    {
        Ok(summary) => Ok(HttpResponse::Ok().json(SummarizeResponse {
            summary,
            metadata: SummaryMetadata {
                input_language: req.output_language.code().to_string(),
                output_language: req.output_language.code().to_string(),
                timestamp: Utc::now(),
            },
        })),
        Err(e) => {
            error!("Summarization failed: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(ErrorResponse {
                detail: format!("LLM service unavailable: {}", e),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use reviewdigest_common::{AppConfig, PipelinePolicy, Result, ReviewDigestError};
    use reviewdigest_llm::{
        CompletionRequest, LlmClient, PromptArtifact, ReviewSummarizer,
    };
    use std::sync::Mutex;

    /// Fake client recording every request
    struct FakeLlm {
        reply: Result<String>,
        calls: Mutex<Vec<CompletionRequest>>,
    }

    impl FakeLlm {
        fn new(reply: Result<String>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmClient for FakeLlm {
        async fn complete(&self, request: CompletionRequest) -> Result<String> {
            self.calls.lock().unwrap().push(request);
            match &self.reply {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(ReviewDigestError::llm(e.to_string())),
            }
        }
    }

    fn test_state(client: Arc<FakeLlm>) -> Arc<AppState> {
        let artifact = PromptArtifact {
            version: None,
            instructions: "Summarize the provided user reviews.".to_string(),
            stylize_instructions: None,
            demos: vec![],
        };
        Arc::new(AppState {
            config: AppConfig::default(),
            summarizer: Arc::new(ReviewSummarizer::new(
                client,
                artifact,
                PipelinePolicy::Persuasive,
            )),
        })
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(
                        web::JsonConfig::default().error_handler(crate::json_error_handler),
                    )
                    .service(summarize),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_summarize_success() {
        let client = FakeLlm::new(Ok("This is a summary.".to_string()));
        let app = test_app!(test_state(client.clone()));

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(serde_json::json!({
                "reviews": [
                    {"review": "Great product!"},
                    {"review": "Fast shipping."}
                ],
                "output_language": "cs"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: SummarizeResponse = test::read_body_json(resp).await;
        assert_eq!(body.summary, "This is a summary.");
        assert_eq!(body.metadata.output_language, "cs");
        assert_eq!(body.metadata.input_language, "cs");

        // Pipeline called exactly once with the formatted markdown
        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0]
            .user
            .contains("# User review 1\nGreat product!\n\n# User review 2\nFast shipping."));
        assert!(calls[0].user.contains("'cs'"));
    }

    #[actix_web::test]
    async fn test_summarize_empty_reviews_returns_200() {
        let client = FakeLlm::new(Ok("No reviews to summarize.".to_string()));
        let app = test_app!(test_state(client.clone()));

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(serde_json::json!({
                "reviews": [],
                "output_language": "sk"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: SummarizeResponse = test::read_body_json(resp).await;
        assert_eq!(body.summary, "No reviews to summarize.");
        assert_eq!(client.calls.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_summarize_invalid_language_returns_422() {
        let client = FakeLlm::new(Ok("unused".to_string()));
        let app = test_app!(test_state(client.clone()));

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(serde_json::json!({
                "reviews": [{"review": "Great product!"}],
                "output_language": "xx"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);

        // Rejected before the pipeline runs
        assert!(client.calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_summarize_pipeline_failure_returns_503_with_cause() {
        let client = FakeLlm::new(Err(ReviewDigestError::llm("quota exceeded")));
        let app = test_app!(test_state(client));

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(serde_json::json!({
                "reviews": [{"review": "Great product!"}],
                "output_language": "cs"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.detail.starts_with("LLM service unavailable:"));
        assert!(body.detail.contains("quota exceeded"));
    }
}

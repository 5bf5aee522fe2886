use crate::server::render::{render_page, View};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form,
};
use emotext_core::Error;
use serde::Deserialize;

// ============================================================================
// Form page
// ============================================================================

pub async fn index() -> impl IntoResponse {
    Html(render_page(&View::AwaitingSubmission))
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub text: String,
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> impl IntoResponse {
    match state.pipeline.analyze(&form.text).await {
        Ok(analysis) => (StatusCode::OK, Html(render_page(&View::Result(analysis)))),
        Err(err @ Error::EmptyInput) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_page(&View::Error {
                text: form.text,
                message: err.to_string(),
            })),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_page(&View::Error {
                    text: form.text,
                    message: "The classifier could not analyze this text.".to_string(),
                })),
            )
        }
    }
}

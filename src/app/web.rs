use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::app::render::{escape_html, render_markdown};
use crate::app::{PAGE_TITLE, REPORT_HEADING, WAIT_MESSAGE};
use crate::core::engine::AdvisoryEngine;
use crate::domain::model::{AdvisoryRequest, AdvisoryResponse};
use crate::domain::ports::CompletionTransport;
use crate::utils::error::{AdvisoryError, ErrorCategory};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// What the page shows under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Blank,
    Warning(String),
    Report(String),
    Error(String),
}

pub fn build_app<T>(engine: Arc<AdvisoryEngine<T>>) -> Router
where
    T: CompletionTransport + 'static,
{
    Router::new()
        .route("/", get(index).post(submit_form::<T>))
        .route("/api/advisory", post(submit_json::<T>))
        .fallback(not_found)
        .with_state(engine)
}

pub async fn run_server(app: Router, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("🚀 Advisory form listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}

fn status_for(error: &AdvisoryError) -> StatusCode {
    match error.category() {
        ErrorCategory::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCategory::RemoteService => StatusCode::BAD_GATEWAY,
        ErrorCategory::Configuration | ErrorCategory::System => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn index() -> Html<String> {
    Html(render_page(&AdvisoryRequest::default(), &PageOutcome::Blank))
}

async fn submit_form<T>(
    State(engine): State<Arc<AdvisoryEngine<T>>>,
    Form(form): Form<AdvisoryRequest>,
) -> (StatusCode, Html<String>)
where
    T: CompletionTransport + 'static,
{
    let (status, outcome) = match engine.submit(&form).await {
        Ok(response) => (StatusCode::OK, PageOutcome::Report(response.content)),
        Err(e) => {
            let outcome = if e.category() == ErrorCategory::Validation {
                PageOutcome::Warning(e.user_friendly_message())
            } else {
                PageOutcome::Error(e.user_friendly_message())
            };
            (status_for(&e), outcome)
        }
    };

    (status, Html(render_page(&form, &outcome)))
}

async fn submit_json<T>(
    State(engine): State<Arc<AdvisoryEngine<T>>>,
    Json(payload): Json<AdvisoryRequest>,
) -> Result<Json<AdvisoryResponse>, (StatusCode, Json<ErrorResponse>)>
where
    T: CompletionTransport + 'static,
{
    engine.submit(&payload).await.map(Json).map_err(|e| {
        (
            status_for(&e),
            Json(ErrorResponse {
                error: e.user_friendly_message(),
            }),
        )
    })
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem;line-height:1.5}\
label{display:block;margin-top:1rem;font-weight:600}\
input{width:100%;padding:.5rem;font-size:1rem;box-sizing:border-box}\
button{margin-top:1rem;padding:.6rem 1.2rem;font-size:1rem}\
.warning{background:#fff4ce;padding:.75rem;border-radius:.25rem}\
.error{background:#fde7e9;padding:.75rem;border-radius:.25rem}\
.report{margin-top:2rem}";

pub fn render_page(form: &AdvisoryRequest, outcome: &PageOutcome) -> String {
    let result = match outcome {
        PageOutcome::Blank => String::new(),
        PageOutcome::Warning(message) => {
            format!(r#"<p class="warning">⚠️ {}</p>"#, escape_html(message))
        }
        PageOutcome::Error(message) => {
            format!(r#"<p class="error">❌ {}</p>"#, escape_html(message))
        }
        PageOutcome::Report(content) => format!(
            r#"<section class="report">{}{}</section>"#,
            render_markdown(REPORT_HEADING),
            render_markdown(content)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Agricultural Disease Advisory AI</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<p>Scientifically accurate, safe, and extension-grade crop disease guidance powered by NVIDIA Nemotron via OpenRouter.</p>
<form method="post" action="/" onsubmit="var b=this.querySelector('button');b.disabled=true;b.textContent='{wait}';">
<label for="plant">🌾 Crop / Plant Name</label>
<input id="plant" name="plant" type="text" placeholder="e.g. Potato" value="{plant}">
<label for="issue">🦠 Disease / Problem</label>
<input id="issue" name="issue" type="text" placeholder="e.g. Late Blight" value="{issue}">
<button type="submit">Generate Advisory</button>
</form>
{result}
</body>
</html>
"#,
        style = STYLE,
        title = PAGE_TITLE,
        wait = WAIT_MESSAGE,
        plant = escape_html(&form.plant),
        issue = escape_html(&form.issue),
        result = result,
    )
}

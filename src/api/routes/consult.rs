use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::routes::{api_error, ApiError};
use crate::api::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConsultRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ConsultResponse {
    pub answer: String,
}

pub async fn consult_handler(
    State(state): State<AppState>,
    Json(request): Json<ConsultRequest>,
) -> Result<Json<ConsultResponse>, ApiError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Digite uma pergunta antes de consultar.",
        ));
    }

    match state.consult_service.ask(question).await {
        Ok(answer) => Ok(Json(ConsultResponse { answer })),
        Err(e) => {
            tracing::error!(error = %e, "Failed to relay consultation");
            Err(api_error(
                StatusCode::BAD_GATEWAY,
                format!("Erro ao consultar a IA: {e}"),
            ))
        }
    }
}

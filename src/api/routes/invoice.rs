use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::routes::{api_error, ApiError};
use crate::api::state::AppState;
use crate::domain::ValidationResult;

const UNMAPPED_RATE: &str = "Não mapeado";

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub product_name: String,
    pub cfop_code: String,
    pub declared_icms_rate: String,
    pub expected_icms_rate: String,
    pub verdict: String,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            product_name: result.product_name,
            cfop_code: result.cfop_code,
            declared_icms_rate: result.declared_icms_rate,
            expected_icms_rate: result
                .expected_icms_rate
                .unwrap_or_else(|| UNMAPPED_RATE.to_string()),
            verdict: result.verdict.to_string(),
        }
    }
}

/// Accepts a multipart upload whose first file field is the NF-e XML.
pub async fn validate_invoice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ValidateResponse>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Upload inválido: {e}")))?
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Envie um arquivo XML de NF-e."))?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Upload inválido: {e}")))?;

    let xml = String::from_utf8(bytes.to_vec()).map_err(|e| {
        api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Não foi possível processar o XML: {e}"),
        )
    })?;

    match state.invoice_service.validate(&xml) {
        Ok(result) => Ok(Json(ValidateResponse::from(result))),
        Err(e) => {
            tracing::error!(error = %e, "Failed to validate invoice");
            Err(api_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Não foi possível processar o XML: {e}"),
            ))
        }
    }
}

use crate::error::Result;
use crate::state::AppState;
use axis_form::{FormRecord, FormRenderer};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// Synchronous disposal form generation
/// Returns the PDF bytes as a download
pub async fn generate_disposal_pdf(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FormRecord>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(form) = payload?;
    tracing::info!(
        "Disposal form request ({} table entries)",
        form.table_entries.len()
    );

    // Rendering reads files and builds the whole document in memory
    let assets = state.assets.clone();
    let pdf_bytes =
        tokio::task::spawn_blocking(move || FormRenderer::new(assets.as_ref()).render(&form))
            .await??;

    tracing::info!("Disposal form generated ({} bytes)", pdf_bytes.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=axis_disposal_form.pdf",
            ),
        ],
        pdf_bytes,
    ))
}

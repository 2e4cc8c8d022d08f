//! Axis Form - disposal instruction form rendering
//!
//! This crate provides:
//! - The form record received from clients ([`FormRecord`], [`TableEntry`])
//! - The fixed overlay layout of the three scanned form pages ([`DISPOSAL_LAYOUT`])
//! - Background image lookup ([`BackgroundSource`], [`AssetDir`])
//! - The renderer producing the filled-in PDF ([`FormRenderer`])
//!
//! # Example
//!
//! ```ignore
//! use axis_form::{AssetDir, FormRecord, FormRenderer};
//!
//! let assets = AssetDir::new("static/axisbank");
//! let form: FormRecord = serde_json::from_str(r#"{"branch_name": "Mumbai Main"}"#)?;
//! let pdf_bytes = FormRenderer::new(&assets).render(&form)?;
//! ```

mod assets;
pub mod layout;
mod model;
mod renderer;

pub use assets::{AssetDir, BackgroundSource};
pub use layout::{
    FieldPlacement, FormField, FormLayout, PageLayout, TableColumn, TableLayout, DISPOSAL_LAYOUT,
};
pub use model::{FormRecord, TableEntry};
pub use renderer::FormRenderer;

use thiserror::Error;

/// Errors that can occur while rendering a form
#[derive(Debug, Error)]
pub enum FormError {
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("Failed to read background image {file}: {source}")]
    Asset {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;

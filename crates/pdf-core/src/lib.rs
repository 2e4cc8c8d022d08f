//! PDF Core - Low-level PDF page composition
//!
//! This crate provides functionality for:
//! - Creating new documents with fixed-size pages
//! - Drawing text at specific coordinates with the standard PDF fonts
//! - Drawing images (JPEG, PNG), including full-page backgrounds
//! - Finalizing the document to bytes or a file
//!
//! Coordinates are PDF user-space points with the origin at the bottom-left
//! corner of the page.
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{FontWeight, PageSize, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::new();
//! let page = doc.add_page(PageSize::A4);
//! doc.fill_page_with_image(&std::fs::read("1.jpeg")?, page)?;
//! doc.set_font(StandardFont::Helvetica, 12.0);
//! doc.insert_text("Hello, World!", page, 100.0, 700.0)?;
//! doc.set_font_weight(FontWeight::Bold);
//! doc.insert_text("Bold heading", page, 100.0, 780.0)?;
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod font;
mod image;
mod text;

pub use document::{Color, PageSize, PdfDocument};
pub use font::{encode_win_ansi, FontWeight, StandardFont};
pub use image::{ColorSpace, ImageFilter, ImageXObject};
pub use text::{encode_text_literal, TextRun};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

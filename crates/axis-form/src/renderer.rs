//! Form rendering

use crate::assets::BackgroundSource;
use crate::layout::{FormLayout, PageLayout, TableLayout, DISPOSAL_LAYOUT};
use crate::model::FormRecord;
use crate::Result;
use pdf_core::{FontWeight, PdfDocument};

/// Title written to the document information dictionary
const DOCUMENT_TITLE: &str = "Axis Disposal Instruction";

/// Disposal form renderer
pub struct FormRenderer<'a> {
    /// Page and field positions
    layout: &'a FormLayout,
    /// Where page backgrounds come from
    assets: &'a dyn BackgroundSource,
}

impl<'a> FormRenderer<'a> {
    /// Create a renderer for the standard disposal layout
    pub fn new(assets: &'a dyn BackgroundSource) -> Self {
        Self::with_layout(&DISPOSAL_LAYOUT, assets)
    }

    /// Create a renderer for a custom layout
    pub fn with_layout(layout: &'a FormLayout, assets: &'a dyn BackgroundSource) -> Self {
        Self { layout, assets }
    }

    /// Render a form record into PDF bytes
    ///
    /// A missing background is replaced by a "Missing image" notice; a
    /// background that exists but cannot be read or decoded fails the
    /// whole render.
    pub fn render(&self, form: &FormRecord) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new();
        doc.set_title(DOCUMENT_TITLE);
        doc.set_font(self.layout.font, self.layout.font_size);

        for page_layout in self.layout.pages {
            let page = doc.add_page(self.layout.page_size);
            tracing::debug!(page, background = page_layout.background, "rendering page");
            self.render_page(&mut doc, page, page_layout, form)?;
        }

        let bytes = doc.to_bytes()?;
        tracing::debug!(
            rows = form.table_entries.len(),
            bytes = bytes.len(),
            "rendered disposal form"
        );

        Ok(bytes)
    }

    /// Render one page: background first, then fields, then table rows
    fn render_page(
        &self,
        doc: &mut PdfDocument,
        page: usize,
        layout: &PageLayout,
        form: &FormRecord,
    ) -> Result<()> {
        self.render_background(doc, page, layout.background)?;

        for placement in layout.fields {
            doc.set_font_weight(placement.weight);
            doc.insert_text(placement.field.value(form), page, placement.x, placement.y)?;
        }
        doc.set_font_weight(FontWeight::Regular);

        if let Some(table) = &layout.table {
            self.render_table(doc, page, table, form)?;
        }

        Ok(())
    }

    fn render_background(&self, doc: &mut PdfDocument, page: usize, file_name: &str) -> Result<()> {
        match self.assets.load(file_name)? {
            Some(data) => doc.fill_page_with_image(&data, page)?,
            None => {
                tracing::warn!(file = file_name, page, "background image missing");
                doc.set_font_weight(FontWeight::Regular);
                doc.insert_text(
                    &format!("Missing image: {}", file_name),
                    page,
                    self.layout.placeholder_x,
                    self.layout.placeholder_y,
                )?;
            }
        }
        Ok(())
    }

    fn render_table(
        &self,
        doc: &mut PdfDocument,
        page: usize,
        table: &TableLayout,
        form: &FormRecord,
    ) -> Result<()> {
        for (index, entry) in form.table_entries.iter().enumerate() {
            let y = table.row_y(index);
            for &(column, x) in table.columns {
                doc.insert_text(column.value(entry), page, x, y)?;
            }
        }
        Ok(())
    }
}

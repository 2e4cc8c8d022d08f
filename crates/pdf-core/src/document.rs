//! PDF Document builder

use crate::font::{encode_win_ansi, FontWeight, StandardFont};
use crate::image::{draw_image_operators, ImageXObject};
use crate::text::TextRun;
use crate::{PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Page dimensions in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// ISO A4 portrait (210 x 297 mm)
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A page under construction
struct Page {
    size: PageSize,
    /// Content stream operators, in drawing order
    content: Vec<u8>,
    /// Font resources used on this page (resource name -> font variant)
    fonts: BTreeMap<String, (StandardFont, FontWeight)>,
    /// Image resources used on this page (resource name -> object ID)
    images: BTreeMap<String, ObjectId>,
}

/// PDF Document builder providing high-level drawing operations
///
/// Pages are kept in memory while drawing; the page tree, resources and
/// catalog are assembled once by [`PdfDocument::to_bytes`] or
/// [`PdfDocument::save`].
pub struct PdfDocument {
    /// The underlying lopdf document (holds image objects while drawing)
    inner: Document,
    /// Pages in order (page number = index + 1)
    pages: Vec<Page>,
    /// Current font family
    current_font: StandardFont,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Font resource names, shared by all pages (font variant -> "F1", "F2", ...)
    font_resources: HashMap<(StandardFont, FontWeight), String>,
    /// Embedded images (data hash -> resource name and object ID)
    embedded_images: HashMap<u64, (String, ObjectId)>,
    /// Next image resource number
    next_image_resource: u32,
    /// Document title for the info dictionary
    title: Option<String>,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// Create an empty document
    ///
    /// The initial font is Helvetica regular, 12pt, black.
    pub fn new() -> Self {
        Self {
            inner: Document::with_version("1.5"),
            pages: Vec::new(),
            current_font: StandardFont::default(),
            current_weight: FontWeight::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            font_resources: HashMap::new(),
            embedded_images: HashMap::new(),
            next_image_resource: 1,
            title: None,
        }
    }

    /// Append a blank page
    ///
    /// # Returns
    /// New page number (1-indexed)
    pub fn add_page(&mut self, size: PageSize) -> usize {
        self.pages.push(Page {
            size,
            content: Vec::new(),
            fonts: BTreeMap::new(),
            images: BTreeMap::new(),
        });
        self.pages.len()
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the dimensions of a page
    pub fn page_size(&self, page: usize) -> Result<PageSize> {
        let index = self.page_index(page)?;
        Ok(self.pages[index].size)
    }

    /// Set the document title written to the info dictionary
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the current font family and size
    ///
    /// # Example
    /// ```ignore
    /// doc.set_font(StandardFont::Helvetica, 12.0);  // Regular 12pt
    /// doc.set_font_weight(FontWeight::Bold);        // Now bold 12pt
    /// ```
    pub fn set_font(&mut self, font: StandardFont, size: f32) {
        self.current_font = font;
        self.current_font_size = size;
    }

    /// Set only the font size (keeps current family/weight)
    pub fn set_font_size(&mut self, size: f32) {
        self.current_font_size = size;
    }

    /// Set the font weight (keeps current family/size)
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.current_weight = weight;
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Insert text with its baseline starting at a position
    ///
    /// Empty text is accepted and draws nothing.
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points (from left)
    /// * `y` - Y coordinate in points (from bottom)
    pub fn insert_text(&mut self, text: &str, page: usize, x: f64, y: f64) -> Result<()> {
        let index = self.page_index(page)?;

        if text.is_empty() {
            return Ok(());
        }

        let font = self.get_or_create_font_ref(index);
        let operators = TextRun {
            font: &font,
            size: self.current_font_size,
            color: self.current_text_color,
            x,
            y,
        }
        .operators(text);

        self.pages[index].content.extend_from_slice(&operators);
        Ok(())
    }

    /// Insert an image stretched to a box
    ///
    /// # Arguments
    /// * `data` - Image file bytes (JPEG or PNG)
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate of the lower-left corner in points
    /// * `y` - Y coordinate of the lower-left corner in points
    /// * `width` - Image width in points
    /// * `height` - Image height in points
    pub fn insert_image(
        &mut self,
        data: &[u8],
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        let index = self.page_index(page)?;

        let image_resource_name = self.get_or_create_image_ref(data, index)?;
        let operators = draw_image_operators(&image_resource_name, x, y, width, height);

        self.pages[index].content.extend_from_slice(&operators);
        Ok(())
    }

    /// Draw an image covering the whole page, ignoring its aspect ratio
    pub fn fill_page_with_image(&mut self, data: &[u8], page: usize) -> Result<()> {
        let size = self.page_size(page)?;
        self.insert_image(data, page, 0.0, 0.0, size.width, size.height)
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        self.assemble()?;
        self.inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        self.assemble()?;

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Validate a 1-indexed page number and convert it to an index
    fn page_index(&self, page: usize) -> Result<usize> {
        if page == 0 || page > self.pages.len() {
            return Err(PdfError::InvalidPage(page, self.pages.len()));
        }
        Ok(page - 1)
    }

    /// Get or create the resource name of the current font variant
    ///
    /// Returns the resource name (e.g., "F1", "F2") for use in content streams
    /// and records the font on the page.
    fn get_or_create_font_ref(&mut self, index: usize) -> String {
        let variant = (self.current_font, self.current_weight);

        let next_number = self.font_resources.len() + 1;
        let resource_name = self
            .font_resources
            .entry(variant)
            .or_insert_with(|| format!("F{next_number}"))
            .clone();

        self.pages[index]
            .fonts
            .insert(resource_name.clone(), variant);

        resource_name
    }

    /// Get or create an image reference for a specific page
    ///
    /// Returns the resource name (e.g., "Im1", "Im2"). Images are embedded
    /// once and deduplicated by hash of their data.
    fn get_or_create_image_ref(&mut self, data: &[u8], index: usize) -> Result<String> {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        let data_hash = hasher.finish();

        let (resource_name, object_id) = match self.embedded_images.get(&data_hash) {
            Some(entry) => entry.clone(),
            None => {
                let xobject = ImageXObject::decode(data)?;
                let object_id = self.inner.add_object(xobject.into_stream());

                let resource_name = format!("Im{}", self.next_image_resource);
                self.next_image_resource += 1;

                self.embedded_images
                    .insert(data_hash, (resource_name.clone(), object_id));
                (resource_name, object_id)
            }
        };

        self.pages[index]
            .images
            .insert(resource_name.clone(), object_id);

        Ok(resource_name)
    }

    /// Build the page tree, resources, catalog and info dictionary
    fn assemble(&mut self) -> Result<()> {
        let pages_id = self.inner.new_object_id();

        // One font dictionary per variant, shared by every page that uses it
        let mut font_ids: HashMap<(StandardFont, FontWeight), ObjectId> = HashMap::new();
        let mut kids = Vec::with_capacity(self.pages.len());

        for page in std::mem::take(&mut self.pages) {
            let mut resources = Dictionary::new();

            if !page.fonts.is_empty() {
                let mut font_dict = Dictionary::new();
                for (resource_name, (font, weight)) in &page.fonts {
                    let font_id = *font_ids.entry((*font, *weight)).or_insert_with(|| {
                        self.inner
                            .add_object(font.to_pdf_dictionary(*weight))
                    });
                    font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
                }
                resources.set("Font", Object::Dictionary(font_dict));
            }

            if !page.images.is_empty() {
                let mut xobject_dict = Dictionary::new();
                for (resource_name, object_id) in &page.images {
                    xobject_dict.set(resource_name.as_bytes(), Object::Reference(*object_id));
                }
                resources.set("XObject", Object::Dictionary(xobject_dict));
            }

            let contents_id = self
                .inner
                .add_object(Stream::new(Dictionary::new(), page.content));

            let page_id = self.inner.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page.size.width as f32),
                    Object::Real(page.size.height as f32),
                ],
                "Resources" => resources,
                "Contents" => contents_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        self.inner.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        self.inner.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::string_literal("pdf-core"),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(encode_win_ansi(title)));
        }
        let info_id = self.inner.add_object(info);
        self.inner.trailer.set("Info", info_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_document_is_empty() {
        let doc = PdfDocument::new();
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_add_page_numbers_from_one() {
        let mut doc = PdfDocument::new();
        assert_eq!(doc.add_page(PageSize::A4), 1);
        assert_eq!(doc.add_page(PageSize::A4), 2);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page_size(2).unwrap(), PageSize::A4);
    }

    #[test]
    fn test_insert_text_invalid_page() {
        let mut doc = PdfDocument::new();
        doc.add_page(PageSize::A4);

        assert!(matches!(
            doc.insert_text("x", 0, 0.0, 0.0),
            Err(PdfError::InvalidPage(0, 1))
        ));
        assert!(matches!(
            doc.insert_text("x", 2, 0.0, 0.0),
            Err(PdfError::InvalidPage(2, 1))
        ));
    }

    #[test]
    fn test_insert_empty_text_draws_nothing() {
        let mut doc = PdfDocument::new();
        doc.add_page(PageSize::A4);

        doc.insert_text("", 1, 10.0, 10.0).unwrap();

        assert!(doc.pages[0].content.is_empty());
        assert!(doc.pages[0].fonts.is_empty());
    }

    #[test]
    fn test_font_resources_per_variant() {
        let mut doc = PdfDocument::new();
        doc.add_page(PageSize::A4);
        doc.add_page(PageSize::A4);

        doc.insert_text("regular", 1, 0.0, 0.0).unwrap();
        doc.set_font_weight(FontWeight::Bold);
        doc.insert_text("bold", 2, 0.0, 0.0).unwrap();
        doc.set_font_weight(FontWeight::Regular);
        doc.insert_text("regular again", 2, 0.0, 0.0).unwrap();

        let page1: Vec<_> = doc.pages[0].fonts.keys().cloned().collect();
        let page2: Vec<_> = doc.pages[1].fonts.keys().cloned().collect();
        assert_eq!(page1, vec!["F1".to_string()]);
        assert_eq!(page2, vec!["F1".to_string(), "F2".to_string()]);
    }

    #[test]
    fn test_color_from_rgb() {
        let color = Color::from_rgb(255, 0, 0);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::default(), Color::black());
    }

    #[test]
    fn test_size_and_color_apply_to_later_text() {
        let mut doc = PdfDocument::new();
        doc.add_page(PageSize::A4);

        doc.insert_text("before", 1, 0.0, 0.0).unwrap();
        doc.set_font_size(9.0);
        doc.set_text_color(Color::from_rgb(0, 0, 255));
        doc.insert_text("after", 1, 0.0, 0.0).unwrap();

        let content = String::from_utf8_lossy(&doc.pages[0].content).into_owned();
        let (before, after) = content.split_at(content.find("(before)").unwrap() + 1);
        assert!(before.contains("0 0 0 rg\n/F1 12 Tf"));
        assert!(after.contains("0 0 1 rg\n/F1 9 Tf"));
    }
}

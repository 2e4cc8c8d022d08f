//! End-to-end rendering tests for the disposal form

use std::path::Path;

use axis_form::{AssetDir, FormError, FormRecord, FormRenderer};
use lopdf::{Document, Object};
use pretty_assertions::assert_eq;
use serde_json::json;

/// Write a small solid JPEG the renderer can use as a page background
fn write_background(dir: &Path, name: &str) {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([240, 240, 240]));
    img.save_with_format(dir.join(name), image::ImageFormat::Jpeg)
        .expect("Failed to write JPEG");
}

fn asset_dir_with_backgrounds() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in ["1.jpeg", "2.jpeg", "3.jpeg"] {
        write_background(dir.path(), name);
    }
    dir
}

fn render(assets: &AssetDir, payload: serde_json::Value) -> Document {
    let form: FormRecord = serde_json::from_value(payload).expect("Invalid payload");
    let bytes = FormRenderer::new(assets).render(&form).expect("Render failed");
    Document::load_mem(&bytes).expect("Output is not a readable PDF")
}

fn page_content(doc: &Document, page: u32) -> String {
    let id = doc.get_pages()[&page];
    String::from_utf8_lossy(&doc.get_page_content(id).unwrap()).into_owned()
}

fn draws(content: &str, x: &str, y: &str, text: &str) -> bool {
    content.contains(&format!("{x} {y} Td\n({text}) Tj"))
}

#[test]
fn test_basic_form() {
    let dir = asset_dir_with_backgrounds();
    let doc = render(
        &AssetDir::new(dir.path()),
        json!({
            "branch_name": "Mumbai Main",
            "table_entries": [{
                "remitter_name": "ACME",
                "purpose_code": "P0802",
                "dated": "2024-01-01",
                "remarks": "ok"
            }]
        }),
    );

    assert_eq!(doc.get_pages().len(), 3);

    let page1 = page_content(&doc, 1);
    assert!(page1.contains("/Im1 Do"));
    assert!(draws(&page1, "65", "720", "Mumbai Main"));

    let page3 = page_content(&doc, 3);
    assert!(draws(&page3, "390", "783", "2024-01-01"));
    assert!(draws(&page3, "75", "740", "ACME"));
    assert!(draws(&page3, "220", "740", "P0802"));
    assert!(draws(&page3, "420", "740", "ok"));
}

#[test]
fn test_first_entry_dated_is_bold() {
    let dir = asset_dir_with_backgrounds();
    let doc = render(
        &AssetDir::new(dir.path()),
        json!({ "table_entries": [{ "dated": "2024-01-01", "remitter_name": "ACME" }] }),
    );

    let page = doc.get_object(doc.get_pages()[&3]).unwrap().as_dict().unwrap();
    let fonts = page
        .get(b"Resources")
        .and_then(Object::as_dict)
        .and_then(|resources| resources.get(b"Font"))
        .and_then(Object::as_dict)
        .unwrap();
    let mut base_fonts: Vec<String> = fonts
        .iter()
        .map(|(_, font_ref)| {
            let font = doc
                .get_object(font_ref.as_reference().unwrap())
                .and_then(Object::as_dict)
                .unwrap();
            String::from_utf8(font.get(b"BaseFont").unwrap().as_name().unwrap().to_vec()).unwrap()
        })
        .collect();
    base_fonts.sort();

    assert_eq!(base_fonts, vec!["Helvetica", "Helvetica-Bold"]);
}

#[test]
fn test_empty_payload() {
    let dir = asset_dir_with_backgrounds();
    let doc = render(&AssetDir::new(dir.path()), json!({}));

    assert_eq!(doc.get_pages().len(), 3);
    for page in 1..=3 {
        let content = page_content(&doc, page);
        assert!(content.contains("/Im1 Do"));
        assert!(!content.contains("Tj"));
    }
}

#[test]
fn test_table_rows_step_down() {
    let dir = asset_dir_with_backgrounds();
    let entries: Vec<_> = (0..5)
        .map(|i| json!({ "remitter_name": format!("R{i}") }))
        .collect();
    let doc = render(&AssetDir::new(dir.path()), json!({ "table_entries": entries }));

    let page3 = page_content(&doc, 3);
    for (i, y) in ["740", "720", "700", "680", "660"].iter().enumerate() {
        assert!(draws(&page3, "75", y, &format!("R{i}")), "row {i} not at y={y}");
    }
}

#[test]
fn test_long_table_overflows_without_new_page() {
    let dir = asset_dir_with_backgrounds();
    let entries: Vec<_> = (0..40).map(|_| json!({ "remarks": "r" })).collect();
    let doc = render(&AssetDir::new(dir.path()), json!({ "table_entries": entries }));

    assert_eq!(doc.get_pages().len(), 3);
    assert!(draws(&page_content(&doc, 3), "420", "-40", "r"));
}

#[test]
fn test_page_fields() {
    let dir = asset_dir_with_backgrounds();
    let doc = render(
        &AssetDir::new(dir.path()),
        json!({
            "account_number_100": "9120100",
            "inr_account_percent": "40",
            "eefc_account_percent": "60",
            "eefc_account_100": "9120200",
            "purpose_code": "P0103",
            "remitter_address": "1 Main St",
            "currency": "USD",
            "max_amount": "50000",
            "registration_number": "REG-1",
            "date": "2024-03-01",
            "place": "Mumbai",
            "applicant_name": "Jane",
            "applicant_address": "2 High St",
            "ie_code": "0512345678"
        }),
    );

    let page1 = page_content(&doc, 1);
    assert!(draws(&page1, "380", "380", "9120100"));
    assert!(draws(&page1, "420", "482", "40"));
    assert!(draws(&page1, "460", "455", "60"));
    assert!(draws(&page1, "360", "415", "9120200"));
    assert!(draws(&page1, "460", "230", "P0103"));
    assert!(draws(&page1, "340", "590", "1 Main St"));
    assert!(draws(&page1, "320", "550", "USD"));
    assert!(draws(&page1, "420", "550", "50000"));

    let page2 = page_content(&doc, 2);
    assert!(draws(&page2, "342", "390", "REG-1"));
    assert!(draws(&page2, "100", "122", "2024-03-01"));
    assert!(draws(&page2, "100", "110", "Mumbai"));
    assert!(draws(&page2, "380", "83", "Jane"));
    assert!(draws(&page2, "380", "70", "2 High St"));
    assert!(draws(&page2, "380", "57", "0512345678"));

    assert!(!page_content(&doc, 3).contains("Tj"));
}

#[test]
fn test_missing_background_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    write_background(dir.path(), "1.jpeg");
    write_background(dir.path(), "3.jpeg");

    let doc = render(&AssetDir::new(dir.path()), json!({ "place": "Pune" }));

    assert_eq!(doc.get_pages().len(), 3);
    let page2 = page_content(&doc, 2);
    assert!(!page2.contains("Do"));
    assert!(draws(&page2, "100", "800", "Missing image: 2.jpeg"));
    assert!(draws(&page2, "100", "110", "Pune"));

    assert!(page_content(&doc, 1).contains("/Im1 Do"));
    assert!(!page_content(&doc, 1).contains("Missing image"));
}

#[test]
fn test_all_backgrounds_missing() {
    let dir = tempfile::tempdir().unwrap();
    let doc = render(&AssetDir::new(dir.path().join("absent")), json!({}));

    for page in 1..=3 {
        let expected = format!("Missing image: {page}.jpeg");
        assert!(draws(&page_content(&doc, page), "100", "800", &expected));
    }
}

#[test]
fn test_corrupt_background_fails() {
    let dir = asset_dir_with_backgrounds();
    std::fs::write(dir.path().join("3.jpeg"), b"definitely not a jpeg").unwrap();

    let form = FormRecord::default();
    let result = FormRenderer::new(&AssetDir::new(dir.path())).render(&form);
    assert!(matches!(result, Err(FormError::Pdf(_))));
}

#[test]
fn test_null_fields_render_empty() {
    let dir = asset_dir_with_backgrounds();
    let doc = render(
        &AssetDir::new(dir.path()),
        json!({
            "branch_name": null,
            "currency": "EUR",
            "table_entries": [{ "remitter_name": null, "remarks": "x" }]
        }),
    );

    let page1 = page_content(&doc, 1);
    assert!(!page1.contains("65 720 Td"));
    assert!(draws(&page1, "320", "550", "EUR"));

    let page3 = page_content(&doc, 3);
    assert!(!page3.contains("75 740 Td"));
    assert!(draws(&page3, "420", "740", "x"));
}

#[test]
fn test_document_title() {
    let dir = asset_dir_with_backgrounds();
    let doc = render(&AssetDir::new(dir.path()), json!({}));

    let info = doc
        .trailer
        .get(b"Info")
        .and_then(Object::as_reference)
        .and_then(|id| doc.get_object(id))
        .and_then(Object::as_dict)
        .unwrap();
    assert_eq!(
        info.get(b"Title").unwrap().as_str().unwrap(),
        b"Axis Disposal Instruction"
    );
}

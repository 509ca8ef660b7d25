use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// Extract all text content from a PDF document, page by page
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

fn resolve<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        other => other.as_dict().ok(),
    }
}

/// BaseFont names of every font referenced from a page's resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();

    for page_id in doc.get_pages().values() {
        let Some(page) = doc.get_object(*page_id).ok().and_then(|o| o.as_dict().ok()) else {
            continue;
        };
        let Some(resources) = page.get(b"Resources").ok().and_then(|r| resolve(doc, r)) else {
            continue;
        };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|f| resolve(doc, f)) else {
            continue;
        };
        for (_name, font) in font_dict.iter() {
            if let Some(base_font) = resolve(doc, font)
                .and_then(|d| d.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(base_font).to_string());
            }
        }
    }

    fonts.into_iter().collect()
}

/// Vertical PDF coordinates touched by text, path and rectangle operators,
/// as `(page number, operator, y)`
pub fn drawing_positions(doc: &LopdfDocument) -> Result<Vec<(u32, String, f32)>, lopdf::Error> {
    let mut positions = Vec::new();
    for (page_num, page_id) in doc.get_pages() {
        for op in doc.get_and_decode_page_content(page_id)?.operations {
            match op.operator.as_str() {
                "Td" | "m" | "l" => {
                    positions.push((page_num, op.operator.clone(), op.operands[1].as_float()?));
                }
                "re" => {
                    let y = op.operands[1].as_float()?;
                    let height = op.operands[3].as_float()?;
                    positions.push((page_num, op.operator.clone(), y));
                    positions.push((page_num, op.operator.clone(), y + height));
                }
                _ => {}
            }
        }
    }
    Ok(positions)
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF references a font whose name contains a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should reference a font matching '{}', found: {:?}",
            $pattern,
            fonts
        );
    };
}

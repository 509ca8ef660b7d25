mod common;

use common::fixtures::{long_document, mixed_block_document, SAMPLE_DOCUMENT};
use common::pdf_assertions::drawing_positions;
use common::GeneratedPdf;
use common::{generate_pdf, generate_pdf_with_config, TestResult};
use mdpdf::canvas::{Margins, PageSize};
use mdpdf::ConverterConfig;

#[test]
fn test_heading_and_body() -> TestResult {
    let pdf = generate_pdf("# Title\n\nBody text.")?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Title");
    assert_pdf_contains_text!(pdf, "Body text.");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    Ok(())
}

#[test]
fn test_lists() -> TestResult {
    let pdf = generate_pdf("- a\n- b\n- c\n\n3. x\n4. y")?;
    assert_pdf_contains_text!(pdf, "- a");
    assert_pdf_contains_text!(pdf, "- c");
    assert_pdf_contains_text!(pdf, "3. x");
    assert_pdf_contains_text!(pdf, "4. y");
    Ok(())
}

#[test]
fn test_code_block_uses_monospace_font() -> TestResult {
    let pdf = generate_pdf("```\nlet answer = 42;\n```\n")?;
    assert_pdf_contains_text!(pdf, "let answer = 42;");
    assert_pdf_has_font!(pdf, "Courier");
    Ok(())
}

#[test]
fn test_empty_code_block_produces_valid_pdf() -> TestResult {
    let pdf = generate_pdf("```\n```\n\nafter")?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "after");
    Ok(())
}

#[test]
fn test_sample_document() -> TestResult {
    let pdf = generate_pdf(SAMPLE_DOCUMENT)?;
    assert_pdf_contains_text!(pdf, "Release Notes");
    assert_pdf_contains_text!(pdf, "This release adds parallel conversion and fixes two bugs.");
    assert_pdf_contains_text!(pdf, "- Faster startup");
    assert_pdf_contains_text!(pdf, "2. Run");
    assert_pdf_contains_text!(pdf, "mdpdf docs/");
    assert_pdf_contains_text!(pdf, "Quoted remark.");
    Ok(())
}

#[test]
fn test_nested_list_items_are_left_out() -> TestResult {
    let pdf = generate_pdf("- outer\n  - inner\n- last")?;
    assert_pdf_contains_text!(pdf, "- outer");
    assert_pdf_contains_text!(pdf, "- last");
    assert_pdf_not_contains_text!(pdf, "inner");
    Ok(())
}

#[test]
fn test_long_document_breaks_pages() -> TestResult {
    let pdf = generate_pdf(&long_document(120))?;
    assert!(pdf.page_count() > 1, "expected several pages, got {}", pdf.page_count());
    assert_pdf_contains_text!(pdf, "Paragraph number 1 ");
    assert_pdf_contains_text!(pdf, "Paragraph number 120 ");
    Ok(())
}

fn assert_drawing_within_margins(pdf: &GeneratedPdf, margins: Margins) -> TestResult {
    let page_height = PageSize::A4.dimensions_pt().1;
    let (low, high) = (margins.bottom - 0.01, page_height - margins.top + 0.01);
    let positions = drawing_positions(&pdf.doc)?;
    assert!(!positions.is_empty());
    for (page, operator, y) in positions {
        assert!(
            (low..=high).contains(&y),
            "'{}' on page {} at y={} is outside [{}, {}]",
            operator,
            page,
            y,
            low,
            high
        );
    }
    Ok(())
}

#[test]
fn test_rules_alone_break_pages() -> TestResult {
    let pdf = generate_pdf(&"---\n\n".repeat(120))?;
    assert!(pdf.page_count() > 1, "expected several pages, got {}", pdf.page_count());
    assert_drawing_within_margins(&pdf, Margins::all(50.0))
}

#[test]
fn test_mixed_blocks_stay_between_margins() -> TestResult {
    let pdf = generate_pdf(&mixed_block_document(40))?;
    assert!(pdf.page_count() > 2, "expected several pages, got {}", pdf.page_count());
    assert_pdf_contains_text!(pdf, "Section 40 opens");
    assert_drawing_within_margins(&pdf, Margins::all(50.0))
}

#[test]
fn test_characters_outside_win_ansi_are_replaced() -> TestResult {
    let pdf = generate_pdf("ok \u{4e2d}\u{6587}")?;
    assert_pdf_contains_text!(pdf, "ok ??");
    Ok(())
}

#[test]
fn test_empty_document_has_one_blank_page() -> TestResult {
    let pdf = generate_pdf("")?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn test_page_size_is_configurable() -> TestResult {
    let config = ConverterConfig::default()
        .with_page_size(PageSize::Letter)
        .with_margins(Margins::all(72.0));
    let pdf = generate_pdf_with_config("# Letter", &config)?;

    let (_, page_id) = pdf.doc.get_pages().into_iter().next().ok_or("no pages")?;
    let page = pdf.doc.get_object(page_id)?.as_dict()?;
    let media_box = page.get(b"MediaBox")?.as_array()?;
    assert_eq!(media_box[2].as_float()?, 612.0);
    assert_eq!(media_box[3].as_float()?, 792.0);
    assert_pdf_contains_text!(pdf, "Letter");
    Ok(())
}

#[test]
fn test_output_is_deterministic() -> TestResult {
    let first = generate_pdf(SAMPLE_DOCUMENT)?;
    let second = generate_pdf(SAMPLE_DOCUMENT)?;
    assert_eq!(first.bytes, second.bytes);
    Ok(())
}

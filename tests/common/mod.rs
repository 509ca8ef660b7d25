pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use mdpdf::{convert_source, ConverterConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Convert Markdown with the default configuration
pub fn generate_pdf(markdown: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with_config(markdown, &ConverterConfig::default())
}

pub fn generate_pdf_with_config(
    markdown: &str,
    config: &ConverterConfig,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logs();
    let bytes = convert_source(markdown, config)?;
    GeneratedPdf::from_bytes(bytes)
}

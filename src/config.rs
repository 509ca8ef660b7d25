use crate::error::ConvertError;
use mdpdf_canvas::{FontDescriptor, Margins, PageSize};
use mdpdf_render::RenderStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page format and render policy for a conversion.
///
/// Defaults give A4 pages with 50pt margins and the default
/// [`RenderStyle`]. Individual settings are overridden with the `with_*`
/// builders or by deserializing a partial JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    pub style: RenderStyle,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: Margins::all(50.0),
            style: RenderStyle::default(),
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a JSON configuration file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the font paragraphs and list items are written in.
    pub fn with_base_font(mut self, font: FontDescriptor) -> Self {
        self.style.body_font = font;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_override_defaults() {
        let config = ConverterConfig::new()
            .with_page_size(PageSize::Letter)
            .with_margins(Margins::all(36.0))
            .with_base_font(FontDescriptor::regular("Courier", 9.0));

        assert_eq!(config.page_size, PageSize::Letter);
        assert_eq!(config.margins.left, 36.0);
        assert_eq!(config.style.body_font.family, "Courier");
        assert_eq!(config.style.list_indent, RenderStyle::default().list_indent);
    }

    #[test]
    fn test_partial_json() {
        let config = ConverterConfig::from_json(
            r#"{ "pageSize": { "custom": { "width": 300.0, "height": 400.0 } }, "style": { "lineHeight": 20.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.page_size.dimensions_pt(), (300.0, 400.0));
        assert_eq!(config.style.line_height, 20.0);
        assert_eq!(config.margins, Margins::all(50.0));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdpdf.json");
        fs::write(&path, r#"{ "margins": { "top": 10, "right": 20, "bottom": 30, "left": 40 } }"#).unwrap();

        let config = ConverterConfig::from_file(&path).unwrap();
        assert_eq!(config.margins.left, 40.0);

        let missing = ConverterConfig::from_file(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(ConvertError::Read { .. })));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ConverterConfig::from_json(r#"{ "pageSize": "tabloid" }"#).is_err());
    }
}

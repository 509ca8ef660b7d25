use mdpdf_canvas::{Color, FontDescriptor};
use serde::{Deserialize, Serialize};

/// Font and spacing for one heading level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeadingStyle {
    pub font: FontDescriptor,
    /// Height of the heading cell.
    pub line_height: f32,
    /// Vertical space inserted before the heading.
    pub space_before: f32,
}

impl HeadingStyle {
    pub fn new(size: f32, line_height: f32, space_before: f32) -> Self {
        Self {
            font: FontDescriptor::bold("Helvetica", size),
            line_height,
            space_before,
        }
    }
}

/// Layout policy for the render engine. All lengths are in points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderStyle {
    pub body_font: FontDescriptor,
    pub line_height: f32,
    /// Space after paragraphs, lists, code blocks and rules.
    pub block_gap: f32,
    /// Heading styles from level 1 down. Deeper levels reuse the last one.
    pub headings: [HeadingStyle; 3],
    pub heading_gap_after: f32,
    pub list_indent: f32,
    pub bullet: String,
    pub code_font: FontDescriptor,
    pub code_line_height: f32,
    pub code_background: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            body_font: FontDescriptor::regular("Helvetica", 11.0),
            line_height: 16.0,
            block_gap: 8.0,
            headings: [
                HeadingStyle::new(24.0, 30.0, 12.0),
                HeadingStyle::new(20.0, 26.0, 9.0),
                HeadingStyle::new(16.0, 20.0, 6.0),
            ],
            heading_gap_after: 6.0,
            list_indent: 20.0,
            bullet: "- ".to_string(),
            code_font: FontDescriptor::regular("Courier", 10.0),
            code_line_height: 14.0,
            code_background: Color::gray(240),
        }
    }
}

impl RenderStyle {
    /// Style for a heading `level`, clamped into the defined range.
    pub fn heading(&self, level: u8) -> &HeadingStyle {
        let index = (level.max(1) as usize - 1).min(self.headings.len() - 1);
        &self.headings[index]
    }

    /// The marker written before a list item.
    pub fn list_prefix(&self, ordinal: Option<u64>) -> String {
        match ordinal {
            Some(n) => format!("{}. ", n),
            None => self.bullet.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels_clamp() {
        let style = RenderStyle::default();
        assert_eq!(style.heading(0), style.heading(1));
        assert_eq!(style.heading(4), style.heading(3));
        assert_eq!(style.heading(6), style.heading(3));
        assert!(style.heading(1).font.size > style.heading(2).font.size);
        assert!(style.heading(1).space_before > style.heading(3).space_before);
    }

    #[test]
    fn test_list_prefix() {
        let style = RenderStyle::default();
        assert_eq!(style.list_prefix(None), "- ");
        assert_eq!(style.list_prefix(Some(7)), "7. ");
    }

    #[test]
    fn test_partial_style_from_json() {
        let style: RenderStyle =
            serde_json::from_str(r##"{ "listIndent": 30.0, "codeBackground": "#eeeeee" }"##).unwrap();
        assert_eq!(style.list_indent, 30.0);
        assert_eq!(style.code_background, Color::gray(0xee));
        assert_eq!(style.line_height, RenderStyle::default().line_height);
    }
}

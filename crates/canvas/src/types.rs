use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Components scaled to the 0..=1 range PDF colour operators expect.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }
        let component = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid color component '{}': {}", digits, e))
        };

        match hex.len() {
            3 => Ok(Color {
                r: component(&hex[0..1].repeat(2))?,
                g: component(&hex[1..2].repeat(2))?,
                b: component(&hex[2..3].repeat(2))?,
            }),
            6 => Ok(Color {
                r: component(&hex[0..2])?,
                g: component(&hex[2..4])?,
                b: component(&hex[4..6])?,
            }),
            _ => Err(format!("Invalid hex color length: expected 3 or 6, got {}", hex.len())),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// The font a canvas draws text with: family name, style and size in points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    #[serde(default)]
    pub style: FontStyle,
    pub size: f32,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, style: FontStyle, size: f32) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    pub fn regular(family: impl Into<String>, size: f32) -> Self {
        Self::new(family, FontStyle::Regular, size)
    }

    pub fn bold(family: impl Into<String>, size: f32) -> Self {
        Self::new(family, FontStyle::Bold, size)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::regular("Helvetica", 11.0)
    }
}

/// Which edges of a cell are stroked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    All,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

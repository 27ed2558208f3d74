use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DotStyle {
    #[default]
    Square,
    Dots,
    Rounded,
    Classy,
    ClassyRounded,
    ExtraRounded,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CornerStyle {
    #[default]
    Square,
    Dot,
    ExtraRounded,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CornerDotStyle {
    #[default]
    Square,
    Dot,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    #[default]
    None,
    Box,
    Blob,
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let valid = value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color")
            .with_message("Must be a hex colour like #1a2b3c".into()))
    }
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct QrColors {
    #[validate(custom(function = "validate_hex_color"))]
    pub background: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub dots: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub eye_frame: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub eye_center: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QrPatterns {
    pub dot_style: DotStyle,
    pub corner_style: CornerStyle,
    pub corner_dot_style: CornerDotStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QrLogo {
    pub data_url: Option<String>,
    pub scale: f32,
    pub margin: u32,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct QrFrame {
    #[serde(rename = "type")]
    pub frame_type: FrameType,
    pub blob_intensity: u32,
    pub blob_seed: u32,
    pub cta_text: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub cta_color: String,
}

/// Visual styling of a rendered QR code
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct QrTemplate {
    #[validate(nested)]
    pub colors: QrColors,
    pub patterns: QrPatterns,
    pub logo: QrLogo,
    #[validate(nested)]
    pub frame: QrFrame,
}

impl Default for QrColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            dots: "#000000".to_string(),
            eye_frame: "#000000".to_string(),
            eye_center: "#000000".to_string(),
        }
    }
}

impl Default for QrLogo {
    fn default() -> Self {
        Self {
            data_url: None,
            scale: 0.4,
            margin: 10,
        }
    }
}

impl Default for QrFrame {
    fn default() -> Self {
        Self {
            frame_type: FrameType::None,
            blob_intensity: 5,
            blob_seed: 12345,
            cta_text: "SCAN ME".to_string(),
            cta_color: "#2563eb".to_string(),
        }
    }
}

pub const PRESET_COLORS: [&str; 6] = [
    "#2563eb", "#000000", "#ef4444", "#10b981", "#8b5cf6", "#f59e0b",
];

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QrColorsPatch {
    pub background: Option<String>,
    pub dots: Option<String>,
    pub eye_frame: Option<String>,
    pub eye_center: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QrPatternsPatch {
    pub dot_style: Option<DotStyle>,
    pub corner_style: Option<CornerStyle>,
    pub corner_dot_style: Option<CornerDotStyle>,
}

// A present key, even `null`, becomes `Some`
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QrLogoPatch {
    // Missing leaves the logo alone, `null` clears it
    #[serde(deserialize_with = "double_option")]
    pub data_url: Option<Option<String>>,
    pub scale: Option<f32>,
    pub margin: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QrFramePatch {
    #[serde(rename = "type")]
    pub frame_type: Option<FrameType>,
    pub blob_intensity: Option<u32>,
    pub blob_seed: Option<u32>,
    pub cta_text: Option<String>,
    pub cta_color: Option<String>,
}

/// Partial styling update; each section is merged field by field
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct QrTemplatePatch {
    pub colors: Option<QrColorsPatch>,
    pub patterns: Option<QrPatternsPatch>,
    pub logo: Option<QrLogoPatch>,
    pub frame: Option<QrFramePatch>,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl QrTemplate {
    pub fn apply(&mut self, patch: QrTemplatePatch) {
        if let Some(colors) = patch.colors {
            merge(&mut self.colors.background, colors.background);
            merge(&mut self.colors.dots, colors.dots);
            merge(&mut self.colors.eye_frame, colors.eye_frame);
            merge(&mut self.colors.eye_center, colors.eye_center);
        }
        if let Some(patterns) = patch.patterns {
            merge(&mut self.patterns.dot_style, patterns.dot_style);
            merge(&mut self.patterns.corner_style, patterns.corner_style);
            merge(&mut self.patterns.corner_dot_style, patterns.corner_dot_style);
        }
        if let Some(logo) = patch.logo {
            merge(&mut self.logo.data_url, logo.data_url);
            merge(&mut self.logo.scale, logo.scale);
            merge(&mut self.logo.margin, logo.margin);
        }
        if let Some(frame) = patch.frame {
            merge(&mut self.frame.frame_type, frame.frame_type);
            merge(&mut self.frame.blob_intensity, frame.blob_intensity);
            merge(&mut self.frame.blob_seed, frame.blob_seed);
            merge(&mut self.frame.cta_text, frame.cta_text);
            merge(&mut self.frame.cta_color, frame.cta_color);
        }
    }
}

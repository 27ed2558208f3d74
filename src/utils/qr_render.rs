use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use serde::Deserialize;
use validator::Validate;

use crate::models::template::QrTemplate;

pub const DEFAULT_SIZE: u32 = 256;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Svg,
    Png,
}

impl RenderFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            RenderFormat::Svg => "image/svg+xml",
            RenderFormat::Png => "image/png",
        }
    }
}

pub struct RenderedQr {
    pub format: RenderFormat,
    pub body: Vec<u8>,
}

fn build_code(data: &str, styling: &QrTemplate) -> Result<QrCode> {
    // A logo covers modules, so keep the most redundancy when there is one
    let level = if styling.logo.data_url.is_some() {
        EcLevel::H
    } else {
        EcLevel::M
    };
    QrCode::with_error_correction_level(data.as_bytes(), level)
        .context("QR code generation error")
}

/// Render `data` into a QR symbol of at least `size` pixels square.
/// SVG output takes its colours from `styling`, PNG output is greyscale.
pub fn render(data: &str, format: RenderFormat, size: u32, styling: &QrTemplate) -> Result<RenderedQr> {
    // Colours are written into SVG attributes verbatim
    styling
        .colors
        .validate()
        .context("Invalid template colours")?;
    let code = build_code(data, styling)?;

    let body = match format {
        RenderFormat::Svg => code
            .render::<svg::Color>()
            .min_dimensions(size, size)
            .dark_color(svg::Color(&styling.colors.dots))
            .light_color(svg::Color(&styling.colors.background))
            .quiet_zone(true)
            .build()
            .into_bytes(),
        RenderFormat::Png => {
            let image = code
                .render::<Luma<u8>>()
                .min_dimensions(size, size)
                .quiet_zone(true)
                .build();
            let mut bytes = Vec::new();
            image
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .context("PNG encoding error")?;
            bytes
        }
    };

    Ok(RenderedQr { format, body })
}

use css_color_parser::Color;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Invalid CSS color: {0}")]
pub struct InvalidColorError(pub String);

/// Parses a CSS color string (`#7702FF`, `rgb(...)`, `steelblue`) into normalized RGBA
pub fn parse_css_color(color: &str) -> Result<[f32; 4], InvalidColorError> {
    match color.parse::<Color>() {
        Ok(color) => Ok([
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]),
        Err(_) => Err(InvalidColorError(color.to_string())),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, VariantNames)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorOrGradient {
    Color([f32; 4]),
    /// Index into the gradients of the enclosing scene graph
    GradientIndex(u32),
}

impl ColorOrGradient {
    pub fn black() -> Self {
        ColorOrGradient::Color([0.0, 0.0, 0.0, 1.0])
    }

    pub fn transparent() -> Self {
        ColorOrGradient::Color([0.0, 0.0, 0.0, 0.0])
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, ColorOrGradient::Color(c) if c[3] == 0.0)
    }
}

impl From<[f32; 4]> for ColorOrGradient {
    fn from(color: [f32; 4]) -> Self {
        ColorOrGradient::Color(color)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Gradient {
    LinearGradient(LinearGradient),
}

impl Gradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::LinearGradient(grad) => grad.stops.as_slice(),
        }
    }
}

/// A linear gradient whose endpoints are expressed in user-space (canvas) coordinates
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientStop {
    pub offset: f32,
    pub color: [f32; 4],
}

impl GradientStop {
    pub fn try_from_css(offset: f32, color: &str) -> Result<Self, InvalidColorError> {
        Ok(Self {
            offset,
            color: parse_css_color(color)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = parse_css_color("#7702FF").unwrap();
        assert_eq!(color, [119.0 / 255.0, 2.0 / 255.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_invalid_color() {
        assert_eq!(
            parse_css_color("not-a-color"),
            Err(InvalidColorError("not-a-color".to_string()))
        );
    }

    #[test]
    fn test_transparent() {
        assert!(ColorOrGradient::transparent().is_transparent());
        assert!(!ColorOrGradient::black().is_transparent());
        assert!(!ColorOrGradient::GradientIndex(0).is_transparent());
    }

    #[test]
    fn test_stroke_cap_names() {
        assert_eq!(StrokeCap::VARIANTS, &["butt", "round", "square"]);
    }
}

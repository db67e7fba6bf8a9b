use super::mark::{check_channel_len, check_indices, SceneMark};
use crate::error::BarchartSceneGraphError;
use barchart_common::types::ColorOrGradient;
use barchart_common::value::ScalarOrArray;
use itertools::izip;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Name(FontWeightName),
    Number(f32),
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::Name(FontWeightName::Normal)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeightName {
    #[default]
    Normal,
    Bold,
}

/// A single resolved label of a [`SceneTextMark`]
#[derive(Debug, Clone, PartialEq)]
pub struct TextInstance<'a> {
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub angle: f32,
    pub color: &'a ColorOrGradient,
    pub font: &'a str,
    pub font_size: f32,
    pub font_weight: FontWeight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneTextMark {
    pub name: String,
    pub len: u32,
    pub text: ScalarOrArray<String>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub align: ScalarOrArray<TextAlign>,
    pub baseline: ScalarOrArray<TextBaseline>,
    pub angle: ScalarOrArray<f32>,
    pub color: ScalarOrArray<ColorOrGradient>,
    pub font: ScalarOrArray<String>,
    pub font_size: ScalarOrArray<f32>,
    pub font_weight: ScalarOrArray<FontWeight>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneTextMark {
    pub fn text_iter(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        self.text.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn text_vec(&self) -> Vec<String> {
        self.text.as_vec(self.len as usize, self.indices.as_ref())
    }
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn align_iter(&self) -> Box<dyn Iterator<Item = &TextAlign> + '_> {
        self.align.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn baseline_iter(&self) -> Box<dyn Iterator<Item = &TextBaseline> + '_> {
        self.baseline
            .as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn angle_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.angle.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn color_iter(&self) -> Box<dyn Iterator<Item = &ColorOrGradient> + '_> {
        self.color.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn font_iter(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        self.font.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn font_size_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.font_size
            .as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn font_weight_iter(&self) -> Box<dyn Iterator<Item = &FontWeight> + '_> {
        self.font_weight
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn instance_count(&self) -> usize {
        self.indices
            .as_ref()
            .map_or(self.len as usize, |indices| indices.len())
    }

    pub fn validate(&self) -> Result<(), BarchartSceneGraphError> {
        let len = self.len as usize;
        check_indices(&self.name, self.indices.as_ref(), len)?;
        check_channel_len(&self.name, "text", self.text.array_len(), len)?;
        check_channel_len(&self.name, "x", self.x.array_len(), len)?;
        check_channel_len(&self.name, "y", self.y.array_len(), len)?;
        check_channel_len(&self.name, "align", self.align.array_len(), len)?;
        check_channel_len(&self.name, "baseline", self.baseline.array_len(), len)?;
        check_channel_len(&self.name, "angle", self.angle.array_len(), len)?;
        check_channel_len(&self.name, "color", self.color.array_len(), len)?;
        check_channel_len(&self.name, "font", self.font.array_len(), len)?;
        check_channel_len(&self.name, "font_size", self.font_size.array_len(), len)?;
        check_channel_len(&self.name, "font_weight", self.font_weight.array_len(), len)?;
        Ok(())
    }

    pub fn instances(&self) -> impl Iterator<Item = TextInstance<'_>> + '_ {
        izip!(
            self.text_iter(),
            self.x_iter(),
            self.y_iter(),
            self.align_iter(),
            self.baseline_iter(),
            self.angle_iter(),
            self.color_iter(),
            self.font_iter(),
            self.font_size_iter(),
            self.font_weight_iter()
        )
        .map(
            |(text, x, y, align, baseline, angle, color, font, font_size, font_weight)| {
                TextInstance {
                    text,
                    x: *x,
                    y: *y,
                    align: *align,
                    baseline: *baseline,
                    angle: *angle,
                    color,
                    font,
                    font_size: *font_size,
                    font_weight: *font_weight,
                }
            },
        )
    }
}

impl Default for SceneTextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            len: 1,
            text: ScalarOrArray::new_scalar(String::new()),
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            align: ScalarOrArray::new_scalar(TextAlign::Left),
            baseline: ScalarOrArray::new_scalar(TextBaseline::Alphabetic),
            angle: ScalarOrArray::new_scalar(0.0),
            color: ScalarOrArray::new_scalar(ColorOrGradient::black()),
            font: ScalarOrArray::new_scalar("sans-serif".to_string()),
            font_size: ScalarOrArray::new_scalar(10.0),
            font_weight: ScalarOrArray::new_scalar(FontWeight::default()),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneTextMark> for SceneMark {
    fn from(mark: SceneTextMark) -> Self {
        SceneMark::Text(Arc::new(mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_instances() {
        let mark = SceneTextMark {
            len: 2,
            text: vec!["A".to_string(), "B".to_string()].into(),
            x: vec![10.0, 20.0].into(),
            align: TextAlign::Center.into(),
            ..Default::default()
        };

        let labels: Vec<_> = mark.instances().map(|t| (t.text, t.x, t.align)).collect();
        assert_eq!(
            labels,
            vec![("A", 10.0, TextAlign::Center), ("B", 20.0, TextAlign::Center)]
        );
    }

    #[test]
    fn test_font_weight_serde() {
        let weight: FontWeight = serde_json::from_str("\"bold\"").unwrap();
        assert_eq!(weight, FontWeight::Name(FontWeightName::Bold));
        let weight: FontWeight = serde_json::from_str("600").unwrap();
        assert_eq!(weight, FontWeight::Number(600.0));
    }
}

use barchart_common::types::ColorOrGradient;
use barchart_common::value::ScalarOrArray;
use itertools::izip;
use serde::{Deserialize, Serialize};

use super::mark::{check_channel_len, check_indices, SceneMark};
use crate::error::BarchartSceneGraphError;

/// A single resolved rectangle instance of a [`SceneRectMark`]
#[derive(Debug, Clone, PartialEq)]
pub struct RectInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: ColorOrGradient,
    pub stroke: ColorOrGradient,
    pub stroke_width: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub width: ScalarOrArray<f32>,
    pub height: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<ColorOrGradient>,
    pub stroke: ScalarOrArray<ColorOrGradient>,
    pub stroke_width: ScalarOrArray<f32>,
    pub corner_radius: ScalarOrArray<f32>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize, self.indices.as_ref())
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn y_vec(&self) -> Vec<f32> {
        self.y.as_vec(self.len as usize, self.indices.as_ref())
    }

    pub fn width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.width.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn width_vec(&self) -> Vec<f32> {
        self.width.as_vec(self.len as usize, self.indices.as_ref())
    }

    pub fn height_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.height.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn height_vec(&self) -> Vec<f32> {
        self.height.as_vec(self.len as usize, self.indices.as_ref())
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &ColorOrGradient> + '_> {
        self.fill.as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &ColorOrGradient> + '_> {
        self.stroke
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn stroke_width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.stroke_width
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn corner_radius_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.corner_radius
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    /// Number of rectangles this mark draws
    pub fn instance_count(&self) -> usize {
        self.indices
            .as_ref()
            .map_or(self.len as usize, |indices| indices.len())
    }

    /// Checks that every array-valued channel has one entry per instance
    pub fn validate(&self) -> Result<(), BarchartSceneGraphError> {
        let len = self.len as usize;
        check_indices(&self.name, self.indices.as_ref(), len)?;
        check_channel_len(&self.name, "x", self.x.array_len(), len)?;
        check_channel_len(&self.name, "y", self.y.array_len(), len)?;
        check_channel_len(&self.name, "width", self.width.array_len(), len)?;
        check_channel_len(&self.name, "height", self.height.array_len(), len)?;
        check_channel_len(&self.name, "fill", self.fill.array_len(), len)?;
        check_channel_len(&self.name, "stroke", self.stroke.array_len(), len)?;
        check_channel_len(&self.name, "stroke_width", self.stroke_width.array_len(), len)?;
        check_channel_len(&self.name, "corner_radius", self.corner_radius.array_len(), len)?;
        Ok(())
    }

    /// Iterates over resolved rectangles. Negative widths and heights are normalized so that
    /// `(x, y)` is always the top-left corner.
    pub fn instances(&self) -> impl Iterator<Item = RectInstance> + '_ {
        izip!(
            self.x_iter(),
            self.y_iter(),
            self.width_iter(),
            self.height_iter(),
            self.fill_iter(),
            self.stroke_iter(),
            self.stroke_width_iter(),
            self.corner_radius_iter()
        )
        .map(
            |(x, y, width, height, fill, stroke, stroke_width, corner_radius)| RectInstance {
                x: x.min(x + width),
                y: y.min(y + height),
                width: width.abs(),
                height: height.abs(),
                fill: fill.clone(),
                stroke: stroke.clone(),
                stroke_width: *stroke_width,
                corner_radius: *corner_radius,
            },
        )
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(0.0),
            height: ScalarOrArray::new_scalar(0.0),
            fill: ScalarOrArray::new_scalar(ColorOrGradient::transparent()),
            stroke: ScalarOrArray::new_scalar(ColorOrGradient::transparent()),
            stroke_width: ScalarOrArray::new_scalar(0.0),
            corner_radius: ScalarOrArray::new_scalar(0.0),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_normalize_negative_extent() {
        let mark = SceneRectMark {
            len: 2,
            x: vec![10.0, 20.0].into(),
            y: vec![100.0, 50.0].into(),
            width: 5.0.into(),
            height: vec![-40.0, 10.0].into(),
            ..Default::default()
        };

        let rects: Vec<_> = mark.instances().collect();
        assert_eq!(rects.len(), 2);
        assert_eq!((rects[0].x, rects[0].y, rects[0].height), (10.0, 60.0, 40.0));
        assert_eq!((rects[1].x, rects[1].y, rects[1].height), (20.0, 50.0, 10.0));
        assert_eq!(rects[1].width, 5.0);
    }

    #[test]
    fn test_validate_length_mismatch() {
        let mark = SceneRectMark {
            name: "bars".to_string(),
            len: 3,
            x: vec![0.0, 1.0].into(),
            ..Default::default()
        };

        assert_eq!(
            mark.validate(),
            Err(BarchartSceneGraphError::ChannelLengthMismatch {
                name: "bars".to_string(),
                channel: "x",
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_instance_count_with_indices() {
        let mark = SceneRectMark {
            len: 4,
            indices: Some(vec![3, 1]),
            ..Default::default()
        };
        assert_eq!(mark.instance_count(), 2);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mark = SceneRectMark {
            name: "bars".to_string(),
            len: 2,
            x: vec![0.0, 10.0].into(),
            indices: Some(vec![1, 2]),
            ..Default::default()
        };
        assert_eq!(
            mark.validate(),
            Err(BarchartSceneGraphError::IndexOutOfBounds {
                name: "bars".to_string(),
                index: 2,
                len: 2,
            })
        );
    }
}

use super::mark::{check_channel_len, check_indices, SceneMark};
use crate::error::BarchartSceneGraphError;
use barchart_common::types::{ColorOrGradient, StrokeCap};
use barchart_common::value::ScalarOrArray;
use itertools::izip;
use serde::{Deserialize, Serialize};

/// A single resolved line segment of a [`SceneRuleMark`]
#[derive(Debug, Clone, PartialEq)]
pub struct RuleInstance {
    pub x: f32,
    pub y: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: ColorOrGradient,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
}

/// Straight line segments from `(x, y)` to `(x2, y2)`, used for axis domain lines and ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRuleMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub x2: ScalarOrArray<f32>,
    pub y2: ScalarOrArray<f32>,
    pub stroke: ScalarOrArray<ColorOrGradient>,
    pub stroke_width: ScalarOrArray<f32>,
    pub stroke_cap: ScalarOrArray<StrokeCap>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneRuleMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn x2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x2.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn y2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y2.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &ColorOrGradient> + '_> {
        self.stroke
            .as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn stroke_width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.stroke_width
            .as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn stroke_cap_iter(&self) -> Box<dyn Iterator<Item = &StrokeCap> + '_> {
        self.stroke_cap
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
        check_channel_len(&self.name, "x", self.x.array_len(), len)?;
        check_channel_len(&self.name, "y", self.y.array_len(), len)?;
        check_channel_len(&self.name, "x2", self.x2.array_len(), len)?;
        check_channel_len(&self.name, "y2", self.y2.array_len(), len)?;
        check_channel_len(&self.name, "stroke", self.stroke.array_len(), len)?;
        check_channel_len(&self.name, "stroke_width", self.stroke_width.array_len(), len)?;
        check_channel_len(&self.name, "stroke_cap", self.stroke_cap.array_len(), len)?;
        Ok(())
    }

    pub fn instances(&self) -> impl Iterator<Item = RuleInstance> + '_ {
        izip!(
            self.x_iter(),
            self.y_iter(),
            self.x2_iter(),
            self.y2_iter(),
            self.stroke_iter(),
            self.stroke_width_iter(),
            self.stroke_cap_iter()
        )
        .map(
            |(x, y, x2, y2, stroke, stroke_width, stroke_cap)| RuleInstance {
                x: *x,
                y: *y,
                x2: *x2,
                y2: *y2,
                stroke: stroke.clone(),
                stroke_width: *stroke_width,
                stroke_cap: *stroke_cap,
            },
        )
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            x2: ScalarOrArray::new_scalar(0.0),
            y2: ScalarOrArray::new_scalar(0.0),
            stroke: ScalarOrArray::new_scalar(ColorOrGradient::black()),
            stroke_width: ScalarOrArray::new_scalar(1.0),
            stroke_cap: ScalarOrArray::new_scalar(StrokeCap::Butt),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_broadcast_scalars() {
        let mark = SceneRuleMark {
            len: 3,
            x: vec![1.0, 2.0, 3.0].into(),
            x2: vec![1.0, 2.0, 3.0].into(),
            y2: 6.0.into(),
            ..Default::default()
        };
        assert!(mark.validate().is_ok());

        let rules: Vec<_> = mark.instances().collect();
        assert_eq!(rules.len(), 3);
        assert!(rules.iter().all(|r| r.y == 0.0 && r.y2 == 6.0));
        assert_eq!(rules[2].x, 3.0);
        assert_eq!(rules[0].stroke, ColorOrGradient::black());
    }
}

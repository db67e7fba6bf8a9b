//! Axis construction.
//!
//! Axes are built as a [`SceneGroup`] in the axis' local coordinates, with the axis line
//! running along `x = 0` (vertical axes) or `y = 0` (horizontal axes) and ticks pointing
//! away from the plot area. The geometry matches d3-axis.

pub mod band;
pub mod numeric;
pub mod opts;

use barchart_common::{types::ColorOrGradient, value::ScalarOrArray};
use barchart_scenegraph::marks::{
    group::SceneGroup,
    rule::SceneRuleMark,
    text::{SceneTextMark, TextAlign, TextBaseline},
};

use crate::error::BarchartGuidesError;
use opts::{AxisConfig, AxisOrientation};

/// Assembles domain line, ticks and labels from tick positions in range coordinates.
///
/// `positions` and `labels` must have the same length. An empty `positions` produces a
/// group holding only the domain line.
pub(crate) fn make_axis_marks(
    range: (f32, f32),
    positions: &[f32],
    labels: Vec<String>,
    config: &AxisConfig,
) -> Result<SceneGroup, BarchartGuidesError> {
    config.validate()?;

    let mut group = SceneGroup::new("axis").with_origin(config.origin);
    group.push(make_domain_line(range, config));

    if !positions.is_empty() {
        let ticks = make_tick_marks(positions, config);
        ticks.validate()?;
        group.push(ticks);

        let labels = make_tick_labels(positions, labels, config);
        labels.validate()?;
        group.push(labels);
    }

    Ok(group)
}

fn make_domain_line(range: (f32, f32), config: &AxisConfig) -> SceneRuleMark {
    let k = config.orientation.direction();
    let outer = k * config.tick_size_outer;
    let offset = config.offset;
    let r0 = range.0 + offset;
    let r1 = range.1 + offset;

    // outer tick at each end, joined by the axis line
    let (along, across) = if config.tick_size_outer == 0.0 {
        (vec![(r0, r1)], vec![(offset, offset)])
    } else {
        (
            vec![(r0, r0), (r0, r1), (r1, r1)],
            vec![(outer, offset), (offset, offset), (offset, outer)],
        )
    };

    let (x, x2, y, y2) = if config.orientation.is_vertical() {
        (
            across.iter().map(|s| s.0).collect::<Vec<_>>(),
            across.iter().map(|s| s.1).collect::<Vec<_>>(),
            along.iter().map(|s| s.0).collect::<Vec<_>>(),
            along.iter().map(|s| s.1).collect::<Vec<_>>(),
        )
    } else {
        (
            along.iter().map(|s| s.0).collect(),
            along.iter().map(|s| s.1).collect(),
            across.iter().map(|s| s.0).collect(),
            across.iter().map(|s| s.1).collect(),
        )
    };

    SceneRuleMark {
        name: "domain".to_string(),
        len: along.len() as u32,
        x: x.into(),
        x2: x2.into(),
        y: y.into(),
        y2: y2.into(),
        stroke: ColorOrGradient::Color(config.color).into(),
        stroke_width: 1.0.into(),
        ..Default::default()
    }
}

fn make_tick_marks(positions: &[f32], config: &AxisConfig) -> SceneRuleMark {
    let along: ScalarOrArray<f32> = positions
        .iter()
        .map(|p| p + config.offset)
        .collect::<Vec<_>>()
        .into();
    let tick_end = config.orientation.direction() * config.tick_size_inner;

    let (x, x2, y, y2) = if config.orientation.is_vertical() {
        (0.0.into(), tick_end.into(), along.clone(), along)
    } else {
        (along.clone(), along, 0.0.into(), tick_end.into())
    };

    SceneRuleMark {
        name: "ticks".to_string(),
        len: positions.len() as u32,
        x,
        x2,
        y,
        y2,
        stroke: ColorOrGradient::Color(config.color).into(),
        stroke_width: 1.0.into(),
        ..Default::default()
    }
}

fn make_tick_labels(positions: &[f32], labels: Vec<String>, config: &AxisConfig) -> SceneTextMark {
    let along: ScalarOrArray<f32> = positions
        .iter()
        .map(|p| p + config.offset)
        .collect::<Vec<_>>()
        .into();
    let across = config.orientation.direction() * config.label_spacing();

    let (x, y) = if config.orientation.is_vertical() {
        (across.into(), along)
    } else {
        (along, across.into())
    };

    let (align, baseline) = match config.orientation {
        AxisOrientation::Top => (TextAlign::Center, TextBaseline::Alphabetic),
        AxisOrientation::Bottom => (TextAlign::Center, TextBaseline::Top),
        AxisOrientation::Left => (TextAlign::Right, TextBaseline::Middle),
        AxisOrientation::Right => (TextAlign::Left, TextBaseline::Middle),
    };

    SceneTextMark {
        name: "labels".to_string(),
        len: positions.len() as u32,
        text: labels.into(),
        x,
        y,
        align: align.into(),
        baseline: baseline.into(),
        color: ColorOrGradient::Color(config.color).into(),
        font: config.font.clone().into(),
        font_size: config.font_size.into(),
        ..Default::default()
    }
}

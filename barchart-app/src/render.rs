//! Drawing the chart model into a [`SceneGraph`].

use barchart_common::types::{
    parse_css_color, ColorOrGradient, Gradient, GradientStop, InvalidColorError, LinearGradient,
};
use barchart_guides::axis::band::make_band_axis;
use barchart_guides::axis::numeric::make_numeric_axis;
use barchart_guides::axis::opts::{AxisConfig, AxisOrientation};
use barchart_scenegraph::marks::group::SceneGroup;
use barchart_scenegraph::marks::rect::SceneRectMark;
use barchart_scenegraph::scene_graph::SceneGraph;

use crate::chart::{BarGeometry, ChartConfig, ChartScales};
use crate::error::BarchartAppError;

pub const BARS: &str = "bars";
pub const X_AXIS: &str = "x-axis";
pub const Y_AXIS: &str = "y-axis";

/// Creates an empty drawing surface with the chart's three mount points
pub fn make_surface(config: &ChartConfig) -> Result<SceneGraph, BarchartAppError> {
    Ok(SceneGraph::new(config.width, config.height)
        .with_mount_points(&[BARS, X_AXIS, Y_AXIS])
        .with_gradients(vec![bar_gradient()?]))
}

/// Horizontal red to violet gradient shared by all bars, in canvas coordinates
pub fn bar_gradient() -> Result<Gradient, InvalidColorError> {
    Ok(Gradient::LinearGradient(LinearGradient {
        x0: 0.0,
        y0: 192.0,
        x1: 982.0,
        y1: 192.0,
        stops: vec![
            GradientStop::try_from_css(0.0, "#F0060B")?,
            GradientStop::try_from_css(0.0, "#F0070C")?,
            GradientStop::try_from_css(0.526, "#CC26D5")?,
            GradientStop::try_from_css(1.0, "#7702FF")?,
        ],
    }))
}

fn bar_fill(config: &ChartConfig) -> Result<ColorOrGradient, BarchartAppError> {
    match &config.fill {
        Some(color) => Ok(ColorOrGradient::Color(parse_css_color(color)?)),
        None => Ok(ColorOrGradient::GradientIndex(0)),
    }
}

pub fn render_bars(bars: &[BarGeometry], fill: ColorOrGradient) -> SceneGroup {
    let mark = SceneRectMark {
        name: "bar".to_string(),
        len: bars.len() as u32,
        x: bars.iter().map(|b| b.x).collect::<Vec<_>>().into(),
        y: bars.iter().map(|b| b.y).collect::<Vec<_>>().into(),
        width: bars.iter().map(|b| b.width).collect::<Vec<_>>().into(),
        height: bars.iter().map(|b| b.height).collect::<Vec<_>>().into(),
        fill: fill.into(),
        ..Default::default()
    };
    SceneGroup::new(BARS).with_marks(vec![mark.into()])
}

/// Builds the bottom category axis and the left value axis
pub fn render_axes(
    scales: &ChartScales,
    config: &ChartConfig,
) -> Result<(SceneGroup, SceneGroup), BarchartAppError> {
    let x_axis = make_band_axis(
        &scales.x,
        &AxisConfig::new(AxisOrientation::Bottom)
            .with_origin([0.0, config.height - config.margin]),
    )?;
    let y_axis = make_numeric_axis(
        &scales.y,
        &AxisConfig::new(AxisOrientation::Left).with_origin([config.margin, 0.0]),
    )?;
    Ok((x_axis, y_axis))
}

/// Replaces the contents of every mount point of `surface` with the current chart.
///
/// Each call mounts the bars and each axis exactly once, so redrawing never accumulates
/// marks.
pub fn render_chart(
    scales: &ChartScales,
    bars: &[BarGeometry],
    config: &ChartConfig,
    surface: &mut SceneGraph,
) -> Result<(), BarchartAppError> {
    let bar_group = render_bars(bars, bar_fill(config)?);
    let (x_axis, y_axis) = render_axes(scales, config)?;

    surface.width = config.width;
    surface.height = config.height;

    surface.mount(BARS, bar_group)?;
    surface.mount(X_AXIS, x_axis)?;
    surface.mount(Y_AXIS, y_axis)?;
    log::trace!("redrew chart with {} bars", bars.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{derive_bars, sample_data};
    use barchart_scenegraph::marks::mark::SceneMark;

    fn draw(config: &ChartConfig) -> SceneGraph {
        let data = sample_data();
        let scales = ChartScales::from_data(&data, config);
        let bars = derive_bars(&data, &scales);
        let mut surface = make_surface(config).unwrap();
        render_chart(&scales, &bars, config, &mut surface).unwrap();
        surface
    }

    #[test]
    fn test_mount_points_in_draw_order() {
        let surface = draw(&ChartConfig::default());
        let names: Vec<_> = surface.groups().iter().map(|g| g.name.clone()).collect();
        assert_eq!(names, vec![BARS, X_AXIS, Y_AXIS]);
        assert_eq!(surface.group(X_AXIS).unwrap().origin, [0.0, 470.0]);
        assert_eq!(surface.group(Y_AXIS).unwrap().origin, [30.0, 0.0]);
    }

    #[test]
    fn test_default_fill_is_gradient() {
        let surface = draw(&ChartConfig::default());
        let Some(SceneMark::Rect(bars)) = surface.group(BARS).unwrap().marks.first() else {
            panic!("missing bars");
        };
        assert_eq!(bars.len, 5);
        assert!(bars
            .fill_iter()
            .all(|f| *f == ColorOrGradient::GradientIndex(0)));
        assert_eq!(surface.gradients.len(), 1);
        assert_eq!(surface.gradients[0].stops().len(), 4);
    }

    #[test]
    fn test_css_fill() {
        let config = ChartConfig {
            fill: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let surface = draw(&config);
        let Some(SceneMark::Rect(bars)) = surface.group(BARS).unwrap().marks.first() else {
            panic!("missing bars");
        };
        assert_eq!(
            bars.fill_iter().next(),
            Some(&ColorOrGradient::Color([1.0, 0.0, 0.0, 1.0]))
        );
    }

    #[test]
    fn test_invalid_fill() {
        let config = ChartConfig {
            fill: Some("nope".to_string()),
            ..Default::default()
        };
        let mut surface = make_surface(&config).unwrap();
        let scales = ChartScales::from_data(&[], &config);
        assert_eq!(
            render_chart(&scales, &[], &config, &mut surface),
            Err(BarchartAppError::InvalidFill(InvalidColorError(
                "nope".to_string()
            )))
        );
    }
}

use barchart_scales::numeric::ContinuousNumericScale;
use barchart_scenegraph::marks::group::SceneGroup;

use super::make_axis_marks;
use super::opts::AxisConfig;
use crate::error::BarchartGuidesError;

/// Builds an axis for a continuous numeric scale.
///
/// Ticks and labels come from `scale.ticks` and `scale.tick_format` with the configured
/// tick count, so labels share a precision (`0.0, 0.5, 1.0` rather than `0, 0.5, 1`).
pub fn make_numeric_axis(
    scale: &impl ContinuousNumericScale,
    config: &AxisConfig,
) -> Result<SceneGroup, BarchartGuidesError> {
    let ticks = scale.ticks(Some(config.tick_count));
    let labels = scale.tick_format(Some(config.tick_count)).format_all(&ticks);
    let positions = scale.scale_all(&ticks);

    log::trace!("numeric axis ticks {:?}", ticks);
    make_axis_marks(scale.range(), &positions, labels, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::opts::AxisOrientation;
    use barchart_scales::numeric::linear::LinearScale;
    use barchart_scenegraph::marks::mark::SceneMark;
    use barchart_scenegraph::marks::text::SceneTextMark;
    use rstest::rstest;

    fn labels(group: &SceneGroup) -> &SceneTextMark {
        let Some(SceneMark::Text(labels)) = group.find("labels") else {
            panic!("missing labels");
        };
        labels
    }

    #[test]
    fn test_left_axis_ticks() {
        let scale = LinearScale::try_new((0.0, 3.0), (470.0, 30.0)).unwrap();
        let config = AxisConfig::new(AxisOrientation::Left).with_origin([30.0, 0.0]);
        let group = make_numeric_axis(&scale, &config).unwrap();

        assert_eq!(group.origin, [30.0, 0.0]);
        let labels = labels(&group);
        assert_eq!(labels.len, 16);
        let text = labels.text_vec();
        assert_eq!(text.first().map(String::as_str), Some("0.0"));
        assert_eq!(text.get(5).map(String::as_str), Some("1.0"));
        assert_eq!(text.last().map(String::as_str), Some("3.0"));

        let first = labels.instances().next().unwrap();
        assert_eq!(first.y, 470.5);
    }

    #[rstest]
    #[case((0.0, 1000.0), "1,000")]
    #[case((0.0, 10.0), "10")]
    #[case((-1.0, 0.0), "0.0")]
    fn test_last_label(#[case] domain: (f32, f32), #[case] expected: &str) {
        let scale = LinearScale::try_new(domain, (100.0, 0.0)).unwrap();
        let group = make_numeric_axis(&scale, &AxisConfig::new(AxisOrientation::Left)).unwrap();
        assert_eq!(
            labels(&group).text_vec().last().map(String::as_str),
            Some(expected)
        );
    }

    #[test]
    fn test_degenerate_domain_single_tick_at_range_start() {
        let scale = LinearScale::try_new((0.0, 0.0), (470.0, 30.0)).unwrap();
        let group = make_numeric_axis(&scale, &AxisConfig::new(AxisOrientation::Left)).unwrap();

        let labels = labels(&group);
        assert_eq!(labels.text_vec(), vec!["0"]);
        assert_eq!(labels.instances().next().unwrap().y, 470.5);
    }
}

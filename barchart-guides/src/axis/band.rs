use std::fmt::Display;
use std::hash::Hash;

use barchart_scales::band::BandScale;
use barchart_scenegraph::marks::group::SceneGroup;

use super::make_axis_marks;
use super::opts::AxisConfig;
use crate::error::BarchartGuidesError;

/// Builds an axis for a categorical band scale.
///
/// There is one tick per domain value at the center of its band, labeled with the value
/// itself. An empty domain yields only the domain line.
pub fn make_band_axis<D>(
    scale: &BandScale<D>,
    config: &AxisConfig,
) -> Result<SceneGroup, BarchartGuidesError>
where
    D: std::fmt::Debug + Clone + Hash + Eq + Display,
{
    // Keep ticks centered in the band once the half-pixel offset is added
    let mut center = (scale.bandwidth() - config.offset * 2.0).max(0.0) / 2.0;
    if scale.get_round() {
        center = center.round();
    }

    let (positions, labels): (Vec<f32>, Vec<String>) = scale
        .bands()
        .map(|(value, band)| (band.start + center, value.to_string()))
        .unzip();

    log::trace!(
        "band axis with {} ticks over {:?}",
        positions.len(),
        scale.get_range()
    );
    make_axis_marks(scale.get_range(), &positions, labels, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::opts::AxisOrientation;
    use barchart_scenegraph::marks::mark::SceneMark;
    use float_cmp::assert_approx_eq;

    fn categories() -> BandScale<String> {
        BandScale::new(["A", "B", "C", "D", "E"].map(String::from))
            .range((30.0, 470.0))
            .padding(0.1)
    }

    #[test]
    fn test_ticks_at_band_centers() {
        let scale = categories();
        let config = AxisConfig::default().with_origin([0.0, 470.0]);
        let group = make_band_axis(&scale, &config).unwrap();
        assert_eq!(group.origin, [0.0, 470.0]);

        let Some(SceneMark::Rule(ticks)) = group.find("ticks") else {
            panic!("missing ticks");
        };
        let xs: Vec<f32> = ticks.instances().map(|t| t.x).collect();
        assert_eq!(xs.len(), 5);
        for (x, (_, band)) in xs.iter().zip(scale.bands()) {
            assert_approx_eq!(f32, *x, band.center(), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_labels_are_categories() {
        let group = make_band_axis(&categories(), &AxisConfig::default()).unwrap();
        let Some(SceneMark::Text(labels)) = group.find("labels") else {
            panic!("missing labels");
        };
        assert_eq!(labels.text_vec(), vec!["A", "B", "C", "D", "E"]);
        assert!(labels.instances().all(|l| l.y == 9.0));
    }

    #[test]
    fn test_empty_domain_has_only_domain_line() {
        let scale = BandScale::<String>::new(vec![]).range((30.0, 470.0));
        let group = make_band_axis(&scale, &AxisConfig::default()).unwrap();
        assert_eq!(group.marks.len(), 1);
        assert_eq!(group.marks[0].name(), "domain");
    }

    #[test]
    fn test_narrow_bands_stay_on_band_start() {
        let scale = BandScale::new(0..100).range((0.0, 50.0));
        let config = AxisConfig::new(AxisOrientation::Top);
        let group = make_band_axis(&scale, &config).unwrap();

        let Some(SceneMark::Rule(ticks)) = group.find("ticks") else {
            panic!("missing ticks");
        };
        let first = ticks.instances().next().unwrap();
        assert_approx_eq!(f32, first.x, 0.5);
        assert_approx_eq!(f32, first.y2, -6.0);
    }
}

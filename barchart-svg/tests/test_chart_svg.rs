use barchart_app::app::BarChartApp;
use barchart_app::chart::{sample_data, ChartConfig, Datum};
use barchart_svg::svg::SvgCanvas;
use rstest::rstest;

#[rstest]
#[case(sample_data())]
#[case(vec![])]
#[case(vec![Datum::new("only", 7.0), Datum::new("only", 3.0)])]
fn test_one_rect_per_bar(#[case] data: Vec<Datum>) {
    let app = BarChartApp::new(data, ChartConfig::default()).unwrap();
    let svg = SvgCanvas::render(&app.scene_graph(), 1.0).unwrap().to_svg();
    assert_eq!(svg.matches("<rect").count(), app.bars().len());
}

#[test]
fn test_sample_chart_document() {
    let app = BarChartApp::new(sample_data(), ChartConfig::default()).unwrap();
    let svg = SvgCanvas::render(&app.scene_graph(), 1.0).unwrap().to_svg();

    assert!(svg.contains(r#"width="500" height="500""#));
    assert_eq!(svg.matches("<linearGradient").count(), 1);
    assert_eq!(svg.matches(r#"fill="url(#gradient-0)""#).count(), 5);
    for label in ["A", "B", "C", "D", "E", "0.0", "1.6", "3.0"] {
        assert!(svg.contains(&format!(">{label}</text>")), "missing label {label}");
    }
}

#[cfg(feature = "png")]
#[test]
fn test_sample_chart_png() {
    let app = BarChartApp::new(sample_data(), ChartConfig::default()).unwrap();
    let png = SvgCanvas::render(&app.scene_graph(), 2.0)
        .unwrap()
        .to_png()
        .unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}

use lazy_static::lazy_static;
use resvg::render;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use usvg::fontdb::Database;

use crate::error::BarchartSvgError;

lazy_static! {
    pub static ref FONT_DB: Mutex<usvg::fontdb::Database> = Mutex::new(init_font_db());
}

fn init_font_db() -> usvg::fontdb::Database {
    let mut font_database = Database::new();
    font_database.load_system_fonts();
    log::debug!("loaded {} system font faces", font_database.len());
    font_database
}

/// Rasterizes an SVG document to PNG bytes, multiplying its size by `scale`
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, BarchartSvgError> {
    let fontdb = {
        let font_database = FONT_DB
            .lock()
            .map_err(|err| BarchartSvgError::InternalError(err.to_string()))?;
        Arc::new(font_database.clone())
    };

    // usvg and resvg may panic on malformed input
    let response = panic::catch_unwind(AssertUnwindSafe(|| -> Result<Vec<u8>, BarchartSvgError> {
        let xml_opt = usvg::roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let opts = usvg::Options {
            fontdb,
            ..Default::default()
        };
        let doc = usvg::roxmltree::Document::parse_with_options(svg, xml_opt)?;
        let rtree = usvg::Tree::from_xmltree(&doc, &opts)?;

        let width = (rtree.size().width() * scale) as u32;
        let height = (rtree.size().height() * scale) as u32;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(BarchartSvgError::InvalidImageSize(width, height))?;

        let transform = tiny_skia::Transform::from_scale(scale, scale);
        render(&rtree, transform, &mut pixmap.as_mut());
        pixmap
            .encode_png()
            .map_err(|err| BarchartSvgError::InternalError(err.to_string()))
    }));

    match response {
        Ok(result) => result,
        Err(_) => Err(BarchartSvgError::InternalError(
            "SVG rasterization panicked".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect x="0" y="0" width="5" height="5" fill="#7702ff"/></svg>"##;

    #[test]
    fn test_png_signature() {
        let png = svg_to_png(SVG, 2.0).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_zero_scale() {
        assert!(matches!(
            svg_to_png(SVG, 0.0),
            Err(BarchartSvgError::InvalidImageSize(0, 0))
        ));
    }

    #[test]
    fn test_malformed_svg() {
        assert!(svg_to_png("<svg", 1.0).is_err());
    }
}

use barchart_common::canvas::CanvasDimensions;
use barchart_common::types::{ColorOrGradient, Gradient, StrokeCap};
use barchart_scenegraph::marks::rect::SceneRectMark;
use barchart_scenegraph::marks::rule::SceneRuleMark;
use barchart_scenegraph::marks::text::{
    FontWeight, FontWeightName, SceneTextMark, TextAlign, TextBaseline,
};
use barchart_scenegraph::scene_graph::SceneGraph;

use crate::canvas::Canvas;
use crate::error::BarchartSvgError;

/// Canvas that serializes a scene graph to an SVG document.
///
/// Coordinates are written in absolute canvas units; the dimension scale only affects
/// rasterization.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    dimensions: CanvasDimensions,
    gradients: Vec<Gradient>,
    elements: Vec<String>,
}

impl SvgCanvas {
    pub fn new(dimensions: CanvasDimensions) -> Self {
        Self {
            dimensions,
            gradients: vec![],
            elements: vec![],
        }
    }

    /// Renders a full scene graph sized by the scene's own width and height
    pub fn render(scene_graph: &SceneGraph, scale: f32) -> Result<Self, BarchartSvgError> {
        let dimensions =
            CanvasDimensions::new(scene_graph.width, scene_graph.height).with_scale(scale);
        let mut canvas = Self::new(dimensions);
        canvas.set_scene(scene_graph)?;
        Ok(canvas)
    }

    pub fn to_svg(&self) -> String {
        let [width, height] = self.dimensions.size;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        svg.push('\n');

        if !self.gradients.is_empty() {
            svg.push_str("<defs>\n");
            for (index, gradient) in self.gradients.iter().enumerate() {
                svg.push_str(&gradient_def(index, gradient));
            }
            svg.push_str("</defs>\n");
        }

        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    #[cfg(feature = "png")]
    pub fn to_png(&self) -> Result<Vec<u8>, BarchartSvgError> {
        crate::png::svg_to_png(&self.to_svg(), self.dimensions.scale)
    }

    fn paint(&self, color: &ColorOrGradient) -> Result<Paint, BarchartSvgError> {
        match color {
            ColorOrGradient::Color(c) if c[3] == 0.0 => Ok(Paint::none()),
            ColorOrGradient::Color(c) => Ok(Paint::color(c)),
            ColorOrGradient::GradientIndex(index) => {
                if self.gradients.len() <= *index as usize {
                    return Err(BarchartSvgError::GradientNotFound(*index));
                }
                Ok(Paint {
                    value: format!("url(#{})", gradient_id(*index as usize)),
                    opacity: None,
                })
            }
        }
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self) {
        self.gradients.clear();
        self.elements.clear();
    }

    fn set_gradients(&mut self, gradients: &[Gradient]) {
        self.gradients = gradients.to_vec();
    }

    fn add_rect_mark(
        &mut self,
        mark: &SceneRectMark,
        origin: [f32; 2],
    ) -> Result<(), BarchartSvgError> {
        for rect in mark.instances() {
            let fill = self.paint(&rect.fill)?;
            let mut element = format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                rect.x + origin[0],
                rect.y + origin[1],
                rect.width,
                rect.height,
                fill.value
            );
            if let Some(opacity) = fill.opacity {
                element.push_str(&format!(r#" fill-opacity="{opacity}""#));
            }
            if rect.stroke_width > 0.0 && !rect.stroke.is_transparent() {
                let stroke = self.paint(&rect.stroke)?;
                element.push_str(&format!(
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke.value, rect.stroke_width
                ));
            }
            if rect.corner_radius > 0.0 {
                element.push_str(&format!(r#" rx="{}""#, rect.corner_radius));
            }
            element.push_str("/>");
            self.elements.push(element);
        }
        Ok(())
    }

    fn add_rule_mark(
        &mut self,
        mark: &SceneRuleMark,
        origin: [f32; 2],
    ) -> Result<(), BarchartSvgError> {
        for rule in mark.instances() {
            let stroke = self.paint(&rule.stroke)?;
            let cap = match rule.stroke_cap {
                StrokeCap::Butt => "butt",
                StrokeCap::Round => "round",
                StrokeCap::Square => "square",
            };
            let mut element = format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{cap}""#,
                rule.x + origin[0],
                rule.y + origin[1],
                rule.x2 + origin[0],
                rule.y2 + origin[1],
                stroke.value,
                rule.stroke_width,
            );
            if let Some(opacity) = stroke.opacity {
                element.push_str(&format!(r#" stroke-opacity="{opacity}""#));
            }
            element.push_str("/>");
            self.elements.push(element);
        }
        Ok(())
    }

    fn add_text_mark(
        &mut self,
        mark: &SceneTextMark,
        origin: [f32; 2],
    ) -> Result<(), BarchartSvgError> {
        for text in mark.instances() {
            let x = text.x + origin[0];
            let y = text.y + origin[1];
            let fill = self.paint(text.color)?;
            let anchor = match text.align {
                TextAlign::Left => "start",
                TextAlign::Center => "middle",
                TextAlign::Right => "end",
            };
            let weight = match text.font_weight {
                FontWeight::Name(FontWeightName::Normal) => "normal".to_string(),
                FontWeight::Name(FontWeightName::Bold) => "bold".to_string(),
                FontWeight::Number(weight) => weight.to_string(),
            };

            let mut element = format!(
                r#"<text x="{x}" y="{y}" fill="{}" font-family="{}" font-size="{}" font-weight="{weight}" text-anchor="{anchor}""#,
                fill.value,
                escape(text.font),
                text.font_size,
            );
            // Baselines as em offsets from the alphabetic baseline
            let dy = match text.baseline {
                TextBaseline::Alphabetic => None,
                TextBaseline::Top => Some("0.71em"),
                TextBaseline::Middle => Some("0.32em"),
                TextBaseline::Bottom => Some("-0.29em"),
            };
            if let Some(dy) = dy {
                element.push_str(&format!(r#" dy="{dy}""#));
            }
            if let Some(opacity) = fill.opacity {
                element.push_str(&format!(r#" fill-opacity="{opacity}""#));
            }
            if text.angle != 0.0 {
                element.push_str(&format!(r#" transform="rotate({} {x} {y})""#, text.angle));
            }
            element.push('>');
            element.push_str(&escape(text.text));
            element.push_str("</text>");
            self.elements.push(element);
        }
        Ok(())
    }
}

struct Paint {
    value: String,
    opacity: Option<f32>,
}

impl Paint {
    fn none() -> Self {
        Self {
            value: "none".to_string(),
            opacity: None,
        }
    }

    fn color(c: &[f32; 4]) -> Self {
        Self {
            value: hex_color(c),
            opacity: (c[3] < 1.0).then_some(c[3]),
        }
    }
}

fn hex_color(c: &[f32; 4]) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(c[0]),
        channel(c[1]),
        channel(c[2])
    )
}

fn gradient_id(index: usize) -> String {
    format!("gradient-{index}")
}

fn gradient_def(index: usize, gradient: &Gradient) -> String {
    let Gradient::LinearGradient(grad) = gradient;
    let mut def = format!(
        r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        gradient_id(index),
        grad.x0,
        grad.y0,
        grad.x1,
        grad.y1
    );
    def.push('\n');
    for stop in &grad.stops {
        def.push_str(&format!(
            r#"<stop offset="{}" stop-color="{}""#,
            stop.offset,
            hex_color(&stop.color)
        ));
        if stop.color[3] < 1.0 {
            def.push_str(&format!(r#" stop-opacity="{}""#, stop.color[3]));
        }
        def.push_str("/>\n");
    }
    def.push_str("</linearGradient>\n");
    def
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

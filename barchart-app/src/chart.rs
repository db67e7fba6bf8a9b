//! Pure chart model: input records, configuration, scales and bar geometry.

use barchart_common::types::parse_css_color;
use barchart_scales::band::BandScale;
use barchart_scales::numeric::linear::{LinearScale, LinearScaleConfig};
use barchart_scales::numeric::ContinuousNumericScale;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::BarchartAppError;

/// One input record: a category and its (assumed non-negative) value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub category: String,
    pub value: f32,
}

impl Datum {
    pub fn new(category: impl Into<String>, value: f32) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// The five record dataset used by the CLI's `sample` command and in tests
pub fn sample_data() -> Vec<Datum> {
    vec![
        Datum::new("A", 1.0),
        Datum::new("B", 2.0),
        Datum::new("C", 3.0),
        Datum::new("D", 2.0),
        Datum::new("E", 1.0),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    /// Uniform inset on all four sides, in pixels
    pub margin: f32,
    /// Band padding, applied as both inner and outer padding
    pub padding: f32,
    /// Extend the value domain to round tick values
    pub nice: bool,
    /// CSS color for the bars. Bars use the built-in gradient when unset.
    pub fill: Option<String>,
}

impl ChartConfig {
    pub fn with_dimensions(mut self, width: f32, height: f32, margin: f32) -> Self {
        self.width = width;
        self.height = height;
        self.margin = margin;
        self
    }

    pub fn validate(&self) -> Result<(), BarchartAppError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BarchartAppError::InvalidConfig(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.padding) {
            return Err(BarchartAppError::InvalidConfig(format!(
                "padding must be between 0 and 1, got {}",
                self.padding
            )));
        }
        if self.width < 2.0 * self.margin || self.height < 2.0 * self.margin {
            return Err(BarchartAppError::InvalidConfig(format!(
                "margin {} leaves no room inside a {}x{} chart",
                self.margin, self.width, self.height
            )));
        }
        if let Some(fill) = &self.fill {
            parse_css_color(fill)?;
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            margin: 30.0,
            padding: 0.1,
            nice: false,
            fill: None,
        }
    }
}

/// Pixel rectangle of one bar. `y` is the top edge; bars grow down to the zero baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub category: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct ChartScales {
    pub x: BandScale<String>,
    pub y: LinearScale,
}

impl ChartScales {
    /// Builds the category and value scales for `data` inside the margins of `config`.
    ///
    /// The value domain is `[0, max(value)]`, which collapses to `[0, 0]` for empty data.
    pub fn from_data(data: &[Datum], config: &ChartConfig) -> Self {
        let x = BandScale::new(data.iter().map(|d| d.category.clone()))
            .range((config.margin, config.width - config.margin))
            .padding(config.padding);

        let max_value = data
            .iter()
            .map(|d| d.value)
            .filter(|v| !v.is_nan())
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |v| v.0);

        let y = LinearScale::new(&LinearScaleConfig {
            domain: (0.0, max_value),
            range: (config.height - config.margin, config.margin),
            nice: config.nice.then_some(10),
            ..Default::default()
        });

        Self { x, y }
    }
}

/// Derives one bar per distinct category, in band order.
///
/// When a category repeats, the last record's value is used.
pub fn derive_bars(data: &[Datum], scales: &ChartScales) -> Vec<BarGeometry> {
    let mut values: IndexMap<&str, f32> = IndexMap::new();
    for datum in data {
        values.insert(datum.category.as_str(), datum.value);
    }

    let baseline = scales.y.scale(0.0);
    values
        .into_iter()
        .filter_map(|(category, value)| {
            let band = scales.x.band(category)?;
            let y = scales.y.scale(value);
            Some(BarGeometry {
                category: category.to_string(),
                x: band.start,
                y,
                width: band.bandwidth,
                height: baseline - y,
            })
        })
        .collect()
}

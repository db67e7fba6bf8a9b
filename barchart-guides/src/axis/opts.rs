use crate::error::BarchartGuidesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    pub fn is_vertical(&self) -> bool {
        matches!(self, AxisOrientation::Left | AxisOrientation::Right)
    }

    /// Sign of the tick direction: ticks point down for bottom axes and right for right axes
    pub fn direction(&self) -> f32 {
        match self {
            AxisOrientation::Top | AxisOrientation::Left => -1.0,
            AxisOrientation::Bottom | AxisOrientation::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub orientation: AxisOrientation,
    /// Placement of the axis group in its parent's coordinates
    pub origin: [f32; 2],
    pub tick_size_inner: f32,
    pub tick_size_outer: f32,
    /// Gap between tick end and label
    pub tick_padding: f32,
    /// Shift applied to lines so 1px strokes land on pixel centers
    pub offset: f32,
    pub tick_count: f32,
    pub font: String,
    pub font_size: f32,
    pub color: [f32; 4],
}

impl AxisConfig {
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: [f32; 2]) -> Self {
        self.origin = origin;
        self
    }

    /// Sets both the inner and outer tick size
    pub fn with_tick_size(mut self, size: f32) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    /// Distance from the axis line to the label anchor
    pub fn label_spacing(&self) -> f32 {
        self.tick_size_inner.max(0.0) + self.tick_padding
    }

    pub fn validate(&self) -> Result<(), BarchartGuidesError> {
        let lengths = [
            ("tick_size_inner", self.tick_size_inner),
            ("tick_size_outer", self.tick_size_outer),
            ("tick_padding", self.tick_padding),
            ("offset", self.offset),
            ("font_size", self.font_size),
        ];
        if let Some((name, value)) = lengths.iter().find(|(_, v)| !v.is_finite()) {
            return Err(BarchartGuidesError::InvalidAxisConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.font_size <= 0.0 {
            return Err(BarchartGuidesError::InvalidAxisConfig(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        Ok(())
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            origin: [0.0, 0.0],
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            offset: 0.5,
            tick_count: 10.0,
            font: "sans-serif".to_string(),
            font_size: 10.0,
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

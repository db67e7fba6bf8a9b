/// Logical size of a drawing surface plus the pixel ratio used when rasterizing it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasDimensions {
    pub size: [f32; 2],
    pub scale: f32,
}

impl CanvasDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn to_physical_width(&self) -> u32 {
        (self.size[0] * self.scale) as u32
    }

    pub fn to_physical_height(&self) -> u32 {
        (self.size[1] * self.scale) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size() {
        let dims = CanvasDimensions::new(500.0, 250.0).with_scale(2.0);
        assert_eq!(dims.to_physical_width(), 1000);
        assert_eq!(dims.to_physical_height(), 500);
    }
}

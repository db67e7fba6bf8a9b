pub mod linear;

use crate::format::TickFormat;

/// A scale mapping a continuous numeric domain onto a continuous pixel range.
///
/// Axis and mark builders are written against this trait rather than a concrete scale.
pub trait ContinuousNumericScale: Clone {
    fn domain(&self) -> (f32, f32);

    fn range(&self) -> (f32, f32);

    fn clamp(&self) -> bool;

    /// Maps a domain value to the range
    fn scale(&self, value: f32) -> f32;

    /// Maps a range value back to the domain
    fn invert(&self, value: f32) -> f32;

    /// Returns approximately `count` (default 10) representative domain values
    fn ticks(&self, count: Option<f32>) -> Vec<f32>;

    fn scale_all(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    /// Returns the label formatter matching `ticks(count)`
    fn tick_format(&self, count: Option<f32>) -> TickFormat {
        let (start, stop) = self.domain();
        TickFormat::for_ticks(start, stop, count.unwrap_or(10.0))
    }
}

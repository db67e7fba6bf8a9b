use crate::array;
use crate::error::BarchartScaleError;

use super::ContinuousNumericScale;

#[derive(Clone, Debug)]
pub struct LinearScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
    pub nice: Option<usize>,
    pub round: bool,
}

impl Default for LinearScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            nice: None,
            round: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range by affine
/// interpolation. Supports clamping, domain niceing, and tick generation.
///
/// A zero-width domain maps every input to the start of the range.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
    round: bool,
}

impl LinearScale {
    pub fn new(config: &LinearScaleConfig) -> Self {
        let mut this = Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            round: config.round,
        };

        if let Some(nice) = config.nice {
            this = this.nice(Some(nice));
        }

        this
    }

    /// Creates a scale from domain and range bounds, rejecting non-finite bounds
    pub fn try_new(domain: (f32, f32), range: (f32, f32)) -> Result<Self, BarchartScaleError> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(BarchartScaleError::NonFiniteDomain(domain.0, domain.1));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(BarchartScaleError::NonFiniteRange(range.0, range.1));
        }
        Ok(Self::new(&LinearScaleConfig {
            domain,
            range,
            ..Default::default()
        }))
    }

    /// Extends the domain to nice round numbers for better tick selection
    pub fn nice(mut self, count: Option<usize>) -> Self {
        if self.is_degenerate() {
            return self;
        }

        let ascending = self.domain_start <= self.domain_end;
        let (mut start, mut stop) = if ascending {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };

        let count = count.unwrap_or(10) as f32;
        let mut prestep = 0.0;
        for _ in 0..10 {
            let step = array::tick_increment(start, stop, count);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }

        if ascending {
            self.domain_start = start;
            self.domain_end = stop;
        } else {
            self.domain_start = stop;
            self.domain_end = start;
        }
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn round(&self) -> bool {
        self.round
    }

    fn is_degenerate(&self) -> bool {
        self.domain_start == self.domain_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
    }
}

impl ContinuousNumericScale for LinearScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn clamp(&self) -> bool {
        self.clamp
    }

    fn scale(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.range_start;
        }

        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        let v = self.range_start + t * (self.range_end - self.range_start);

        if self.round {
            v.round()
        } else {
            v
        }
    }

    fn invert(&self, value: f32) -> f32 {
        if self.is_degenerate() || self.range_start == self.range_end {
            return self.domain_start;
        }

        let t = (value - self.range_start) / (self.range_end - self.range_start);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        self.domain_start + t * (self.domain_end - self.domain_start)
    }

    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        array::ticks(self.domain_start, self.domain_end, count.unwrap_or(10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_defaults() {
        let scale = LinearScale::new(&Default::default());
        assert_eq!(scale.domain(), (0.0, 1.0));
        assert_eq!(scale.range(), (0.0, 1.0));
        assert!(!scale.clamp());
        assert!(!scale.round());
    }

    #[test]
    fn test_scale() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            clamp: true,
            ..Default::default()
        });

        let result = scale.scale_all(&[0.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0]);

        assert_approx_eq!(f32, result[0], 0.0); // clamped
        assert_approx_eq!(f32, result[1], 0.0);
        assert_approx_eq!(f32, result[2], 25.0);
        assert_approx_eq!(f32, result[3], 50.0);
        assert_approx_eq!(f32, result[4], 75.0);
        assert_approx_eq!(f32, result[5], 100.0);
        assert_approx_eq!(f32, result[6], 100.0); // clamped
    }

    #[test]
    fn test_scale_unclamped_extrapolates() {
        let scale = LinearScale::try_new((0.0, 10.0), (0.0, 100.0)).unwrap();
        assert_approx_eq!(f32, scale.scale(-1.0), -10.0);
        assert_approx_eq!(f32, scale.scale(12.0), 120.0);
    }

    #[test]
    fn test_scale_inverted_range() {
        let scale = LinearScale::try_new((0.0, 3.0), (470.0, 30.0)).unwrap();
        assert_approx_eq!(f32, scale.scale(0.0), 470.0);
        assert_approx_eq!(f32, scale.scale(1.5), 250.0);
        assert_approx_eq!(f32, scale.scale(3.0), 30.0);
    }

    #[test]
    fn test_scale_round() {
        let scale = LinearScale::try_new((0.0, 3.0), (0.0, 10.0))
            .unwrap()
            .with_round(true);
        assert_eq!(scale.scale(1.0), 3.0);
        assert_eq!(scale.scale(2.0), 7.0);
    }

    #[test]
    fn test_scale_degenerate() {
        // Zero-width domain maps everything to range start
        let scale = LinearScale::try_new((0.0, 0.0), (470.0, 30.0)).unwrap();
        for v in [0.0, 10.0, -5.0] {
            assert_eq!(scale.scale(v), 470.0);
        }
        assert_eq!(scale.invert(100.0), 0.0);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert_eq!(
            LinearScale::try_new((0.0, f32::INFINITY), (0.0, 1.0)),
            Err(BarchartScaleError::NonFiniteDomain(0.0, f32::INFINITY))
        );
        assert!(matches!(
            LinearScale::try_new((0.0, 1.0), (f32::NAN, 1.0)),
            Err(BarchartScaleError::NonFiniteRange(_, _))
        ));
    }

    #[test]
    fn test_invert() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            ..Default::default()
        });
        assert_approx_eq!(f32, scale.invert(-25.0), 5.0);
        assert_approx_eq!(f32, scale.invert(50.0), 20.0);
        assert_approx_eq!(f32, scale.invert(125.0), 35.0);

        let clamped = scale.with_clamp(true);
        assert_approx_eq!(f32, clamped.invert(-25.0), 10.0);
        assert_approx_eq!(f32, clamped.invert(125.0), 30.0);
    }

    #[test]
    fn test_invert_reversed_range() {
        let scale = LinearScale::try_new((10.0, 30.0), (100.0, 0.0)).unwrap();
        assert_approx_eq!(f32, scale.invert(100.0), 10.0);
        assert_approx_eq!(f32, scale.invert(50.0), 20.0);
        assert_approx_eq!(f32, scale.invert(0.0), 30.0);
    }

    #[test]
    fn test_ticks() {
        let scale = LinearScale::try_new((0.0, 10.0), (0.0, 100.0)).unwrap();

        assert_eq!(scale.ticks(Some(5.0)), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(scale.ticks(Some(2.0)), vec![0.0, 5.0, 10.0]);
        assert_eq!(scale.ticks(Some(1.0)), vec![0.0, 10.0]);
        assert_eq!(scale.ticks(None).len(), 11);
    }

    #[test]
    fn test_ticks_degenerate() {
        let scale = LinearScale::try_new((0.0, 0.0), (470.0, 30.0)).unwrap();
        assert_eq!(scale.ticks(None), vec![0.0]);
        assert_eq!(scale.tick_format(None).format(0.0), "0");
    }

    #[test]
    fn test_tick_format() {
        let scale = LinearScale::try_new((0.0, 3.0), (470.0, 30.0)).unwrap();
        let fmt = scale.tick_format(None);
        let labels = fmt.format_all(&scale.ticks(None));
        assert_eq!(labels.first().map(String::as_str), Some("0.0"));
        assert_eq!(labels.last().map(String::as_str), Some("3.0"));
    }

    #[test]
    fn test_nice_convergence() {
        let scale = LinearScale::new(&LinearScaleConfig {
            domain: (1.1, 10.9),
            nice: Some(10),
            ..Default::default()
        });
        assert_eq!(scale.domain(), (1.0, 11.0));
    }

    #[test]
    fn test_nice_reversed_domain() {
        let scale = LinearScale::try_new((-1.1, -10.9), (0.0, 1.0))
            .unwrap()
            .nice(Some(10));
        assert_eq!(scale.domain(), (-1.0, -11.0));
    }

    #[test]
    fn test_nice_degenerate_is_noop() {
        let scale = LinearScale::try_new((0.0, 0.0), (0.0, 1.0))
            .unwrap()
            .nice(None);
        assert_eq!(scale.domain(), (0.0, 0.0));
    }
}

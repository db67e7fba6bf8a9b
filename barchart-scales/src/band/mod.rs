use indexmap::{Equivalent, IndexSet};
use std::fmt::Debug;
use std::hash::Hash;

/// The pixel interval allotted to one domain value of a [`BandScale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub start: f32,
    pub bandwidth: f32,
}

impl Band {
    pub fn end(&self) -> f32 {
        self.start + self.bandwidth
    }

    pub fn center(&self) -> f32 {
        self.start + self.bandwidth / 2.0
    }
}

/// A band scale divides a continuous range into uniform bands, one per distinct domain value.
///
/// Commonly used for the categorical axis of a bar chart. The domain is deduplicated,
/// keeping the position of each value's first occurrence. An empty domain is valid and
/// produces a scale with no bands.
#[derive(Debug, Clone)]
pub struct BandScale<D: Debug + Clone + Hash + Eq> {
    domain: IndexSet<D>,
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: f32,
    align: f32,
    round: bool,
    // Band start positions, parallel to `domain`
    positions: Vec<f32>,
}

impl<D: Debug + Clone + Hash + Eq> BandScale<D> {
    /// Creates a new band scale with the given domain.
    ///
    /// # Defaults
    /// - range: (0.0, 1.0)
    /// - padding_inner: 0.0
    /// - padding_outer: 0.0
    /// - align: 0.5
    /// - round: false
    pub fn new(domain: impl IntoIterator<Item = D>) -> Self {
        let mut this = Self {
            domain: domain.into_iter().collect(),
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
            positions: vec![],
        };
        this.update_positions();
        this
    }

    fn sorted_range(&self) -> (f32, f32) {
        if self.range.1 < self.range.0 {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        }
    }

    fn update_positions(&mut self) {
        let n = self.domain.len();
        if n == 0 {
            self.positions.clear();
            return;
        }

        let (start, stop) = self.sorted_range();
        let step = self.step();
        let offset = start + (stop - start - step * (n as f32 - self.padding_inner)) * self.align;
        let offset = if self.round { offset.round() } else { offset };

        let positions = (0..n).map(|i| offset + step * i as f32);
        self.positions = if self.range.1 < self.range.0 {
            positions.rev().collect()
        } else {
            positions.collect()
        };
    }

    /// Sets the output range as (start, end).
    ///
    /// The range may be reversed, in which case the first domain value maps to the last band.
    pub fn range(mut self, range: (f32, f32)) -> Self {
        self.range = range;
        self.update_positions();
        self
    }

    /// Sets the inner padding between bands to a value between 0 and 1.
    ///
    /// The inner padding is the fraction of each step reserved for blank space between
    /// neighboring bands.
    pub fn padding_inner(mut self, padding: f32) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.update_positions();
        self
    }

    /// Sets the outer padding, in multiples of the step, before the first band and after the last.
    pub fn padding_outer(mut self, padding: f32) -> Self {
        self.padding_outer = padding.max(0.0);
        self.update_positions();
        self
    }

    /// Sets both inner and outer padding to the same value.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self.update_positions();
        self
    }

    /// Sets how leftover space is distributed: 0.0 packs bands at the start,
    /// 0.5 centers them, 1.0 packs them at the end.
    pub fn align(mut self, align: f32) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self.update_positions();
        self
    }

    /// Enables or disables rounding band starts and widths to whole pixels.
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self.update_positions();
        self
    }

    pub fn get_domain(&self) -> &IndexSet<D> {
        &self.domain
    }

    pub fn get_range(&self) -> (f32, f32) {
        self.range
    }

    pub fn get_padding_inner(&self) -> f32 {
        self.padding_inner
    }

    pub fn get_padding_outer(&self) -> f32 {
        self.padding_outer
    }

    pub fn get_align(&self) -> f32 {
        self.align
    }

    pub fn get_round(&self) -> bool {
        self.round
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Returns the distance between the starts of adjacent bands, or 0 for an empty domain.
    pub fn step(&self) -> f32 {
        let n = self.domain.len();
        if n == 0 {
            return 0.0;
        }

        let (start, stop) = self.sorted_range();
        let step = (stop - start)
            / 1.0_f32.max(bandspace(
                n,
                Some(self.padding_inner),
                Some(self.padding_outer),
            ));

        if self.round {
            step.floor()
        } else {
            step
        }
    }

    /// Returns the width of each band, or 0 for an empty domain.
    pub fn bandwidth(&self) -> f32 {
        let bandwidth = self.step() * (1.0 - self.padding_inner);
        if self.round {
            bandwidth.round()
        } else {
            bandwidth
        }
    }

    /// Returns the start of the band for `value`, or `None` if it is not in the domain
    pub fn scale<Q>(&self, value: &Q) -> Option<f32>
    where
        Q: ?Sized + Hash + Equivalent<D>,
    {
        self.domain
            .get_index_of(value)
            .map(|index| self.positions[index])
    }

    /// Returns the band allotted to `value`, or `None` if it is not in the domain
    pub fn band<Q>(&self, value: &Q) -> Option<Band>
    where
        Q: ?Sized + Hash + Equivalent<D>,
    {
        self.scale(value).map(|start| Band {
            start,
            bandwidth: self.bandwidth(),
        })
    }

    /// Returns every band in domain order
    pub fn bands(&self) -> impl Iterator<Item = (&D, Band)> + '_ {
        let bandwidth = self.bandwidth();
        self.domain
            .iter()
            .zip(self.positions.iter())
            .map(move |(value, start)| {
                (
                    value,
                    Band {
                        start: *start,
                        bandwidth,
                    },
                )
            })
    }

    /// Maps a range value back to the domain value whose band contains it.
    ///
    /// Values that fall in padding or outside the range return `None`.
    pub fn invert(&self, value: f32) -> Option<&D> {
        if value.is_nan() {
            return None;
        }
        self.bands()
            .find(|(_, band)| band.start <= value && value <= band.end())
            .map(|(d, _)| d)
    }
}

/// Number of steps a band scale spans for `count` bands with the given padding.
///
/// # Arguments
/// * `count` - Number of domain elements
/// * `padding_inner` - Inner padding [0.0, 1.0], defaults to 0.0
/// * `padding_outer` - Outer padding >= 0.0, defaults to 0.0
pub fn bandspace(count: usize, padding_inner: Option<f32>, padding_outer: Option<f32>) -> f32 {
    let padding_inner = padding_inner.unwrap_or(0.0).clamp(0.0, 1.0);
    let padding_outer = padding_outer.unwrap_or(0.0).max(0.0);

    count as f32 - padding_inner + padding_outer * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::{assert_approx_eq, F32Margin};

    fn margin() -> F32Margin {
        F32Margin {
            epsilon: 0.0001,
            ..Default::default()
        }
    }

    #[test]
    fn test_band_scale_defaults() {
        let scale = BandScale::new(vec!["a", "b", "c"]);

        assert_eq!(scale.get_range(), (0.0, 1.0));
        assert_eq!(scale.get_padding_inner(), 0.0);
        assert_eq!(scale.get_padding_outer(), 0.0);
        assert_eq!(scale.get_align(), 0.5);
        assert!(!scale.get_round());
    }

    #[test]
    fn test_band_scale_basic() {
        let scale = BandScale::new(vec!["a", "b", "c"]);

        assert_approx_eq!(f32, scale.scale("a").unwrap(), 0.0);
        assert_approx_eq!(f32, scale.scale("b").unwrap(), 0.3333333);
        assert_approx_eq!(f32, scale.scale("c").unwrap(), 0.6666667);
        assert!(scale.scale("f").is_none());
        assert_approx_eq!(f32, scale.bandwidth(), 0.3333333);
        assert_approx_eq!(f32, scale.step(), 0.3333333);
    }

    #[test]
    fn test_band_scale_padding() {
        let scale = BandScale::new(vec!["a", "b", "c"])
            .range((0.0, 120.0))
            .padding(0.2);

        assert_approx_eq!(f32, scale.scale("a").unwrap(), 7.5);
        assert_approx_eq!(f32, scale.scale("b").unwrap(), 45.0);
        assert_approx_eq!(f32, scale.scale("c").unwrap(), 82.5);
        assert_approx_eq!(f32, scale.bandwidth(), 30.0);
    }

    #[test]
    fn test_band_scale_round() {
        let scale = BandScale::new(vec!["a", "b", "c"])
            .range((0.0, 100.0))
            .round(true);

        assert_eq!(scale.scale("a"), Some(1.0));
        assert_eq!(scale.scale("b"), Some(34.0));
        assert_eq!(scale.scale("c"), Some(67.0));
        assert_eq!(scale.bandwidth(), 33.0);
    }

    #[test]
    fn test_band_scale_reversed_range() {
        let scale = BandScale::new(vec!["a", "b", "c"]).range((120.0, 0.0));

        assert_approx_eq!(f32, scale.scale("a").unwrap(), 80.0, margin());
        assert_approx_eq!(f32, scale.scale("c").unwrap(), 0.0, margin());
    }

    #[test]
    fn test_band_scale_align_start() {
        let scale = BandScale::new(vec!["a", "b"])
            .range((0.0, 100.0))
            .padding_outer(1.0)
            .align(0.0);

        // No inner padding, step = 100 / 4, bands packed against the start
        assert_approx_eq!(f32, scale.scale("a").unwrap(), 0.0);
        assert_approx_eq!(f32, scale.scale("b").unwrap(), 25.0);
    }

    #[test]
    fn test_band_scale_dedupes_domain() {
        let scale = BandScale::new(vec!["a", "b", "a", "c"]).range((0.0, 90.0));

        assert_eq!(scale.get_domain().len(), 3);
        assert_approx_eq!(f32, scale.scale("a").unwrap(), 0.0);
        assert_approx_eq!(f32, scale.scale("b").unwrap(), 30.0);
        assert_approx_eq!(f32, scale.scale("c").unwrap(), 60.0);
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::<String>::new(vec![]).range((30.0, 470.0)).padding(0.1);

        assert!(scale.is_empty());
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.step(), 0.0);
        assert!(scale.band("A").is_none());
        assert_eq!(scale.bands().count(), 0);
    }

    #[test]
    fn test_band_scale_string_lookup_by_str() {
        let scale: BandScale<String> =
            BandScale::new(vec!["A".to_string(), "B".to_string()]).range((0.0, 10.0));

        let band = scale.band("B").unwrap();
        assert_approx_eq!(f32, band.start, 5.0);
        assert_approx_eq!(f32, band.bandwidth, 5.0);
        assert_approx_eq!(f32, band.center(), 7.5);
    }

    #[test]
    fn test_bandspace() {
        assert_eq!(bandspace(3, None, None), 3.0);
        assert_eq!(bandspace(3, Some(0.2), None), 2.8);
        assert_eq!(bandspace(3, None, Some(0.5)), 4.0);
        assert_eq!(bandspace(3, Some(0.2), Some(0.5)), 3.8);

        // inner clamped to 1.0, outer clamped to 0.0
        assert_eq!(bandspace(3, Some(1.5), Some(-0.5)), 2.0);
    }

    #[test]
    fn test_band_scale_invert() {
        let scale = BandScale::new(vec!["a", "b", "c"])
            .range((0.0, 120.0))
            .padding(0.2);

        assert_eq!(scale.invert(7.5), Some(&"a"));
        assert_eq!(scale.invert(15.0), Some(&"a"));
        assert_eq!(scale.invert(45.0), Some(&"b"));

        // Padding gap, out of range, NaN
        assert!(scale.invert(40.0).is_none());
        assert!(scale.invert(-10.0).is_none());
        assert!(scale.invert(130.0).is_none());
        assert!(scale.invert(f32::NAN).is_none());
    }
}

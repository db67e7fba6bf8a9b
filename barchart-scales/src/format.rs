use crate::array::tick_step;

/// Fixed-point tick label formatter with comma thousands grouping (d3's `,.Nf`).
///
/// The precision is the smallest number of fractional digits that distinguishes
/// adjacent ticks, so ticks stepping by `0.2` print as `0.0, 0.2, ...` and ticks stepping
/// by `200` print as `0, 200, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFormat {
    precision: usize,
}

impl TickFormat {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Builds the formatter for ticks generated over `[start, stop]` with `count` ticks
    pub fn for_ticks(start: f32, stop: f32, count: f32) -> Self {
        Self::new(precision_fixed(tick_step(start, stop, count)))
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn format(&self, value: f32) -> String {
        let precision = self.precision;
        let formatted = format!("{:.precision$}", value.abs());
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (formatted.as_str(), None),
        };

        let mut out = String::with_capacity(formatted.len() + 4);
        // d3 renders negatives with a true minus sign, and never as "-0"
        if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('\u{2212}');
        }
        out.push_str(&group_thousands(int_part));
        if let Some(frac_part) = frac_part {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }

    pub fn format_all(&self, values: &[f32]) -> Vec<String> {
        values.iter().map(|v| self.format(*v)).collect()
    }
}

/// Number of fractional digits needed to represent multiples of `step`
pub fn precision_fixed(step: f32) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.log10().floor() as i32;
    (-exponent).max(0) as usize
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

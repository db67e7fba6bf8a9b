//! Tick generation over numeric intervals.
//!
//! Ticks are spaced by 1, 2, or 5 times a power of ten, following d3-array's `ticks`.

const E10: f32 = 7.071_068; // sqrt(50)
const E5: f32 = 3.162_277_7; // sqrt(10)
const E2: f32 = 1.414_213_5; // sqrt(2)

/// Integer bounds and increment of a tick sequence.
///
/// A negative `inc` means the increment is `1 / -inc`, which keeps fractional steps exact
/// (ticks are computed as `i / 10` rather than `i * 0.1`).
struct TickSpec {
    i1: f32,
    i2: f32,
    inc: f32,
}

impl TickSpec {
    fn value(&self, i: f32) -> f32 {
        if self.inc < 0.0 {
            i / -self.inc
        } else {
            i * self.inc
        }
    }
}

fn step_factor(error: f32) -> f32 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

fn tick_spec(start: f32, stop: f32, count: f32) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let factor = step_factor(step / 10.0_f32.powf(power));

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10.0_f32.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10.0_f32.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec { i1, i2, inc }
}

/// Returns approximately `count` evenly spaced, human friendly values in `[start, stop]`.
///
/// A reversed interval produces descending ticks. `start == stop` produces `[start]`.
pub fn ticks(start: f32, stop: f32, count: f32) -> Vec<f32> {
    if count.is_nan() || count <= 0.0 || start.is_nan() || stop.is_nan() {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };

    if !(spec.i2 >= spec.i1) {
        return vec![];
    }

    let n = (spec.i2 - spec.i1 + 1.0) as usize;
    if reverse {
        (0..n).map(|i| spec.value(spec.i2 - i as f32)).collect()
    } else {
        (0..n).map(|i| spec.value(spec.i1 + i as f32)).collect()
    }
}

/// Returns the tick increment for the interval, as a power of ten times 1, 2, or 5.
///
/// Fractional increments are returned as the negated inverse (`-10.0` for a step of `0.1`).
pub fn tick_increment(start: f32, stop: f32, count: f32) -> f32 {
    if !(count > 0.0) {
        return f32::NAN;
    }
    if start == stop {
        return f32::NEG_INFINITY;
    }

    let step = (stop - start) / count;
    if step == 0.0 || !step.is_finite() {
        return f32::NAN;
    }

    let power = step.log10().floor();
    let factor = step_factor(step / 10.0_f32.powf(power));
    if power >= 0.0 {
        10.0_f32.powf(power) * factor
    } else {
        -10.0_f32.powf(-power) / factor
    }
}

/// Returns the signed distance between adjacent ticks for the interval.
pub fn tick_step(start: f32, stop: f32, count: f32) -> f32 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

//! Linear scales and "nice" tick generation
//!
//! Tick positions follow the usual 1-2-5 stepping: the raw step
//! `(stop - start) / count` is snapped to 1, 2, 5 or 10 times a power of ten,
//! and ticks are the multiples of that step that fall inside the domain.
//! Labels use the fixed precision implied by the step.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MINUS_SIGN: char = '\u{2212}';

/// Continuous linear mapping from a data domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range
    ///
    /// A degenerate domain maps every value onto the midpoint of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let t = if span != 0.0 { (value - d0) / span } else { 0.5 };
        let (r0, r1) = self.range;
        r0 * (1.0 - t) + r1 * t
    }

    /// Roughly `count` representative values within the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Label formatter matching [`LinearScale::ticks`] for the same count
    pub fn tick_format(&self, count: usize) -> TickFormat {
        TickFormat::for_step(tick_step(self.domain.0, self.domain.1, count as f64))
    }
}

/// Minimum and maximum of the finite values, or `None` when there are none
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

// JavaScript-style rounding: halves round towards positive infinity
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Returns `(i1, i2, inc)`; a negative `inc` encodes the reciprocal step
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * inv);
        i2 = round_half_up(stop * inv);
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = round_half_up(start / step);
        i2 = round_half_up(stop / step);
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nicely rounded values between `start` and `stop`
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = if reverse { i2 - i as f64 } else { i1 + i as f64 };
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect()
}

/// Distance between adjacent ticks produced by [`ticks`]
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// Fixed-point tick label formatter with thousands separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFormat {
    /// `None` prints the shortest exact representation
    precision: Option<usize>,
}

impl TickFormat {
    /// Precision just fine enough to tell ticks `step` apart
    ///
    /// A zero step (single-valued domain) has no meaningful precision, so
    /// the lone tick is printed as-is.
    pub fn for_step(step: f64) -> Self {
        let precision = if step.is_finite() && step != 0.0 {
            decimal_exponent(step.abs()).map(|e| (-e).max(0) as usize)
        } else {
            None
        };
        Self { precision }
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn format(&self, value: f64) -> String {
        let fixed = match self.precision {
            Some(precision) => format!("{:.*}", precision, value.abs()),
            None => format!("{}", value.abs()),
        };
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + 4);
        let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        if value < 0.0 && !rounds_to_zero {
            out.push(MINUS_SIGN);
        }
        out.push_str(&group_thousands(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

// Exponent of the value in scientific notation, e.g. 0.05 -> -2
fn decimal_exponent(value: f64) -> Option<i32> {
    let sci = format!("{value:e}");
    sci.split_once('e').and_then(|(_, exp)| exp.parse().ok())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_scale_maps_domain_onto_range() {
        let scale = LinearScale::new((0.0, 10.0), (40.0, 780.0));
        assert_eq!(scale.apply(0.0), 40.0);
        assert_eq!(scale.apply(10.0), 780.0);
        assert_eq!(scale.apply(5.0), 410.0);
    }

    #[test]
    fn test_inverted_range() {
        let scale = LinearScale::new((0.0, 10.0), (570.0, 20.0));
        assert_eq!(scale.apply(0.0), 570.0);
        assert_eq!(scale.apply(10.0), 20.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((3.0, 3.0), (40.0, 780.0));
        assert_eq!(scale.apply(3.0), 410.0);
        assert_eq!(scale.ticks(10), vec![3.0]);
    }

    #[test]
    fn test_extent_skips_nan() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent(Vec::<f64>::new()), None);
        assert_eq!(extent([f64::NAN]), None);
    }

    #[test]
    fn test_integer_ticks() {
        let expected: Vec<f64> = (0..=10).map(f64::from).collect();
        assert_eq!(ticks(0.0, 10.0, 10.0), expected);
    }

    #[test]
    fn test_fractional_ticks() {
        let expected: Vec<f64> = (0..=10).map(|i| f64::from(i) / 10.0).collect();
        assert!(approx(&ticks(0.0, 1.0, 10.0), &expected));
    }

    #[test]
    fn test_ticks_snap_to_nice_steps() {
        assert_eq!(
            ticks(-3.7, 12.2, 10.0),
            vec![-2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]
        );
        assert_eq!(ticks(0.0, 1000.0, 5.0), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0]);
    }

    #[test]
    fn test_reverse_ticks() {
        assert_eq!(ticks(10.0, 0.0, 5.0), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert_eq!(tick_step(10.0, 0.0, 5.0), -2.0);
    }

    #[test]
    fn test_no_ticks_for_zero_count_or_nan() {
        assert!(ticks(0.0, 1.0, 0.0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 10.0).is_empty());
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0.0, 10.0, 10.0), 1.0);
        assert!((tick_step(0.0, 1.0, 10.0) - 0.1).abs() < 1e-12);
        assert_eq!(tick_step(0.0, 1000.0, 5.0), 200.0);
    }

    #[test]
    fn test_format_precision_follows_step() {
        assert_eq!(TickFormat::for_step(1.0).precision(), Some(0));
        assert_eq!(TickFormat::for_step(0.2).precision(), Some(1));
        assert_eq!(TickFormat::for_step(0.05).precision(), Some(2));
        assert_eq!(TickFormat::for_step(500.0).precision(), Some(0));
        assert_eq!(TickFormat::for_step(0.0).precision(), None);
    }

    #[test]
    fn test_format_labels() {
        let fmt = TickFormat::for_step(0.1);
        assert_eq!(fmt.format(0.3), "0.3");
        assert_eq!(fmt.format(-0.5), "\u{2212}0.5");
        assert_eq!(fmt.format(-0.01), "0.0");

        let fmt = TickFormat::for_step(1000.0);
        assert_eq!(fmt.format(12000.0), "12,000");
        assert_eq!(fmt.format(-1234567.0), "\u{2212}1,234,567");
        assert_eq!(fmt.format(999.0), "999");

        let fmt = TickFormat::for_step(0.0);
        assert_eq!(fmt.format(2.5), "2.5");
        assert_eq!(fmt.format(-1.0), "\u{2212}1");
    }

    #[test]
    fn test_scale_tick_format() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let fmt = scale.tick_format(10);
        let labels: Vec<String> = scale.ticks(10).into_iter().map(|t| fmt.format(t)).collect();
        assert_eq!(labels.first().map(String::as_str), Some("0.0"));
        assert_eq!(labels.last().map(String::as_str), Some("1.0"));
        assert_eq!(labels.len(), 11);
    }
}

//! Value axis domain and tick placement.

/// Domain covering zero and every value, widened to whole tick steps.
/// Returns `(min, max, step)`.
pub fn nice_domain(values: &[f64], target_ticks: usize) -> (f64, f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (lo, hi) = finite.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    // lo <= 0 <= hi, so an empty range means every value is zero
    if hi == lo {
        return (0.0, 1.0, nice_step(1.0, target_ticks));
    }
    let step = nice_step(hi - lo, target_ticks);
    let min = round_to_step((lo / step).floor() * step, step);
    let max = round_to_step((hi / step).ceil() * step, step);
    (min, max, step)
}

/// Tick values from `min` to `max` inclusive.
pub fn tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() {
        return vec![min, max];
    }
    let n = ((max - min) / step).round() as usize;
    (0..=n).map(|i| round_to_step(min + i as f64 * step, step)).collect()
}

/// 1, 2, 5 or 10 times a power of ten, close to `range / target_steps`.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

// Snap accumulated float error (0.6000000000000001) to the step's precision.
fn round_to_step(v: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    let scale = 10f64.powi(decimals);
    let r = (v * scale).round() / scale;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_includes_zero() {
        let (min, max, step) = nice_domain(&[100.0, 40.0], 5);
        assert_eq!((min, max, step), (0.0, 100.0, 20.0));
        assert_eq!(tick_values(min, max, step), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn negative_values_extend_below_zero() {
        let (min, max, step) = nice_domain(&[100.0, -20.0], 5);
        assert_eq!(step, 50.0);
        assert_eq!((min, max), (-50.0, 100.0));
    }

    #[test]
    fn tiny_values_keep_their_own_scale() {
        let (min, max, step) = nice_domain(&[1e-17, 2e-17], 5);
        assert_eq!(min, 0.0);
        assert!(max >= 2e-17 && max < 1e-16, "max = {max}");
        assert!(step > 0.0 && step < 1e-17);
        assert_eq!(nice_domain(&[0.0, -0.0], 5).1, 1.0);
    }

    #[test]
    fn empty_domain_is_unit() {
        let (min, max, step) = nice_domain(&[], 5);
        assert_eq!((min, max), (0.0, 1.0));
        assert_eq!(tick_values(min, max, step), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }
}

// File: crates/candlechart-core/src/labelling.rs
// Summary: Optimal tick label search (extended Wilkinson / Talbot-Lin-Hanrahan).
// Notes:
// - The search walks skip -> nice number -> label count -> magnitude -> start,
//   pruning every level with an upper bound on the score it can still reach.
// - The running best selection is a local accumulator; nothing is shared
//   between calls.

use log::{trace, warn};

use crate::error::{RenderError, Result};
use crate::grid::linspace;

/// Machine epsilon times radix for IEEE doubles (2^-52).
pub const MACHINE_EPSILON: f64 = f64::EPSILON;

/// Ranges narrower than this are treated as zero width.
pub const NEAR_ZERO: f64 = 100.0 * MACHINE_EPSILON;

/// Default preference-ordered nice numbers.
pub const DEFAULT_NICE_NUMBERS: [f64; 6] = [1.0, 5.0, 2.0, 2.5, 4.0, 3.0];

const MAX_EXPONENT: i32 = 309;
const SENTINEL_SCORE: f64 = -2.0;

/// Which label extremes are admissible relative to the data extremes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Containment {
    /// No restriction.
    #[default]
    Free,
    /// Labels bracket the data: `l_min <= d_min` and `l_max >= d_max`.
    ContainData,
    /// Labels lie inside the data: `l_min >= d_min` and `l_max <= d_max`.
    WithinData,
}

impl Containment {
    fn admits(self, d_min: f64, d_max: f64, l_min: f64, l_max: f64) -> bool {
        match self {
            Containment::Free => true,
            Containment::ContainData => l_min <= d_min && d_max <= l_max,
            Containment::WithinData => d_min <= l_min && l_max <= d_max,
        }
    }
}

/// Relative weight of each scoring criterion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub simplicity: f64,
    pub coverage: f64,
    pub density: f64,
    pub legibility: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self { simplicity: 0.25, coverage: 0.2, density: 0.5, legibility: 0.05 }
    }
}

impl Weights {
    #[inline]
    pub fn score(&self, simplicity: f64, coverage: f64, density: f64, legibility: f64) -> f64 {
        self.simplicity * simplicity + self.coverage * coverage + self.density * density + self.legibility * legibility
    }
}

/// Legibility hook: `(l_min, l_max, step) -> score`, expected in `[0, 1]`.
pub type Legibility = fn(f64, f64, f64) -> f64;

/// Neutral legibility: every labelling scores 1.
pub fn unit_legibility(_l_min: f64, _l_max: f64, _step: f64) -> f64 {
    1.0
}

/// Tuning knobs for the search. `Default` gives the published parameters:
/// nice numbers `[1, 5, 2, 2.5, 4, 3]`, weights `0.25/0.2/0.5/0.05`,
/// neutral legibility and a near-zero threshold of `100 * f64::EPSILON`.
#[derive(Clone, Debug)]
pub struct LabelParams {
    /// Step multipliers, most preferred first. All must be positive.
    pub nice_numbers: Vec<f64>,
    pub weights: Weights,
    pub legibility: Legibility,
    /// Width below which a range is degenerate.
    pub epsilon: f64,
}

impl Default for LabelParams {
    fn default() -> Self {
        Self {
            nice_numbers: DEFAULT_NICE_NUMBERS.to_vec(),
            weights: Weights::default(),
            legibility: unit_legibility,
            epsilon: NEAR_ZERO,
        }
    }
}

/// A labelling scheme to be scored; `step` is the absolute distance between labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub q: f64,
    pub skip: usize,
    pub count: usize,
    pub l_min: f64,
    pub l_max: f64,
    pub step: f64,
}

impl LabelParams {
    fn validate(&self) -> Result<()> {
        if self.nice_numbers.is_empty() || self.nice_numbers.iter().any(|q| !q.is_finite() || *q <= 0.0) {
            return Err(RenderError::InvalidConfig("nice numbers must be non-empty and positive".into()));
        }
        // Without these two weights the skip and count loops have no bound.
        if self.weights.simplicity <= 0.0 || self.weights.density <= 0.0 {
            return Err(RenderError::InvalidConfig("simplicity and density weights must be positive".into()));
        }
        Ok(())
    }

    /// Score an arbitrary labelling against `[d_min, d_max]` and a target count.
    /// Returns `None` when `q` is not one of the configured nice numbers.
    pub fn score(&self, d_min: f64, d_max: f64, want: usize, c: &Candidate) -> Option<f64> {
        let qi = self.nice_numbers.iter().position(|&v| v == c.q)?;
        Some(self.weights.score(
            simplicity(qi, self.nice_numbers.len(), c.skip, c.l_min, c.l_max, c.step, self.epsilon),
            coverage(d_min, d_max, c.l_min, c.l_max),
            density(c.count, want, d_min, d_max, c.l_min, c.l_max),
            (self.legibility)(c.l_min, c.l_max, c.step),
        ))
    }
}

/// Result of a label search.
#[derive(Clone, Debug, PartialEq)]
pub struct Labelling {
    /// Label positions, ascending.
    pub values: Vec<f64>,
    /// Raw step `skip * q` before scaling by `10^magnitude`.
    /// For the uniform fallback this is the absolute spacing.
    pub step: f64,
    /// Chosen nice number; `0.0` marks the uniform fallback.
    pub q: f64,
    pub skip: usize,
    pub magnitude: i32,
    /// Weighted score of the chosen scheme; `None` for the fallback.
    pub score: Option<f64>,
}

impl Labelling {
    pub fn is_fallback(&self) -> bool {
        self.q == 0.0
    }

    /// Absolute distance between consecutive labels.
    pub fn major_step(&self) -> f64 {
        if self.is_fallback() {
            self.step
        } else {
            self.step * 10f64.powi(self.magnitude)
        }
    }
}

/// Find an optimal set of roughly `want` labels for `[d_min, d_max]`.
pub fn optimal_labels(
    d_min: f64,
    d_max: f64,
    want: usize,
    containment: Containment,
    params: &LabelParams,
) -> Result<Labelling> {
    if !d_min.is_finite() || !d_max.is_finite() || d_min > d_max {
        return Err(RenderError::range(d_min, d_max));
    }
    if !(d_max - d_min).is_finite() {
        return Err(RenderError::InvalidRange(format!("span of [{d_min}, {d_max}] overflows f64")));
    }
    if want < 2 {
        return Err(RenderError::InvalidRange(format!("want {want} labels, need at least 2")));
    }
    params.validate()?;

    if d_max - d_min < params.epsilon {
        return Ok(uniform(d_min, d_max, want));
    }

    let Some(best) = search(d_min, d_max, want, containment, params) else {
        warn!("no labelling scored for [{d_min}, {d_max}] ({containment:?}); using uniform split");
        return Ok(uniform(d_min, d_max, want));
    };

    let step = best.l_step * 10f64.powi(best.magnitude);
    let values = (0..best.have).map(|i| best.l_min + i as f64 * step).collect();
    trace!(
        "labels for [{d_min}, {d_max}]: n={} q={} skip={} mag={} score={:.4}",
        best.have, best.q, best.skip, best.magnitude, best.score
    );
    Ok(Labelling {
        values,
        step: best.l_step,
        q: best.q,
        skip: best.skip,
        magnitude: best.magnitude,
        score: Some(best.score),
    })
}

#[derive(Clone, Copy, Debug)]
struct Selection {
    have: usize,
    l_min: f64,
    l_step: f64,
    q: f64,
    skip: usize,
    score: f64,
    magnitude: i32,
}

impl Selection {
    fn sentinel() -> Self {
        Self { have: 0, l_min: 0.0, l_step: 0.0, q: 0.0, skip: 0, score: SENTINEL_SCORE, magnitude: 0 }
    }
}

/// Fixed coordinates of the innermost (start offset) scan.
struct Scan {
    qi: usize,
    q: f64,
    skip: usize,
    have: usize,
    magnitude: i32,
    step: f64,
}

fn search(d_min: f64, d_max: f64, want: usize, containment: Containment, params: &LabelParams) -> Option<Selection> {
    let w = &params.weights;
    let n_nice = params.nice_numbers.len();
    let mut best = Selection::sentinel();

    'skips: for skip in 1usize.. {
        for (qi, &q) in params.nice_numbers.iter().enumerate() {
            let sm = max_simplicity(qi, n_nice, skip);
            if w.score(sm, 1.0, 1.0, 1.0) < best.score {
                break 'skips;
            }

            for have in 2usize.. {
                let dm = max_density(have, want);
                if w.score(sm, 1.0, dm, 1.0) < best.score {
                    break;
                }

                let delta = (d_max - d_min) / (have + 1) as f64 / skip as f64 / q;
                let mut magnitude = delta.log10().ceil() as i32;
                while magnitude < MAX_EXPONENT {
                    let step = skip as f64 * q * 10f64.powi(magnitude);
                    let cm = max_coverage(d_min, d_max, step * (have - 1) as f64);
                    if w.score(sm, cm, dm, 1.0) < best.score {
                        break;
                    }
                    let scan = Scan { qi, q, skip, have, magnitude, step };
                    scan_starts(d_min, d_max, want, containment, params, &scan, &mut best);
                    magnitude += 1;
                }
            }
        }
    }

    (best.score > SENTINEL_SCORE).then_some(best)
}

fn scan_starts(
    d_min: f64,
    d_max: f64,
    want: usize,
    containment: Containment,
    params: &LabelParams,
    scan: &Scan,
    best: &mut Selection,
) {
    let skip = scan.skip as f64;
    let frac_step = scan.step / skip;
    let span = scan.step * (scan.have - 1) as f64;

    let min_start = ((d_max / scan.step).floor() - (scan.have - 1) as f64) * skip;
    let max_start = (d_max / scan.step).ceil() * skip;

    let mut start = min_start;
    // `start - 1.0 == start` once the float can no longer count.
    while start <= max_start && start != start - 1.0 {
        let l_min = start * frac_step;
        let l_max = l_min + span;
        start += 1.0;

        if !containment.admits(d_min, d_max, l_min, l_max) {
            continue;
        }

        let score = params.weights.score(
            simplicity(scan.qi, params.nice_numbers.len(), scan.skip, l_min, l_max, scan.step, params.epsilon),
            coverage(d_min, d_max, l_min, l_max),
            density(scan.have, want, d_min, d_max, l_min, l_max),
            (params.legibility)(l_min, l_max, scan.step),
        );
        if score > best.score {
            *best = Selection {
                have: scan.have,
                l_min,
                l_step: skip * scan.q,
                q: scan.q,
                skip: scan.skip,
                score,
                magnitude: scan.magnitude,
            };
        }
    }
}

fn uniform(d_min: f64, d_max: f64, want: usize) -> Labelling {
    Labelling {
        values: linspace(d_min, d_max, want),
        step: (d_max - d_min) / (want - 1) as f64,
        q: 0.0,
        skip: 0,
        magnitude: min_abs_magnitude(d_min, d_max),
        score: None,
    }
}

fn min_abs_magnitude(a: f64, b: f64) -> i32 {
    a.abs().log10().floor().min(b.abs().log10().floor()) as i32
}

/// Position penalty of `q` in the preference list, in `[0, 1]`.
#[inline]
fn preference(qi: usize, n_nice: usize) -> f64 {
    qi as f64 / (n_nice.max(2) - 1) as f64
}

fn simplicity(qi: usize, n_nice: usize, skip: usize, l_min: f64, l_max: f64, step: f64, eps: f64) -> f64 {
    let m = l_min % step;
    let on_zero = (m < eps || step - m < eps) && l_min <= 0.0 && 0.0 <= l_max;
    1.0 - preference(qi, n_nice) - skip as f64 + if on_zero { 1.0 } else { 0.0 }
}

fn max_simplicity(qi: usize, n_nice: usize, skip: usize) -> f64 {
    2.0 - preference(qi, n_nice) - skip as f64
}

fn coverage(d_min: f64, d_max: f64, l_min: f64, l_max: f64) -> f64 {
    let r = 0.1 * (d_max - d_min);
    let above = d_max - l_max;
    let below = d_min - l_min;
    1.0 - 0.5 * (above * above + below * below) / (r * r)
}

fn max_coverage(d_min: f64, d_max: f64, span: f64) -> f64 {
    let r = d_max - d_min;
    if span <= r {
        return 1.0;
    }
    let h = 0.5 * (span - r);
    let r = 0.1 * r;
    1.0 - (h * h) / (r * r)
}

fn density(have: usize, want: usize, d_min: f64, d_max: f64, l_min: f64, l_max: f64) -> f64 {
    let rho = (have - 1) as f64 / (l_max - l_min);
    let target = (want - 1) as f64 / (l_max.max(d_max) - d_min.min(l_min));
    let ratio = rho / target;
    if ratio >= 1.0 {
        2.0 - ratio
    } else {
        2.0 - target / rho
    }
}

fn max_density(have: usize, want: usize) -> f64 {
    if have < want {
        1.0
    } else {
        2.0 - (have - 1) as f64 / (want - 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_is_one_on_exact_fit() {
        assert!((coverage(0.0, 10.0, 0.0, 10.0) - 1.0).abs() < 1e-12);
        assert!(coverage(0.0, 10.0, -5.0, 15.0) < coverage(0.0, 10.0, -1.0, 11.0));
    }

    #[test]
    fn density_peaks_at_target() {
        assert!((density(5, 5, 0.0, 100.0, 0.0, 100.0) - 1.0).abs() < 1e-12);
        assert!(density(3, 5, 0.0, 100.0, 0.0, 100.0) < 1.0);
        assert!(density(9, 5, 0.0, 100.0, 0.0, 100.0) < 1.0);
    }

    #[test]
    fn upper_bounds_dominate_scores() {
        for have in 2..20 {
            assert!(density(have, 6, 0.0, 50.0, 0.0, 50.0) <= max_density(have, 6) + 1e-12);
        }
        assert!(simplicity(2, 6, 1, 0.0, 10.0, 2.0, NEAR_ZERO) <= max_simplicity(2, 6, 1) + 1e-12);
        assert!(coverage(0.0, 10.0, -1.0, 11.0) <= max_coverage(0.0, 10.0, 12.0) + 1e-12);
    }

    #[test]
    fn zero_inclusive_labels_are_simpler() {
        let with_zero = simplicity(0, 6, 1, 0.0, 10.0, 2.0, NEAR_ZERO);
        let without = simplicity(0, 6, 1, 1.0, 11.0, 2.0, NEAR_ZERO);
        assert_eq!(with_zero - without, 1.0);
    }

    #[test]
    fn rejects_bad_params() {
        let mut params = LabelParams::default();
        params.nice_numbers.clear();
        assert!(matches!(optimal_labels(0.0, 1.0, 5, Containment::Free, &params), Err(RenderError::InvalidConfig(_))));
        let params = LabelParams { weights: Weights { density: 0.0, ..Weights::default() }, ..LabelParams::default() };
        assert!(optimal_labels(0.0, 1.0, 5, Containment::Free, &params).is_err());
    }

    #[test]
    fn custom_legibility_is_consulted() {
        fn prefer_wide(_: f64, _: f64, step: f64) -> f64 {
            if step >= 50.0 { 1.0 } else { 0.0 }
        }
        let params = LabelParams {
            legibility: prefer_wide,
            weights: Weights { legibility: 5.0, ..Weights::default() },
            ..LabelParams::default()
        };
        let l = optimal_labels(0.0, 100.0, 10, Containment::Free, &params).expect("labels");
        assert!(l.major_step() >= 50.0);
    }
}
